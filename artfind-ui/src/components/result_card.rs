//! Result card component - pure view with callbacks

use crate::components::utils::{authors_line, cover_alt, save_button_label};
use crate::components::{Button, ButtonSize, ButtonVariant};
use artfind_common::{SaveStatus, SearchResult};
use dioxus::prelude::*;

/// One search result
///
/// The save button only renders for logged-in users and is disabled while a
/// save is in flight or once the result is saved.
#[component]
pub fn ResultCard(
    result: SearchResult,
    status: SaveStatus,
    logged_in: bool,
    // Called with the result id
    on_save: EventHandler<String>,
) -> Element {
    let saved = status == SaveStatus::Saved;
    let disabled = matches!(status, SaveStatus::Saved | SaveStatus::Saving);
    let authors = authors_line(&result.authors);
    let alt = cover_alt(&result.title);
    let label = save_button_label(saved);
    let result_id = result.id.clone();

    rsx! {
        div {
            class: "bg-gray-800 border border-gray-900 rounded-lg overflow-hidden shadow-lg mb-6 break-inside-avoid",
            "data-testid": "result-card",
            if result.has_image() {
                img {
                    src: "{result.image_url}",
                    alt: "{alt}",
                    class: "w-full object-cover",
                }
            }
            div { class: "p-4",
                h3 { class: "font-bold text-white text-lg mb-2", "{result.title}" }
                p { class: "text-sm text-gray-400 mb-2", "Authors: {authors}" }
                if let Some(description) = &result.description {
                    p { class: "text-gray-300 text-sm mb-4", "{description}" }
                }
                if logged_in {
                    Button {
                        variant: ButtonVariant::Info,
                        size: ButtonSize::Medium,
                        disabled,
                        loading: status == SaveStatus::Saving,
                        block: true,
                        onclick: move |_| on_save.call(result_id.clone()),
                        "{label}"
                    }
                    if status == SaveStatus::SaveFailed {
                        p { class: "text-xs text-gray-500 mt-2", "Not saved yet" }
                    }
                }
            }
        }
    }
}

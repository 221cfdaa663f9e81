//! Search page view - pure rendering, no fetching or saving

use crate::components::helpers::{LoadingSpinner, PageContainer};
use crate::components::result_card::ResultCard;
use crate::components::search_form::SearchFormView;
use crate::components::utils::results_heading;
use artfind_common::{SearchPage, SearchPhase};
use dioxus::prelude::*;

/// Full search page: banner, heading and result grid
///
/// Search failures render nothing extra; the previous results stay visible.
#[component]
pub fn SearchView(
    page: SearchPage,
    logged_in: bool,
    on_input: EventHandler<String>,
    on_submit: EventHandler<()>,
    // Called with the result id
    on_save: EventHandler<String>,
) -> Element {
    let searching = page.phase() == SearchPhase::Searching;
    let heading = results_heading(page.results().len());
    let cards: Vec<_> = page
        .results()
        .iter()
        .map(|r| (r.id.clone(), page.save_status(&r.id), r.clone()))
        .collect();

    rsx! {
        SearchFormView {
            value: page.input().to_string(),
            on_input,
            on_submit,
            searching,
        }
        PageContainer {
            h2 { class: "text-2xl font-semibold text-gray-100 mb-6", "{heading}" }
            if searching {
                LoadingSpinner {}
            }
            div { class: "columns-1 md:columns-2 lg:columns-3 gap-6",
                for (id, status, result) in cards {
                    ResultCard {
                        key: "{id}",
                        status,
                        result,
                        logged_in,
                        on_save,
                    }
                }
            }
        }
    }
}

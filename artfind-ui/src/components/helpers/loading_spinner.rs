//! Loading spinner component

use dioxus::prelude::*;

/// Spinner shown while a search is in flight
#[component]
pub fn LoadingSpinner(
    #[props(default = "Searching...".to_string())]
    message: String,
) -> Element {
    rsx! {
        div { class: "flex justify-center items-center py-12",
            div { class: "animate-spin rounded-full h-10 w-10 border-b-2 border-emerald-500" }
            p { class: "ml-4 text-gray-300", "{message}" }
        }
    }
}

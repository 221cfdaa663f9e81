//! Page container component

use dioxus::prelude::*;

/// Centered column used below the search banner
#[component]
pub fn PageContainer(children: Element) -> Element {
    rsx! {
        div { class: "container mx-auto px-6 py-8", {children} }
    }
}

//! Search banner with the query form

use crate::components::{Button, ButtonSize, ButtonVariant, TextInput};
use dioxus::prelude::*;

/// Search banner - pure view, submission handled via on_submit
#[component]
pub fn SearchFormView(
    value: String,
    on_input: EventHandler<String>,
    on_submit: EventHandler<()>,
    #[props(default)] searching: bool,
) -> Element {
    rsx! {
        div { class: "bg-gray-900 text-gray-100 py-12",
            div { class: "container mx-auto px-6",
                h1 { class: "text-4xl font-bold mb-6", "Search for Artists!" }
                form {
                    class: "flex flex-col md:flex-row gap-4",
                    onsubmit: move |evt| {
                        evt.prevent_default();
                        on_submit.call(());
                    },
                    div { class: "md:w-2/3",
                        TextInput {
                            value,
                            on_input,
                            name: "searchInput",
                            placeholder: "Search for an artist",
                            autofocus: true,
                        }
                    }
                    div { class: "md:w-1/3",
                        Button {
                            variant: ButtonVariant::Success,
                            size: ButtonSize::Large,
                            r#type: "submit",
                            loading: searching,
                            block: true,
                            onclick: |_| {},
                            "Submit Search"
                        }
                    }
                }
            }
        }
    }
}

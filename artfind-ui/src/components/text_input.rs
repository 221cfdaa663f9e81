//! Reusable text input component

use dioxus::prelude::*;

/// Reusable text input component with consistent styling
#[component]
pub fn TextInput(
    value: String,
    on_input: EventHandler<String>,
    #[props(default)] name: Option<&'static str>,
    #[props(default)] placeholder: Option<&'static str>,
    #[props(default)] autofocus: bool,
) -> Element {
    let class = "w-full px-4 py-3 text-lg bg-gray-800/50 rounded-lg focus:outline-none focus:ring-1 focus:ring-emerald-500/50 text-gray-200 placeholder-gray-500";

    rsx! {
        input {
            r#type: "text",
            class,
            name,
            value: "{value}",
            placeholder,
            oninput: move |e| on_input.call(e.value()),
            onmounted: move |event| async move {
                if autofocus {
                    let _ = event.data().set_focus(true).await;
                }
            },
        }
    }
}

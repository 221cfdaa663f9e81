//! Reusable button component

use dioxus::prelude::*;

/// Chromeless button component - provides accessibility and base functionality
/// without visual styling. Used internally by Button.
#[component]
pub fn ChromelessButton(
    #[props(default)] disabled: bool,
    #[props(default)] loading: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] r#type: Option<&'static str>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let is_disabled = disabled || loading;

    rsx! {
        button {
            class: class.as_deref(),
            r#type,
            disabled: is_disabled,
            aria_disabled: if is_disabled { Some("true") } else { None },
            onclick: move |e| {
                if !is_disabled {
                    onclick.call(e);
                }
            },
            {children}
        }
    }
}

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Green background - submits the search
    Success,
    /// Teal background - per-result actions
    Info,
}

/// Button size
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonSize {
    /// Standard padding
    Medium,
    /// Larger padding and text, matches the search input
    Large,
}

/// Reusable button component with consistent styling
#[component]
pub fn Button(
    variant: ButtonVariant,
    size: ButtonSize,
    #[props(default)] disabled: bool,
    #[props(default)] loading: bool,
    #[props(default)] block: bool,
    #[props(default)] r#type: Option<&'static str>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let padding = match size {
        ButtonSize::Medium => "px-4 py-2",
        ButtonSize::Large => "px-6 py-3 text-lg",
    };

    let variant_class = match variant {
        ButtonVariant::Success => {
            "bg-emerald-600 hover:bg-emerald-500 text-white disabled:opacity-50 disabled:cursor-not-allowed"
        }
        ButtonVariant::Info => {
            "bg-cyan-600 hover:bg-cyan-500 text-white disabled:opacity-50 disabled:cursor-not-allowed"
        }
    };

    let width = if block { "w-full justify-center" } else { "" };

    let computed_class = format!(
        "inline-flex items-center gap-2 rounded-lg transition-colors {padding} {variant_class} {width}"
    );

    rsx! {
        ChromelessButton {
            disabled,
            loading,
            r#type,
            class: Some(computed_class),
            onclick,
            {children}
        }
    }
}

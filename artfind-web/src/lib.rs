pub mod context;
pub mod pages;
pub mod storage;

use context::AppContext;
use dioxus::prelude::*;
use pages::{AppLayout, SearchArtists};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    SearchArtists {},
}

#[component]
pub fn App() -> Element {
    let context = use_context_provider(AppContext::load);
    use_context_provider(|| storage::load_session(&context.config.token_key));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Script { src: TAILWIND_CDN }
        div { class: "min-h-screen", Router::<Route> {} }
    }
}


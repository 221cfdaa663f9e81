use crate::Route;
use artfind_core::Session;
use dioxus::prelude::*;

#[component]
pub fn AppLayout() -> Element {
    let session: Session = use_context();
    let status = if session.logged_in() {
        "Logged in"
    } else {
        "Browsing as guest"
    };

    rsx! {
        nav { class: "bg-gray-950 border-b border-gray-800 px-6 py-3 flex items-center justify-between",
            Link {
                to: Route::SearchArtists {},
                class: "text-lg font-semibold text-white",
                "Art Finder"
            }
            span { class: "text-sm text-gray-400", "{status}" }
        }
        Outlet::<Route> {}
    }
}

use crate::context::AppContext;
use artfind_common::SearchPage;
use artfind_core::{SaveError, SavedIdStore, Session};
use artfind_ui::SearchView;
use dioxus::prelude::*;
use tracing::warn;

/// Search page: saved ids are read from localStorage on mount and written
/// back when the page is torn down.
#[component]
pub fn SearchArtists() -> Element {
    let context: AppContext = use_context();
    let session: Session = use_context();

    let mut page = use_signal({
        let store = context.saved_ids.clone();
        move || SearchPage::new(store.load())
    });

    use_drop({
        let store = context.saved_ids.clone();
        move || match page.try_peek() {
            Ok(page) => store.save(page.saved_ids()),
            Err(e) => warn!("Saved ids not flushed: {}", e),
        }
    });

    let search_controller = context.controller.clone();
    let on_submit = move |_: ()| {
        let Some(query) = page.write().begin_search() else {
            return;
        };
        let controller = search_controller.clone();
        spawn(async move {
            match controller.search(&query).await {
                Ok(Some(results)) => page.write().finish_search(results),
                Ok(None) => {}
                Err(_) => page.write().fail_search(),
            }
        });
    };

    let save_controller = context.controller.clone();
    let save_session = session.clone();
    let on_save = move |artist_id: String| {
        let controller = save_controller.clone();
        let session = save_session.clone();
        let results = page.read().results().to_vec();
        page.write().begin_save(&artist_id);
        spawn(async move {
            match controller.save(&session, &results, &artist_id).await {
                Ok(()) => page.write().finish_save(&artist_id),
                Err(SaveError::NotAuthenticated) => page.write().reset_save(&artist_id),
                Err(_) => page.write().fail_save(&artist_id),
            }
        });
    };

    rsx! {
        SearchView {
            page: page(),
            logged_in: session.logged_in(),
            on_input: move |value: String| page.write().set_input(value),
            on_submit,
            on_save,
        }
    }
}

//! Local storage helpers

use artfind_common::SavedIdSet;
use artfind_core::persistence::{decode_saved_ids, encode_saved_ids};
use artfind_core::{SavedIdStore, Session};
use tracing::warn;

pub fn get_storage() -> Option<web_sys_x::Storage> {
    web_sys_x::window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn get_string(key: &str) -> Option<String> {
    get_storage().and_then(|s| s.get_item(key).ok().flatten())
}

pub fn set_string(key: &str, value: &str) {
    match get_storage() {
        Some(storage) => {
            if let Err(e) = storage.set_item(key, value) {
                warn!("Failed to write {}: {:?}", key, e);
            }
        }
        None => warn!("localStorage unavailable, {} not written", key),
    }
}

/// Session from the token stored under `key`, anonymous if there is none.
pub fn load_session(key: &str) -> Session {
    Session::new(get_string(key))
}

/// Saved ids kept under one localStorage key as a JSON array.
#[derive(Debug)]
pub struct LocalIdStore {
    key: String,
}

impl LocalIdStore {
    pub fn new(key: String) -> Self {
        Self { key }
    }
}

impl SavedIdStore for LocalIdStore {
    fn load(&self) -> SavedIdSet {
        decode_saved_ids(get_string(&self.key).as_deref())
    }

    fn save(&self, ids: &SavedIdSet) {
        set_string(&self.key, &encode_saved_ids(ids));
    }
}

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Ids of results the current user has already saved server-side.
///
/// Serializes as a plain JSON array of strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SavedIdSet(BTreeSet<String>);

impl SavedIdSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an id. Returns false if it was already present.
    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        self.0.insert(id.into())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for SavedIdSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Named entity references shared between requirements

use crate::{CheckError, Result};
use ifc_lite_model::EntityId;
use rustc_hash::FxHashMap;

/// Key -> entity id mapping scoped to the loaded model
///
/// One requirement records a bookmark (e.g. the coordinate operation found
/// by the geolocation check) and later requirements read it back. The store
/// is emptied whenever a new model is loaded.
#[derive(Clone, Debug, Default)]
pub struct Bookmarks {
    entries: FxHashMap<String, EntityId>,
}

impl Bookmarks {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `id` under `key`, replacing any previous value
    pub fn set(&mut self, key: impl Into<String>, id: EntityId) {
        let key = key.into();
        log::debug!("bookmark {} -> {}", key, id);
        self.entries.insert(key, id);
    }

    /// Entity recorded under `key`
    pub fn get(&self, key: &str) -> Result<EntityId> {
        self.entries
            .get(key)
            .copied()
            .ok_or_else(|| CheckError::BookmarkMissing(key.to_string()))
    }

    /// Whether `key` has been recorded
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Forget every bookmark
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of recorded bookmarks
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no bookmark is recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

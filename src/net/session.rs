//! Persistence of the local session record.
//!
//! The record's presence under the storage key is the only authentication
//! signal the client has; nothing here asks the backend whether the cookie
//! session is still valid.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::logging::warn;

use super::types::SessionUser;
use crate::util::storage::KeyValueStore;

#[derive(Clone)]
pub struct SessionStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S, key: &str) -> Self {
        Self { store, key: key.to_owned() }
    }

    pub fn save(&self, user: &SessionUser) {
        match serde_json::to_string(user) {
            Ok(raw) => self.store.set_item(&self.key, &raw),
            Err(e) => warn!("session record not saved: {e}"),
        }
    }

    /// Read the record. An unparseable record is removed so presence and
    /// readability never disagree after the first read.
    pub fn load(&self) -> Option<SessionUser> {
        let raw = self.store.get_item(&self.key)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!("discarding unreadable session record: {e}");
                self.store.remove_item(&self.key);
                None
            }
        }
    }

    pub fn clear(&self) {
        self.store.remove_item(&self.key);
    }

    /// Whether a readable record exists. Runs [`Self::load`], so an
    /// unreadable record is dropped here too.
    pub fn is_present(&self) -> bool {
        self.load().is_some()
    }
}

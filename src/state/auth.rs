//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mirrors the persisted session record so components re-render on login and
//! logout. Presence only; profile data is tracked separately in
//! [`super::profile`].

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::SessionUser;

/// The locally known user, read synchronously from storage.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<SessionUser>,
}

impl AuthState {
    pub fn new(user: Option<SessionUser>) -> Self {
        Self { user }
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    /// Name shown in the header, `None` when logged out.
    pub fn display_name(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.username.as_str())
    }
}

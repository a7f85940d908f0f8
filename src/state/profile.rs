//! Profile fetch state for the dashboard.
//!
//! DESIGN
//! ======
//! Kept apart from [`super::auth::AuthState`] so a slow or failed profile
//! request never changes whether the user counts as logged in.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use crate::error::ApiError;
use crate::net::types::{SessionUser, UserProfile};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileState {
    pub profile: Option<UserProfile>,
    pub loading: bool,
    pub error: Option<String>,
}

impl ProfileState {
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish(&mut self, result: Result<UserProfile, ApiError>) {
        self.loading = false;
        match result {
            Ok(profile) => {
                self.profile = Some(profile);
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    /// The fetched profile, or one built from the session record when the
    /// fetch failed or has not finished.
    pub fn effective(&self, session: Option<&SessionUser>) -> Option<UserProfile> {
        self.profile.clone().or_else(|| session.cloned().map(UserProfile::from))
    }
}

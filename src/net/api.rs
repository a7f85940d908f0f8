//! Session client for the budget backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages and the route guard go through [`SessionClient`] for everything that
//! touches the account: CSRF bootstrap, register/login/logout, the profile,
//! and the local session record. Budget resources (transactions and
//! categories) ride the same credentialed HTTP wrapper.
//!
//! ERROR HANDLING
//! ==============
//! Failed calls return [`ApiError`] built from the response body, or from the
//! operation's fallback message. CSRF bootstrap and logout failures are only
//! logged by default; local logout always succeeds.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use leptos::logging::{error, warn};
use serde_json::Value;

use super::browser::{BrowserCookies, BrowserTransport};
use super::http::{ApiResponse, CookieSource, HttpClient, HttpError, Method, Transport};
use super::session::SessionStore;
use super::types::{
    AuthResponse, Category, Listing, LoginRequest, NewTransaction, RegisterRequest, SessionUser, Transaction,
    UserProfile,
};
use crate::config::{ApiConfig, CsrfPolicy};
use crate::error::ApiError;
use crate::util::storage::{KeyValueStore, LocalStorage};

const CSRF_PATH: &str = "api/csrf/";
const REGISTER_PATH: &str = "api/register/";
const LOGIN_PATH: &str = "api/login/";
const LOGOUT_PATH: &str = "api/logout/";
const PROFILE_PATH: &str = "api/user/";
const TRANSACTIONS_PATH: &str = "api/transactions/";
const CATEGORIES_PATH: &str = "api/categories/";

pub const CSRF_FAILED: &str = "Failed to fetch CSRF token";
pub const REGISTER_FAILED: &str = "Registration failed";
pub const LOGIN_FAILED: &str = "Login failed";
pub const PROFILE_FAILED: &str = "Failed to fetch user profile";
pub const CATEGORIES_FAILED: &str = "Failed to load categories";
pub const TRANSACTIONS_FAILED: &str = "Failed to load transactions";
pub const TRANSACTION_CREATE_FAILED: &str = "Error adding transaction.";

#[derive(Clone)]
pub struct SessionClient<T, C, S> {
    config: ApiConfig,
    http: HttpClient<T, C>,
    session: SessionStore<S>,
}

/// The client wired to `fetch`, `document.cookie` and `localStorage`.
pub type BrowserClient = SessionClient<BrowserTransport, BrowserCookies, LocalStorage>;

impl BrowserClient {
    pub fn browser(config: ApiConfig) -> Self {
        Self::new(config, BrowserTransport, BrowserCookies, LocalStorage)
    }
}

impl<T: Transport, C: CookieSource, S: KeyValueStore> SessionClient<T, C, S> {
    pub fn new(config: ApiConfig, transport: T, cookies: C, store: S) -> Self {
        let http = HttpClient::new(transport, cookies, &config.csrf_cookie, &config.csrf_header);
        let session = SessionStore::new(store, &config.session_key);
        Self { config, http, session }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Ask the backend to set the CSRF cookie. The response body is ignored.
    ///
    /// # Errors
    ///
    /// Only under [`CsrfPolicy::Required`]; otherwise failures are logged and
    /// `Ok(())` is returned.
    pub async fn fetch_csrf_token(&self) -> Result<(), ApiError> {
        let url = self.config.users_endpoint(CSRF_PATH);
        let Err(e) = self.http.execute(Method::Get, &url, None).await else {
            return Ok(());
        };
        warn!("failed to fetch CSRF token: {e}");
        match self.config.csrf_policy {
            CsrfPolicy::BestEffort => Ok(()),
            CsrfPolicy::Required => Err(ApiError::fallback(CSRF_FAILED)),
        }
    }

    /// Create an account. Persists the session record when the backend logs
    /// the new user in.
    ///
    /// # Errors
    ///
    /// Returns the backend's error payload, or `{"error": "Registration failed"}`.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password1: &str,
        password2: &str,
    ) -> Result<AuthResponse, ApiError> {
        self.fetch_csrf_token().await?;
        let url = self.config.users_endpoint(REGISTER_PATH);
        let payload = RegisterRequest { username, email, password1, password2 };
        let response = self.http.post(&url, &payload).await.and_then(auth_response);
        let response = response.map_err(|e| ApiError::normalize(e, REGISTER_FAILED))?;
        self.remember(&response);
        Ok(response)
    }

    /// # Errors
    ///
    /// Returns the backend's error payload, or `{"error": "Login failed"}`.
    pub async fn login(&self, username: &str, password: &str) -> Result<AuthResponse, ApiError> {
        self.fetch_csrf_token().await?;
        let url = self.config.users_endpoint(LOGIN_PATH);
        let payload = LoginRequest { username, password };
        let response = self.http.post(&url, &payload).await.and_then(auth_response);
        let response = response.map_err(|e| ApiError::normalize(e, LOGIN_FAILED))?;
        self.remember(&response);
        Ok(response)
    }

    /// End the session. The local record is removed whether or not the
    /// backend call succeeds.
    pub async fn logout(&self) {
        // Login and register refresh the CSRF cookie first; logout reuses
        // whatever cookie is already set unless `csrf_before_logout` is on.
        if self.config.csrf_before_logout {
            // Local logout must still happen, so a Required-policy failure
            // here is not allowed to stop the flow.
            let _ = self.fetch_csrf_token().await;
        }
        let url = self.config.users_endpoint(LOGOUT_PATH);
        if let Err(e) = self.http.execute(Method::Post, &url, None).await {
            error!("logout error: {e}");
        }
        self.session.clear();
    }

    pub fn current_user(&self) -> Option<SessionUser> {
        self.session.load()
    }

    /// True when a readable session record exists. This read removes an
    /// unreadable record, same as [`Self::current_user`].
    pub fn is_logged_in(&self) -> bool {
        self.session.is_present()
    }

    /// # Errors
    ///
    /// Returns the backend's error payload, or
    /// `{"error": "Failed to fetch user profile"}`.
    pub async fn user_profile(&self) -> Result<UserProfile, ApiError> {
        let url = self.config.users_endpoint(PROFILE_PATH);
        self.http.get_json(&url).await.map_err(|e| ApiError::normalize(e, PROFILE_FAILED))
    }

    /// # Errors
    ///
    /// Returns the backend's error payload, or a fixed fallback message.
    pub async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        let url = self.config.resource_endpoint(CATEGORIES_PATH);
        let listing: Listing<Category> =
            self.http.get_json(&url).await.map_err(|e| ApiError::normalize(e, CATEGORIES_FAILED))?;
        Ok(listing.into_items())
    }

    /// # Errors
    ///
    /// Returns the backend's error payload, or a fixed fallback message.
    pub async fn transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        let url = self.config.resource_endpoint(TRANSACTIONS_PATH);
        let listing: Listing<Transaction> =
            self.http.get_json(&url).await.map_err(|e| ApiError::normalize(e, TRANSACTIONS_FAILED))?;
        Ok(listing.into_items())
    }

    /// Record a transaction. The created body is not decoded; callers
    /// refetch the list.
    ///
    /// # Errors
    ///
    /// Returns the backend's error payload, or `{"error": "Error adding transaction."}`.
    pub async fn create_transaction(&self, transaction: &NewTransaction) -> Result<(), ApiError> {
        let url = self.config.resource_endpoint(TRANSACTIONS_PATH);
        self.http
            .post(&url, transaction)
            .await
            .map(|_| ())
            .map_err(|e| ApiError::normalize(e, TRANSACTION_CREATE_FAILED))
    }

    fn remember(&self, response: &AuthResponse) {
        if let Some(user) = response.session_user() {
            self.session.save(&user);
        }
    }
}

/// An empty 2xx body is a valid, user-less auth response.
fn auth_response(response: ApiResponse) -> Result<AuthResponse, HttpError> {
    let body = response.body.unwrap_or_else(|| Value::Object(serde_json::Map::new()));
    serde_json::from_value(body).map_err(|e| HttpError::Decode(e.to_string()))
}

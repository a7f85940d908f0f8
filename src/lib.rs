//! # budget-client
//!
//! Leptos + WASM frontend for the budget manager.
//!
//! This crate contains the session-aware HTTP client that talks to the Django
//! backend (CSRF bootstrap, credentialed requests, persisted session record),
//! the route guard, and the login, register and dashboard pages with their
//! transaction form and list.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
pub(crate) mod testing;

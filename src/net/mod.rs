//! Networking: transport abstraction, browser bindings, session persistence
//! and the typed backend client.
//!
//! DESIGN
//! ======
//! `http` knows nothing about the browser; `browser` plugs `fetch` and
//! `document.cookie` into it. `api` composes both with `session` to expose the
//! operations pages call.

pub mod api;
pub mod browser;
pub mod http;
pub mod session;
pub mod types;

//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Submit flows live in plain async functions next to the
//! page so they run against any `SessionClient`.

pub mod dashboard;
pub mod login;
pub mod register;

//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `profile`, `transactions`) so session
//! presence, profile loading and list loading can change independently.
//! Each struct is held in an `RwSignal` provided through context.

pub mod auth;
pub mod profile;
pub mod transactions;

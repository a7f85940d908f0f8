//! Route guard for pages that need a logged-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The decision trusts the locally stored session record; nothing is checked
//! with the backend before protected content renders. Redirects replace the
//! history entry so Back does not land on the guarded route again.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;

use crate::app::session_client;
use crate::net::api::SessionClient;
use crate::net::http::{CookieSource, Transport};
use crate::util::storage::KeyValueStore;

pub const LOGIN_ROUTE: &str = "/login";
pub const REGISTER_ROUTE: &str = "/register";
pub const DASHBOARD_ROUTE: &str = "/dashboard";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect { to: &'static str, replace: bool },
}

pub fn guard_decision(logged_in: bool) -> GuardDecision {
    if logged_in { GuardDecision::Render } else { GuardDecision::Redirect { to: LOGIN_ROUTE, replace: true } }
}

/// Decision for the session `client` holds right now.
pub fn route_guard<T, C, S>(client: &SessionClient<T, C, S>) -> GuardDecision
where
    T: Transport,
    C: CookieSource,
    S: KeyValueStore,
{
    guard_decision(client.is_logged_in())
}

fn redirect_options(replace: bool) -> NavigateOptions {
    NavigateOptions { replace, ..NavigateOptions::default() }
}

/// Render `children` only when a session record exists.
#[component]
pub fn ProtectedRoute(children: Children) -> impl IntoView {
    match route_guard(&session_client()) {
        GuardDecision::Render => children().into_any(),
        GuardDecision::Redirect { to, replace } => {
            view! { <Redirect path=to options=redirect_options(replace)/> }.into_any()
        }
    }
}

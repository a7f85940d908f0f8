//! Root application component with routing and context providers.

use leptos::logging::error;
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::config::ApiConfig;
use crate::net::api::BrowserClient;
use crate::pages::{dashboard::DashboardPage, login::LoginPage, register::RegisterPage};
use crate::state::auth::AuthState;
use crate::util::guard::{DASHBOARD_ROUTE, ProtectedRoute};

/// A browser-backed client using the config provided by [`App`], or the
/// defaults when rendered outside it.
pub fn session_client() -> BrowserClient {
    BrowserClient::browser(use_context::<ApiConfig>().unwrap_or_default())
}

fn load_config() -> ApiConfig {
    ApiConfig::from_env().unwrap_or_else(|e| {
        error!("invalid API configuration, using defaults: {e}");
        ApiConfig::default()
    })
}

/// Root application component.
///
/// Provides the API config and session state, seeded from the stored session
/// record, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = load_config();
    let auth = RwSignal::new(AuthState::new(BrowserClient::browser(config.clone()).current_user()));

    provide_context(config);
    provide_context(auth);

    view! {
        <Title text="Budget Manager"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <ProtectedRoute><DashboardPage/></ProtectedRoute> }
                />
                <Route path=StaticSegment("") view=|| view! { <Redirect path=DASHBOARD_ROUTE/> }/>
            </Routes>
        </Router>
    }
}

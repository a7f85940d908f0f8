//! Login page with username + password credentials.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::app::session_client;
use crate::error::ApiError;
use crate::net::api::SessionClient;
use crate::net::http::{CookieSource, Transport};
use crate::state::auth::AuthState;
use crate::util::guard::{DASHBOARD_ROUTE, REGISTER_ROUTE};
use crate::util::storage::KeyValueStore;

const MISSING_CREDENTIALS: &str = "Enter both username and password.";
const LOGIN_FAILED_MESSAGE: &str = "Login failed. Please try again.";

fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(MISSING_CREDENTIALS);
    }
    Ok((username.to_owned(), password.to_owned()))
}

fn login_error_message(err: &ApiError) -> String {
    err.message().unwrap_or_else(|| LOGIN_FAILED_MESSAGE.to_owned())
}

/// Validate and log in; returns the route to open next or the message to show.
pub(crate) async fn submit_login<T, C, S>(
    client: &SessionClient<T, C, S>,
    username: &str,
    password: &str,
) -> Result<&'static str, String>
where
    T: Transport,
    C: CookieSource,
    S: KeyValueStore,
{
    let (username, password) = validate_login_input(username, password).map_err(str::to_owned)?;
    client.login(&username, &password).await.map_err(|e| login_error_message(&e))?;
    Ok(DASHBOARD_ROUTE)
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let client = session_client();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let loading = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        error.set(String::new());
        loading.set(true);

        let client = client.clone();
        let navigate = navigate.clone();
        let (user_value, pass_value) = (username.get_untracked(), password.get_untracked());
        leptos::task::spawn_local(async move {
            match submit_login(&client, &user_value, &pass_value).await {
                Ok(route) => {
                    auth.set(AuthState::new(client.current_user()));
                    navigate(route, NavigateOptions::default());
                }
                Err(message) => error.set(message),
            }
            loading.set(false);
        });
    };

    view! {
        <div class="auth-container">
            <div class="auth-card">
                <h2>"Login to Budget Manager"</h2>
                <Show when=move || !error.get().is_empty()>
                    <div class="error-message">{move || error.get()}</div>
                </Show>
                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">"Username"</label>
                        <input
                            id="username"
                            type="text"
                            required
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            id="password"
                            type="password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </div>
                    <button class="auth-button" type="submit" disabled=move || loading.get()>
                        {move || if loading.get() { "Logging in..." } else { "Login" }}
                    </button>
                </form>
                <p class="auth-switch">
                    "Don't have an account? "
                    <A href=REGISTER_ROUTE>"Sign up"</A>
                </p>
            </div>
        </div>
    }
}

//! Account registration page. A successful registration logs the new user
//! in with the same credentials before opening the dashboard.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::app::session_client;
use crate::error::ApiError;
use crate::net::api::SessionClient;
use crate::net::http::{CookieSource, Transport};
use crate::state::auth::AuthState;
use crate::util::guard::{DASHBOARD_ROUTE, LOGIN_ROUTE};
use crate::util::storage::KeyValueStore;

pub const PASSWORD_MISMATCH: &str = "Passwords do not match";
const REGISTER_FAILED_MESSAGE: &str = "Registration failed. Please try again.";
const LOGIN_LINK_LABEL: &str = "Log in";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub username: String,
    pub email: String,
    pub password1: String,
    pub password2: String,
}

fn validate_registration(form: &RegistrationForm) -> Result<(), &'static str> {
    if form.password1 != form.password2 {
        return Err(PASSWORD_MISMATCH);
    }
    Ok(())
}

fn submit_label(loading: bool) -> &'static str {
    if loading { "Creating Account..." } else { "Sign Up" }
}

/// First applicable line: the `error` field, then per-field errors.
fn register_error_message(err: &ApiError) -> String {
    let payload = err.payload();
    if let Some(message) = payload.field("error") {
        return message;
    }
    [("username", "Username"), ("email", "Email"), ("password1", "Password")]
        .iter()
        .find_map(|(field, label)| payload.field(field).map(|text| format!("{label} error: {text}")))
        .unwrap_or_else(|| REGISTER_FAILED_MESSAGE.to_owned())
}

/// Register, then log in; returns the route to open next or the message to show.
pub(crate) async fn submit_registration<T, C, S>(
    client: &SessionClient<T, C, S>,
    form: &RegistrationForm,
) -> Result<&'static str, String>
where
    T: Transport,
    C: CookieSource,
    S: KeyValueStore,
{
    validate_registration(form).map_err(str::to_owned)?;
    client
        .register(&form.username, &form.email, &form.password1, &form.password2)
        .await
        .map_err(|e| register_error_message(&e))?;
    client
        .login(&form.username, &form.password1)
        .await
        .map_err(|e| register_error_message(&e))?;
    Ok(DASHBOARD_ROUTE)
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let client = session_client();
    let navigate = use_navigate();

    let form = RwSignal::new(RegistrationForm::default());
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
        let submitted = form.get_untracked();
        leptos::task::spawn_local(async move {
            match submit_registration(&client, &submitted).await {
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
                <h2>"Create an Account"</h2>
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
                            prop:value=move || form.get().username
                            on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            id="email"
                            type="email"
                            required
                            prop:value=move || form.get().email
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="password1">"Password"</label>
                        <input
                            id="password1"
                            type="password"
                            required
                            prop:value=move || form.get().password1
                            on:input=move |ev| form.update(|f| f.password1 = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="password2">"Confirm Password"</label>
                        <input
                            id="password2"
                            type="password"
                            required
                            prop:value=move || form.get().password2
                            on:input=move |ev| form.update(|f| f.password2 = event_target_value(&ev))
                        />
                    </div>
                    <button class="auth-button" type="submit" disabled=move || loading.get()>
                        {move || submit_label(loading.get())}
                    </button>
                </form>
                <p class="auth-switch">
                    "Already have an account? "
                    <A href=LOGIN_ROUTE>{LOGIN_LINK_LABEL}</A>
                </p>
            </div>
        </div>
    }
}

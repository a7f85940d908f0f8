//! Dashboard page: account summary, transaction entry, recent transactions.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route, mounted behind `ProtectedRoute`.
//! On mount it checks the session record once more, then loads the profile
//! and the transaction list independently; either may fail without blocking
//! the other or the page.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::logging::error;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::session_client;
use crate::components::transaction_form::TransactionForm;
use crate::components::transaction_list::TransactionList;
use crate::net::api::SessionClient;
use crate::net::http::{CookieSource, Transport};
use crate::net::types::SessionUser;
use crate::state::auth::AuthState;
use crate::state::profile::ProfileState;
use crate::state::transactions::TransactionsState;
use crate::util::guard::LOGIN_ROUTE;
use crate::util::storage::KeyValueStore;

/// What the dashboard does when it mounts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum DashboardEntry {
    Load(SessionUser),
    Redirect(&'static str),
}

pub(crate) fn dashboard_entry<T, C, S>(client: &SessionClient<T, C, S>) -> DashboardEntry
where
    T: Transport,
    C: CookieSource,
    S: KeyValueStore,
{
    match client.current_user() {
        Some(user) => DashboardEntry::Load(user),
        None => DashboardEntry::Redirect(LOGIN_ROUTE),
    }
}

/// Log out and return where to go next. Always the login route, whatever
/// happened on the network.
pub(crate) async fn perform_logout<T, C, S>(client: &SessionClient<T, C, S>) -> &'static str
where
    T: Transport,
    C: CookieSource,
    S: KeyValueStore,
{
    client.logout().await;
    LOGIN_ROUTE
}

pub(crate) async fn load_profile<T, C, S>(client: &SessionClient<T, C, S>, profile: RwSignal<ProfileState>)
where
    T: Transport,
    C: CookieSource,
    S: KeyValueStore,
{
    profile.update(ProfileState::begin);
    let result = client.user_profile().await;
    if let Err(e) = &result {
        error!("failed to fetch user data: {e}");
    }
    profile.update(|p| p.finish(result));
}

pub(crate) async fn load_transactions<T, C, S>(
    client: &SessionClient<T, C, S>,
    transactions: RwSignal<TransactionsState>,
) where
    T: Transport,
    C: CookieSource,
    S: KeyValueStore,
{
    transactions.update(TransactionsState::begin);
    let result = client.transactions().await;
    if let Err(e) = &result {
        error!("failed to fetch transactions: {e}");
    }
    transactions.update(|t| t.finish(result));
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let client = session_client();
    let navigate = use_navigate();

    let profile = RwSignal::new(ProfileState::default());
    let transactions = RwSignal::new(TransactionsState::default());

    match dashboard_entry(&client) {
        DashboardEntry::Load(user) => {
            auth.set(AuthState::new(Some(user)));
            let profile_client = client.clone();
            leptos::task::spawn_local(async move {
                load_profile(&profile_client, profile).await;
            });
        }
        DashboardEntry::Redirect(route) => {
            auth.set(AuthState::default());
            let navigate_login = navigate.clone();
            Effect::new(move || navigate_login(route, NavigateOptions::default()));
        }
    }

    // Refetch the list on mount and whenever the form reports a new entry.
    // Only the sequence is tracked; loading updates must not retrigger this.
    let refresh_seq = Memo::new(move |_| transactions.with(|t| t.refresh_seq));
    let list_client = client.clone();
    Effect::new(move || {
        refresh_seq.track();
        if !auth.get_untracked().is_logged_in() {
            return;
        }
        let client = list_client.clone();
        leptos::task::spawn_local(async move {
            load_transactions(&client, transactions).await;
        });
    });

    let on_logout = move |_| {
        let client = client.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let route = perform_logout(&client).await;
            auth.set(AuthState::default());
            navigate(route, NavigateOptions::default());
        });
    };

    let current = move || profile.with(|p| auth.with(|a| p.effective(a.user.as_ref())));

    view! {
        <div class="dashboard-container">
            <div class="dashboard-header">
                <h1>"Budget Manager Dashboard"</h1>
                <div class="user-info">
                    {move || current().map(|u| view! { <span>"Welcome, " {u.username}</span> })}
                    <button class="logout-button" on:click=on_logout>
                        "Logout"
                    </button>
                </div>
            </div>

            <div class="dashboard-content">
                <div class="dashboard-card">
                    <h2>"Summary"</h2>
                    <p>"This is your budget dashboard. You are now logged in!"</p>
                    <Show when=move || profile.get().loading>
                        <p class="loading">"Loading profile..."</p>
                    </Show>
                    <Show when=move || profile.get().error.is_some()>
                        <p class="dashboard-card__warning">
                            {move || profile.get().error.unwrap_or_default()}
                        </p>
                    </Show>
                    <p>"Your account details:"</p>
                    {move || {
                        current()
                            .map(|u| {
                                view! {
                                    <ul>
                                        <li><strong>"Username:"</strong> " " {u.username}</li>
                                        <li><strong>"Email:"</strong> " " {u.email}</li>
                                    </ul>
                                }
                            })
                    }}
                </div>

                <TransactionForm transactions=transactions/>

                <div class="dashboard-card">
                    <h2>"Recent Transactions"</h2>
                    <TransactionList transactions=transactions/>
                </div>
            </div>
        </div>
    }
}

//! "Add Transaction" card on the dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads categories once on mount, validates the draft locally, POSTs it, then
//! bumps [`TransactionsState::refresh_seq`] so the dashboard refetches the list.
//!
//! ERROR HANDLING
//! ==============
//! A category load failure is logged and leaves the select empty. A create
//! failure shows one fixed message; the backend's payload is only logged.

#[cfg(test)]
#[path = "transaction_form_test.rs"]
mod transaction_form_test;

use leptos::logging::error;
use leptos::prelude::*;

use crate::app::session_client;
use crate::net::api::{SessionClient, TRANSACTION_CREATE_FAILED};
use crate::net::http::{CookieSource, Transport};
use crate::net::types::NewTransaction;
use crate::state::transactions::TransactionsState;
use crate::util::storage::KeyValueStore;

pub const TRANSACTION_ADDED: &str = "Transaction added successfully!";
pub const MISSING_AMOUNT: &str = "Enter an amount.";
pub const INVALID_AMOUNT: &str = "Amount must be a number with at most two decimals.";
pub const MISSING_DATE: &str = "Pick a date.";
pub const MISSING_CATEGORY: &str = "Select a category.";

/// Raw form fields as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransactionDraft {
    pub amount: String,
    pub description: String,
    pub date: String,
    pub category_id: String,
}

impl TransactionDraft {
    pub fn new(date: String) -> Self {
        Self { date, ..Self::default() }
    }

    /// Clear everything except the date, which usually repeats.
    pub fn reset(&mut self) {
        self.amount.clear();
        self.description.clear();
        self.category_id.clear();
    }
}

fn is_decimal_amount(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    let (whole, frac) = match digits.split_once('.') {
        Some((whole, frac)) => (whole, Some(frac)),
        None => (digits, None),
    };
    let whole_ok = !whole.is_empty() && whole.bytes().all(|b| b.is_ascii_digit());
    let frac_ok = frac.is_none_or(|f| (1..=2).contains(&f.len()) && f.bytes().all(|b| b.is_ascii_digit()));
    whole_ok && frac_ok
}

fn validate_transaction(draft: &TransactionDraft) -> Result<NewTransaction, &'static str> {
    let amount = draft.amount.trim();
    if amount.is_empty() {
        return Err(MISSING_AMOUNT);
    }
    if !is_decimal_amount(amount) {
        return Err(INVALID_AMOUNT);
    }
    let date = draft.date.trim();
    if date.is_empty() {
        return Err(MISSING_DATE);
    }
    let category_id = draft.category_id.trim().parse::<i64>().map_err(|_| MISSING_CATEGORY)?;
    Ok(NewTransaction {
        amount: amount.to_owned(),
        description: draft.description.trim().to_owned(),
        date: date.to_owned(),
        category_id,
    })
}

/// Validate and create; returns the message to show either way.
pub(crate) async fn submit_transaction<T, C, S>(
    client: &SessionClient<T, C, S>,
    draft: &TransactionDraft,
) -> Result<&'static str, &'static str>
where
    T: Transport,
    C: CookieSource,
    S: KeyValueStore,
{
    let transaction = validate_transaction(draft)?;
    match client.create_transaction(&transaction).await {
        Ok(()) => Ok(TRANSACTION_ADDED),
        Err(e) => {
            error!("transaction failed: {e}");
            Err(TRANSACTION_CREATE_FAILED)
        }
    }
}

pub(crate) async fn load_categories<T, C, S>(
    client: &SessionClient<T, C, S>,
    transactions: RwSignal<TransactionsState>,
) where
    T: Transport,
    C: CookieSource,
    S: KeyValueStore,
{
    let categories = client.categories().await.unwrap_or_else(|e| {
        error!("failed to load categories: {e}");
        Vec::new()
    });
    transactions.update(|t| t.categories = categories);
}

/// Today's local date as `YYYY-MM-DD`; empty outside the browser.
fn today_iso() -> String {
    #[cfg(feature = "csr")]
    {
        let now = js_sys::Date::new_0();
        format!("{:04}-{:02}-{:02}", now.get_full_year(), now.get_month() + 1, now.get_date())
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}

#[component]
pub fn TransactionForm(transactions: RwSignal<TransactionsState>) -> impl IntoView {
    let client = session_client();
    let draft = RwSignal::new(TransactionDraft::new(today_iso()));
    let message = RwSignal::new(None::<&'static str>);
    let submitting = RwSignal::new(false);

    let category_client = client.clone();
    leptos::task::spawn_local(async move {
        load_categories(&category_client, transactions).await;
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        message.set(None);
        submitting.set(true);

        let client = client.clone();
        let submitted = draft.get_untracked();
        leptos::task::spawn_local(async move {
            match submit_transaction(&client, &submitted).await {
                Ok(text) => {
                    draft.update(TransactionDraft::reset);
                    transactions.update(TransactionsState::request_refresh);
                    message.set(Some(text));
                }
                Err(text) => message.set(Some(text)),
            }
            submitting.set(false);
        });
    };

    let category_options = move || {
        transactions
            .get()
            .categories
            .into_iter()
            .map(|c| view! { <option value=c.id.to_string()>{c.name}</option> })
            .collect_view()
    };

    view! {
        <div class="dashboard-card">
            <h2>"Add Transaction"</h2>
            {move || message.get().map(|text| view! { <p class="form-message">{text}</p> })}
            <form on:submit=on_submit>
                <div class="form-group">
                    <label for="tx-amount">"Amount"</label>
                    <input
                        id="tx-amount"
                        type="number"
                        step="0.01"
                        required
                        prop:value=move || draft.get().amount
                        on:input=move |ev| draft.update(|d| d.amount = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="tx-description">"Description"</label>
                    <input
                        id="tx-description"
                        type="text"
                        prop:value=move || draft.get().description
                        on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="tx-date">"Date"</label>
                    <input
                        id="tx-date"
                        type="date"
                        required
                        prop:value=move || draft.get().date
                        on:input=move |ev| draft.update(|d| d.date = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="tx-category">"Category"</label>
                    <select
                        id="tx-category"
                        required
                        prop:value=move || draft.get().category_id
                        on:change=move |ev| draft.update(|d| d.category_id = event_target_value(&ev))
                    >
                        <option value="">"Select category"</option>
                        {category_options}
                    </select>
                </div>
                <button type="submit" disabled=move || submitting.get()>
                    "Add Transaction"
                </button>
            </form>
        </div>
    }
}

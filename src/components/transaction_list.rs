//! Recent transactions table.

#[cfg(test)]
#[path = "transaction_list_test.rs"]
mod transaction_list_test;

use leptos::prelude::*;

use crate::net::types::{Category, Transaction};
use crate::state::transactions::TransactionsState;

pub const EMPTY_LIST_MESSAGE: &str = "Your recent transactions will appear here.";
pub const LOADING_MESSAGE: &str = "Loading transactions...";

/// One rendered row: date, description, category, amount.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionRow {
    pub id: i64,
    pub date: String,
    pub description: String,
    pub category: String,
    pub amount: String,
}

fn transaction_row(tx: &Transaction, categories: &[Category]) -> TransactionRow {
    TransactionRow {
        id: tx.id,
        date: tx.date.clone(),
        description: tx.description.clone(),
        category: tx.category_label(categories).unwrap_or_else(|| "-".to_owned()),
        amount: tx.amount.clone(),
    }
}

fn recent_rows(state: &TransactionsState) -> Vec<TransactionRow> {
    state.recent().iter().map(|tx| transaction_row(tx, &state.categories)).collect()
}

/// Text shown instead of the table, if any. Rows already on screen stay
/// visible during a refetch.
fn placeholder(state: &TransactionsState) -> Option<&'static str> {
    match (state.items.is_empty(), state.loading) {
        (false, _) => None,
        (true, true) => Some(LOADING_MESSAGE),
        (true, false) => Some(EMPTY_LIST_MESSAGE),
    }
}

#[component]
pub fn TransactionList(transactions: RwSignal<TransactionsState>) -> impl IntoView {
    let rows = move || transactions.with(recent_rows);
    let error = move || transactions.with(|t| t.error.clone());

    view! {
        {move || error().map(|text| view! { <p class="dashboard-card__warning">{text}</p> })}
        {move || {
            if let Some(text) = transactions.with(placeholder) {
                let class = if text == LOADING_MESSAGE { "loading" } else { "empty-state" };
                view! { <p class=class>{text}</p> }.into_any()
            } else {
                let rows = rows();
                view! {
                    <table class="transaction-list">
                        <thead>
                            <tr>
                                <th>"Date"</th>
                                <th>"Description"</th>
                                <th>"Category"</th>
                                <th>"Amount"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {rows
                                .into_iter()
                                .map(|row| {
                                    view! {
                                        <tr>
                                            <td>{row.date}</td>
                                            <td>{row.description}</td>
                                            <td>{row.category}</td>
                                            <td class="amount">{row.amount}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                }
                    .into_any()
            }
        }}
    }
}

//! Transaction list and category state shared by the dashboard and the
//! transaction form.

#[cfg(test)]
#[path = "transactions_test.rs"]
mod transactions_test;

use crate::error::ApiError;
use crate::net::types::{Category, Transaction};

/// Number of rows shown under "Recent Transactions".
pub const RECENT_LIMIT: usize = 10;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransactionsState {
    pub items: Vec<Transaction>,
    pub categories: Vec<Category>,
    pub loading: bool,
    pub error: Option<String>,
    /// Bumped after a successful create so the list refetches.
    pub refresh_seq: u64,
}

impl TransactionsState {
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish(&mut self, result: Result<Vec<Transaction>, ApiError>) {
        self.loading = false;
        match result {
            Ok(items) => self.items = items,
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    pub fn request_refresh(&mut self) {
        self.refresh_seq += 1;
    }

    /// Newest first by date, then by id, capped at [`RECENT_LIMIT`].
    pub fn recent(&self) -> Vec<Transaction> {
        let mut items = self.items.clone();
        items.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
        items.truncate(RECENT_LIMIT);
        items
    }
}

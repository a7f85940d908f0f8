use super::*;

fn tx(id: i64, date: &str) -> Transaction {
    Transaction { id, amount: "1.00".to_owned(), description: String::new(), date: date.to_owned(), category: None }
}

#[test]
fn transactions_state_default_empty() {
    let state = TransactionsState::default();
    assert!(state.items.is_empty());
    assert!(!state.loading);
    assert_eq!(state.refresh_seq, 0);
}

#[test]
fn finish_replaces_items() {
    let mut state = TransactionsState { items: vec![tx(1, "2024-01-01")], ..TransactionsState::default() };
    state.begin();
    state.finish(Ok(vec![tx(2, "2024-02-01"), tx(3, "2024-03-01")]));
    assert!(!state.loading);
    assert_eq!(state.items.len(), 2);
    assert!(state.error.is_none());
}

#[test]
fn finish_error_keeps_items() {
    let mut state = TransactionsState { items: vec![tx(1, "2024-01-01")], ..TransactionsState::default() };
    state.begin();
    state.finish(Err(ApiError::fallback("Failed to load transactions")));
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.error.as_deref(), Some("Failed to load transactions"));
}

#[test]
fn request_refresh_bumps_sequence() {
    let mut state = TransactionsState::default();
    state.request_refresh();
    state.request_refresh();
    assert_eq!(state.refresh_seq, 2);
}

#[test]
fn recent_sorts_newest_first_and_caps() {
    let mut items: Vec<Transaction> = (1..=12).map(|i| tx(i, &format!("2024-01-{i:02}"))).collect();
    items.push(tx(13, "2024-01-12"));
    let state = TransactionsState { items, ..TransactionsState::default() };

    let recent = state.recent();

    assert_eq!(recent.len(), RECENT_LIMIT);
    assert_eq!(recent[0].id, 13);
    assert_eq!(recent[1].id, 12);
    assert_eq!(recent.last().map(|t| t.id), Some(4));
}

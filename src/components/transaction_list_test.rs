use super::*;
use crate::net::types::CategoryRef;

fn tx(id: i64, date: &str, category: Option<CategoryRef>) -> Transaction {
    Transaction { id, amount: format!("{id}.00"), description: format!("item {id}"), date: date.to_owned(), category }
}

#[test]
fn empty_state_has_no_rows() {
    let state = TransactionsState::default();
    assert!(recent_rows(&state).is_empty());
    assert_eq!(placeholder(&state), Some(EMPTY_LIST_MESSAGE));
}

#[test]
fn first_fetch_shows_loading_line() {
    let mut state = TransactionsState::default();
    state.begin();
    assert_eq!(placeholder(&state), Some("Loading transactions..."));

    state.finish(Ok(Vec::new()));
    assert_eq!(placeholder(&state), Some("Your recent transactions will appear here."));
}

#[test]
fn refetch_keeps_existing_rows() {
    let mut state = TransactionsState { items: vec![tx(1, "2024-05-01", None)], ..TransactionsState::default() };
    state.begin();
    assert_eq!(placeholder(&state), None);
    assert_eq!(recent_rows(&state).len(), 1);
}

#[test]
fn rows_resolve_category_names() {
    let state = TransactionsState {
        items: vec![
            tx(1, "2024-05-01", Some(CategoryRef::Id(2))),
            tx(2, "2024-05-02", Some(CategoryRef::Nested(Category { id: 9, name: "Rent".to_owned() }))),
            tx(3, "2024-04-30", None),
        ],
        categories: vec![Category { id: 2, name: "Food".to_owned() }],
        ..TransactionsState::default()
    };

    let rows = recent_rows(&state);

    let summary: Vec<(i64, &str)> = rows.iter().map(|r| (r.id, r.category.as_str())).collect();
    assert_eq!(summary, [(2, "Rent"), (1, "Food"), (3, "-")]);
    assert_eq!(rows[1].amount, "1.00");
    assert_eq!(rows[1].date, "2024-05-01");
}

#[test]
fn unknown_category_id_shows_placeholder() {
    let state = TransactionsState {
        items: vec![tx(1, "2024-05-01", Some(CategoryRef::Id(42)))],
        ..TransactionsState::default()
    };
    assert_eq!(recent_rows(&state)[0].category, "-");
}

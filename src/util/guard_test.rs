//! `ProtectedRoute` only dispatches on [`route_guard`]: children for
//! `Render`, a `Redirect` built from [`redirect_options`] otherwise. The
//! decision and the navigation options are covered here without a DOM.

use super::*;

#[test]
fn logged_out_redirects_to_login_with_replace() {
    assert_eq!(guard_decision(false), GuardDecision::Redirect { to: "/login", replace: true });
}

#[test]
fn logged_in_renders_children() {
    assert_eq!(guard_decision(true), GuardDecision::Render);
}

#[test]
fn decision_follows_session_presence() {
    use crate::testing::Harness;
    use crate::util::storage::KeyValueStore;

    let h = Harness::new();
    let client = h.client();
    assert!(matches!(route_guard(&client), GuardDecision::Redirect { .. }));

    h.storage.set_item("user", r#"{"username":"testuser","email":"test@example.com"}"#);
    assert_eq!(route_guard(&client), GuardDecision::Render);
}

#[test]
fn corrupt_record_redirects_like_dashboard() {
    use crate::testing::Harness;
    use crate::util::storage::KeyValueStore;

    let h = Harness::new();
    h.storage.set_item("user", "{broken");
    let client = h.client();

    assert!(matches!(route_guard(&client), GuardDecision::Redirect { .. }));
    assert_eq!(client.current_user(), None);
}

#[test]
fn redirect_replaces_history_entry() {
    let GuardDecision::Redirect { to, replace } = route_guard(&crate::testing::Harness::new().client()) else {
        panic!("expected redirect when logged out");
    };
    assert_eq!(to, LOGIN_ROUTE);
    assert!(redirect_options(replace).replace);
    assert!(!redirect_options(false).replace);
}

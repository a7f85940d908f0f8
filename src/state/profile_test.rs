use super::*;

fn profile(name: &str) -> UserProfile {
    UserProfile {
        id: Some(1),
        username: name.to_owned(),
        email: format!("{name}@example.com"),
        role: Some("user".to_owned()),
        is_active: Some(true),
        date_joined: None,
    }
}

#[test]
fn profile_state_default_idle() {
    let state = ProfileState::default();
    assert!(state.profile.is_none());
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn begin_sets_loading_and_clears_error() {
    let mut state = ProfileState { error: Some("old".to_owned()), ..ProfileState::default() };
    state.begin();
    assert!(state.loading);
    assert!(state.error.is_none());
}

#[test]
fn finish_ok_stores_profile() {
    let mut state = ProfileState::default();
    state.begin();
    state.finish(Ok(profile("alice")));
    assert!(!state.loading);
    assert_eq!(state.profile.as_ref().map(|p| p.username.as_str()), Some("alice"));
}

#[test]
fn finish_err_keeps_previous_profile() {
    let mut state = ProfileState { profile: Some(profile("alice")), ..ProfileState::default() };
    state.begin();
    state.finish(Err(ApiError::fallback("Failed to fetch user profile")));
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("Failed to fetch user profile"));
    assert!(state.profile.is_some());
}

#[test]
fn effective_falls_back_to_session_record() {
    let state = ProfileState::default();
    let session = SessionUser { username: "bob".to_owned(), email: "bob@example.com".to_owned() };
    let p = state.effective(Some(&session)).unwrap();
    assert_eq!(p.username, "bob");
    assert_eq!(p.email, "bob@example.com");
    assert_eq!(state.effective(None), None);
}

#[test]
fn effective_prefers_fetched_profile() {
    let state = ProfileState { profile: Some(profile("alice")), ..ProfileState::default() };
    let session = SessionUser { username: "bob".to_owned(), email: "bob@example.com".to_owned() };
    assert_eq!(state.effective(Some(&session)).map(|p| p.username), Some("alice".to_owned()));
}

use super::*;
use crate::testing::{FakeCookies, FakeTransport};
use futures::executor::block_on;

fn client(transport: &FakeTransport, cookies: &FakeCookies) -> HttpClient<FakeTransport, FakeCookies> {
    HttpClient::new(transport.clone(), cookies.clone(), "csrftoken", "X-CSRFToken")
}

// =============================================================
// find_cookie / parse_body
// =============================================================

#[test]
fn find_cookie_matches_exact_name() {
    let header = "sessionid=abc; csrftoken=tok123; theme=dark";
    assert_eq!(find_cookie(header, "csrftoken").as_deref(), Some("tok123"));
    assert_eq!(find_cookie(header, "csrf"), None);
    assert_eq!(find_cookie("", "csrftoken"), None);
}

#[test]
fn find_cookie_skips_empty_value() {
    assert_eq!(find_cookie("csrftoken=; other=1", "csrftoken"), None);
}

#[test]
fn parse_body_handles_empty_json_and_text() {
    assert_eq!(parse_body("  "), None);
    assert_eq!(parse_body(r#"{"ok":true}"#), Some(serde_json::json!({ "ok": true })));
    assert_eq!(parse_body("<h1>Server Error</h1>"), Some(Value::String("<h1>Server Error</h1>".to_owned())));
}

#[test]
fn method_mutating_classification() {
    assert!(!Method::Get.is_mutating());
    for m in [Method::Post, Method::Put, Method::Patch, Method::Delete] {
        assert!(m.is_mutating(), "{} should be mutating", m.as_str());
    }
}

// =============================================================
// HttpClient
// =============================================================

#[test]
fn post_echoes_csrf_cookie_in_header() {
    let transport = FakeTransport::default();
    let cookies = FakeCookies::default();
    cookies.set("csrftoken", "tok123");
    transport.reply(200, serde_json::json!({}));

    block_on(client(&transport, &cookies).execute(Method::Post, "http://api/x/", None)).unwrap();

    let sent = transport.requests();
    assert_eq!(sent[0].header("x-csrftoken"), Some("tok123"));
    assert!(sent[0].with_credentials);
}

#[test]
fn post_without_cookie_sends_no_csrf_header() {
    let transport = FakeTransport::default();
    let cookies = FakeCookies::default();
    transport.reply(200, serde_json::json!({}));

    block_on(client(&transport, &cookies).execute(Method::Post, "http://api/x/", None)).unwrap();

    assert!(transport.requests()[0].headers.is_empty());
}

#[test]
fn get_never_carries_csrf_header() {
    let transport = FakeTransport::default();
    let cookies = FakeCookies::default();
    cookies.set("csrftoken", "tok123");
    transport.reply(200, serde_json::json!({}));

    block_on(client(&transport, &cookies).execute(Method::Get, "http://api/x/", None)).unwrap();

    let sent = transport.requests();
    assert_eq!(sent[0].header("X-CSRFToken"), None);
    assert!(sent[0].with_credentials);
}

#[test]
fn non_success_status_becomes_status_error() {
    let transport = FakeTransport::default();
    let cookies = FakeCookies::default();
    transport.reply(403, serde_json::json!({ "detail": "CSRF Failed" }));

    let err = block_on(client(&transport, &cookies).execute(Method::Post, "http://api/x/", None)).unwrap_err();
    assert_eq!(err, HttpError::Status { status: 403, body: Some(serde_json::json!({ "detail": "CSRF Failed" })) });
}

#[test]
fn transport_failure_is_passed_through() {
    let transport = FakeTransport::default();
    let cookies = FakeCookies::default();
    transport.fail(TransportError::Network("offline".to_owned()));

    let err = block_on(client(&transport, &cookies).execute(Method::Get, "http://api/x/", None)).unwrap_err();
    assert_eq!(err, HttpError::Transport(TransportError::Network("offline".to_owned())));
}

#[test]
fn get_json_reports_decode_errors() {
    let transport = FakeTransport::default();
    let cookies = FakeCookies::default();
    transport.reply(200, serde_json::json!("not a number"));

    let err = block_on(client(&transport, &cookies).get_json::<u32>("http://api/x/")).unwrap_err();
    assert!(matches!(err, HttpError::Decode(_)));
}

#[test]
fn post_sends_serialized_body() {
    let transport = FakeTransport::default();
    let cookies = FakeCookies::default();
    transport.reply(201, serde_json::json!({ "id": 7 }));

    let out = block_on(client(&transport, &cookies).post("http://api/x/", &serde_json::json!({ "a": 1 }))).unwrap();

    assert_eq!(out.status, 201);
    assert_eq!(out.body, Some(serde_json::json!({ "id": 7 })));
    let sent = transport.requests();
    assert_eq!(sent[0].method, Method::Post);
    assert_eq!(sent[0].body, Some(serde_json::json!({ "a": 1 })));
}

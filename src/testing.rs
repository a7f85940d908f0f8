//! Scripted collaborators for driving client flows without a browser.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use serde_json::Value;

use crate::config::ApiConfig;
use crate::net::api::SessionClient;
use crate::net::http::{ApiRequest, ApiResponse, CookieSource, Transport, TransportError};
use crate::util::storage::MemoryStorage;

#[derive(Default)]
struct FakeInner {
    replies: VecDeque<Result<ApiResponse, TransportError>>,
    requests: Vec<ApiRequest>,
}

/// Transport that answers from a queue and records what was sent.
#[derive(Clone, Default)]
pub(crate) struct FakeTransport {
    inner: Rc<RefCell<FakeInner>>,
}

impl FakeTransport {
    pub(crate) fn reply(&self, status: u16, body: Value) -> &Self {
        self.inner.borrow_mut().replies.push_back(Ok(ApiResponse { status, body: Some(body) }));
        self
    }

    pub(crate) fn reply_empty(&self, status: u16) -> &Self {
        self.inner.borrow_mut().replies.push_back(Ok(ApiResponse { status, body: None }));
        self
    }

    pub(crate) fn fail(&self, err: TransportError) -> &Self {
        self.inner.borrow_mut().replies.push_back(Err(err));
        self
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.inner.borrow().requests.clone()
    }

    pub(crate) fn urls(&self) -> Vec<String> {
        self.inner.borrow().requests.iter().map(|r| r.url.clone()).collect()
    }
}

impl Transport for FakeTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let mut inner = self.inner.borrow_mut();
        inner.requests.push(request);
        inner
            .replies
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("no scripted reply".to_owned())))
    }
}

#[derive(Clone, Default)]
pub(crate) struct FakeCookies(Rc<RefCell<HashMap<String, String>>>);

impl FakeCookies {
    pub(crate) fn set(&self, name: &str, value: &str) {
        self.0.borrow_mut().insert(name.to_owned(), value.to_owned());
    }
}

impl CookieSource for FakeCookies {
    fn cookie(&self, name: &str) -> Option<String> {
        self.0.borrow().get(name).cloned()
    }
}

pub(crate) type TestClient = SessionClient<FakeTransport, FakeCookies, MemoryStorage>;

/// Handles kept by a test after the client takes ownership of clones.
pub(crate) struct Harness {
    pub(crate) transport: FakeTransport,
    pub(crate) cookies: FakeCookies,
    pub(crate) storage: MemoryStorage,
}

impl Harness {
    pub(crate) fn new() -> Self {
        Self { transport: FakeTransport::default(), cookies: FakeCookies::default(), storage: MemoryStorage::default() }
    }

    pub(crate) fn client(&self) -> TestClient {
        self.client_with(ApiConfig::default())
    }

    pub(crate) fn client_with(&self, config: ApiConfig) -> TestClient {
        SessionClient::new(config, self.transport.clone(), self.cookies.clone(), self.storage.clone())
    }
}

//! Credentialed HTTP wrapper with CSRF header injection.
//!
//! SYSTEM CONTEXT
//! ==============
//! Django only accepts state-changing requests that echo the `csrftoken`
//! cookie back in a header. [`HttpClient`] reads the cookie at send time for
//! every mutating method and leaves safe methods untouched. The actual wire
//! work is behind [`Transport`] so flows can run against a scripted backend.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    /// Methods that change server state and therefore need the CSRF header.
    pub fn is_mutating(self) -> bool {
        !matches!(self, Self::Get)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
    /// Send cookies with the request, including cross-origin.
    pub with_credentials: bool,
}

impl ApiRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    /// Decoded body; `None` when the response was empty.
    pub body: Option<Value>,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),
    #[error("invalid request: {0}")]
    Request(String),
    #[error("http transport not available outside the browser")]
    Unavailable,
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum HttpError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("request failed with status {status}")]
    Status { status: u16, body: Option<Value> },
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("request body not serializable: {0}")]
    Encode(String),
}

/// Sends one request and returns the decoded response, whatever its status.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}

/// Read access to the cookies the backend has set for this origin.
pub trait CookieSource {
    fn cookie(&self, name: &str) -> Option<String>;
}

/// Find `name` in a `document.cookie` style string (`a=1; b=2`).
pub fn find_cookie(header: &str, name: &str) -> Option<String> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_owned())
        .filter(|value| !value.is_empty())
}

/// Decode a raw response body. Non-JSON text is kept as a JSON string so
/// error normalization can tell it apart from an object.
pub(crate) fn parse_body(text: &str) -> Option<Value> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(serde_json::from_str(trimmed).unwrap_or_else(|_| Value::String(text.to_owned())))
}

#[derive(Clone)]
pub struct HttpClient<T, C> {
    transport: T,
    cookies: C,
    csrf_cookie: String,
    csrf_header: String,
}

impl<T: Transport, C: CookieSource> HttpClient<T, C> {
    pub fn new(transport: T, cookies: C, csrf_cookie: &str, csrf_header: &str) -> Self {
        Self { transport, cookies, csrf_cookie: csrf_cookie.to_owned(), csrf_header: csrf_header.to_owned() }
    }

    /// Send a request; non-2xx statuses come back as [`HttpError::Status`].
    ///
    /// # Errors
    ///
    /// Returns an error if the transport fails or the status is not 2xx.
    pub async fn execute(&self, method: Method, url: &str, body: Option<Value>) -> Result<ApiResponse, HttpError> {
        let mut headers = Vec::new();
        if method.is_mutating() {
            if let Some(token) = self.cookies.cookie(&self.csrf_cookie) {
                headers.push((self.csrf_header.clone(), token));
            }
        }
        let request = ApiRequest { method, url: url.to_owned(), headers, body, with_credentials: true };
        let response = self.transport.send(request).await?;
        if !response.is_success() {
            return Err(HttpError::Status { status: response.status, body: response.body });
        }
        Ok(response)
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode as `R`.
    pub async fn get_json<R: DeserializeOwned>(&self, url: &str) -> Result<R, HttpError> {
        let response = self.execute(Method::Get, url, None).await?;
        decode(response)
    }

    /// # Errors
    ///
    /// Returns an error if the payload cannot be encoded or the request fails.
    pub async fn post<B: Serialize>(&self, url: &str, payload: &B) -> Result<ApiResponse, HttpError> {
        let body = serde_json::to_value(payload).map_err(|e| HttpError::Encode(e.to_string()))?;
        self.execute(Method::Post, url, Some(body)).await
    }
}

fn decode<R: DeserializeOwned>(response: ApiResponse) -> Result<R, HttpError> {
    serde_json::from_value(response.body.unwrap_or(Value::Null)).map_err(|e| HttpError::Decode(e.to_string()))
}

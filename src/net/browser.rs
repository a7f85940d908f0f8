//! Browser-backed transport and cookie access.
//!
//! Client-side (`csr`): real fetch calls via `gloo-net` and `document.cookie`.
//! Native builds: stubs, since these handles only mean something in a page.
//! Both types are zero-sized; window lookups happen per call.

use super::http::{ApiRequest, ApiResponse, CookieSource, Transport, TransportError};

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        #[cfg(feature = "csr")]
        {
            use super::http::Method;
            use gloo_net::http::Request;

            let mut builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
                Method::Put => Request::put(&request.url),
                Method::Patch => Request::patch(&request.url),
                Method::Delete => Request::delete(&request.url),
            };
            if request.with_credentials {
                builder = builder.credentials(web_sys::RequestCredentials::Include);
            }
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            let outgoing = match &request.body {
                Some(body) => builder.json(body),
                None => builder.build(),
            }
            .map_err(|e| TransportError::Request(e.to_string()))?;

            let resp = outgoing.send().await.map_err(|e| TransportError::Network(e.to_string()))?;
            let status = resp.status();
            let text = resp.text().await.map_err(|e| TransportError::Network(e.to_string()))?;
            Ok(ApiResponse { status, body: super::http::parse_body(&text) })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(TransportError::Unavailable)
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserCookies;

impl CookieSource for BrowserCookies {
    fn cookie(&self, name: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            use wasm_bindgen::JsCast;

            let document = web_sys::window()?.document()?;
            let html = document.dyn_into::<web_sys::HtmlDocument>().ok()?;
            let header = html.cookie().ok()?;
            super::http::find_cookie(&header, name)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = name;
            None
        }
    }
}

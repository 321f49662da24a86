//! HTTP plumbing behind the portal's backend calls.
//!
//! `Transport` is the seam between the approval flow and the network:
//! `HttpTransport` talks to the real server through reqwest, tests inject
//! canned responses.

use std::future::Future;
use std::time::Duration;

use reqwest::{header, Client};
use tracing::debug;

use super::ApiError;

/// Status code and raw body of a backend reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub trait Transport {
    /// POST a form-encoded body to `path` (relative to the server root).
    /// Non-2xx replies are returned as responses, not errors.
    fn post_form(
        &self,
        path: &str,
        form: &[(&str, &str)],
    ) -> impl Future<Output = Result<TransportResponse, ApiError>> + Send;
}

/// reqwest-backed transport.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
    session_cookie: Option<String>,
}

impl HttpTransport {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            session_cookie: None,
        })
    }

    /// Send `cookie` as the `Cookie` header on every request, standing in
    /// for the browser's logged-in admin session.
    pub fn with_session_cookie(mut self, cookie: Option<String>) -> Self {
        self.session_cookie = cookie;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Transport for HttpTransport {
    fn post_form(
        &self,
        path: &str,
        form: &[(&str, &str)],
    ) -> impl Future<Output = Result<TransportResponse, ApiError>> + Send {
        let mut request = self
            .client
            .post(self.url(path))
            .header(header::ACCEPT, "application/json")
            .form(form);
        if let Some(ref cookie) = self.session_cookie {
            request = request.header(header::COOKIE, cookie.as_str());
        }
        let path = path.to_string();

        async move {
            let response = request.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            debug!(path = %path, status, "Form POST completed");
            Ok(TransportResponse { status, body })
        }
    }
}

//! HTTP transport abstraction.
//!
//! Client-side (hydrate): real fetches via `gloo-net` with a hard timeout.
//! Server-side (SSR): a stub transport that reports "unavailable", since
//! API calls are only meaningful in the browser.
//!
//! The trait exists so the request wrapper and everything above it can be
//! exercised natively with a scripted mock transport.

#[cfg(feature = "hydrate")]
use crate::net::api::REQUEST_TIMEOUT_MS;

/// HTTP method subset used by the backend API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// A fully-built outgoing request.
#[derive(Clone, Debug)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Case-insensitive header lookup.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// A raw response: status line plus the unparsed body text.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport-level failure: no HTTP response was produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("request timed out")]
    Timeout,
    #[error("{0}")]
    Network(String),
}

/// Executes a single HTTP exchange. Implementations own the timeout.
pub trait HttpTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Transport used by the app at runtime for the current build target.
#[cfg(feature = "hydrate")]
pub type ClientTransport = BrowserTransport;
#[cfg(not(feature = "hydrate"))]
pub type ClientTransport = NullTransport;

#[must_use]
pub fn client_transport() -> ClientTransport {
    ClientTransport::default()
}

/// Browser transport backed by `gloo-net`, racing each request against the
/// fixed timeout.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[cfg(feature = "hydrate")]
impl HttpTransport for BrowserTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        use futures::future::Either;

        let send = send_browser_request(request);
        let timeout = gloo_timers::future::TimeoutFuture::new(REQUEST_TIMEOUT_MS);
        futures::pin_mut!(send);
        futures::pin_mut!(timeout);

        match futures::future::select(send, timeout).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => Err(TransportError::Timeout),
        }
    }
}

#[cfg(feature = "hydrate")]
async fn send_browser_request(request: HttpRequest) -> Result<HttpResponse, TransportError> {
    let mut builder = match request.method {
        Method::Get => gloo_net::http::Request::get(&request.url),
        Method::Post => gloo_net::http::Request::post(&request.url),
        Method::Put => gloo_net::http::Request::put(&request.url),
        Method::Delete => gloo_net::http::Request::delete(&request.url),
    };
    for (name, value) in &request.headers {
        builder = builder.header(name, value);
    }

    let built = match request.body {
        Some(body) => builder.body(body),
        None => builder.build(),
    }
    .map_err(|e| TransportError::Network(e.to_string()))?;

    let response = built
        .send()
        .await
        .map_err(|e| TransportError::Network(e.to_string()))?;

    let status = response.status();
    let status_text = response.status_text();
    let body = response.text().await.unwrap_or_default();
    Ok(HttpResponse { status, status_text, body })
}

/// SSR stand-in; the server never issues API calls on behalf of the page.
#[cfg(not(feature = "hydrate"))]
#[derive(Clone, Copy, Debug, Default)]
pub struct NullTransport;

#[cfg(not(feature = "hydrate"))]
impl HttpTransport for NullTransport {
    async fn execute(&self, _request: HttpRequest) -> Result<HttpResponse, TransportError> {
        Err(TransportError::Network("HTTP not available during server rendering".to_owned()))
    }
}

/// Scripted transport for unit tests.
#[cfg(test)]
pub(crate) mod mock {
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    use super::{HttpRequest, HttpResponse, HttpTransport, TransportError};

    type Scripted = (String, Result<HttpResponse, TransportError>);

    #[derive(Default)]
    struct Inner {
        script: RefCell<VecDeque<Scripted>>,
        log: RefCell<Vec<HttpRequest>>,
    }

    /// Responds from a FIFO script, asserting each request hits the expected
    /// endpoint. Clones share the same script and request log.
    #[derive(Clone, Default)]
    pub struct MockTransport(Rc<Inner>);

    impl MockTransport {
        pub fn new() -> Self {
            Self::default()
        }

        /// Queue the next response; `path_fragment` must appear in the
        /// request URL or the test fails.
        pub fn expect(&self, path_fragment: &str, result: Result<HttpResponse, TransportError>) {
            self.0
                .script
                .borrow_mut()
                .push_back((path_fragment.to_owned(), result));
        }

        pub fn response(status: u16, body: &str) -> Result<HttpResponse, TransportError> {
            Ok(HttpResponse {
                status,
                status_text: match status {
                    200 => "OK".to_owned(),
                    401 => "Unauthorized".to_owned(),
                    500 => "Internal Server Error".to_owned(),
                    _ => String::new(),
                },
                body: body.to_owned(),
            })
        }

        pub fn requests(&self) -> Vec<HttpRequest> {
            self.0.log.borrow().clone()
        }

        pub fn request_count(&self) -> usize {
            self.0.log.borrow().len()
        }

        /// How many logged requests hit an endpoint containing `fragment`.
        pub fn count_to(&self, fragment: &str) -> usize {
            self.0
                .log
                .borrow()
                .iter()
                .filter(|r| r.url.contains(fragment))
                .count()
        }
    }

    impl HttpTransport for MockTransport {
        async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
            self.0.log.borrow_mut().push(request.clone());
            let (fragment, result) = self
                .0
                .script
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| panic!("unexpected request to {}", request.url));
            assert!(
                request.url.contains(&fragment),
                "expected request to {fragment}, got {}",
                request.url
            );
            result
        }
    }
}

//! Blocking HTTPS GET transport.
//!
//! The fetch is the one suspension point of the main loop; it blocks until
//! the response arrives or [`REQUEST_TIMEOUT`] passes.

use std::time::Duration;

use anyhow::Result;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, CACHE_CONTROL, HeaderMap, HeaderValue};
use today_common::FetchError;
use tracing::{debug, info, warn};

/// Upper bound on one request, connect included.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = "Today 0.1";

/// A completed exchange, whatever its status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status_code: u16,
    pub body: String,
}

impl HttpResponse {
    /// The body of a `200` response with content; anything else is a network failure.
    pub fn into_body(self) -> Result<String, FetchError> {
        if self.status_code != 200 {
            warn!(status = self.status_code, "HTTP error");
            return Err(FetchError::Network);
        }
        if self.body.is_empty() {
            warn!("Empty response body");
            return Err(FetchError::Network);
        }
        Ok(self.body)
    }
}

pub trait HttpTransport {
    /// `GET https://{host}{path}?{query}`.
    fn get(
        &self,
        host: &str,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<HttpResponse, FetchError>;
}

/// [`HttpTransport`] over a shared reqwest client.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self { client })
    }
}

impl HttpTransport for ReqwestTransport {
    fn get(
        &self,
        host: &str,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<HttpResponse, FetchError> {
        let url = format!("https://{host}{path}");
        info!(host, path, "HTTP GET");

        let response = self.client.get(&url).query(query).send().map_err(|err| {
            warn!(%err, host, "Request failed");
            FetchError::Network
        })?;

        let status_code = response.status().as_u16();
        let body = response.text().map_err(|err| {
            warn!(%err, host, "Failed to read response body");
            FetchError::Network
        })?;
        debug!(status_code, bytes = body.len(), "HTTP response");

        Ok(HttpResponse { status_code, body })
    }
}

#[cfg(test)]
pub mod fake {
    use std::cell::RefCell;

    use super::*;

    /// Transport that replays one canned response and records requests.
    pub struct FakeTransport {
        pub response: Result<HttpResponse, FetchError>,
        pub requests: RefCell<Vec<String>>,
    }

    impl FakeTransport {
        pub fn ok(body: &str) -> Self { Self::with_status(200, body) }

        pub fn with_status(
            status_code: u16,
            body: &str,
        ) -> Self {
            Self {
                response: Ok(HttpResponse {
                    status_code,
                    body: body.to_owned(),
                }),
                requests: RefCell::new(Vec::new()),
            }
        }

        pub fn failing() -> Self {
            Self {
                response: Err(FetchError::Network),
                requests: RefCell::new(Vec::new()),
            }
        }
    }

    impl HttpTransport for FakeTransport {
        fn get(
            &self,
            host: &str,
            path: &str,
            query: &[(&str, &str)],
        ) -> Result<HttpResponse, FetchError> {
            let query: Vec<String> = query.iter().map(|(k, v)| format!("{k}={v}")).collect();
            self.requests.borrow_mut().push(format!("{host}{path}?{}", query.join("&")));
            self.response.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_response_yields_body() {
        let response = HttpResponse {
            status_code: 200,
            body: "{}".into(),
        };
        assert_eq!(response.into_body(), Ok("{}".to_owned()));
    }

    #[test]
    fn test_non_200_is_network_failure() {
        let response = HttpResponse {
            status_code: 429,
            body: "slow down".into(),
        };
        assert_eq!(response.into_body(), Err(FetchError::Network));
    }

    #[test]
    fn test_empty_body_is_network_failure() {
        let response = HttpResponse {
            status_code: 200,
            body: String::new(),
        };
        assert_eq!(response.into_body(), Err(FetchError::Network));
    }
}

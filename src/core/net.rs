// src/core/net.rs
// HTML page fetching. The pipeline only ever sees an `HtmlSource`, so tests
// (and anything offline) can hand it a closure instead of a live client.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::consts::{REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::error::FetchError;

/// One GET, one complete HTML document, or a `FetchError`.
pub trait HtmlSource {
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

impl<F> HtmlSource for F
where
    F: Fn(&str) -> Result<String, FetchError>,
{
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self(url)
    }
}

/// Blocking HTTPS client with the site-friendly user agent and a timeout.
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;
        Ok(Self { client })
    }
}

impl HtmlSource for HttpSource {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let t = std::time::Instant::now();
        logd!("GET {url}");

        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            loge!("GET {url} answered {status}");
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = resp.text().map_err(|e| FetchError::Network(e.to_string()))?;
        logd!("GET {url}: {} bytes in {:?}", body.len(), t.elapsed());
        Ok(body)
    }
}

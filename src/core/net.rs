// src/core/net.rs
// Blocking HTTP GET. One request at a time; the caller owns the pacing.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::{Result, ScrapeError};

/// Anything that can turn a URL into a response body.
/// `HttpTransport` talks to the network; tests plug in canned pages.
pub trait Transport {
    fn get(&self, url: &str) -> Result<String>;
}

pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| ScrapeError::fetch("<client>", e))?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<String> {
        let resp = self.client
            .get(url)
            .send()
            .map_err(|e| ScrapeError::fetch(url, e))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ScrapeError::fetch(url, format!("HTTP {status}")));
        }
        resp.text().map_err(|e| ScrapeError::fetch(url, e))
    }
}

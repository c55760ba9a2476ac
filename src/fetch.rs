//!
//! src/fetch.rs  Andrew Belles  Oct 19th, 2026
//!
//! Defines the fetch capability shared by tracklists and tracks, and the
//! reqwest backed implementation that hits 1001tracklists
//!

use async_trait::async_trait;
use rand::{SeedableRng, rngs::SmallRng};
use reqwest::{Client, header, redirect};
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::config::HttpConfig;
use crate::headers;
use crate::ScraperError;

/// Anything able to GET a page body or a json document.
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn get_text(&self, url: &Url) -> Result<String, ScraperError>;

    async fn get_json(&self, url: &Url) -> Result<Value, ScraperError>;
}

/// Client building functionality
fn client_helper(http: &HttpConfig) -> reqwest::ClientBuilder {
    Client::builder()
        .timeout(http.timeout)
        .connect_timeout(http.connect_timeout)
        .pool_max_idle_per_host(http.pool_max_idle_per_host)
        .pool_idle_timeout(Some(http.pool_idle_timeout))
        .redirect(redirect::Policy::limited(http.max_redirects as usize))
}

#[derive(Clone, Debug)]
pub struct HttpFetcher {
    pub http: Client
}

impl HttpFetcher {
    pub fn new(http_config: &HttpConfig) -> Result<Self, ScraperError> {
        let http = client_helper(http_config)
            .build()
            .map_err(|e| ScraperError::Http(format!("build client: {e}")))?;
        Ok( Self { http } )
    }

    fn check_status(url: &Url, resp: reqwest::Response) -> Result<reqwest::Response, ScraperError> {
        let status = resp.status();
        if status.is_success() {
            Ok(resp)
        } else {
            Err(ScraperError::Http(format!("GET {url}: status {status}")))
        }
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    /// GET {url} with a freshly drawn browser header set
    async fn get_text(&self, url: &Url) -> Result<String, ScraperError> {
        let headers = {
            let mut rng = SmallRng::from_entropy();
            headers::generate(&mut rng)
        };
        debug!(url = %url, "fetch.page");

        let resp = self.http.get(url.clone())
            .headers(headers)
            .send()
            .await?;
        let body = Self::check_status(url, resp)?.text().await?;
        Ok(body)
    }

    /// GET {url} expecting a json body
    async fn get_json(&self, url: &Url) -> Result<Value, ScraperError> {
        debug!(url = %url, "fetch.json");

        let resp = self.http.get(url.clone())
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;
        let body = Self::check_status(url, resp)?.text().await?;
        Ok( serde_json::from_str(&body)? )
    }
}

/// Canned responses keyed by url, for offline tests
#[cfg(test)]
pub mod mock {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use super::*;

    #[derive(Clone, Default)]
    pub struct MockFetcher {
        pages: HashMap<String, String>,
        json: HashMap<String, Value>,
        pub calls: Arc<Mutex<Vec<String>>>
    }

    impl MockFetcher {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn page(mut self, url: &str, html: &str) -> Self {
            self.pages.insert(url.to_string(), html.to_string());
            self
        }

        pub fn json(mut self, url: &str, body: Value) -> Self {
            self.json.insert(url.to_string(), body);
            self
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, url: &Url) {
            self.calls.lock().unwrap().push(url.to_string());
        }
    }

    #[async_trait]
    impl Fetch for MockFetcher {
        async fn get_text(&self, url: &Url) -> Result<String, ScraperError> {
            self.record(url);
            self.pages.get(url.as_str())
                .cloned()
                .ok_or_else(|| ScraperError::Http(format!("GET {url}: status 404 Not Found")))
        }

        async fn get_json(&self, url: &Url) -> Result<Value, ScraperError> {
            self.record(url);
            self.json.get(url.as_str())
                .cloned()
                .ok_or_else(|| ScraperError::Http(format!("GET {url}: status 404 Not Found")))
        }
    }
}

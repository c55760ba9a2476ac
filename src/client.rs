//!
//! src/client.rs  Andrew Belles  Oct 19th, 2026
//!
//! Client bundling a fetch implementation with the site configuration.
//! Tracklists and tracks borrow it for every network round trip
//!

use std::sync::Arc;

use url::Url;

use crate::config::{HttpConfig, SiteConfig};
use crate::fetch::{Fetch, HttpFetcher};
use crate::resolver::{self, Resolution};
use crate::types::TrackId;
use crate::ScraperError;

#[derive(Clone)]
pub struct TracklistClient {
    pub fetcher: Arc<dyn Fetch>,
    pub cfg: SiteConfig
}

impl TracklistClient {
    pub fn new(fetcher: Arc<dyn Fetch>, cfg: SiteConfig) -> Self {
        Self { fetcher, cfg }
    }

    /// reqwest backed client for the real site
    pub fn http(http_config: &HttpConfig, cfg: &SiteConfig) -> Result<Self, ScraperError> {
        let fetcher = HttpFetcher::new(http_config)?;
        Ok( Self::new(Arc::new(fetcher), cfg.clone()) )
    }

    /// Absolute url for a site-relative href
    pub fn absolute(&self, href: &str) -> Result<Url, ScraperError> {
        Ok( self.cfg.base_url.join(href)? )
    }

    /// GET a page body
    pub async fn page(&self, url: &str) -> Result<String, ScraperError> {
        let url = self.absolute(url)?;
        self.fetcher.get_text(&url).await
    }

    /// GET get_medialink.php for `track_id` and interpret the response
    pub async fn resolve_external_ids(&self, track_id: &TrackId) ->
        Result<Resolution, ScraperError> {
        let url = resolver::medialink_url(&self.cfg, track_id)?;
        let body = self.fetcher.get_json(&url).await?;
        resolver::interpret(track_id, &body)
    }
}

impl std::fmt::Debug for TracklistClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TracklistClient")
            .field("cfg", &self.cfg)
            .finish_non_exhaustive()
    }
}

//!
//! src/track.rs  Andrew Belles  Oct 19th, 2026
//!
//! A single track on 1001tracklists: internal id, title and the ids the
//! track has on streaming services
//!

use std::fmt;

use scraper::Html;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::client::TracklistClient;
use crate::extract;
use crate::resolver::Resolution;
use crate::sources::Source;
use crate::types::{ExternalIds, TrackId};
use crate::ScraperError;

/// Wildcard accepted by `Track::get_external`
pub const ALL_SERVICES: &str = "*";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Track {
    /// detail page url, empty for tracks taken from a tracklist
    pub url: String,
    pub track_id: TrackId,
    pub title: String,
    pub external_ids: ExternalIds,
    #[serde(skip)]
    page: Option<String>
}

impl Track {
    pub fn new(url: impl Into<String>, track_id: TrackId, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            track_id,
            title: title.into(),
            external_ids: ExternalIds::new(),
            page: None
        }
    }

    /// Track known only by its detail page; everything else is filled by `fetch`
    pub fn from_url(url: impl Into<String>) -> Self {
        Self::new(url, TrackId::unresolved(), "")
    }

    /// Use an already downloaded detail page instead of fetching `url`
    pub fn with_page(mut self, html: impl Into<String>) -> Self {
        self.page = Some(html.into());
        self
    }

    /// Fetch title, track id and external ids from the detail page.
    pub async fn fetch(&mut self, client: &TracklistClient) -> Result<(), ScraperError> {
        if self.page.is_none() {
            self.page = Some(client.page(&self.url).await?);
        }
        let body = self.page.as_deref().unwrap_or_default();

        let (title, track_id) = {
            let document = Html::parse_document(body);
            (extract::detail_title(&document)?, extract::detail_track_id(&document)?)
        };
        self.title = title;

        match track_id {
            Ok(id) => self.track_id = id,
            Err(fault) => warn!(
                url = %self.url, kept = %self.track_id, fault = %fault, "track.id_missing"
            )
        }

        self.fetch_external_ids(client).await?;
        info!(track = %self.track_id, title = %self.title, "track.fetch.done");
        Ok(())
    }

    /// Query the medialink endpoint for the current track id and apply the result
    pub async fn fetch_external_ids(&mut self, client: &TracklistClient) ->
        Result<Resolution, ScraperError> {
        let resolution = client.resolve_external_ids(&self.track_id).await?;
        self.apply(&resolution);
        Ok(resolution)
    }

    /// Replace external ids on success, keep them untouched on rejection
    pub fn apply(&mut self, resolution: &Resolution) {
        match resolution {
            Resolution::Resolved(ids) => {
                debug!(track = %self.track_id, services = ids.len(), "track.external_ids");
                self.external_ids = ids.clone();
            }
            Resolution::Rejected(_) => {
                warn!(track = %self.track_id, "track.external_ids.unchanged");
            }
        }
    }

    /// External ids of the named services; a lone "*" returns all of them.
    /// Unknown names and services without an id are logged and left out.
    pub fn get_external(&self, services: &[&str]) -> ExternalIds {
        if services.first() == Some(&ALL_SERVICES) {
            return self.external_ids.clone();
        }

        let mut result = ExternalIds::new();
        for name in services {
            let source = match name.parse::<Source>() {
                Ok(s) => s,
                Err(e) => {
                    warn!(track = %self.track_id, error = %e, "track.get_external.unknown");
                    continue;
                }
            };
            match self.external_ids.get(&source) {
                Some(id) => {
                    result.insert(source, id.clone());
                }
                None => warn!(track = %self.track_id, service = %source, "track.get_external.missing")
            }
        }
        result
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let services: Vec<&str> = self.external_ids.keys().map(|s| s.name()).collect();
        writeln!(f, "<URL> {}...", self.url)?;
        writeln!(f, "<Title> {}", self.title)?;
        writeln!(f, "<ID> {}", self.track_id)?;
        writeln!(f, "<External> [{}]", services.join(", "))
    }
}

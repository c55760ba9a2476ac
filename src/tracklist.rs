//!
//! src/tracklist.rs  Andrew Belles  Oct 19th, 2026
//!
//! A tracklist page on 1001tracklists and the two stage pipeline that
//! fills it: extract every track row, then resolve each row's external
//! ids one at a time in page order
//!

use std::{fmt, path::Path};

use scraper::Html;
use serde::Serialize;
use tracing::{debug, info};

use crate::client::TracklistClient;
use crate::extract::{self, TrackRow};
use crate::track::Track;
use crate::ScraperError;

#[derive(Debug, Clone, Default, Serialize)]
pub struct Tracklist {
    pub url: String,
    pub title: String,
    pub tracks: Vec<Track>,
    #[serde(skip)]
    page: Option<String>
}

impl Tracklist {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into(), ..Self::default() }
    }

    /// Tracklist backed by an already downloaded page
    pub fn from_page(url: impl Into<String>, html: impl Into<String>) -> Self {
        Self { url: url.into(), page: Some(html.into()), ..Self::default() }
    }

    /// Tracklist read from a page saved on disk; `fetch` will not download it
    pub fn from_cache(path: impl AsRef<Path>) -> Result<Self, ScraperError> {
        let path = path.as_ref();
        let html = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), bytes = html.len(), "tracklist.cache.load");
        Ok( Self::from_page("", html) )
    }

    /// Fetch title and tracks, resolving external ids for every track.
    pub async fn fetch(&mut self, client: &TracklistClient) -> Result<(), ScraperError> {
        if self.page.is_none() {
            if self.url.is_empty() {
                return Err(ScraperError::Config(
                    "tracklist has neither a url nor a cached page".into()
                ));
            }
            self.page = Some(client.page(&self.url).await?);
        }
        let body = self.page.as_deref().unwrap_or_default();

        let (title, rows) = {
            let document = Html::parse_document(body);
            (extract::page_title(&document)?, extract::track_rows(&document)?)
        };
        self.title = title;
        info!(url = %self.url, title = %self.title, rows = rows.len(), "tracklist.fetch");

        self.tracks = Self::fetch_tracks(client, rows).await?;
        info!(url = %self.url, tracks = self.tracks.len(), "tracklist.fetch.done");
        Ok(())
    }

    /// Build a Track per row and resolve its external ids, strictly in order.
    async fn fetch_tracks(client: &TracklistClient, rows: Vec<TrackRow>) ->
        Result<Vec<Track>, ScraperError> {
        let mut result = Vec::with_capacity(rows.len());

        for row in rows {
            let url = match row.link.as_deref() {
                Some(href) if client.cfg.capture_track_urls => client.absolute(href)?.to_string(),
                _ => String::new()
            };

            let mut track = Track::new(url, row.track_id, row.title);
            track.fetch_external_ids(client).await?;
            result.push(track);
        }
        Ok(result)
    }

    /// Log every track and hand them back
    pub fn get_tracks(&self) -> &[Track] {
        for track in &self.tracks {
            info!(
                track = %track.track_id,
                title = %track.title,
                services = track.external_ids.len(),
                "tracklist.track"
            );
        }
        &self.tracks
    }
}

impl fmt::Display for Tracklist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<Tracklist> {}", self.url)?;
        writeln!(f, "<Title> {}", self.title)?;
        for track in &self.tracks {
            writeln!(f, "    <Track> {}", track.title)?;
        }
        Ok(())
    }
}

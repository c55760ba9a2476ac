//!
//! src/lib.rs  Andrew Belles  Oct 19th, 2026
//!
//! Scrapes 1001tracklists: tracklist pages into tracks, tracks into
//! their ids on streaming services
//!
//!

pub mod config;
pub mod errors;
pub mod logging;

pub mod client;
pub mod extract;
pub mod fetch;
pub mod headers;
pub mod resolver;
pub mod sources;
pub mod track;
pub mod tracklist;
pub mod types;

pub use crate::client::TracklistClient;
pub use crate::errors::ScraperError;
pub use crate::resolver::Resolution;
pub use crate::sources::Source;
pub use crate::track::Track;
pub use crate::tracklist::Tracklist;
pub use crate::types::{ExternalIds, TrackId};

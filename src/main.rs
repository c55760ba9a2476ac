//!
//! src/main.rs  Andrew Belles  Oct 19th, 2026
//!
//! Entry point: scrape the tracklist (or single track) named on the
//! command line, in TRACKLIST_URL, or saved in the local cache page
//!
//!

use tracklist_crawler::{
    config, logging, ScraperError, Track, Tracklist, TracklistClient
};

/// Detail pages live under /track/, everything else is treated as a tracklist
fn is_track_url(url: &str) -> bool {
    url.contains("/track/")
}

#[tokio::main]
async fn main() -> Result<(), ScraperError> {
    let cfgs = config::load_config()?;
    let _logger = logging::init_logging(&cfgs.logging)?;

    tracing::info!(
        service="tracklist-crawler",
        version=%env!("CARGO_PKG_VERSION"),
        "starting"
    );

    let client = TracklistClient::http(&cfgs.http, &cfgs.site)?;
    let target = std::env::args().nth(1)
        .or_else(|| std::env::var("TRACKLIST_URL").ok())
        .filter(|u| !u.trim().is_empty());

    match target {
        Some(url) if is_track_url(&url) => {
            let mut track = Track::from_url(url);
            track.fetch(&client).await?;
            println!("{track}");
            println!("{}", serde_json::to_string_pretty(&track)?);
        }
        Some(url) => {
            let mut tracklist = Tracklist::new(url);
            tracklist.fetch(&client).await?;
            println!("{tracklist}");
            println!("{}", serde_json::to_string_pretty(tracklist.get_tracks())?);
        }
        None => {
            tracing::info!(path = %cfgs.site.cache_page.display(), "using cached page");
            let mut tracklist = Tracklist::from_cache(&cfgs.site.cache_page)?;
            tracklist.fetch(&client).await?;
            println!("{tracklist}");
            println!("{}", serde_json::to_string_pretty(tracklist.get_tracks())?);
        }
    }

    tracing::info!("done");
    Ok(())
}

//!
//! src/config.rs  Andrew Belles  Oct 19th, 2026
//!
//! Loads site, http and logging configuration from the environment
//! (and an optional .env file) with sane defaults for every value
//!

use std::{path::PathBuf, time};
use url::Url;

use crate::ScraperError;

/// Constants for HTTP Config
pub const HTTP_TIMEOUT: u64 = 8000;
pub const HTTP_CONNECT_TIMEOUT: u64 = 2000;
pub const HTTP_POOL_MAX_IDLE: usize = 16;
pub const HTTP_POOL_IDLE_TIMEOUT: u64 = 90000;
pub const HTTP_MAX_REDIRECTS: u8 = 4;

/// Constants for the 1001tracklists site
pub const SITE_HOST: &str = "www.1001tracklists.com";
pub const SITE_BASE_URL: &str = "https://www.1001tracklists.com/";
pub const MEDIALINK_PATH: &str = "ajax/get_medialink.php";
pub const MEDIALINK_OBJECT: u32 = 5;
pub const MEDIALINK_VIEW_SOURCE: u32 = 1;
pub const CACHE_PAGE: &str = "test.html";

/// Ensures that url is https
fn ensure_https(url: &Url) -> Result<(), String> {
    if url.scheme() == "https" {
        Ok(())
    } else {
        Err(format!("URL must be https: {url}"))
    }
}

fn ensure_host(url: &Url, expected_host: &str) -> Result<(), String> {
    match url.host_str() {
        Some(h) if h.eq_ignore_ascii_case(expected_host) => Ok(()),
        Some(h) => Err(
            format!("Unexpected host for {url} (got {h}, expected {expected_host})")
        ),
        None => Err(format!("URL missing host: {url}"))
    }
}

fn env_flag(value: Option<String>) -> bool {
    matches!(
        value.as_deref().map(str::trim).map(str::to_ascii_lowercase).as_deref(),
        Some("1" | "true" | "yes" | "on")
    )
}

///
/// Configuration for the scraped site and its medialink endpoint
///
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub base_url: Url,               // https://www.1001tracklists.com/
    pub medialink_path: String,      // ajax/get_medialink.php
    pub medialink_object: u32,       // idObject, 5 == track
    pub medialink_view_source: u32,  // viewSource
    pub capture_track_urls: bool,    // keep /track/ links found in bulk mode
    pub cache_page: PathBuf          // page used when no url is given
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(SITE_BASE_URL).expect("static base url"),
            medialink_path: MEDIALINK_PATH.to_string(),
            medialink_object: MEDIALINK_OBJECT,
            medialink_view_source: MEDIALINK_VIEW_SOURCE,
            capture_track_urls: false,
            cache_page: PathBuf::from(CACHE_PAGE)
        }
    }
}

/// Builds the site config from any key lookup, so tests need not touch the
/// process environment.
pub fn build_site_from<F>(get: F) -> Result<SiteConfig, ScraperError>
where
    F: Fn(&str) -> Option<String>
{
    let env_to_uint = |s: &str, default: u32| -> u32 {
        match get(s) {
            Some(v) => v.trim().parse::<u32>().unwrap_or(default),
            None => default
        }
    };

    let base_url = get("TL_BASE_URL")
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| SITE_BASE_URL.to_string());

    let mut base_url = Url::parse(&base_url)
        .map_err(|e| ScraperError::Config(
            format!("TL_BASE_URL invalid {e}")
        ))?;

    // https and hostname check
    ensure_https(&base_url).map_err(ScraperError::Config)?;
    ensure_host(&base_url, SITE_HOST).map_err(ScraperError::Config)?;

    // ensure trailing slash
    if !base_url.path().ends_with('/') {
        let mut path = base_url.path().to_string();
        path.push('/');
        base_url.set_path(&path);
    }

    let medialink_path = get("TL_MEDIALINK_PATH")
        .map(|p| p.trim().trim_start_matches('/').to_string())
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| MEDIALINK_PATH.to_string());

    let medialink_object      = env_to_uint("TL_MEDIALINK_OBJECT", MEDIALINK_OBJECT);
    let medialink_view_source = env_to_uint("TL_MEDIALINK_VIEW_SOURCE", MEDIALINK_VIEW_SOURCE);
    let capture_track_urls    = env_flag(get("TL_CAPTURE_TRACK_URLS"));
    let cache_page = get("TL_CACHE_PAGE")
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CACHE_PAGE));

    Ok( SiteConfig {
        base_url,
        medialink_path,
        medialink_object,
        medialink_view_source,
        capture_track_urls,
        cache_page
    })
}

fn build_site() -> Result<SiteConfig, ScraperError> {
    build_site_from(|k| std::env::var(k).ok())
}

///
/// Configuration for Http timeouts, pooling, etc.
///
#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub timeout: time::Duration,
    pub connect_timeout: time::Duration,
    pub pool_max_idle_per_host: usize,
    pub pool_idle_timeout: time::Duration,
    pub max_redirects: u8
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: time::Duration::from_millis(HTTP_TIMEOUT),
            connect_timeout: time::Duration::from_millis(HTTP_CONNECT_TIMEOUT),
            pool_max_idle_per_host: HTTP_POOL_MAX_IDLE,
            pool_idle_timeout: time::Duration::from_millis(HTTP_POOL_IDLE_TIMEOUT),
            max_redirects: HTTP_MAX_REDIRECTS
        }
    }
}

///
/// Configuration for Logger
///

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json
}

impl LogFormat {
    fn from_env(value: Option<String>) -> Self {
        match value.as_deref().map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("pretty") => LogFormat::Pretty,
            _ => LogFormat::Json
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub filter_directives: String,
    pub format: LogFormat,
    pub with_ansi: bool,
    pub include_file_line: bool,
    pub include_target: bool
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter_directives: "info,tracklist_crawler=debug,reqwest=warn".to_string(),
            format: LogFormat::Json,
            with_ansi: true,
            include_file_line: true,
            include_target: true
        }
    }
}

///
/// AppConfig which holds everything the fetch and scrape modules need
///
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub site: SiteConfig,
    pub http: HttpConfig,
    pub logging: LoggingConfig
}

///
/// Return all environment-derived configuration to caller at program start.
///
pub fn load_config() -> Result<AppConfig, ScraperError> {
    dotenvy::dotenv().ok();

    let site    = build_site()?;
    let http    = HttpConfig::default();
    let logging = LoggingConfig {
        format: LogFormat::from_env(std::env::var("TL_LOG_FORMAT").ok()),
        ..LoggingConfig::default()
    };

    Ok( AppConfig { site, http, logging } )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_point_at_1001tracklists() {
        let site = build_site_from(lookup(&[])).unwrap();
        assert_eq!(site.base_url.as_str(), SITE_BASE_URL);
        assert_eq!(site.medialink_path, "ajax/get_medialink.php");
        assert_eq!(site.medialink_object, 5);
        assert_eq!(site.medialink_view_source, 1);
        assert!(!site.capture_track_urls);
        assert_eq!(site.cache_page, PathBuf::from("test.html"));
    }

    #[test]
    fn base_url_gets_trailing_slash() {
        let site = build_site_from(lookup(&[
            ("TL_BASE_URL", "https://www.1001tracklists.com/mirror")
        ])).unwrap();
        assert_eq!(site.base_url.path(), "/mirror/");
    }

    #[test]
    fn rejects_plain_http_and_foreign_hosts() {
        let plain = build_site_from(lookup(&[
            ("TL_BASE_URL", "http://www.1001tracklists.com/")
        ]));
        assert!(matches!(plain, Err(ScraperError::Config(_))));

        let foreign = build_site_from(lookup(&[
            ("TL_BASE_URL", "https://example.com/")
        ]));
        assert!(matches!(foreign, Err(ScraperError::Config(_))));
    }

    #[test]
    fn numeric_overrides_fall_back_on_garbage() {
        let site = build_site_from(lookup(&[
            ("TL_MEDIALINK_OBJECT", "7"),
            ("TL_MEDIALINK_VIEW_SOURCE", "abc"),
            ("TL_CAPTURE_TRACK_URLS", "True"),
            ("TL_MEDIALINK_PATH", "/ajax/other.php")
        ])).unwrap();
        assert_eq!(site.medialink_object, 7);
        assert_eq!(site.medialink_view_source, 1);
        assert!(site.capture_track_urls);
        assert_eq!(site.medialink_path, "ajax/other.php");
    }

    #[test]
    fn requests_are_bounded_by_default() {
        let http = HttpConfig::default();
        assert_eq!(http.timeout, time::Duration::from_secs(8));
        assert_eq!(http.connect_timeout, time::Duration::from_secs(2));
    }

    #[test]
    fn log_format_switches_on_pretty_only() {
        assert_eq!(LogFormat::from_env(Some("Pretty".into())), LogFormat::Pretty);
        assert_eq!(LogFormat::from_env(Some("json".into())), LogFormat::Json);
        assert_eq!(LogFormat::from_env(None), LogFormat::Json);
    }
}

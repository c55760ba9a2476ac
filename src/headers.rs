//!
//! src/headers.rs  Andrew Belles  Oct 19th, 2026
//!
//! Generates a fresh, plausible browser header set for every page request
//! so scraped requests look like ordinary browser traffic
//!

use rand::{Rng, seq::SliceRandom};
use reqwest::header::{self, HeaderMap, HeaderValue};

const PLATFORMS: [&str; 5] = [
    "Windows NT 10.0; Win64; x64",
    "Windows NT 6.1; Win64; x64",
    "Macintosh; Intel Mac OS X 10_15_7",
    "X11; Linux x86_64",
    "X11; Ubuntu; Linux x86_64"
];

const CHROME_VERSIONS: [&str; 5] = [
    "118.0.5993.117", "119.0.6045.199", "120.0.6099.109",
    "121.0.6167.85", "122.0.6261.94"
];

const FIREFOX_VERSIONS: [&str; 4] = ["118.0", "119.0", "120.0", "121.0"];

const SAFARI_VERSIONS: [&str; 3] = ["16.6", "17.1", "17.2"];

const ACCEPT_HTML: [&str; 2] = [
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,\
     image/apng,*/*;q=0.8"
];

const ACCEPT_LANGUAGE: [&str; 4] = [
    "en-US,en;q=0.9",
    "en-US,en;q=0.5",
    "en-GB,en;q=0.9,en-US;q=0.8",
    "de-DE,de;q=0.9,en-US;q=0.8,en;q=0.7"
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Browser { Chrome, Firefox, Safari }

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, pool: &[&'a str]) -> &'a str {
    pool.choose(rng).copied().unwrap_or_default()
}

/// Random desktop user agent; Safari is only paired with macOS
pub fn user_agent<R: Rng + ?Sized>(rng: &mut R) -> String {
    let browser = *[Browser::Chrome, Browser::Firefox, Browser::Safari]
        .choose(rng)
        .unwrap_or(&Browser::Chrome);

    match browser {
        Browser::Chrome => {
            let platform = pick(rng, &PLATFORMS);
            let version  = pick(rng, &CHROME_VERSIONS);
            format!(
                "Mozilla/5.0 ({platform}) AppleWebKit/537.36 (KHTML, like Gecko) \
                 Chrome/{version} Safari/537.36"
            )
        }
        Browser::Firefox => {
            let platform = pick(rng, &PLATFORMS);
            let version  = pick(rng, &FIREFOX_VERSIONS);
            format!("Mozilla/5.0 ({platform}; rv:{version}) Gecko/20100101 Firefox/{version}")
        }
        Browser::Safari => {
            let version = pick(rng, &SAFARI_VERSIONS);
            format!(
                "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 \
                 (KHTML, like Gecko) Version/{version} Safari/605.1.15"
            )
        }
    }
}

/// Full header set for an html page request
pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> HeaderMap {
    let mut h = HeaderMap::new();

    // pool values are ascii, from_str cannot fail on them
    if let Ok(v) = HeaderValue::from_str(&user_agent(rng)) {
        h.insert(header::USER_AGENT, v);
    }
    h.insert(header::ACCEPT, HeaderValue::from_static(pick(rng, &ACCEPT_HTML)));
    h.insert(
        header::ACCEPT_LANGUAGE,
        HeaderValue::from_static(pick(rng, &ACCEPT_LANGUAGE))
    );

    if rng.gen_bool(0.5) {
        h.insert(header::DNT, HeaderValue::from_static("1"));
    }
    if rng.gen_bool(0.7) {
        h.insert(header::UPGRADE_INSECURE_REQUESTS, HeaderValue::from_static("1"));
    }
    h
}

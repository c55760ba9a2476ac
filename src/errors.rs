//!
//! src/errors.rs  Andrew Belles  Oct 19th, 2026
//!
//! Defines enums and methods of error conversion
//! for errors the tracklist crawler uses
//!
//!

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScraperError {
    #[error("config error: {0}")]
    Config(String),
    #[error("http error: {0}")]
    Http(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("markup error: {0}")]
    Markup(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error)
}

impl From<reqwest::Error> for ScraperError {
    fn from(e: reqwest::Error) -> Self { ScraperError::Http(e.to_string()) }
}

impl From<serde_json::Error> for ScraperError {
    fn from(e: serde_json::Error) -> Self { ScraperError::Parse(e.to_string()) }
}

impl From<url::ParseError> for ScraperError {
    fn from(e: url::ParseError) -> Self { ScraperError::Parse(format!("url: {e}")) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions_land_in_matching_variant() {
        let e: ScraperError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(e, ScraperError::Parse(_)));

        let e: ScraperError = url::Url::parse("not a url").unwrap_err().into();
        assert!(matches!(e, ScraperError::Parse(ref m) if m.starts_with("url:")));

        let e = ScraperError::Markup("missing span.trackValue".into());
        assert_eq!(e.to_string(), "markup error: missing span.trackValue");
    }
}

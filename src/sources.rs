//!
//! src/sources.rs  Andrew Belles  Oct 19th, 2026
//!
//! Registry of streaming services the medialink endpoint reports,
//! keyed by the numeric source code 1001tracklists uses internally
//!

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Beatport,
    Apple,
    Traxsource,
    SoundCloud,
    Video,
    Spotify
}

/// (code, service) pairs, the whole registry
pub const REGISTRY: [(&str, Source); 6] = [
    ("1",  Source::Beatport),
    ("2",  Source::Apple),
    ("4",  Source::Traxsource),
    ("10", Source::SoundCloud),
    ("13", Source::Video),
    ("36", Source::Spotify)
];

impl Source {
    /// Translate a medialink source code, None for codes not in the registry
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        REGISTRY.iter()
            .find(|(c, _)| *c == code)
            .map(|(_, s)| *s)
    }

    pub fn code(self) -> &'static str {
        REGISTRY.iter()
            .find(|(_, s)| *s == self)
            .map(|(c, _)| *c)
            .unwrap_or_default()
    }

    pub fn name(self) -> &'static str {
        match self {
            Source::Beatport   => "beatport",
            Source::Apple      => "apple",
            Source::Traxsource => "traxsource",
            Source::SoundCloud => "soundcloud",
            Source::Video      => "video",
            Source::Spotify    => "spotify"
        }
    }

    pub fn all() -> impl Iterator<Item = Source> {
        REGISTRY.iter().map(|(_, s)| *s)
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown streaming service: {0}")]
pub struct UnknownService(pub String);

impl FromStr for Source {
    type Err = UnknownService;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Source::all()
            .find(|src| src.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownService(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_codes_translate() {
        assert_eq!(Source::from_code("1"), Some(Source::Beatport));
        assert_eq!(Source::from_code("2"), Some(Source::Apple));
        assert_eq!(Source::from_code("4"), Some(Source::Traxsource));
        assert_eq!(Source::from_code("10"), Some(Source::SoundCloud));
        assert_eq!(Source::from_code("13"), Some(Source::Video));
        assert_eq!(Source::from_code(" 36 "), Some(Source::Spotify));
    }

    #[test]
    fn unknown_codes_are_none() {
        assert_eq!(Source::from_code("999"), None);
        assert_eq!(Source::from_code("3"), None);
        assert_eq!(Source::from_code(""), None);
    }

    #[test]
    fn names_and_codes_are_consistent() {
        for (code, source) in REGISTRY {
            assert_eq!(source.code(), code);
            assert_eq!(source.name().parse::<Source>(), Ok(source));
            assert_eq!(source.to_string(), source.name());
        }
        assert_eq!(Source::all().count(), 6);
    }

    #[test]
    fn service_names_parse_case_insensitively() {
        assert_eq!("Spotify".parse::<Source>(), Ok(Source::Spotify));
        assert_eq!(
            "madeup".parse::<Source>(),
            Err(UnknownService("madeup".to_string()))
        );
    }

    #[test]
    fn unknown_service_message_names_it() {
        let err = "madeup".parse::<Source>().unwrap_err();
        assert_eq!(err.to_string(), "unknown streaming service: madeup");
    }

    #[test]
    fn serializes_as_service_name() {
        let json = serde_json::to_string(&Source::SoundCloud).unwrap();
        assert_eq!(json, "\"soundcloud\"");
    }
}

//!
//! src/resolver.rs  Andrew Belles  Oct 19th, 2026
//!
//! Turns a medialink response into a service -> player id mapping.
//! Upstream rejections and unknown source codes are degraded results,
//! never errors; only transport and malformed json are fatal
//!

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::config::SiteConfig;
use crate::sources::Source;
use crate::types::{ExternalIds, TrackId};
use crate::ScraperError;

/// Outcome of one medialink lookup
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// success: true, the complete replacement mapping
    Resolved(ExternalIds),
    /// success: false, the raw body for diagnostics
    Rejected(Value)
}

/// source and playerId arrive as either json strings or numbers
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Number(serde_json::Number)
}

impl Scalar {
    fn into_string(self) -> String {
        match self {
            Scalar::Text(s) => s,
            Scalar::Number(n) => n.to_string()
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct MediaLink {
    source: Scalar,
    #[serde(rename = "playerId")]
    player_id: Scalar
}

/// GET {base}/ajax/get_medialink.php?idObject=5&idItem={track_id}&viewSource=1
pub fn medialink_url(site: &SiteConfig, track_id: &TrackId) -> Result<Url, ScraperError> {
    let mut url = site.base_url.join(&site.medialink_path)?;
    url.query_pairs_mut()
        .clear()
        .append_pair("idObject", &site.medialink_object.to_string())
        .append_pair("idItem", track_id.as_str())
        .append_pair("viewSource", &site.medialink_view_source.to_string());
    Ok(url)
}

/// Interpret a medialink body for `track_id`
pub fn interpret(track_id: &TrackId, body: &Value) -> Result<Resolution, ScraperError> {
    let success = body.get("success").and_then(Value::as_bool).unwrap_or(false);
    if !success {
        warn!(track = %track_id, response = %body, "resolver.rejected");
        return Ok(Resolution::Rejected(body.clone()));
    }

    let data = match body.get("data") {
        Some(Value::Array(items)) => items.as_slice(),
        Some(Value::Null) | None => &[],
        Some(other) => return Err(ScraperError::Parse(
            format!("medialink data for {track_id} is not an array: {other}")
        ))
    };

    let mut ids = ExternalIds::new();
    for element in data {
        let link = match serde_json::from_value::<MediaLink>(element.clone()) {
            Ok(link) => link,
            Err(e) => {
                warn!(track = %track_id, error = %e, element = %element, "resolver.bad_element");
                continue;
            }
        };

        let code = link.source.into_string();
        match Source::from_code(&code) {
            Some(source) => {
                ids.insert(source, link.player_id.into_string());
            }
            None => {
                warn!(track = %track_id, source = %code, "resolver.unknown_source");
            }
        }
    }

    debug!(track = %track_id, resolved = ids.len(), "resolver.done");
    Ok(Resolution::Resolved(ids))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn id(s: &str) -> TrackId { TrackId::new(s) }

    #[test]
    fn medialink_url_matches_endpoint() {
        let url = medialink_url(&SiteConfig::default(), &id("12345")).unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.1001tracklists.com/ajax/get_medialink.php?idObject=5&idItem=12345&viewSource=1"
        );
    }

    #[test]
    fn track_id_cannot_add_query_parameters() {
        let url = medialink_url(&SiteConfig::default(), &id("1&idObject=9")).unwrap();
        let pairs: Vec<(String, String)> = url.query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(pairs, vec![
            ("idObject".to_string(), "5".to_string()),
            ("idItem".to_string(), "1&idObject=9".to_string()),
            ("viewSource".to_string(), "1".to_string())
        ]);
    }

    #[test]
    fn unknown_codes_are_dropped() {
        let body = json!({
            "success": true,
            "data": [
                { "source": "1", "playerId": "abc" },
                { "source": "999", "playerId": "x" }
            ]
        });
        let mut expected = ExternalIds::new();
        expected.insert(Source::Beatport, "abc".to_string());

        assert_eq!(interpret(&id("1"), &body).unwrap(), Resolution::Resolved(expected));
    }

    #[test]
    fn numeric_codes_and_ids_are_accepted() {
        let body = json!({
            "success": true,
            "data": [
                { "source": 36, "playerId": "4uLU6hMCjMI75M1A2tKUQC", "extra": "ignored" },
                { "source": "13", "playerId": 998877 }
            ]
        });
        let Resolution::Resolved(ids) = interpret(&id("7"), &body).unwrap() else {
            panic!("expected resolved");
        };
        assert_eq!(ids.get(&Source::Spotify).map(String::as_str), Some("4uLU6hMCjMI75M1A2tKUQC"));
        assert_eq!(ids.get(&Source::Video).map(String::as_str), Some("998877"));
    }

    #[test]
    fn malformed_elements_are_skipped() {
        let body = json!({
            "success": true,
            "data": [
                { "playerId": "orphan" },
                { "source": "10", "playerId": "sc-1" }
            ]
        });
        let Resolution::Resolved(ids) = interpret(&id("7"), &body).unwrap() else {
            panic!("expected resolved");
        };
        assert_eq!(ids.len(), 1);
        assert_eq!(ids.get(&Source::SoundCloud).map(String::as_str), Some("sc-1"));
    }

    #[test]
    fn rejection_carries_body() {
        let body = json!({ "success": false, "message": "no media" });
        assert_eq!(interpret(&id("1"), &body).unwrap(), Resolution::Rejected(body.clone()));

        // a missing flag counts as a rejection too
        let body = json!({ "data": [] });
        assert!(matches!(interpret(&id("1"), &body).unwrap(), Resolution::Rejected(_)));
    }

    #[test]
    fn success_without_data_is_empty() {
        let body = json!({ "success": true });
        assert_eq!(
            interpret(&id("1"), &body).unwrap(),
            Resolution::Resolved(ExternalIds::new())
        );
    }

    #[test]
    fn non_array_data_is_parse_error() {
        let body = json!({ "success": true, "data": "nope" });
        assert!(matches!(interpret(&id("1"), &body), Err(ScraperError::Parse(_))));
    }

    #[test]
    fn duplicate_sources_keep_last() {
        let body = json!({
            "success": true,
            "data": [
                { "source": "2", "playerId": "first" },
                { "source": "2", "playerId": "second" }
            ]
        });
        let Resolution::Resolved(ids) = interpret(&id("1"), &body).unwrap() else {
            panic!("expected resolved");
        };
        assert_eq!(ids.get(&Source::Apple).map(String::as_str), Some("second"));
    }
}

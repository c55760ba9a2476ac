use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

use crate::sources::Source;

// Placeholder id a Track carries until one is read off a page
pub const UNRESOLVED_TRACK_ID: &str = "0";

// 1001tracklists internal track id, digits kept as text
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrackId(pub String);

impl TrackId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn unresolved() -> Self {
        Self(UNRESOLVED_TRACK_ID.to_string())
    }

    pub fn is_unresolved(&self) -> bool {
        self.0 == UNRESOLVED_TRACK_ID
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TrackId {
    fn default() -> Self {
        Self::unresolved()
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// service -> player id on that service
pub type ExternalIds = BTreeMap<Source, String>;

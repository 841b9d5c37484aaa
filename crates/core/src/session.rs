//! Session payload returned by the auth endpoints.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Opaque user record returned by login/me.
///
/// Only the access token is interpreted on this side; the rest of the
/// profile is carried verbatim so the cache round-trips whatever the
/// backend sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(flatten)]
    pub profile: Map<String, Value>,
}

impl Session {
    /// Profile field accessor with an explicit absent case.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.profile.get(name)
    }
}

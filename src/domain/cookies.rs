//! Session cookie entity.
//!
//! The shape mirrors what the browser automation layer reports, camelCase
//! field names included, so a persisted set can be replayed into a fresh
//! browsing context without translation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Marker value the browser uses for session-lifetime cookies.
const SESSION_EXPIRY: f64 = -1.0;

/// A single browser cookie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cookie {
    pub name: String,
    pub value: String,
    pub domain: String,
    pub path: String,
    /// Unix timestamp in seconds; `-1` for session cookies.
    #[serde(default = "session_expiry")]
    pub expires: f64,
    #[serde(default)]
    pub http_only: bool,
    #[serde(default)]
    pub secure: bool,
    #[serde(default = "default_same_site")]
    pub same_site: String,
}

fn session_expiry() -> f64 {
    SESSION_EXPIRY
}

fn default_same_site() -> String {
    "Lax".to_string()
}

impl Cookie {
    /// True when the cookie carried an absolute expiry that has passed.
    ///
    /// Session cookies (`expires == -1`) never report expired.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires >= 0.0 && (self.expires as i64) < now.timestamp()
    }
}

/// Drop cookies whose expiry already passed; replaying those into a fresh
/// context only churns the probe.
pub fn prune_expired(cookies: Vec<Cookie>, now: DateTime<Utc>) -> Vec<Cookie> {
    cookies.into_iter().filter(|c| !c.is_expired(now)).collect()
}

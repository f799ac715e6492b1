//! Wire protocol between the driver and the Playwright sidecar.
//!
//! One JSON object per line in each direction. Every request carries an
//! id; the sidecar answers each id exactly once, in request order.

use serde::{Deserialize, Serialize};

use crate::domain::ports::driver::Locator;
use crate::domain::Cookie;

/// A single sidecar command
#[derive(Debug, Serialize)]
#[serde(tag = "cmd", rename_all = "camelCase")]
pub enum Command<'a> {
    #[serde(rename_all = "camelCase")]
    Launch {
        browser: &'a str,
        headless: bool,
        default_timeout_ms: u64,
    },
    Navigate {
        url: &'a str,
    },
    Click {
        target: &'a Locator,
    },
    Fill {
        target: &'a Locator,
        value: &'a str,
    },
    Count {
        target: &'a Locator,
    },
    #[serde(rename_all = "camelCase")]
    WaitUrl {
        fragment: &'a str,
        timeout_ms: u64,
    },
    #[serde(rename_all = "camelCase")]
    WaitVisible {
        target: &'a Locator,
        timeout_ms: u64,
    },
    #[serde(rename_all = "camelCase")]
    WaitGone {
        target: &'a Locator,
        timeout_ms: u64,
    },
    CurrentUrl,
    Cookies,
    SetCookies {
        cookies: &'a [Cookie],
    },
    Close,
}

/// Request envelope: command plus correlation id
#[derive(Debug, Serialize)]
pub struct Request<'a> {
    pub id: u64,
    #[serde(flatten)]
    pub command: Command<'a>,
}

/// Response envelope from the sidecar
#[derive(Debug, Deserialize)]
pub struct Response {
    pub id: u64,
    pub ok: bool,
    #[serde(default)]
    pub result: serde_json::Value,
    #[serde(default)]
    pub error: Option<WireError>,
}

/// Error payload carried by a failed response
#[derive(Debug, Clone, Deserialize)]
pub struct WireError {
    pub kind: WireErrorKind,
    pub message: String,
}

/// Failure classes the sidecar distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WireErrorKind {
    /// An interaction or wait ran out of time
    Timeout,
    /// The target element was missing
    NotFound,
    /// The browser rejected the action
    Browser,
    /// The sidecar did not understand the request
    Protocol,
}

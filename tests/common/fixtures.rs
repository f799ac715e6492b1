//! Reusable fixtures for pipeline scenarios.

use slipway::domain::{Cookie, Credentials, DeploymentSpec, EnvBlock, Location, ServerSpec};
use slipway::RunOptions;

pub const BASE_URL: &str = "https://sliplane.io";

/// A session-lifetime cookie that never expires.
pub fn session_cookie(name: &str, value: &str) -> Cookie {
    serde_json::from_value(serde_json::json!({
        "name": name,
        "value": value,
        "domain": ".sliplane.io",
        "path": "/",
        "expires": -1.0,
        "httpOnly": true,
        "secure": true,
        "sameSite": "Lax"
    }))
    .unwrap()
}

/// A cookie whose absolute expiry passed long ago.
pub fn expired_cookie(name: &str) -> Cookie {
    serde_json::from_value(serde_json::json!({
        "name": name,
        "value": "stale",
        "domain": ".sliplane.io",
        "path": "/",
        "expires": 946_684_800.0,
        "httpOnly": true,
        "secure": true,
        "sameSite": "Lax"
    }))
    .unwrap()
}

/// Standard run: demo1 in Singapore, nginx with a two-variable env block
/// written with literal `\n` separators as the environment delivers it.
pub fn demo_options() -> RunOptions {
    RunOptions::new(
        ServerSpec::new("demo1", Location::Singapore),
        DeploymentSpec::new(
            "docker.io/acme/nginx:latest",
            EnvBlock::new("A=1\\nB=2"),
        ),
        Credentials::parse("octocat hunter2"),
    )
}

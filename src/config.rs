//! Configuration module for Slipway
//!
//! Implements the configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (SLIPWAY_* prefix, legacy aliases)
//! 3. Project config (slipway.toml)
//! 4. User config (~/.config/slipway/config.toml)
//! 5. Built-in defaults (lowest priority)
//!
//! Credentials are never read from a config file, only from the
//! environment or a CLI flag.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::credentials::Credentials;
use crate::domain::provision::Location;
use crate::error::SlipwayResult;

/// Browser engine launched by the automation sidecar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Browser {
    /// Firefox (default)
    #[default]
    Firefox,
    /// Chromium
    Chromium,
    /// WebKit
    Webkit,
}

impl Browser {
    /// Name Playwright uses for this engine
    pub fn playwright_name(&self) -> &'static str {
        match self {
            Browser::Firefox => "firefox",
            Browser::Chromium => "chromium",
            Browser::Webkit => "webkit",
        }
    }
}

/// Platform endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "https://sliplane.io".to_string()
}

/// Server provisioning configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_name")]
    pub name: String,

    #[serde(default)]
    pub location: Location,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: default_server_name(),
            location: Location::default(),
        }
    }
}

fn default_server_name() -> String {
    "ss".to_string()
}

/// Service deployment configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DeployConfig {
    /// Container image reference (docker.io/user/image:tag)
    #[serde(default)]
    pub image: String,

    /// Environment variable block, one KEY=VALUE per line.
    /// Literal `\n` escapes are normalized to real line breaks.
    #[serde(default)]
    pub env_vars: String,
}

/// Session persistence configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Cookie store path; a leading `~` expands to the home directory
    #[serde(default = "default_cookie_file")]
    pub cookie_file: PathBuf,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_file: default_cookie_file(),
        }
    }
}

fn default_cookie_file() -> PathBuf {
    PathBuf::from("sliplane_cookies.json")
}

/// Wait budgets, all in milliseconds
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Timeouts {
    /// Session validity probe (login page -> dashboard redirect)
    #[serde(default = "default_probe_ms")]
    pub probe_ms: u64,

    /// Credential login redirect settle
    #[serde(default = "default_login_ms")]
    pub login_ms: u64,

    /// Element actionability for clicks and fills
    #[serde(default = "default_element_ms")]
    pub element_ms: u64,

    /// Long-running UI actions (server create, service deploy)
    #[serde(default = "default_action_ms")]
    pub action_ms: u64,

    /// Poll interval for predicate waits
    #[serde(default = "default_poll_ms")]
    pub poll_ms: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            probe_ms: default_probe_ms(),
            login_ms: default_login_ms(),
            element_ms: default_element_ms(),
            action_ms: default_action_ms(),
            poll_ms: default_poll_ms(),
        }
    }
}

fn default_probe_ms() -> u64 {
    15_000
}

fn default_login_ms() -> u64 {
    10_000
}

fn default_element_ms() -> u64 {
    5_000
}

fn default_action_ms() -> u64 {
    30_000
}

fn default_poll_ms() -> u64 {
    250
}

impl Timeouts {
    pub fn probe(&self) -> Duration {
        Duration::from_millis(self.probe_ms)
    }

    pub fn login(&self) -> Duration {
        Duration::from_millis(self.login_ms)
    }

    pub fn element(&self) -> Duration {
        Duration::from_millis(self.element_ms)
    }

    pub fn action(&self) -> Duration {
        Duration::from_millis(self.action_ms)
    }

    pub fn poll(&self) -> Duration {
        Duration::from_millis(self.poll_ms)
    }
}

/// Automation sidecar configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SidecarConfig {
    /// Node.js binary used to run the sidecar
    #[serde(default = "default_node_binary")]
    pub node_binary: String,

    #[serde(default)]
    pub browser: Browser,

    #[serde(default = "default_headless")]
    pub headless: bool,
}

impl Default for SidecarConfig {
    fn default() -> Self {
        Self {
            node_binary: default_node_binary(),
            browser: Browser::default(),
            headless: default_headless(),
        }
    }
}

fn default_node_binary() -> String {
    "node".to_string()
}

fn default_headless() -> bool {
    true
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub deploy: DeployConfig,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub timeouts: Timeouts,

    #[serde(default)]
    pub sidecar: SidecarConfig,

    /// Delegated login account, environment or CLI only
    #[serde(skip)]
    pub credentials: Credentials,
}

/// Warning produced while reading a config file (e.g. unknown key)
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> SlipwayResult<Self> {
        let (config, _warnings) = Self::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> SlipwayResult<(Self, Vec<ConfigWarning>)> {
        let content = fs::read_to_string(path)?;

        let mut unknown_paths: Vec<String> = Vec::new();
        let deserializer = toml::de::Deserializer::new(&content);

        let config: Self = serde_ignored::deserialize(deserializer, |path| {
            unknown_paths.push(path.to_string());
        })
        .map_err(|e| crate::error::SlipwayError::Config {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let warnings = unknown_paths
            .into_iter()
            .map(|path_str| {
                let key = path_str
                    .split('.')
                    .last()
                    .unwrap_or(path_str.as_str())
                    .to_string();
                ConfigWarning {
                    key: key.clone(),
                    file: path.to_path_buf(),
                    line: find_line_number(&content, &key),
                    suggestion: suggest_key(&key),
                }
            })
            .collect();

        Ok((config, warnings))
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        // Try project config first
        if let Some(root) = project_root {
            let project_config = root.join("slipway.toml");
            if project_config.exists() {
                if let Ok(config) = Self::load(&project_config) {
                    return config.with_env_overrides();
                }
            }
        }

        // Try user config
        if let Some(user_config_dir) = dirs_config_dir() {
            let user_config = user_config_dir.join("slipway/config.toml");
            if user_config.exists() {
                if let Ok(config) = Self::load(&user_config) {
                    return config.with_env_overrides();
                }
            }
        }

        // Return defaults with env overrides
        Self::default().with_env_overrides()
    }

    /// Apply environment variable overrides.
    ///
    /// Prefixed names (SLIPWAY_*) win; the unprefixed aliases the original
    /// cron deployment exported (GT_PW, DOCKER, SERVER_NAME, ENVSET) are
    /// honored when the prefixed name is absent.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(base_url) = std::env::var("SLIPWAY_BASE_URL") {
            self.site.base_url = base_url;
        }

        if let Some(name) = env_or_alias("SLIPWAY_SERVER_NAME", "SERVER_NAME") {
            self.server.name = name;
        }

        if let Some(image) = env_or_alias("SLIPWAY_IMAGE", "DOCKER") {
            self.deploy.image = image;
        }

        if let Some(env_vars) = env_or_alias("SLIPWAY_ENV_VARS", "ENVSET") {
            self.deploy.env_vars = env_vars;
        }

        if let Ok(cookie_file) = std::env::var("SLIPWAY_COOKIE_FILE") {
            self.session.cookie_file = PathBuf::from(cookie_file);
        }

        if let Ok(val) = std::env::var("SLIPWAY_HEADLESS") {
            self.sidecar.headless = val.to_lowercase() != "false" && val != "0";
        }

        if let Some(combined) = env_or_alias("SLIPWAY_CREDENTIALS", "GT_PW") {
            self.credentials = Credentials::parse(&combined);
        }

        self
    }
}

/// Read a prefixed variable, falling back to its legacy alias
fn env_or_alias(name: &str, alias: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .or_else(|| std::env::var(alias).ok())
}

/// Get XDG config directory
fn dirs_config_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join(".config"))
        })
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "site",
        "base_url",
        "server",
        "name",
        "location",
        "deploy",
        "image",
        "env_vars",
        "session",
        "cookie_file",
        "timeouts",
        "probe_ms",
        "login_ms",
        "element_ms",
        "action_ms",
        "poll_ms",
        "sidecar",
        "node_binary",
        "browser",
        "headless",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] = std::cmp::min(
                std::cmp::min(prev[j + 1] + 1, curr[j] + 1),
                prev[j] + cost,
            );
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}

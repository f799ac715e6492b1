//! BrowserDriver port - abstraction over the browser automation engine
//!
//! The orchestration layer only ever talks to the browser through this
//! capability set. Implementations:
//! - `PlaywrightDriver` - Playwright sidecar process (production)
//! - `ScriptedDriver` - scripted responses for tests

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::cookies::Cookie;

/// Result type for driver operations
pub type DriverResult<T> = Result<T, DriverError>;

/// Browser driver operation errors
#[derive(Error, Debug)]
pub enum DriverError {
    /// The automation engine could not be started
    #[error("failed to start browser engine: {message}")]
    Spawn { message: String },

    /// The engine replied with something the protocol does not allow
    #[error("driver protocol violation: {0}")]
    Protocol(String),

    /// A bounded wait ran out of budget
    #[error("wait for {condition} timed out after {budget_ms}ms")]
    WaitTimeout { condition: String, budget_ms: u64 },

    /// The target element was not on the page
    #[error("element not found: {0}")]
    NotFound(String),

    /// The engine reported an action failure
    #[error("browser action failed: {0}")]
    Browser(String),

    /// IO error talking to the engine
    #[error("driver IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// How to find an element, mirroring the accessible handles the platform
/// UI exposes. `within` scopes the lookup to a parent match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locator {
    #[serde(flatten)]
    pub by: LocatorKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub within: Option<Box<Locator>>,
}

/// The lookup strategies the driver contract supports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "by", rename_all = "camelCase")]
pub enum LocatorKind {
    /// ARIA role plus accessible name.
    Role {
        role: String,
        name: String,
        #[serde(default)]
        exact: bool,
    },
    /// Form control by its label text.
    Label { label: String },
    /// Input by its placeholder text.
    Placeholder { placeholder: String },
    /// `data-test-id` attribute.
    #[serde(rename_all = "camelCase")]
    TestId { test_id: String },
    /// Raw CSS selector, for the handful of controls without an
    /// accessible handle.
    Css { css: String },
}

impl Locator {
    pub fn role(role: impl Into<String>, name: impl Into<String>) -> Self {
        Self::from_kind(LocatorKind::Role {
            role: role.into(),
            name: name.into(),
            exact: false,
        })
    }

    /// Role lookup with exact accessible-name matching.
    pub fn role_exact(role: impl Into<String>, name: impl Into<String>) -> Self {
        Self::from_kind(LocatorKind::Role {
            role: role.into(),
            name: name.into(),
            exact: true,
        })
    }

    pub fn label(label: impl Into<String>) -> Self {
        Self::from_kind(LocatorKind::Label {
            label: label.into(),
        })
    }

    pub fn placeholder(placeholder: impl Into<String>) -> Self {
        Self::from_kind(LocatorKind::Placeholder {
            placeholder: placeholder.into(),
        })
    }

    pub fn test_id(test_id: impl Into<String>) -> Self {
        Self::from_kind(LocatorKind::TestId {
            test_id: test_id.into(),
        })
    }

    pub fn css(css: impl Into<String>) -> Self {
        Self::from_kind(LocatorKind::Css { css: css.into() })
    }

    /// Scope this locator to matches inside `parent`.
    pub fn within(mut self, parent: Locator) -> Self {
        self.within = Some(Box::new(parent));
        self
    }

    fn from_kind(by: LocatorKind) -> Self {
        Self { by, within: None }
    }
}

impl std::fmt::Display for Locator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.by {
            LocatorKind::Role { role, name, exact } => {
                if *exact {
                    write!(f, "{}[name=\"{}\" exact]", role, name)?;
                } else {
                    write!(f, "{}[name=\"{}\"]", role, name)?;
                }
            }
            LocatorKind::Label { label } => write!(f, "label \"{}\"", label)?,
            LocatorKind::Placeholder { placeholder } => {
                write!(f, "placeholder \"{}\"", placeholder)?
            }
            LocatorKind::TestId { test_id } => write!(f, "[data-test-id={}]", test_id)?,
            LocatorKind::Css { css } => write!(f, "{}", css)?,
        }
        if let Some(parent) = &self.within {
            write!(f, " within {}", parent)?;
        }
        Ok(())
    }
}

/// Readiness predicate for bounded waits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WaitCondition {
    /// The current URL contains the fragment.
    UrlContains(String),
    /// The element is present and visible.
    Visible(Locator),
    /// The element is detached or hidden.
    Gone(Locator),
}

impl std::fmt::Display for WaitCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WaitCondition::UrlContains(fragment) => write!(f, "url containing \"{}\"", fragment),
            WaitCondition::Visible(locator) => write!(f, "visible {}", locator),
            WaitCondition::Gone(locator) => write!(f, "gone {}", locator),
        }
    }
}

/// Abstract browser interface consumed by every workflow component.
///
/// One driver means one browser, one context, one page; callers own the
/// driver exclusively for the process lifetime.
pub trait BrowserDriver {
    /// Navigate the page to an absolute URL
    fn navigate(&mut self, url: &str) -> DriverResult<()>;

    /// Click the element matching the locator
    fn click(&mut self, target: &Locator) -> DriverResult<()>;

    /// Replace the content of the input matching the locator
    fn fill(&mut self, target: &Locator, value: &str) -> DriverResult<()>;

    /// Number of elements matching the locator
    fn count(&mut self, target: &Locator) -> DriverResult<usize>;

    /// Block until the condition holds, up to the timeout
    fn wait_until(&mut self, condition: &WaitCondition, timeout: Duration) -> DriverResult<()>;

    /// URL of the current page
    fn current_url(&mut self) -> DriverResult<String>;

    /// All cookies of the browsing context
    fn cookies(&mut self) -> DriverResult<Vec<Cookie>>;

    /// Inject cookies into the browsing context
    fn set_cookies(&mut self, cookies: &[Cookie]) -> DriverResult<()>;

    /// Close page, context and browser
    fn close(&mut self) -> DriverResult<()>;
}

//! Session Manager
//!
//! Restores a persisted browser session, probes whether it still counts
//! as signed in, and persists a fresh one after login. The cookie store
//! degrading (missing, corrupt, locked) never aborts a run; only a broken
//! driver does.

use chrono::Utc;

use crate::application::pages::LoginPage;
use crate::config::Timeouts;
use crate::domain::cookies::prune_expired;
use crate::domain::ports::cookie_store::CookieStore;
use crate::domain::ports::driver::{BrowserDriver, DriverError, DriverResult};
use crate::error::SlipwayResult;

/// What restoring the persisted session amounted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestoreOutcome {
    /// Cookies injected into the browser after expiry pruning.
    pub applied: usize,
    /// Present when the store was unreadable and the run degraded.
    pub warning: Option<String>,
}

/// Manages the persisted session around a run.
pub struct SessionManager<'a, S: CookieStore> {
    store: &'a S,
    base_url: &'a str,
    timeouts: Timeouts,
}

impl<'a, S: CookieStore> SessionManager<'a, S> {
    pub fn new(store: &'a S, base_url: &'a str, timeouts: Timeouts) -> Self {
        Self {
            store,
            base_url,
            timeouts,
        }
    }

    /// Inject the persisted session into the browser.
    ///
    /// Expired cookies are pruned before injection. Store trouble is
    /// reported in the outcome, not returned as an error.
    pub fn restore<D: BrowserDriver>(&self, driver: &mut D) -> DriverResult<RestoreOutcome> {
        let cookies = match self.store.load() {
            Ok(Some(cookies)) => cookies,
            Ok(None) => {
                return Ok(RestoreOutcome {
                    applied: 0,
                    warning: None,
                })
            }
            Err(e) => {
                return Ok(RestoreOutcome {
                    applied: 0,
                    warning: Some(e.to_string()),
                })
            }
        };

        let kept = prune_expired(cookies, Utc::now());
        if kept.is_empty() {
            return Ok(RestoreOutcome {
                applied: 0,
                warning: None,
            });
        }

        driver.set_cookies(&kept)?;
        Ok(RestoreOutcome {
            applied: kept.len(),
            warning: None,
        })
    }

    /// Probe session validity: open the login page and see whether the
    /// platform redirects into the authenticated area within the budget.
    pub fn probe<D: BrowserDriver>(&self, driver: &mut D) -> DriverResult<bool> {
        let mut page = LoginPage::open(driver, self.base_url)?;
        match page.wait_dashboard_redirect(self.timeouts.probe()) {
            Ok(()) => Ok(true),
            Err(DriverError::WaitTimeout { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Persist the browser's current cookies, replacing the stored session.
    pub fn persist<D: BrowserDriver>(&self, driver: &mut D) -> SlipwayResult<usize> {
        let cookies = driver.cookies()?;
        self.store.save(&cookies)?;
        Ok(cookies.len())
    }
}

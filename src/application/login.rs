//! Login Controller
//!
//! Drives the delegated GitHub login when the session probe fails. The
//! platform gives no explicit success signal; landing under the
//! authenticated-area path within the budget is the only criterion.

use thiserror::Error;

use crate::application::pages::LoginPage;
use crate::config::Timeouts;
use crate::domain::credentials::Credentials;
use crate::domain::ports::driver::{BrowserDriver, DriverError};

/// Login failure, distinct from generic driver trouble so the caller can
/// tell "wrong credentials or slow redirect" from "browser broke".
#[derive(Error, Debug)]
pub enum LoginError {
    /// Submitted the form but never reached the authenticated area
    #[error("login did not reach the dashboard within {budget_ms}ms")]
    RedirectTimeout { budget_ms: u64 },

    /// The browser failed while driving the form
    #[error(transparent)]
    Driver(#[from] DriverError),
}

/// Drives the delegated login form.
pub struct LoginController {
    timeouts: Timeouts,
}

impl LoginController {
    pub fn new(timeouts: Timeouts) -> Self {
        Self { timeouts }
    }

    /// Perform the credential login.
    ///
    /// Expects the driver to be parked on the platform login page, which
    /// is where the failed probe leaves it.
    pub fn login<D: BrowserDriver>(
        &self,
        driver: &mut D,
        credentials: &Credentials,
    ) -> Result<(), LoginError> {
        let mut page = LoginPage::attach(driver);
        page.begin_github_login()?;
        page.wait_provider_form(self.timeouts.element())?;
        page.submit_credentials(credentials)?;

        match page.wait_dashboard_redirect(self.timeouts.login()) {
            Ok(()) => Ok(()),
            Err(DriverError::WaitTimeout { .. }) => Err(LoginError::RedirectTimeout {
                budget_ms: self.timeouts.login_ms,
            }),
            Err(e) => Err(e.into()),
        }
    }
}

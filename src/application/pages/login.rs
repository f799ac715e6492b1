//! Login page and the delegated GitHub sign-in form.

use std::time::Duration;

use crate::domain::credentials::Credentials;
use crate::domain::ports::driver::{BrowserDriver, DriverResult, Locator, WaitCondition};

/// Path of the platform login page, relative to the base URL.
pub const LOGIN_PATH: &str = "/auth/login";

/// URL fragment that marks the authenticated area. Landing anywhere under
/// it is the only success signal the platform gives.
pub const DASHBOARD_FRAGMENT: &str = "/app";

const GITHUB_LOGIN_BUTTON: &str = "Login With Github";
const USERNAME_LABEL: &str = "Username or email address";
const PASSWORD_LABEL: &str = "Password";
const SIGN_IN_BUTTON: &str = "Sign in";

/// The platform login screen plus the GitHub form it hands off to.
pub struct LoginPage<'d, D: BrowserDriver> {
    driver: &'d mut D,
}

impl<'d, D: BrowserDriver> LoginPage<'d, D> {
    /// Navigate to the login page.
    pub fn open(driver: &'d mut D, base_url: &str) -> DriverResult<Self> {
        driver.navigate(&format!("{}{}", base_url, LOGIN_PATH))?;
        Ok(Self { driver })
    }

    /// Wrap a driver that is already parked on the login page.
    pub fn attach(driver: &'d mut D) -> Self {
        Self { driver }
    }

    /// Wait until the platform redirects into the authenticated area.
    pub fn wait_dashboard_redirect(&mut self, budget: Duration) -> DriverResult<()> {
        self.driver.wait_until(
            &WaitCondition::UrlContains(DASHBOARD_FRAGMENT.to_string()),
            budget,
        )
    }

    /// Click the delegated login entry point.
    pub fn begin_github_login(&mut self) -> DriverResult<()> {
        self.driver
            .click(&Locator::role("button", GITHUB_LOGIN_BUTTON))
    }

    /// Wait until GitHub's credential form has rendered.
    pub fn wait_provider_form(&mut self, budget: Duration) -> DriverResult<()> {
        self.driver.wait_until(
            &WaitCondition::Visible(Locator::label(USERNAME_LABEL)),
            budget,
        )
    }

    /// Fill the GitHub form and submit it.
    pub fn submit_credentials(&mut self, credentials: &Credentials) -> DriverResult<()> {
        self.driver
            .fill(&Locator::label(USERNAME_LABEL), credentials.username())?;
        self.driver
            .fill(&Locator::label(PASSWORD_LABEL), credentials.password())?;
        // "Sign in" must match exactly; the page also has "Sign in with a passkey".
        self.driver
            .click(&Locator::role_exact("button", SIGN_IN_BUTTON))
    }
}

//! Servers overview page and its destructive delete path.

use std::time::Duration;

use crate::domain::ports::driver::{
    BrowserDriver, DriverError, DriverResult, Locator, WaitCondition,
};

use super::login::DASHBOARD_FRAGMENT;

const SERVERS_SIDEBAR_LINK: &str = "sidebar-servers-link";
const SERVERS_LIST: &str = "servers-list";
const MENU_EXPAND_BUTTON: &str = "menu-expand-button";
const MENU_ITEM_SETTINGS: &str = "menu-item-Settings";
const UNSAFE_TERRITORY_LINK: &str = "Unsafe Territory";
const DELETE_SERVER_BUTTON: &str = "Delete Server";
const CONFIRMATION_PLACEHOLDER: &str = "Enter command here";

/// The servers overview reached from the dashboard sidebar.
pub struct ServersPage<'d, D: BrowserDriver> {
    driver: &'d mut D,
}

impl<'d, D: BrowserDriver> ServersPage<'d, D> {
    /// Navigate to the dashboard and open the servers overview.
    pub fn open(driver: &'d mut D, base_url: &str) -> DriverResult<Self> {
        driver.navigate(&format!("{}{}", base_url, DASHBOARD_FRAGMENT))?;
        driver.click(&Locator::test_id(SERVERS_SIDEBAR_LINK))?;
        Ok(Self { driver })
    }

    fn list(&self) -> Locator {
        Locator::test_id(SERVERS_LIST)
    }

    /// Wait for the server list to render. `false` means it never appeared
    /// within the budget, which the platform uses as its empty state.
    pub fn wait_list_rendered(&mut self, budget: Duration) -> DriverResult<bool> {
        let condition = WaitCondition::Visible(self.list());
        match self.driver.wait_until(&condition, budget) {
            Ok(()) => Ok(true),
            Err(DriverError::WaitTimeout { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Number of server list containers on the page.
    pub fn server_count(&mut self) -> DriverResult<usize> {
        let list = self.list();
        self.driver.count(&list)
    }

    /// Walk the first listed server through menu, settings, destructive
    /// actions and the typed confirmation. The caller supplies the literal
    /// confirmation command the dialog demands.
    pub fn delete_first_server(&mut self, confirmation: &str) -> DriverResult<()> {
        let menu = Locator::test_id(MENU_EXPAND_BUTTON).within(self.list());
        self.driver.click(&menu)?;
        self.driver.click(&Locator::test_id(MENU_ITEM_SETTINGS))?;
        self.driver
            .click(&Locator::role("link", UNSAFE_TERRITORY_LINK))?;
        self.driver
            .click(&Locator::role("button", DELETE_SERVER_BUTTON))?;
        self.driver
            .fill(&Locator::placeholder(CONFIRMATION_PLACEHOLDER), confirmation)?;
        // The page-level button opens the dialog; the form-scoped one commits.
        self.driver
            .click(&Locator::role("button", DELETE_SERVER_BUTTON).within(Locator::css("form")))
    }

    /// Wait until the list is gone, i.e. the delete settled.
    pub fn wait_list_drained(&mut self, budget: Duration) -> DriverResult<()> {
        let condition = WaitCondition::Gone(self.list());
        self.driver.wait_until(&condition, budget)
    }
}

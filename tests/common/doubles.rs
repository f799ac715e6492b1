//! Scripted in-memory stand-ins for the pipeline's ports.
//!
//! The pipeline takes ownership of its driver and store, so both doubles
//! keep their state behind a shared handle; a test clones the double
//! before handing it over and inspects the clone afterwards.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use slipway::domain::ports::{
    BrowserDriver, CookieStore, CookieStoreError, CookieStoreResult, DriverError, DriverResult,
    Locator, RunEvent, RunEventSink, WaitCondition,
};
use slipway::domain::Cookie;

#[derive(Default)]
struct DriverState {
    calls: Vec<String>,
    injected: Vec<Cookie>,
    browser_cookies: Vec<Cookie>,
    url_waits: VecDeque<bool>,
    broken: Vec<String>,
    missing: Vec<String>,
    closed: bool,
}

/// Scripted browser driver.
///
/// Records every call as one rendered line, answers URL waits from a
/// script, and fails interactions whose locator rendering matches a
/// configured substring.
#[derive(Clone, Default)]
pub struct ScriptedDriver {
    state: Rc<RefCell<DriverState>>,
}

impl ScriptedDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the outcomes of successive URL waits, front to back.
    /// Once the script is exhausted further URL waits succeed.
    pub fn with_url_waits(self, outcomes: impl IntoIterator<Item = bool>) -> Self {
        self.state.borrow_mut().url_waits = outcomes.into_iter().collect();
        self
    }

    /// Cookies the browser will report when asked.
    pub fn with_browser_cookies(self, cookies: Vec<Cookie>) -> Self {
        self.state.borrow_mut().browser_cookies = cookies;
        self
    }

    /// Interactions whose locator rendering contains `pattern` fail with
    /// a browser error.
    pub fn break_matching(self, pattern: &str) -> Self {
        self.state.borrow_mut().broken.push(pattern.to_string());
        self
    }

    /// Elements whose locator rendering contains `pattern` are treated as
    /// absent: clicks and fills report not-found, visibility waits time
    /// out, counts come back zero.
    pub fn without_element(self, pattern: &str) -> Self {
        self.state.borrow_mut().missing.push(pattern.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.borrow().calls.clone()
    }

    pub fn injected_cookies(&self) -> Vec<Cookie> {
        self.state.borrow().injected.clone()
    }

    pub fn closed(&self) -> bool {
        self.state.borrow().closed
    }

    /// Index of the first recorded call containing `pattern`.
    pub fn call_index(&self, pattern: &str) -> Option<usize> {
        self.state
            .borrow()
            .calls
            .iter()
            .position(|c| c.contains(pattern))
    }

    fn record(&self, line: String) {
        self.state.borrow_mut().calls.push(line);
    }

    fn is_broken(&self, rendered: &str) -> bool {
        self.state
            .borrow()
            .broken
            .iter()
            .any(|p| rendered.contains(p))
    }

    fn is_missing(&self, rendered: &str) -> bool {
        self.state
            .borrow()
            .missing
            .iter()
            .any(|p| rendered.contains(p))
    }
}

impl BrowserDriver for ScriptedDriver {
    fn navigate(&mut self, url: &str) -> DriverResult<()> {
        self.record(format!("navigate {}", url));
        Ok(())
    }

    fn click(&mut self, target: &Locator) -> DriverResult<()> {
        let rendered = target.to_string();
        self.record(format!("click {}", rendered));
        if self.is_broken(&rendered) {
            return Err(DriverError::Browser(format!("no response from {}", rendered)));
        }
        if self.is_missing(&rendered) {
            return Err(DriverError::NotFound(rendered));
        }
        Ok(())
    }

    fn fill(&mut self, target: &Locator, value: &str) -> DriverResult<()> {
        let rendered = target.to_string();
        self.record(format!("fill {} = {}", rendered, value));
        if self.is_broken(&rendered) {
            return Err(DriverError::Browser(format!("no response from {}", rendered)));
        }
        if self.is_missing(&rendered) {
            return Err(DriverError::NotFound(rendered));
        }
        Ok(())
    }

    fn count(&mut self, target: &Locator) -> DriverResult<usize> {
        let rendered = target.to_string();
        self.record(format!("count {}", rendered));
        if self.is_missing(&rendered) {
            return Ok(0);
        }
        Ok(1)
    }

    fn wait_until(&mut self, condition: &WaitCondition, timeout: Duration) -> DriverResult<()> {
        self.record(format!("wait {}", condition));
        let timed_out = || DriverError::WaitTimeout {
            condition: condition.to_string(),
            budget_ms: timeout.as_millis() as u64,
        };
        match condition {
            WaitCondition::UrlContains(_) => {
                let scripted = self.state.borrow_mut().url_waits.pop_front();
                match scripted {
                    Some(false) => Err(timed_out()),
                    _ => Ok(()),
                }
            }
            WaitCondition::Visible(locator) => {
                if self.is_missing(&locator.to_string()) {
                    Err(timed_out())
                } else {
                    Ok(())
                }
            }
            WaitCondition::Gone(_) => Ok(()),
        }
    }

    fn current_url(&mut self) -> DriverResult<String> {
        Ok("https://sliplane.io/app".to_string())
    }

    fn cookies(&mut self) -> DriverResult<Vec<Cookie>> {
        Ok(self.state.borrow().browser_cookies.clone())
    }

    fn set_cookies(&mut self, cookies: &[Cookie]) -> DriverResult<()> {
        let mut state = self.state.borrow_mut();
        state.calls.push(format!("set_cookies x{}", cookies.len()));
        state.injected.extend_from_slice(cookies);
        Ok(())
    }

    fn close(&mut self) -> DriverResult<()> {
        let mut state = self.state.borrow_mut();
        state.calls.push("close".to_string());
        state.closed = true;
        Ok(())
    }
}

#[derive(Default)]
struct StoreState {
    stored: Option<Vec<Cookie>>,
    corrupt: bool,
    saves: usize,
}

/// In-memory cookie store; clones share state.
#[derive(Clone, Default)]
pub struct MemoryCookieStore {
    state: Rc<RefCell<StoreState>>,
}

impl MemoryCookieStore {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn seeded(cookies: Vec<Cookie>) -> Self {
        let store = Self::default();
        store.state.borrow_mut().stored = Some(cookies);
        store
    }

    /// A store whose contents fail to parse.
    pub fn corrupt() -> Self {
        let store = Self::default();
        store.state.borrow_mut().corrupt = true;
        store
    }

    pub fn saved(&self) -> Option<Vec<Cookie>> {
        self.state.borrow().stored.clone()
    }

    pub fn save_count(&self) -> usize {
        self.state.borrow().saves
    }
}

impl CookieStore for MemoryCookieStore {
    fn load(&self) -> CookieStoreResult<Option<Vec<Cookie>>> {
        let state = self.state.borrow();
        if state.corrupt {
            return Err(CookieStoreError::Corrupt("unexpected token".to_string()));
        }
        Ok(state.stored.clone())
    }

    fn save(&self, cookies: &[Cookie]) -> CookieStoreResult<()> {
        let mut state = self.state.borrow_mut();
        state.stored = Some(cookies.to_vec());
        state.saves += 1;
        Ok(())
    }
}

/// Event sink that records everything for later assertions.
#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<RunEvent>>,
}

impl RecordingSink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn events(&self) -> Vec<RunEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn contains(&self, wanted: &RunEvent) -> bool {
        self.events().iter().any(|e| e == wanted)
    }
}

impl RunEventSink for RecordingSink {
    fn on_event(&self, event: RunEvent) {
        self.events.lock().unwrap().push(event);
    }
}

//! Playwright sidecar driver
//!
//! Drives a real browser through a long-lived Node child process running
//! the embedded Playwright script. Commands go out as one JSON line on
//! stdin, replies come back as one JSON line on stdout.
//!
//! The sidecar applies one default timeout to every element interaction,
//! so clicks and fills wait for actionability on their own. Explicit
//! `wait_until` calls carry their own budget per call.

use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, ChildStdout, Stdio};
use std::time::Duration;

use crate::config::SidecarConfig;
use crate::domain::cookies::Cookie;
use crate::domain::ports::driver::{
    BrowserDriver, DriverError, DriverResult, Locator, WaitCondition,
};

use super::protocol::{Command, Request, Response, WireError, WireErrorKind};

/// The embedded sidecar script, passed to `node -e`.
const RUNNER_SOURCE: &str = include_str!("runner.js");

/// Failure from a single sidecar exchange. The calling method decides
/// what a wire timeout means for its operation.
#[derive(Debug)]
enum ExchangeError {
    Transport(DriverError),
    Wire(WireError),
}

impl ExchangeError {
    /// For element interactions: a timeout means the element never
    /// became usable, which callers treat the same as missing.
    fn into_element_error(self) -> DriverError {
        match self {
            Self::Transport(e) => e,
            Self::Wire(w) => match w.kind {
                WireErrorKind::Timeout | WireErrorKind::NotFound => {
                    DriverError::NotFound(w.message)
                }
                WireErrorKind::Browser => DriverError::Browser(w.message),
                WireErrorKind::Protocol => DriverError::Protocol(w.message),
            },
        }
    }

    /// For bounded waits: a timeout means the budget ran out.
    fn into_wait_error(self, condition: &WaitCondition, budget: Duration) -> DriverError {
        match self {
            Self::Transport(e) => e,
            Self::Wire(w) => match w.kind {
                WireErrorKind::Timeout => DriverError::WaitTimeout {
                    condition: condition.to_string(),
                    budget_ms: budget.as_millis() as u64,
                },
                WireErrorKind::NotFound => DriverError::NotFound(w.message),
                WireErrorKind::Browser => DriverError::Browser(w.message),
                WireErrorKind::Protocol => DriverError::Protocol(w.message),
            },
        }
    }

    /// For operations without an element target.
    fn into_browser_error(self) -> DriverError {
        match self {
            Self::Transport(e) => e,
            Self::Wire(w) => match w.kind {
                WireErrorKind::Protocol => DriverError::Protocol(w.message),
                _ => DriverError::Browser(w.message),
            },
        }
    }
}

fn transport(e: std::io::Error) -> ExchangeError {
    ExchangeError::Transport(DriverError::Io(e))
}

/// Parse one reply line and check it answers the expected request.
fn parse_reply(line: &str, expect_id: u64) -> Result<serde_json::Value, ExchangeError> {
    let response: Response = serde_json::from_str(line.trim()).map_err(|e| {
        ExchangeError::Transport(DriverError::Protocol(format!("unparseable reply: {}", e)))
    })?;

    if response.id != expect_id {
        return Err(ExchangeError::Transport(DriverError::Protocol(format!(
            "reply id {} does not match request id {}",
            response.id, expect_id
        ))));
    }

    if response.ok {
        Ok(response.result)
    } else {
        Err(ExchangeError::Wire(response.error.unwrap_or(WireError {
            kind: WireErrorKind::Protocol,
            message: "failure reply without error payload".to_string(),
        })))
    }
}

/// Browser driver backed by a Playwright process.
///
/// Dropping the driver without `close` kills the child outright, so a
/// failed run never leaves a headless browser behind.
pub struct PlaywrightDriver {
    child: Child,
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
    next_id: u64,
    closed: bool,
}

impl PlaywrightDriver {
    /// Spawn the sidecar and launch the configured browser.
    ///
    /// `default_timeout` bounds every element interaction inside the
    /// sidecar.
    pub fn launch(config: &SidecarConfig, default_timeout: Duration) -> DriverResult<Self> {
        let mut child = std::process::Command::new(&config.node_binary)
            .arg("-e")
            .arg(RUNNER_SOURCE)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| DriverError::Spawn {
                message: format!("{}: {}", config.node_binary, e),
            })?;

        let stdin = child.stdin.take().ok_or_else(|| DriverError::Spawn {
            message: "sidecar stdin unavailable".to_string(),
        })?;
        let stdout = child.stdout.take().ok_or_else(|| DriverError::Spawn {
            message: "sidecar stdout unavailable".to_string(),
        })?;

        let mut driver = Self {
            child,
            stdin,
            stdout: BufReader::new(stdout),
            next_id: 0,
            closed: false,
        };

        driver
            .exchange(Command::Launch {
                browser: config.browser.playwright_name(),
                headless: config.headless,
                default_timeout_ms: default_timeout.as_millis() as u64,
            })
            .map_err(|e| match e.into_browser_error() {
                // The engine never came up, whatever the sidecar said.
                DriverError::Browser(message) | DriverError::Protocol(message) => {
                    DriverError::Spawn { message }
                }
                other => other,
            })?;

        Ok(driver)
    }

    fn exchange(&mut self, command: Command<'_>) -> Result<serde_json::Value, ExchangeError> {
        self.next_id += 1;
        let request = Request {
            id: self.next_id,
            command,
        };
        let line = serde_json::to_string(&request)
            .map_err(|e| ExchangeError::Transport(DriverError::Protocol(e.to_string())))?;

        writeln!(self.stdin, "{}", line).map_err(transport)?;
        self.stdin.flush().map_err(transport)?;

        let mut reply = String::new();
        let read = self.stdout.read_line(&mut reply).map_err(transport)?;
        if read == 0 {
            return Err(ExchangeError::Transport(DriverError::Protocol(
                "sidecar closed its stdout".to_string(),
            )));
        }

        parse_reply(&reply, self.next_id)
    }
}

impl BrowserDriver for PlaywrightDriver {
    fn navigate(&mut self, url: &str) -> DriverResult<()> {
        self.exchange(Command::Navigate { url })
            .map(|_| ())
            .map_err(ExchangeError::into_browser_error)
    }

    fn click(&mut self, target: &Locator) -> DriverResult<()> {
        self.exchange(Command::Click { target })
            .map(|_| ())
            .map_err(ExchangeError::into_element_error)
    }

    fn fill(&mut self, target: &Locator, value: &str) -> DriverResult<()> {
        self.exchange(Command::Fill { target, value })
            .map(|_| ())
            .map_err(ExchangeError::into_element_error)
    }

    fn count(&mut self, target: &Locator) -> DriverResult<usize> {
        let value = self
            .exchange(Command::Count { target })
            .map_err(ExchangeError::into_element_error)?;
        value
            .as_u64()
            .map(|n| n as usize)
            .ok_or_else(|| DriverError::Protocol(format!("count reply was not a number: {}", value)))
    }

    fn wait_until(&mut self, condition: &WaitCondition, timeout: Duration) -> DriverResult<()> {
        let timeout_ms = timeout.as_millis() as u64;
        let command = match condition {
            WaitCondition::UrlContains(fragment) => Command::WaitUrl {
                fragment,
                timeout_ms,
            },
            WaitCondition::Visible(target) => Command::WaitVisible { target, timeout_ms },
            WaitCondition::Gone(target) => Command::WaitGone { target, timeout_ms },
        };
        self.exchange(command)
            .map(|_| ())
            .map_err(|e| e.into_wait_error(condition, timeout))
    }

    fn current_url(&mut self) -> DriverResult<String> {
        let value = self
            .exchange(Command::CurrentUrl)
            .map_err(ExchangeError::into_browser_error)?;
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| DriverError::Protocol(format!("url reply was not a string: {}", value)))
    }

    fn cookies(&mut self) -> DriverResult<Vec<Cookie>> {
        let value = self
            .exchange(Command::Cookies)
            .map_err(ExchangeError::into_browser_error)?;
        serde_json::from_value(value)
            .map_err(|e| DriverError::Protocol(format!("bad cookie list: {}", e)))
    }

    fn set_cookies(&mut self, cookies: &[Cookie]) -> DriverResult<()> {
        self.exchange(Command::SetCookies { cookies })
            .map(|_| ())
            .map_err(ExchangeError::into_browser_error)
    }

    fn close(&mut self) -> DriverResult<()> {
        if self.closed {
            return Ok(());
        }
        let result = self
            .exchange(Command::Close)
            .map(|_| ())
            .map_err(ExchangeError::into_browser_error);
        self.closed = true;
        let _ = self.child.wait();
        result
    }
}

impl Drop for PlaywrightDriver {
    fn drop(&mut self) {
        if !self.closed {
            let _ = self.child.kill();
            let _ = self.child.wait();
        }
    }
}

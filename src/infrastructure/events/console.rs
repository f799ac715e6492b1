//! Console Event Sink
//!
//! Human-readable progress lines for interactive runs.

use crossterm::style::Stylize;

use crate::domain::ports::{RunEvent, RunEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that prints one progress line per interesting event.
///
/// Quiet events (cookie counts, step starts) only appear at `-v`.
/// The final summary is rendered separately from the run report, so
/// `RunFinished` prints nothing here.
pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    color: bool,
    verbose: u8,
}

impl ConsoleEventSink {
    /// Create a console sink writing to stdout
    pub fn stdout(color: bool, verbose: u8) -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
            color,
            verbose,
        }
    }

    /// Create a console sink writing to a custom writer (for testing)
    #[allow(dead_code)]
    pub fn with_writer<W: Write + Send + 'static>(writer: W, color: bool, verbose: u8) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            color,
            verbose,
        }
    }

    fn success(&self, text: &str) -> String {
        if self.color {
            format!("{}", text.green())
        } else {
            text.to_string()
        }
    }

    fn error(&self, text: &str) -> String {
        if self.color {
            format!("{}", text.red())
        } else {
            text.to_string()
        }
    }

    fn warning(&self, text: &str) -> String {
        if self.color {
            format!("{}", text.yellow())
        } else {
            text.to_string()
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.color {
            format!("{}", text.dark_grey())
        } else {
            text.to_string()
        }
    }

    fn line_for(&self, event: RunEvent) -> Option<String> {
        match event {
            RunEvent::RunStarted { server, image } => {
                Some(format!("● Provisioning {} with {}", server, image))
            }

            RunEvent::SessionRestored { cookie_count } => (self.verbose > 0)
                .then(|| self.dim(&format!("  restored {} saved cookies", cookie_count))),

            RunEvent::SessionRestoreSkipped { reason } => Some(format!(
                "{} saved session unreadable: {}",
                self.warning("⚠"),
                reason
            )),

            RunEvent::SessionProbed {
                authenticated: true,
            } => Some(format!(
                "{} Signed in with saved session",
                self.success("✓")
            )),

            RunEvent::SessionProbed {
                authenticated: false,
            } => (self.verbose > 0).then(|| self.dim("  saved session rejected")),

            RunEvent::LoginStarted { username } => Some(format!("● Signing in as {}", username)),

            RunEvent::LoginSucceeded => Some(format!("{} Signed in", self.success("✓"))),

            RunEvent::SessionSaved { cookie_count } => (self.verbose > 0)
                .then(|| self.dim(&format!("  session saved ({} cookies)", cookie_count))),

            RunEvent::SessionSaveFailed { error } => Some(format!(
                "{} session not saved: {}",
                self.warning("⚠"),
                error
            )),

            RunEvent::StepStarted { step } => {
                (self.verbose > 0).then(|| self.dim(&format!("  {} started", step.as_str())))
            }

            RunEvent::StepCompleted { step } => {
                Some(format!("{} {}", self.success("✓"), step.as_str()))
            }

            RunEvent::StepFailed { step, error } => Some(format!(
                "{} {}: {}",
                self.error("✗"),
                step.as_str(),
                error
            )),

            RunEvent::ServerAbsent => {
                (self.verbose > 0).then(|| self.dim("  no server to delete"))
            }

            RunEvent::CleanupFailed { error } => Some(format!(
                "{} browser teardown failed: {}",
                self.warning("⚠"),
                error
            )),

            // The report renderer owns the summary.
            RunEvent::RunFinished { .. } => None,
        }
    }
}

impl RunEventSink for ConsoleEventSink {
    fn on_event(&self, event: RunEvent) {
        if let Some(line) = self.line_for(event) {
            if let Ok(mut writer) = self.writer.lock() {
                let _ = writeln!(writer, "{}", line);
                let _ = writer.flush();
            }
        }
    }
}

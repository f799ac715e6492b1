//! JSON Event Sink
//!
//! Outputs run events as NDJSON for CI/automation consumption.

use crate::domain::ports::{RunEvent, RunEventSink};
use chrono::Utc;
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    #[allow(dead_code)]
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, mut event: serde_json::Value) {
        if let Some(record) = event.as_object_mut() {
            record.insert(
                "ts".to_string(),
                serde_json::Value::String(Utc::now().to_rfc3339()),
            );
        }
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl RunEventSink for JsonEventSink {
    fn on_event(&self, event: RunEvent) {
        let json = match event {
            RunEvent::RunStarted { server, image } => {
                serde_json::json!({
                    "event": "run_started",
                    "server": server,
                    "image": image,
                })
            }

            RunEvent::SessionRestored { cookie_count } => {
                serde_json::json!({
                    "event": "session_restored",
                    "cookie_count": cookie_count,
                })
            }

            RunEvent::SessionRestoreSkipped { reason } => {
                serde_json::json!({
                    "event": "session_restore_skipped",
                    "reason": reason,
                })
            }

            RunEvent::SessionProbed { authenticated } => {
                serde_json::json!({
                    "event": "session_probed",
                    "authenticated": authenticated,
                })
            }

            RunEvent::LoginStarted { username } => {
                serde_json::json!({
                    "event": "login_started",
                    "username": username,
                })
            }

            RunEvent::LoginSucceeded => {
                serde_json::json!({
                    "event": "login_succeeded",
                })
            }

            RunEvent::SessionSaved { cookie_count } => {
                serde_json::json!({
                    "event": "session_saved",
                    "cookie_count": cookie_count,
                })
            }

            RunEvent::SessionSaveFailed { error } => {
                serde_json::json!({
                    "event": "session_save_failed",
                    "error": error,
                })
            }

            RunEvent::StepStarted { step } => {
                serde_json::json!({
                    "event": "step_started",
                    "step": step.as_str(),
                })
            }

            RunEvent::StepCompleted { step } => {
                serde_json::json!({
                    "event": "step_completed",
                    "step": step.as_str(),
                })
            }

            RunEvent::StepFailed { step, error } => {
                serde_json::json!({
                    "event": "step_failed",
                    "step": step.as_str(),
                    "error": error,
                })
            }

            RunEvent::ServerAbsent => {
                serde_json::json!({
                    "event": "server_absent",
                })
            }

            RunEvent::CleanupFailed { error } => {
                serde_json::json!({
                    "event": "cleanup_failed",
                    "error": error,
                })
            }

            RunEvent::RunFinished { success } => {
                let status = if success { "success" } else { "failed" };
                serde_json::json!({
                    "event": "run_finished",
                    "status": status,
                })
            }
        };

        self.write_event(json);
    }
}

//! Output Rendering
//!
//! Renders the final run report to text or JSON.

use crossterm::style::Stylize;

use crate::config::ConfigWarning;
use crate::domain::{AuthOutcome, RunReport};

/// Print non-fatal config warnings to stderr.
pub fn print_config_warnings(warnings: &[ConfigWarning]) {
    for w in warnings {
        if let Some(line) = w.line {
            eprintln!(
                "⚠ Unknown config key '{}' in {}:{}",
                w.key,
                w.file.display(),
                line
            );
        } else {
            eprintln!("⚠ Unknown config key '{}' in {}", w.key, w.file.display());
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?", suggestion);
        }
    }
}

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

/// Icons for output rendering
struct Icons {
    check: &'static str,
    cross: &'static str,
    warn: &'static str,
}

impl Icons {
    fn unicode() -> Self {
        Self {
            check: "✓",
            cross: "✗",
            warn: "⚠",
        }
    }

    fn ascii() -> Self {
        Self {
            check: "[OK]",
            cross: "[FAIL]",
            warn: "[WARN]",
        }
    }
}

fn auth_label(auth: &AuthOutcome) -> String {
    match auth {
        AuthOutcome::CachedSession => "saved session".to_string(),
        AuthOutcome::FreshLogin => "fresh login".to_string(),
        AuthOutcome::Failed { reason } => format!("failed: {}", reason),
    }
}

/// Trait for rendering run reports
pub trait ReportRenderer {
    /// Render the run report
    fn render(&self, report: &RunReport);
}

/// Text renderer for run reports
pub struct TextRenderer {
    /// Whether to use colors
    pub color: bool,
    /// Whether to use unicode
    pub unicode: bool,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            color: true,
            unicode: true,
        }
    }
}

impl TextRenderer {
    fn render_to_string(&self, report: &RunReport) -> String {
        let icons = if self.unicode {
            Icons::unicode()
        } else {
            Icons::ascii()
        };

        let header = if report.is_success() {
            let line = format!("{} Run Complete", icons.check);
            if self.color {
                format!("{}", line.green())
            } else {
                line
            }
        } else {
            let line = format!("{} Run Failed", icons.cross);
            if self.color {
                format!("{}", line.red())
            } else {
                line
            }
        };

        let mut out = String::new();
        out.push_str(&header);
        out.push('\n');
        out.push('\n');
        out.push_str(&format!("  Auth: {}\n", auth_label(&report.auth)));
        out.push_str("  Steps:\n");
        for outcome in &report.steps {
            match &outcome.error {
                None => out.push_str(&format!("    {} {}\n", icons.check, outcome.step.as_str())),
                Some(error) => out.push_str(&format!(
                    "    {} {}: {}\n",
                    icons.cross,
                    outcome.step.as_str(),
                    error
                )),
            }
        }
        if let Some(error) = &report.cleanup_error {
            out.push_str(&format!("  {} cleanup: {}\n", icons.warn, error));
        }
        out
    }
}

impl ReportRenderer for TextRenderer {
    fn render(&self, report: &RunReport) {
        print!("{}", self.render_to_string(report));
    }
}

/// JSON renderer for run reports
pub struct JsonRenderer;

impl JsonRenderer {
    fn to_value(report: &RunReport) -> serde_json::Value {
        let auth = match &report.auth {
            AuthOutcome::CachedSession => serde_json::json!({"method": "cached-session"}),
            AuthOutcome::FreshLogin => serde_json::json!({"method": "fresh-login"}),
            AuthOutcome::Failed { reason } => {
                serde_json::json!({"method": "failed", "reason": reason})
            }
        };

        let steps: Vec<serde_json::Value> = report
            .steps
            .iter()
            .map(|outcome| match &outcome.error {
                None => serde_json::json!({
                    "step": outcome.step.as_str(),
                    "status": "ok",
                }),
                Some(error) => serde_json::json!({
                    "step": outcome.step.as_str(),
                    "status": "failed",
                    "error": error,
                }),
            })
            .collect();

        serde_json::json!({
            "success": report.is_success(),
            "auth": auth,
            "steps": steps,
            "cleanup_error": report.cleanup_error,
        })
    }
}

impl ReportRenderer for JsonRenderer {
    fn render(&self, report: &RunReport) {
        let json = Self::to_value(report);
        println!(
            "{}",
            serde_json::to_string_pretty(&json).unwrap_or_default()
        );
    }
}

/// Create a renderer based on format
pub fn create_renderer(format: OutputFormat, color: bool, unicode: bool) -> Box<dyn ReportRenderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer { color, unicode }),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}

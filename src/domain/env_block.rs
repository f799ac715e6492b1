//! Environment variable block for bulk entry.
//!
//! The deploy dialog accepts environment variables as one multi-line
//! KEY=VALUE text block. Values arrive from the environment or a config
//! file, where real newlines are awkward, so the literal two-character
//! sequence `\n` is accepted as a line separator and normalized before the
//! block reaches the UI.

/// A normalized multi-line `KEY=VALUE` block.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EnvBlock(String);

impl EnvBlock {
    /// Normalize literal `\n` escape sequences into real line breaks.
    ///
    /// The replacement is textual and deliberately naive: every backslash
    /// followed by `n` becomes a newline, matching what the deploy UI
    /// expects. No other escapes are interpreted.
    pub fn new(raw: &str) -> Self {
        Self(raw.replace("\\n", "\n"))
    }

    /// The normalized block, ready for the bulk-entry field.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the block holds no non-blank line.
    pub fn is_empty(&self) -> bool {
        self.lines().next().is_none()
    }

    /// Non-blank lines in order, exactly as they will reach the UI.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.0.lines().filter(|l| !l.trim().is_empty())
    }

    /// Well-formed `KEY=VALUE` pairs in order. Values keep any further
    /// `=` characters; lines without one are not pairs and are skipped.
    pub fn pairs(&self) -> Vec<(&str, &str)> {
        self.lines().filter_map(|l| l.split_once('=')).collect()
    }

    /// Number of well-formed pairs, for progress reporting.
    pub fn var_count(&self) -> usize {
        self.pairs().len()
    }
}

impl std::fmt::Display for EnvBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ABOUTME: Output formatting for CLI feedback.
// ABOUTME: Supports normal, quiet (CI), and JSON output modes.

use serde::Serialize;

/// Output mode for CLI feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-friendly output with progress messages
    Normal,
    /// Minimal output for CI (only final result)
    Quiet,
    /// JSON document for scripting
    Json,
}

/// Handles CLI output based on the configured mode.
pub struct Output {
    mode: OutputMode,
}

impl Output {
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Print a progress message (suppressed in quiet/json mode).
    pub fn progress(&self, message: &str) {
        if self.mode == OutputMode::Normal {
            println!("{message}");
        }
    }

    /// Print the final result line (suppressed in json mode).
    pub fn result(&self, message: &str) {
        if self.mode != OutputMode::Json {
            println!("{message}");
        }
    }

    /// Print a warning line (suppressed in quiet/json mode).
    pub fn warning(&self, message: &str) {
        if self.mode == OutputMode::Normal {
            eprintln!("warning: {message}");
        }
    }

    /// Emit a serializable document (json mode only).
    pub fn emit_json<T: Serialize>(&self, value: &T) {
        if self.mode == OutputMode::Json {
            if let Ok(json) = serde_json::to_string_pretty(value) {
                println!("{json}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_round_trips() {
        assert_eq!(Output::new(OutputMode::Quiet).mode(), OutputMode::Quiet);
    }
}

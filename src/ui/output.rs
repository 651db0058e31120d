//! Output abstraction layer
//!
//! This module provides a backend-agnostic interface for output operations.
//! CLI commands write through [`StdoutWriter`]; the TUI shows the same
//! [`MessageLevel`]s in its status bar.

use colored::Colorize;

/// Trait for output operations
///
/// # Examples
///
/// ```no_run
/// use curatr::ui::output::{OutputWriter, StdoutWriter};
///
/// let output = StdoutWriter::new();
/// output.write("Normal message");
/// output.success("Export completed!");
/// output.error("Something went wrong");
/// ```
pub trait OutputWriter {
    /// Write a normal message
    fn write(&self, message: &str);

    /// Write an error message
    fn error(&self, message: &str);

    /// Write a success message
    fn success(&self, message: &str);

    /// Write a warning message
    fn warning(&self, message: &str);

    /// Write an info message (dimmed/secondary)
    fn info(&self, message: &str);

    /// Write a message at the given level
    fn message(&self, level: MessageLevel, message: &str) {
        match level {
            MessageLevel::Normal => self.write(message),
            MessageLevel::Error => self.error(message),
            MessageLevel::Success => self.success(message),
            MessageLevel::Warning => self.warning(message),
            MessageLevel::Info => self.info(message),
        }
    }
}

/// CLI implementation - writes to stdout/stderr
///
/// In quiet mode only errors and warnings are printed.
///
/// # Examples
///
/// ```
/// use curatr::ui::output::{OutputWriter, StdoutWriter};
///
/// let output = StdoutWriter::new();
/// output.success("Table written");
/// output.error("Failed to open file");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutWriter {
    quiet: bool,
}

impl StdoutWriter {
    /// Create a new stdout writer
    #[must_use]
    pub const fn new() -> Self {
        Self { quiet: false }
    }

    /// Create a writer that suppresses non-essential output
    #[must_use]
    pub const fn quiet(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl OutputWriter for StdoutWriter {
    fn write(&self, message: &str) {
        println!("{message}");
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", "❌".red(), message);
    }

    fn success(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", "✓".green(), message);
        }
    }

    fn warning(&self, message: &str) {
        eprintln!("{} {}", "⚠️".yellow(), message);
    }

    fn info(&self, message: &str) {
        if !self.quiet {
            println!("{}", message.dimmed());
        }
    }
}

/// Message level for categorizing output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Normal message
    Normal,
    /// Error message
    Error,
    /// Success message
    Success,
    /// Warning message
    Warning,
    /// Info message
    Info,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::mock::MockOutput;

    #[test]
    fn test_stdout_writer_creation() {
        let _writer = StdoutWriter::new();
        let _writer2 = StdoutWriter::default();
        let _quiet = StdoutWriter::quiet(true);
    }

    #[test]
    fn test_message_dispatch() {
        let output = MockOutput::new();
        output.message(MessageLevel::Warning, "careful");
        output.message(MessageLevel::Success, "done");

        assert_eq!(
            output.messages(),
            vec![
                (MessageLevel::Warning, "careful".to_string()),
                (MessageLevel::Success, "done".to_string()),
            ]
        );
    }

    #[test]
    fn test_message_level_equality() {
        assert_eq!(MessageLevel::Normal, MessageLevel::Normal);
        assert_ne!(MessageLevel::Error, MessageLevel::Success);
    }
}

//! Color theme definitions for the ratatui TUI
//!
//! Defines colors and styles used throughout the application.

use crate::ui::output::MessageLevel;
use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Color for key hints and the help overlay border
    pub cursor: Color,
    /// Color for the kept marker
    pub kept: Color,
    /// Color for success messages
    pub success: Color,
    /// Color for error messages
    pub error: Color,
    /// Color for warning messages
    pub warning: Color,
    /// Color for info messages
    pub info: Color,
    /// Color for borders
    pub border: Color,
    /// Color for dimmed/inactive text
    pub dimmed: Color,
    /// Color for field labels
    pub label: Color,
    /// Color for file paths
    pub path: Color,
    /// Color for missing image files
    pub missing_file: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create a dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            cursor: Color::Cyan,
            kept: Color::Green,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,
            info: Color::Cyan,
            border: Color::DarkGray,
            dimmed: Color::DarkGray,
            label: Color::Magenta,
            path: Color::White,
            missing_file: Color::Red,
        }
    }

    /// Default text style
    #[must_use]
    pub fn normal_style(&self) -> Style {
        Style::default()
    }

    /// Style for key names and highlighted headings
    #[must_use]
    pub fn cursor_style(&self) -> Style {
        Style::default()
            .fg(self.cursor)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the kept marker (✓)
    #[must_use]
    pub fn kept_style(&self) -> Style {
        Style::default()
            .fg(self.kept)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for success messages
    #[must_use]
    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    /// Style for error messages
    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Style for warning messages
    #[must_use]
    pub fn warning_style(&self) -> Style {
        Style::default().fg(self.warning)
    }

    /// Style for info messages
    #[must_use]
    pub fn info_style(&self) -> Style {
        Style::default().fg(self.info)
    }

    /// Style for a message of the given level
    #[must_use]
    pub fn level_style(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Success => self.success_style(),
            MessageLevel::Error => self.error_style(),
            MessageLevel::Warning => self.warning_style(),
            MessageLevel::Info => self.info_style(),
            MessageLevel::Normal => self.normal_style(),
        }
    }

    /// Style for borders
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for dimmed text
    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed)
    }

    /// Style for field labels
    #[must_use]
    pub fn label_style(&self) -> Style {
        Style::default()
            .fg(self.label)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for file paths
    #[must_use]
    pub fn path_style(&self) -> Style {
        Style::default().fg(self.path)
    }

    /// Style for missing files
    #[must_use]
    pub fn missing_file_style(&self) -> Style {
        Style::default()
            .fg(self.missing_file)
            .add_modifier(Modifier::CROSSED_OUT)
    }
}

//! Data models for browse functionality

use crate::export::ExportSummary;

/// A request from the user, produced by a frontend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Jump to a 0-based index (clamped into the window)
    GoTo(i64),
    Next,
    Previous,
    First,
    Last,
    /// Set the active record's flag
    SetCurrent(bool),
    /// Invert the active record's flag
    ToggleCurrent,
    SelectAll,
    ClearAll,
    /// Write the selected subset
    Export,
    /// Show the active record's image in the system viewer
    OpenImage,
    Quit,
}

/// Summary of a finished browse session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowseOutcome {
    /// Successful exports performed
    pub exports: usize,
    /// Summary of the most recent successful export
    pub last_export: Option<ExportSummary>,
    /// Records selected when the session ended
    pub selected: usize,
    /// Selection changed after the last successful export
    pub unexported_changes: bool,
}

//! Core traits for UI abstraction layer

use super::error::Result;
use super::types::StatusMessage;
use crate::browse::Intent;
use crate::session::RecordView;

/// Everything a frontend needs to draw one screen
#[derive(Debug, Clone)]
pub struct BrowseFrame<'a> {
    /// Active record, `None` when the preview window is empty
    pub view: Option<RecordView<'a>>,
    /// Outcome of the last intent
    pub status: Option<&'a StatusMessage>,
    /// Selection changed since the last successful export
    pub dirty: bool,
}

/// Trait for interactive browse frontends
///
/// The browse controller alternates between `render` and `next_intent`.
/// A frontend never touches the session directly; it only draws frames
/// and translates user input into [`Intent`]s.
pub trait Frontend {
    /// Draw the current state
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend cannot draw.
    fn render(&mut self, frame: &BrowseFrame<'_>) -> Result<()>;

    /// Block until the user asks for something
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    fn next_intent(&mut self) -> Result<Intent>;
}

//! Scripted frontend and capturing writers for testing

use super::error::Result;
use super::input::{self, UserInput};
use super::output::{MessageLevel, OutputWriter};
use super::traits::{BrowseFrame, Frontend};
use crate::browse::Intent;
use std::cell::RefCell;
use std::collections::VecDeque;

/// Owned copy of a rendered frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameRecord {
    pub index: Option<usize>,
    pub total: usize,
    pub selected: bool,
    pub selected_count: usize,
    pub has_image: bool,
    pub status: Option<(MessageLevel, String)>,
    pub dirty: bool,
}

impl From<&BrowseFrame<'_>> for FrameRecord {
    fn from(frame: &BrowseFrame<'_>) -> Self {
        let view = frame.view.as_ref();
        Self {
            index: view.map(|v| v.index),
            total: view.map_or(0, |v| v.total),
            selected: view.is_some_and(|v| v.selected),
            selected_count: view.map_or(0, |v| v.selected_count),
            has_image: view.is_some_and(|v| v.image.is_some()),
            status: frame.status.map(|s| (s.level, s.text.clone())),
            dirty: frame.dirty,
        }
    }
}

/// Mock frontend that replays predetermined intents
///
/// Once the script runs out it answers `Intent::Quit`.
#[derive(Debug, Clone, Default)]
pub struct MockFrontend {
    script: VecDeque<Intent>,
    /// Every frame rendered so far
    pub frames: Vec<FrameRecord>,
}

impl MockFrontend {
    /// Create a mock frontend with a script of intents
    #[must_use]
    pub fn new(script: impl IntoIterator<Item = Intent>) -> Self {
        Self {
            script: script.into_iter().collect(),
            frames: Vec::new(),
        }
    }

    /// Most recent frame
    #[must_use]
    pub fn last_frame(&self) -> Option<&FrameRecord> {
        self.frames.last()
    }
}

impl Frontend for MockFrontend {
    fn render(&mut self, frame: &BrowseFrame<'_>) -> Result<()> {
        self.frames.push(FrameRecord::from(frame));
        Ok(())
    }

    fn next_intent(&mut self) -> Result<Intent> {
        Ok(self.script.pop_front().unwrap_or(Intent::Quit))
    }
}

/// Output writer that records messages instead of printing them
#[derive(Debug, Default)]
pub struct MockOutput {
    messages: RefCell<Vec<(MessageLevel, String)>>,
}

impl MockOutput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded messages in order
    #[must_use]
    pub fn messages(&self) -> Vec<(MessageLevel, String)> {
        self.messages.borrow().clone()
    }

    /// Recorded messages at `level`
    #[must_use]
    pub fn at_level(&self, level: MessageLevel) -> Vec<String> {
        self.messages
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    fn push(&self, level: MessageLevel, message: &str) {
        self.messages.borrow_mut().push((level, message.to_string()));
    }
}

impl OutputWriter for MockOutput {
    fn write(&self, message: &str) {
        self.push(MessageLevel::Normal, message);
    }

    fn error(&self, message: &str) {
        self.push(MessageLevel::Error, message);
    }

    fn success(&self, message: &str) {
        self.push(MessageLevel::Success, message);
    }

    fn warning(&self, message: &str) {
        self.push(MessageLevel::Warning, message);
    }

    fn info(&self, message: &str) {
        self.push(MessageLevel::Info, message);
    }
}

/// Input that answers every confirmation with a fixed value
#[derive(Debug, Clone, Copy)]
pub struct MockInput {
    pub answer: Option<bool>,
}

impl UserInput for MockInput {
    fn prompt_confirm(&self, _prompt: &str, _default: bool) -> input::Result<Option<bool>> {
        Ok(self.answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_frontend_replays_script() {
        let mut frontend = MockFrontend::new([Intent::Next, Intent::ToggleCurrent]);
        assert_eq!(frontend.next_intent().unwrap(), Intent::Next);
        assert_eq!(frontend.next_intent().unwrap(), Intent::ToggleCurrent);
        assert_eq!(frontend.next_intent().unwrap(), Intent::Quit);
    }

    #[test]
    fn test_mock_frontend_records_frames() {
        let mut frontend = MockFrontend::default();
        let frame = BrowseFrame {
            view: None,
            status: None,
            dirty: true,
        };
        frontend.render(&frame).unwrap();

        let recorded = frontend.last_frame().unwrap();
        assert_eq!(recorded.index, None);
        assert!(recorded.dirty);
    }

    #[test]
    fn test_mock_output_levels() {
        let output = MockOutput::new();
        output.success("a");
        output.error("b");
        output.success("c");
        assert_eq!(output.at_level(MessageLevel::Success), vec!["a", "c"]);
        assert_eq!(output.at_level(MessageLevel::Error), vec!["b"]);
    }
}

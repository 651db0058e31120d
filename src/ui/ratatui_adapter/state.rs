//! Application state for the ratatui TUI
//!
//! Holds an owned copy of the last frame handed over by the browse
//! controller, plus everything the terminal UI tracks on its own: the
//! overlay mode, the record-number jump buffer, and the quit confirmation.

use super::widgets::{ConfirmDialogState, KeyHint};
use crate::browse::Intent;
use crate::resolve::{ImageInfo, ImageResolver};
use crate::ui::{BrowseFrame, StatusMessage};
use std::path::PathBuf;
use std::time::Duration;

/// Current mode of the TUI application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Normal browsing mode
    #[default]
    Normal,
    /// Help overlay is visible
    Help,
    /// Confirmation dialog is active
    Confirm,
}

/// Owned snapshot of the record being displayed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Screen {
    /// Active index (0-based) and window size
    pub position: Option<(usize, usize)>,
    pub selected: bool,
    pub selected_count: usize,
    /// Image path as written in the table
    pub stored_path: String,
    /// Resolved image file
    pub image_path: Option<PathBuf>,
    /// Size, dimensions, and format of the resolved image
    pub image: Option<ImageInfo>,
    /// Labelled text fields in display order
    pub fields: Vec<(&'static str, Option<String>)>,
    pub status: Option<StatusMessage>,
    pub dirty: bool,
}

impl Screen {
    /// Copy everything needed for drawing out of `frame`
    #[must_use]
    pub fn capture(frame: &BrowseFrame<'_>) -> Self {
        let status = frame.status.cloned();
        let Some(view) = &frame.view else {
            return Self {
                status,
                dirty: frame.dirty,
                ..Self::default()
            };
        };

        let image = view.image.as_deref().and_then(|path| match ImageResolver::inspect(path) {
            Ok(info) => Some(info),
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "Cannot inspect image");
                None
            }
        });

        Self {
            position: Some((view.index, view.total)),
            selected: view.selected,
            selected_count: view.selected_count,
            stored_path: view.record.image_path().to_string(),
            image_path: view.image.clone(),
            image,
            fields: view
                .record
                .fields()
                .labeled()
                .into_iter()
                .map(|(label, value)| (label, value.map(str::to_string)))
                .collect(),
            status,
            dirty: frame.dirty,
        }
    }
}

/// Application state for the browse TUI
#[derive(Debug)]
pub struct AppState {
    /// Current UI mode
    pub mode: Mode,
    /// Last frame from the controller
    pub screen: Screen,
    /// Digits typed toward a record-number jump
    pub jump: String,
    /// State for confirmation dialog
    pub confirm_state: Option<ConfirmDialogState>,
    /// Message TTL for auto-expiry
    pub message_ttl: Duration,
    /// Hints shown in the help bar
    pub hints: Vec<KeyHint>,
}

impl AppState {
    /// Create new application state
    #[must_use]
    pub fn new(hints: Vec<KeyHint>) -> Self {
        Self {
            mode: Mode::Normal,
            screen: Screen::default(),
            jump: String::new(),
            confirm_state: None,
            message_ttl: Duration::from_secs(5),
            hints,
        }
    }

    /// Replace the displayed frame
    pub fn capture(&mut self, frame: &BrowseFrame<'_>) {
        self.screen = Screen::capture(frame);
    }

    /// Status message, unless it has expired
    #[must_use]
    pub fn active_status(&self) -> Option<&StatusMessage> {
        self.screen
            .status
            .as_ref()
            .filter(|msg| !msg.is_expired(self.message_ttl))
    }

    /// Append a digit to the jump buffer
    pub fn jump_push(&mut self, digit: char) {
        if digit.is_ascii_digit() {
            self.jump.push(digit);
        }
    }

    /// Remove the last typed digit, returning whether one was removed
    pub fn jump_pop(&mut self) -> bool {
        self.jump.pop().is_some()
    }

    /// Consume the jump buffer as a 0-based index
    ///
    /// Record numbers are typed 1-based, as shown in the header.
    pub fn jump_take(&mut self) -> Option<i64> {
        if self.jump.is_empty() {
            return None;
        }
        let number = self.jump.parse::<i64>().unwrap_or(i64::MAX);
        self.jump.clear();
        Some(number.saturating_sub(1))
    }

    /// Quit now, or ask first when there are unexported changes
    pub fn request_quit(&mut self) -> Option<Intent> {
        if !self.screen.dirty {
            return Some(Intent::Quit);
        }

        let context = vec![format!("{} record(s) selected", self.screen.selected_count)];
        self.enter_confirm(
            "Quit",
            "Selection changed since the last export. Quit anyway?",
            context,
        );
        None
    }

    /// Enter confirmation mode
    pub fn enter_confirm(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        context: Vec<String>,
    ) {
        self.confirm_state = Some(ConfirmDialogState::new(title, message).with_context(context));
        self.mode = Mode::Confirm;
    }

    /// Cancel confirmation mode
    pub fn cancel_confirm(&mut self) {
        self.mode = Mode::Normal;
        self.confirm_state = None;
    }

    /// Get immutable reference to confirm state
    #[must_use]
    pub const fn confirm_state(&self) -> Option<&ConfirmDialogState> {
        self.confirm_state.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Fixture;

    fn state() -> AppState {
        AppState::new(Vec::new())
    }

    #[test]
    fn test_jump_buffer() {
        let mut state = state();
        assert_eq!(state.jump_take(), None);

        state.jump_push('4');
        state.jump_push('x');
        state.jump_push('2');
        assert_eq!(state.jump, "42");

        assert!(state.jump_pop());
        assert_eq!(state.jump_take(), Some(3));
        assert!(state.jump.is_empty());
        assert!(!state.jump_pop());
    }

    #[test]
    fn test_jump_zero_and_overflow() {
        let mut state = state();
        state.jump_push('0');
        assert_eq!(state.jump_take(), Some(-1));

        for _ in 0..30 {
            state.jump_push('9');
        }
        assert_eq!(state.jump_take(), Some(i64::MAX - 1));
    }

    #[test]
    fn test_quit_when_clean() {
        let mut state = state();
        assert_eq!(state.request_quit(), Some(Intent::Quit));
        assert_eq!(state.mode, Mode::Normal);
    }

    #[test]
    fn test_quit_when_dirty_asks() {
        let mut state = state();
        state.screen.dirty = true;

        assert_eq!(state.request_quit(), None);
        assert_eq!(state.mode, Mode::Confirm);
        assert!(state.confirm_state().is_some());

        state.cancel_confirm();
        assert_eq!(state.mode, Mode::Normal);
        assert!(state.confirm_state().is_none());
    }

    #[test]
    fn test_capture_frame() {
        let fixture = Fixture::new(3);
        let mut session = fixture.session(100);
        session.go_to(2).unwrap();
        session.toggle_current(true).unwrap();

        let status = StatusMessage::info("hello");
        let frame = BrowseFrame {
            view: session.view(),
            status: Some(&status),
            dirty: session.is_dirty(),
        };
        let mut state = state();
        state.capture(&frame);

        let screen = &state.screen;
        assert_eq!(screen.position, Some((2, 3)));
        assert!(screen.selected);
        assert_eq!(screen.stored_path, "img_2.jpg");
        assert!(screen.image_path.is_some());
        assert_eq!(screen.image.as_ref().map(|i| i.size), Some(7));
        assert_eq!(screen.fields[0], ("caption", Some("caption 2".to_string())));
        assert!(screen.dirty);
        assert_eq!(state.active_status().map(|s| s.text.as_str()), Some("hello"));
    }

    #[test]
    fn test_capture_empty_frame() {
        let frame = BrowseFrame {
            view: None,
            status: None,
            dirty: false,
        };
        let screen = Screen::capture(&frame);
        assert_eq!(screen.position, None);
        assert!(screen.fields.is_empty());
    }
}

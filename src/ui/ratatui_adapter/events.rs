//! Event handling for the ratatui TUI
//!
//! Maps keyboard events to browse intents. Keys that only affect the
//! terminal UI (help overlay, jump buffer, quit confirmation) are handled
//! here and never reach the controller.

use super::state::{AppState, Mode};
use crate::browse::Intent;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Redraw and keep reading
    Continue,
    /// Hand an intent to the controller
    Intent(Intent),
    /// No action taken
    Ignored,
}

impl From<Option<Intent>> for EventResult {
    fn from(intent: Option<Intent>) -> Self {
        intent.map_or(Self::Continue, Self::Intent)
    }
}

/// Handle events in normal mode
fn handle_normal_mode(state: &mut AppState, key: KeyEvent) -> EventResult {
    let result = match (key.code, key.modifiers) {
        // Exit
        (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Char('q'), _) => {
            state.request_quit().into()
        }
        (KeyCode::Esc, _) => {
            if state.jump.is_empty() {
                state.request_quit().into()
            } else {
                state.jump.clear();
                EventResult::Continue
            }
        }

        // Export
        (KeyCode::Char('s'), KeyModifiers::NONE | KeyModifiers::CONTROL) => {
            EventResult::Intent(Intent::Export)
        }

        // Navigation
        (KeyCode::Left, _) | (KeyCode::Char('h'), KeyModifiers::NONE) => {
            EventResult::Intent(Intent::Previous)
        }
        (KeyCode::Right, _) | (KeyCode::Char('l'), KeyModifiers::NONE) => {
            EventResult::Intent(Intent::Next)
        }
        (KeyCode::Home, _) => EventResult::Intent(Intent::First),
        (KeyCode::End, _) => EventResult::Intent(Intent::Last),

        // Jump to record number
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) if c.is_ascii_digit() => {
            state.jump_push(c);
            EventResult::Continue
        }
        (KeyCode::Backspace, _) => {
            if state.jump_pop() {
                EventResult::Continue
            } else {
                EventResult::Ignored
            }
        }
        (KeyCode::Enter, _) => state
            .jump_take()
            .map_or(EventResult::Ignored, |index| EventResult::Intent(Intent::GoTo(index))),

        // Selection
        (KeyCode::Char(' '), _) => EventResult::Intent(Intent::ToggleCurrent),
        (KeyCode::Char('y'), KeyModifiers::NONE) => EventResult::Intent(Intent::SetCurrent(true)),
        (KeyCode::Char('n'), KeyModifiers::NONE) => EventResult::Intent(Intent::SetCurrent(false)),
        (KeyCode::Char('a'), KeyModifiers::NONE) => EventResult::Intent(Intent::SelectAll),
        (KeyCode::Char('c'), KeyModifiers::NONE) => EventResult::Intent(Intent::ClearAll),

        (KeyCode::Char('o'), KeyModifiers::NONE) => EventResult::Intent(Intent::OpenImage),

        // Help overlay
        (KeyCode::F(1), _) | (KeyCode::Char('?'), _) => {
            state.mode = Mode::Help;
            EventResult::Continue
        }

        _ => EventResult::Ignored,
    };

    if matches!(result, EventResult::Intent(_)) {
        state.jump.clear();
    }
    result
}

/// Handle events in help mode
fn handle_help_mode(state: &mut AppState) -> EventResult {
    // Any key closes help
    state.mode = Mode::Normal;
    EventResult::Continue
}

/// Handle events while the quit confirmation is open
fn handle_confirm_mode(state: &mut AppState, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Char('y' | 'Y') | KeyCode::Enter => {
            state.cancel_confirm();
            EventResult::Intent(Intent::Quit)
        }
        KeyCode::Char('n' | 'N') | KeyCode::Esc => {
            state.cancel_confirm();
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

/// Dispatch a key event according to the current mode
fn handle_key(state: &mut AppState, key: KeyEvent) -> EventResult {
    if key.kind != KeyEventKind::Press {
        return EventResult::Ignored;
    }

    match state.mode {
        Mode::Normal => handle_normal_mode(state, key),
        Mode::Help => handle_help_mode(state),
        Mode::Confirm => handle_confirm_mode(state, key),
    }
}

/// Poll for events and handle them
///
/// A poll timeout yields `Continue` so the caller redraws and expired
/// status messages disappear.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_and_handle(state: &mut AppState, timeout: Duration) -> std::io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Continue);
    }

    let result = match event::read()? {
        Event::Key(key) => handle_key(state, key),
        Event::Resize(_, _) => EventResult::Continue,
        _ => EventResult::Ignored,
    };

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_state() -> AppState {
        AppState::new(Vec::new())
    }

    fn press(state: &mut AppState, code: KeyCode) -> EventResult {
        handle_key(state, KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_navigation_keys() {
        let mut state = make_state();
        assert_eq!(press(&mut state, KeyCode::Right), EventResult::Intent(Intent::Next));
        assert_eq!(press(&mut state, KeyCode::Char('l')), EventResult::Intent(Intent::Next));
        assert_eq!(press(&mut state, KeyCode::Left), EventResult::Intent(Intent::Previous));
        assert_eq!(press(&mut state, KeyCode::Char('h')), EventResult::Intent(Intent::Previous));
        assert_eq!(press(&mut state, KeyCode::Home), EventResult::Intent(Intent::First));
        assert_eq!(press(&mut state, KeyCode::End), EventResult::Intent(Intent::Last));
    }

    #[test]
    fn test_selection_keys() {
        let mut state = make_state();
        assert_eq!(
            press(&mut state, KeyCode::Char(' ')),
            EventResult::Intent(Intent::ToggleCurrent)
        );
        assert_eq!(
            press(&mut state, KeyCode::Char('y')),
            EventResult::Intent(Intent::SetCurrent(true))
        );
        assert_eq!(
            press(&mut state, KeyCode::Char('n')),
            EventResult::Intent(Intent::SetCurrent(false))
        );
        assert_eq!(press(&mut state, KeyCode::Char('a')), EventResult::Intent(Intent::SelectAll));
        assert_eq!(press(&mut state, KeyCode::Char('c')), EventResult::Intent(Intent::ClearAll));
    }

    #[test]
    fn test_export_keys() {
        let mut state = make_state();
        assert_eq!(press(&mut state, KeyCode::Char('s')), EventResult::Intent(Intent::Export));

        let ctrl_s = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert_eq!(handle_key(&mut state, ctrl_s), EventResult::Intent(Intent::Export));
    }

    #[test]
    fn test_jump_to_record_number() {
        let mut state = make_state();
        assert_eq!(press(&mut state, KeyCode::Enter), EventResult::Ignored);

        press(&mut state, KeyCode::Char('1'));
        press(&mut state, KeyCode::Char('2'));
        press(&mut state, KeyCode::Char('5'));
        assert_eq!(press(&mut state, KeyCode::Backspace), EventResult::Continue);
        assert_eq!(state.jump, "12");

        assert_eq!(press(&mut state, KeyCode::Enter), EventResult::Intent(Intent::GoTo(11)));
        assert!(state.jump.is_empty());
    }

    #[test]
    fn test_other_intent_clears_jump() {
        let mut state = make_state();
        press(&mut state, KeyCode::Char('7'));
        press(&mut state, KeyCode::Right);
        assert!(state.jump.is_empty());
    }

    #[test]
    fn test_escape_clears_jump_before_quitting() {
        let mut state = make_state();
        press(&mut state, KeyCode::Char('3'));
        assert_eq!(press(&mut state, KeyCode::Esc), EventResult::Continue);
        assert_eq!(press(&mut state, KeyCode::Esc), EventResult::Intent(Intent::Quit));
    }

    #[test]
    fn test_quit_confirmation_flow() {
        let mut state = make_state();
        state.screen.dirty = true;

        assert_eq!(press(&mut state, KeyCode::Char('q')), EventResult::Continue);
        assert_eq!(state.mode, Mode::Confirm);

        assert_eq!(press(&mut state, KeyCode::Char('x')), EventResult::Ignored);
        assert_eq!(press(&mut state, KeyCode::Char('n')), EventResult::Continue);
        assert_eq!(state.mode, Mode::Normal);

        press(&mut state, KeyCode::Char('q'));
        assert_eq!(press(&mut state, KeyCode::Char('y')), EventResult::Intent(Intent::Quit));
    }

    #[test]
    fn test_help_overlay() {
        let mut state = make_state();
        assert_eq!(press(&mut state, KeyCode::F(1)), EventResult::Continue);
        assert_eq!(state.mode, Mode::Help);

        // Keys are swallowed while help is open
        assert_eq!(press(&mut state, KeyCode::Char('s')), EventResult::Continue);
        assert_eq!(state.mode, Mode::Normal);
    }

    #[test]
    fn test_release_events_ignored() {
        let mut state = make_state();
        let mut key = KeyEvent::new(KeyCode::Right, KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(handle_key(&mut state, key), EventResult::Ignored);
    }
}

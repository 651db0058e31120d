//! Ratatui-based browse frontend
//!
//! Implements the `Frontend` trait using ratatui for drawing and crossterm
//! for input. The terminal is put in raw mode on the alternate screen for
//! the frontend's lifetime and restored on drop.

use super::events::{EventResult, poll_and_handle};
use super::state::{AppState, Mode};
use super::theme::Theme;
use super::widgets::{ConfirmDialog, Header, HelpBar, HelpOverlay, RecordPane, StatusBar};
use crate::browse::Intent;
use crate::ui::error::Result;
use crate::ui::traits::{BrowseFrame, Frontend};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
};
use std::io::{self, Stdout};
use std::time::Duration;

/// How long to wait for input before redrawing
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Terminal frontend for the browse controller
pub struct RatatuiFrontend {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    state: AppState,
    theme: Theme,
}

impl RatatuiFrontend {
    /// Take over the terminal
    ///
    /// # Errors
    ///
    /// Returns an error if raw mode or the alternate screen cannot be
    /// entered.
    pub fn new() -> Result<Self> {
        let terminal = match Self::setup_terminal() {
            Ok(terminal) => terminal,
            Err(e) => {
                let _ = Self::cleanup_terminal();
                return Err(e);
            }
        };

        Ok(Self {
            terminal,
            state: AppState::new(HelpBar::default_hints()),
            theme: Theme::default(),
        })
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(Into::into)
    }

    /// Cleanup terminal after TUI
    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        let Self {
            terminal,
            state,
            theme,
        } = self;
        terminal.draw(|frame| render(frame, state, theme))?;
        Ok(())
    }
}

/// Render the UI
fn render(frame: &mut Frame, state: &AppState, theme: &Theme) {
    let area = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(5),    // Record
            Constraint::Length(3), // Status bar
            Constraint::Length(1), // Help bar
        ])
        .split(area);

    frame.render_widget(Header::new(&state.screen, theme, &state.jump), main_layout[0]);
    frame.render_widget(RecordPane::new(&state.screen, theme), main_layout[1]);
    frame.render_widget(
        StatusBar::new(state.active_status(), theme, state.screen.dirty),
        main_layout[2],
    );
    frame.render_widget(HelpBar::new(&state.hints, theme), main_layout[3]);

    match state.mode {
        Mode::Help => frame.render_widget(HelpOverlay::new(theme), area),
        Mode::Confirm => {
            if let Some(confirm_state) = state.confirm_state() {
                frame.render_widget(ConfirmDialog::new(confirm_state, theme), area);
            }
        }
        Mode::Normal => {}
    }
}

impl Frontend for RatatuiFrontend {
    fn render(&mut self, frame: &BrowseFrame<'_>) -> Result<()> {
        self.state.capture(frame);
        self.draw()
    }

    fn next_intent(&mut self) -> Result<Intent> {
        loop {
            match poll_and_handle(&mut self.state, POLL_INTERVAL)? {
                EventResult::Intent(intent) => return Ok(intent),
                EventResult::Continue => self.draw()?,
                EventResult::Ignored => {}
            }
        }
    }
}

impl Drop for RatatuiFrontend {
    fn drop(&mut self) {
        if let Err(e) = Self::cleanup_terminal() {
            tracing::warn!(error = %e, "Terminal cleanup failed");
        }
        let _ = self.terminal.show_cursor();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::StatusMessage;
    use crate::ui::ratatui_adapter::widgets::buffer_text;
    use ratatui::backend::TestBackend;

    fn draw_to_text(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let theme = Theme::default();
        terminal.draw(|frame| render(frame, state, &theme)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_layout_shows_all_regions() {
        let mut state = AppState::new(HelpBar::default_hints());
        state.screen.position = Some((0, 3));
        state.screen.stored_path = "img_0.jpg".to_string();
        state.screen.status = Some(StatusMessage::info("Selection cleared"));

        let text = draw_to_text(&state);
        assert!(text.contains("Record 1 / 3"));
        assert!(text.contains("img_0.jpg"));
        assert!(text.contains("Selection cleared"));
        assert!(text.contains("s:export"));
    }

    #[test]
    fn test_overlays_drawn_by_mode() {
        let mut state = AppState::new(HelpBar::default_hints());
        state.mode = Mode::Help;
        assert!(draw_to_text(&state).contains("Press any key to close"));

        state.mode = Mode::Normal;
        state.screen.dirty = true;
        assert_eq!(state.request_quit(), None);
        assert!(draw_to_text(&state).contains("[N] Stay"));
    }
}

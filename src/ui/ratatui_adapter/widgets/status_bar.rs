//! Status bar widget for displaying messages

use crate::ui::output::MessageLevel;
use crate::ui::ratatui_adapter::theme::Theme;
use crate::ui::StatusMessage;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Status bar widget showing the latest message and export state
pub struct StatusBar<'a> {
    /// Message to display
    message: Option<&'a StatusMessage>,
    /// Theme for styling
    theme: &'a Theme,
    /// Selection changed since the last export
    dirty: bool,
}

impl<'a> StatusBar<'a> {
    /// Create a new status bar widget
    #[must_use]
    pub const fn new(message: Option<&'a StatusMessage>, theme: &'a Theme, dirty: bool) -> Self {
        Self {
            message,
            theme,
            dirty,
        }
    }

    /// Get prefix for a message level
    const fn prefix_for_level(level: MessageLevel) -> &'static str {
        match level {
            MessageLevel::Success => "✓ ",
            MessageLevel::Error => "✗ ",
            MessageLevel::Warning => "⚠ ",
            MessageLevel::Info => "ℹ ",
            MessageLevel::Normal => "",
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(" Status ");

        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(80), Constraint::Percentage(20)])
            .split(inner);

        if let Some(msg) = self.message {
            let style = self.theme.level_style(msg.level);
            let line = Line::from(vec![
                Span::styled(Self::prefix_for_level(msg.level), style),
                Span::styled(msg.text.as_str(), style),
            ]);
            Paragraph::new(line).render(chunks[0], buf);
        }

        let indicator = if self.dirty {
            Line::styled("● not exported", self.theme.warning_style())
        } else {
            Line::styled("exported", self.theme.dimmed_style())
        };
        Paragraph::new(indicator)
            .alignment(Alignment::Right)
            .render(chunks[1], buf);
    }
}

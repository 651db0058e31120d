//! Confirmation dialog widget
//!
//! Modal overlay asking the user to confirm before leaving the browser
//! with a selection that has not been exported.

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// State for the confirmation dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmDialogState {
    /// The title/prompt for the dialog
    pub title: String,
    /// Detailed message explaining what will happen
    pub message: String,
    /// Additional context lines (at most three are shown)
    pub context: Vec<String>,
}

impl ConfirmDialogState {
    /// Create a new confirmation dialog state
    #[must_use]
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            context: Vec::new(),
        }
    }

    /// Add context lines
    #[must_use]
    pub fn with_context(mut self, context: Vec<String>) -> Self {
        self.context = context;
        self
    }
}

/// Confirmation dialog overlay widget
pub struct ConfirmDialog<'a> {
    state: &'a ConfirmDialogState,
    theme: &'a Theme,
}

impl<'a> ConfirmDialog<'a> {
    /// Create a new confirmation dialog widget
    #[must_use]
    pub const fn new(state: &'a ConfirmDialogState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    /// Calculate centered area for the modal
    fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        Rect::new(x, y, width.min(area.width), height.min(area.height))
    }

    /// Keep the tail of `s` so it fits in `max` characters
    fn truncate_front(s: &str, max: usize) -> String {
        let count = s.chars().count();
        if count <= max {
            return s.to_string();
        }
        let keep = max.saturating_sub(3);
        let tail: String = s.chars().skip(count - keep).collect();
        format!("...{tail}")
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let message_width = u16::try_from(self.state.message.chars().count() + 4).unwrap_or(u16::MAX);
        let width = message_width
            .clamp(40, 70)
            .min(area.width.saturating_sub(4));

        let shown_context = self.state.context.len().min(3);
        let context_lines = if shown_context == 0 {
            0
        } else {
            u16::try_from(shown_context).unwrap_or(3) + 1 // +1 for separator
        };
        let height = 7 + context_lines;

        let modal_area = Self::centered_rect(width, height, area);

        // Clear background
        Clear.render(modal_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .title(format!(" {} ", self.state.title))
            .title_alignment(Alignment::Center);

        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let mut constraints = vec![
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Message
        ];

        if context_lines > 0 {
            constraints.push(Constraint::Length(1)); // Separator
            constraints.push(Constraint::Length(context_lines - 1)); // Context items
        }

        constraints.push(Constraint::Length(1)); // Spacing
        constraints.push(Constraint::Length(1)); // Buttons
        constraints.push(Constraint::Length(1)); // Help

        let chunks = Layout::vertical(constraints).split(inner);

        Paragraph::new(self.state.message.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::White))
            .render(chunks[1], buf);

        let mut next_chunk = 2;
        if shown_context > 0 {
            let separator_width = usize::from(inner.width.saturating_sub(2));
            Paragraph::new("─".repeat(separator_width))
                .alignment(Alignment::Center)
                .style(self.theme.dimmed_style())
                .render(chunks[next_chunk], buf);
            next_chunk += 1;

            let max = usize::from(width.saturating_sub(6));
            let context_text: Vec<Line> = self
                .state
                .context
                .iter()
                .take(3)
                .map(|s| Line::from(format!("  • {}", Self::truncate_front(s, max))))
                .collect();

            Paragraph::new(context_text)
                .style(self.theme.dimmed_style())
                .render(chunks[next_chunk], buf);
            next_chunk += 1;
        }

        // Spacing
        next_chunk += 1;

        let buttons = Line::from(vec![
            Span::styled(
                " [Y] Quit ",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled(
                " [N] Stay ",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);

        Paragraph::new(buttons)
            .alignment(Alignment::Center)
            .render(chunks[next_chunk], buf);
        next_chunk += 1;

        Paragraph::new("Y/Enter: confirm | N/ESC: cancel")
            .style(self.theme.dimmed_style())
            .alignment(Alignment::Center)
            .render(chunks[next_chunk], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::ratatui_adapter::widgets::buffer_text;

    #[test]
    fn test_confirm_dialog_state_creation() {
        let state = ConfirmDialogState::new("Quit", "Quit anyway?");

        assert_eq!(state.title, "Quit");
        assert!(state.context.is_empty());
    }

    #[test]
    fn test_confirm_dialog_with_context() {
        let state = ConfirmDialogState::new("Quit", "Quit anyway?")
            .with_context(vec!["3 record(s) selected".to_string()]);

        assert_eq!(state.context.len(), 1);
    }

    #[test]
    fn test_truncate_front_keeps_tail() {
        assert_eq!(ConfirmDialog::truncate_front("short", 10), "short");
        assert_eq!(ConfirmDialog::truncate_front("abcdefghij", 6), "...hij");
        assert_eq!(ConfirmDialog::truncate_front("ééééé", 4), "...é");
    }

    #[test]
    fn test_confirm_dialog_renders() {
        let theme = Theme::default();
        let state = ConfirmDialogState::new("Quit", "Quit anyway?")
            .with_context(vec!["2 record(s) selected".to_string()]);
        let area = Rect::new(0, 0, 80, 20);
        let mut buf = Buffer::empty(area);

        ConfirmDialog::new(&state, &theme).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("Quit anyway?"));
        assert!(text.contains("2 record(s) selected"));
        assert!(text.contains("[Y] Quit"));
    }
}

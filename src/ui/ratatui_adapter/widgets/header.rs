//! Header widget: record position, kept marker, and selection count

use crate::ui::ratatui_adapter::state::Screen;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Header bar above the record pane
pub struct Header<'a> {
    screen: &'a Screen,
    theme: &'a Theme,
    /// Digits typed toward a jump, shown while non-empty
    jump: &'a str,
}

impl<'a> Header<'a> {
    #[must_use]
    pub const fn new(screen: &'a Screen, theme: &'a Theme, jump: &'a str) -> Self {
        Self {
            screen,
            theme,
            jump,
        }
    }

    fn build_line(&self) -> Line<'a> {
        let Some((index, total)) = self.screen.position else {
            return Line::styled("No records", self.theme.dimmed_style());
        };

        let marker = if self.screen.selected {
            Span::styled("[✓ kept]", self.theme.kept_style())
        } else {
            Span::styled("[  not kept]", self.theme.dimmed_style())
        };

        let mut spans = vec![
            Span::styled("Record ", self.theme.dimmed_style()),
            Span::styled(format!("{} / {total}", index + 1), self.theme.cursor_style()),
            Span::raw("   "),
            marker,
            Span::raw("   "),
            Span::styled("Selected: ", self.theme.dimmed_style()),
            Span::raw(self.screen.selected_count.to_string()),
        ];

        if !self.jump.is_empty() {
            spans.push(Span::raw("   "));
            spans.push(Span::styled("Go to: ", self.theme.dimmed_style()));
            spans.push(Span::styled(format!("{}_", self.jump), self.theme.info_style()));
        }

        Line::from(spans)
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(" curatr ");

        Paragraph::new(self.build_line()).block(block).render(area, buf);
    }
}

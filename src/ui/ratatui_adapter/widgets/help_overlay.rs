//! Help overlay widget for displaying full keybind reference

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Help overlay widget that displays a centered help screen
pub struct HelpOverlay<'a> {
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> HelpOverlay<'a> {
    /// Create a new help overlay
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    /// Calculate centered area for the overlay
    fn centered_rect(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
        let popup_layout = Layout::vertical([
            Constraint::Percentage((100 - height_percent) / 2),
            Constraint::Percentage(height_percent),
            Constraint::Percentage((100 - height_percent) / 2),
        ])
        .split(area);

        Layout::horizontal([
            Constraint::Percentage((100 - width_percent) / 2),
            Constraint::Percentage(width_percent),
            Constraint::Percentage((100 - width_percent) / 2),
        ])
        .split(popup_layout[1])[1]
    }

    fn section(&self, title: &'static str) -> [Line<'static>; 3] {
        [
            Line::default(),
            Line::styled(
                title,
                self.theme.cursor_style().add_modifier(Modifier::UNDERLINED),
            ),
            Line::default(),
        ]
    }

    /// Build help content lines
    fn build_content(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        lines.extend(self.section("  Navigation"));
        lines.extend([
            self.help_line("  ←/→  h/l", "Previous / next record"),
            self.help_line("  Home/End", "First / last record"),
            self.help_line("  0-9 Enter", "Go to record number"),
        ]);

        lines.extend(self.section("  Selection"));
        lines.extend([
            self.help_line("  Space", "Toggle kept"),
            self.help_line("  y / n", "Keep / discard"),
            self.help_line("  a", "Keep every record"),
            self.help_line("  c", "Clear selection"),
        ]);

        lines.extend(self.section("  Actions"));
        lines.extend([
            self.help_line("  s  Ctrl+S", "Export selected records"),
            self.help_line("  o", "Open image in viewer"),
            self.help_line("  ?  F1", "Show this help"),
            self.help_line("  q  Esc", "Quit"),
        ]);

        lines.push(Line::default());
        lines.push(Line::styled(
            "  Press any key to close",
            self.theme.dimmed_style(),
        ));
        lines.push(Line::default());

        lines
    }

    /// Create a help line with key and description
    fn help_line(&self, key: &'static str, desc: &'static str) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("{key:<14}"), self.theme.info_style()),
            Span::raw(desc),
        ])
    }
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = Self::centered_rect(60, 80, area);

        // Clear the background
        Clear.render(popup_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.cursor_style())
            .title(" Help ")
            .title_alignment(Alignment::Center);

        let content = self.build_content();
        let paragraph = Paragraph::new(content).block(block);
        paragraph.render(popup_area, buf);
    }
}

//! Record pane widget: image file details and the record's text fields
//!
//! Terminals cannot show the image itself, so the pane describes the
//! resolved file (path, format, dimensions, size). `o` opens it in the
//! system viewer.

use crate::resolve::ImageInfo;
use crate::ui::ratatui_adapter::state::Screen;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

const LABEL_WIDTH: usize = 16;

/// Record pane widget
pub struct RecordPane<'a> {
    screen: &'a Screen,
    theme: &'a Theme,
}

impl<'a> RecordPane<'a> {
    #[must_use]
    pub const fn new(screen: &'a Screen, theme: &'a Theme) -> Self {
        Self { screen, theme }
    }

    fn label(&self, name: &str) -> Span<'static> {
        Span::styled(format!("{name:<LABEL_WIDTH$}"), self.theme.label_style())
    }

    fn image_lines(&self) -> Vec<Line<'static>> {
        let Some(path) = &self.screen.image_path else {
            return vec![Line::from(vec![
                self.label("image"),
                Span::styled(
                    self.screen.stored_path.clone(),
                    self.theme.missing_file_style(),
                ),
                Span::styled("  (not found)", self.theme.error_style()),
            ])];
        };

        let mut lines = vec![Line::from(vec![
            self.label("image"),
            Span::styled(path.display().to_string(), self.theme.path_style()),
        ])];

        let details = self
            .screen
            .image
            .as_ref()
            .map_or_else(|| "unreadable".to_string(), ImageInfo::summary);
        lines.push(Line::from(vec![
            self.label(""),
            Span::styled(details, self.theme.dimmed_style()),
        ]));

        lines
    }

    fn build_content(&self) -> Vec<Line<'static>> {
        if self.screen.position.is_none() {
            return vec![Line::styled(
                "The preview window is empty",
                self.theme.dimmed_style(),
            )];
        }

        let mut lines = self.image_lines();
        lines.push(Line::default());

        for (name, value) in &self.screen.fields {
            let value = value.as_ref().map_or_else(
                || Span::styled("-", self.theme.dimmed_style()),
                |text| Span::raw(text.clone()),
            );
            lines.push(Line::from(vec![self.label(name), value]));
        }

        lines
    }
}

impl Widget for RecordPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(" Record ");

        Paragraph::new(self.build_content())
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

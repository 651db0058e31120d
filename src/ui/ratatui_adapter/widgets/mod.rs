//! Ratatui widgets for the browse TUI

mod confirm_dialog;
mod header;
mod help_bar;
mod help_overlay;
mod record_pane;
mod status_bar;

pub use confirm_dialog::{ConfirmDialog, ConfirmDialogState};
pub use header::Header;
pub use help_bar::{HelpBar, KeyHint};
pub use help_overlay::HelpOverlay;
pub use record_pane::RecordPane;
pub use status_bar::StatusBar;

#[cfg(test)]
pub(crate) fn buffer_text(buf: &ratatui::buffer::Buffer) -> String {
    let width = usize::from(buf.area.width);
    buf.content
        .chunks(width.max(1))
        .map(|row| row.iter().map(ratatui::buffer::Cell::symbol).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

//! Side-effecting browse actions
//!
//! Each action returns the status message the frontend should show.

use crate::export::ExportSummary;
use crate::session::SessionError;
use crate::ui::StatusMessage;
use std::io;
use std::path::Path;

/// Function used to hand an image to the system viewer
pub type Opener = Box<dyn FnMut(&Path) -> io::Result<()>>;

/// Opener backed by the platform's default application
#[must_use]
pub fn system_opener() -> Opener {
    Box::new(|path: &Path| open::that(path))
}

/// Open the active record's image
pub fn execute_open_image(image: Option<&Path>, stored: &str, opener: &mut Opener) -> StatusMessage {
    let Some(path) = image else {
        return StatusMessage::warning(format!("Image not found: {stored}"));
    };

    match opener(path) {
        Ok(()) => StatusMessage::info(format!("Opened {}", path.display())),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Failed to open image");
            StatusMessage::error(format!("Failed to open {}: {e}", path.display()))
        }
    }
}

/// Status line for a finished export
#[must_use]
pub fn describe_export(summary: &ExportSummary) -> StatusMessage {
    let text = format!(
        "Exported {} record(s) and {} image(s) to {}",
        summary.records_written,
        summary.images_copied,
        summary.table_path.display()
    );

    match summary.warnings.as_slice() {
        [] => StatusMessage::success(text),
        [only] => StatusMessage::warning(format!("{text} ({only})")),
        [first, rest @ ..] => StatusMessage::warning(format!(
            "{text} ({first}; {} more warning(s))",
            rest.len()
        )),
    }
}

/// Status line for a failed session operation
#[must_use]
pub fn describe_error(error: &SessionError) -> StatusMessage {
    match error {
        SessionError::EmptySelection | SessionError::EmptyDataset => {
            StatusMessage::warning(error.to_string())
        }
        SessionError::Selection(_) | SessionError::Export(_) => StatusMessage::error(error.to_string()),
    }
}

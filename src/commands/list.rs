//! List command - print the records in the preview window

use super::open_session;
use crate::{config::DatasetSettings, ui::OutputWriter, CuratrError};

type Result<T> = std::result::Result<T, CuratrError>;

/// Execute the list command
///
/// Prints one line per record: its 0-based index (the one `export --select`
/// and `show` take), the stored image path, and the caption.
///
/// # Errors
///
/// Returns `CuratrError` if the table cannot be loaded.
pub fn execute(settings: &DatasetSettings, output: &dyn OutputWriter) -> Result<()> {
    let session = open_session(settings)?;

    if session.is_empty() {
        output.info("No records in the preview window.");
        return Ok(());
    }

    output.info(&format!(
        "Records 0-{} of {} in {}:",
        session.len() - 1,
        session.table().len(),
        settings.metadata_path.display()
    ));

    let width = (session.len() - 1).to_string().len();
    let mut missing = 0;
    for record in session.window() {
        let found = session.resolver().resolve(record.image_path()).is_some();
        if !found {
            missing += 1;
        }
        output.write(&format!(
            "{:>width$}{} {}  {}",
            record.index(),
            if found { " " } else { "!" },
            record.image_path(),
            record.caption().unwrap_or("-"),
        ));
    }

    if missing > 0 {
        output.warning(&format!("{missing} image(s) not found (marked with !)"));
    }
    Ok(())
}

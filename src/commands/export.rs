//! Export command - write a selection without opening the browser

use super::open_session;
use crate::{
    config::DatasetSettings,
    export::ExportSummary,
    selection::SelectionError,
    session::{CurationSession, SessionError},
    ui::{OutputWriter, UserInput},
    CuratrError,
};
use std::collections::BTreeSet;

type Result<T> = std::result::Result<T, CuratrError>;

/// Execute the export command
///
/// `select` holds the record indices to keep (`"1,3,5-7"`, 0-based); `None`
/// keeps every record in the preview window. When output already exists the
/// user is asked before it is overwritten, unless `yes` or `quiet` is set.
///
/// # Errors
///
/// Returns `CuratrError` if the selection is malformed or out of range, the
/// table cannot be loaded, or the export fails.
pub fn execute(
    settings: &DatasetSettings,
    select: Option<&str>,
    yes: bool,
    quiet: bool,
    input: &dyn UserInput,
    output: &dyn OutputWriter,
) -> Result<()> {
    let mut session = open_session(settings)?;
    if session.is_empty() {
        return Err(SessionError::EmptyDataset.into());
    }

    match select {
        Some(text) => apply_selection(&mut session, &parse_selection(text)?)?,
        None => session.select_all(),
    }

    let options = &settings.export;
    if !yes && !quiet && (options.table_path.exists() || options.image_dir.exists()) {
        let prompt = format!(
            "Output already exists at {}. Overwrite?",
            options.table_path.display()
        );
        if input.prompt_confirm(&prompt, false).map_err(crate::ui::UiError::from)? != Some(true) {
            output.info("Export cancelled");
            return Ok(());
        }
    }

    let summary = session.export(options)?;
    report_summary(&summary, output);
    Ok(())
}

/// Parse a selection like `"1,3,5-7"` into sorted, distinct indices
///
/// # Errors
///
/// Returns `CuratrError::InvalidInput` for empty input, non-numeric parts,
/// or descending ranges.
pub fn parse_selection(text: &str) -> Result<Vec<usize>> {
    let mut indices = BTreeSet::new();

    for part in text.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        match part.split_once('-') {
            Some((start, end)) => {
                let start = parse_index(start)?;
                let end = parse_index(end)?;
                if start > end {
                    return Err(CuratrError::InvalidInput(format!(
                        "Range '{part}' is descending"
                    )));
                }
                indices.extend(start..=end);
            }
            None => {
                indices.insert(parse_index(part)?);
            }
        }
    }

    if indices.is_empty() {
        return Err(CuratrError::InvalidInput("Selection is empty".to_string()));
    }
    Ok(indices.into_iter().collect())
}

fn parse_index(text: &str) -> Result<usize> {
    let text = text.trim();
    text.parse()
        .map_err(|_| CuratrError::InvalidInput(format!("'{text}' is not a record index")))
}

/// Mark `indices` as kept, rejecting any outside the window
fn apply_selection(session: &mut CurationSession, indices: &[usize]) -> Result<()> {
    let len = session.len();
    if let Some(&index) = indices.iter().find(|&&i| i >= len) {
        return Err(SelectionError::IndexOutOfRange { index, len }.into());
    }

    for &index in indices {
        let target = i64::try_from(index).unwrap_or(i64::MAX);
        session.go_to(target)?;
        session.toggle_current(true)?;
    }
    Ok(())
}

/// Print an export summary and its warnings
pub(crate) fn report_summary(summary: &ExportSummary, output: &dyn OutputWriter) {
    output.success(&format!(
        "Exported {} record(s) to {}",
        summary.records_written,
        summary.table_path.display()
    ));
    output.info(&format!(
        "Copied {} image(s) to {}",
        summary.images_copied,
        summary.image_dir.display()
    ));
    if summary.images_missing > 0 {
        output.warning(&format!("{} image(s) not found", summary.images_missing));
    }
    for warning in &summary.warnings {
        output.warning(&warning.to_string());
    }
}

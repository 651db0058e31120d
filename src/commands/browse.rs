//! Browse command - interactive record browser

use super::{export::report_summary, open_session};
use crate::{
    browse::{BrowseController, BrowseOutcome},
    config::DatasetSettings,
    session::CurationSession,
    ui::{Frontend, OutputWriter, RatatuiFrontend},
    CuratrError,
};

type Result<T> = std::result::Result<T, CuratrError>;

/// Execute the browse command
///
/// Opens the TUI over the configured dataset and prints what was exported
/// once the terminal is restored.
///
/// # Errors
///
/// Returns `CuratrError` if the table cannot be loaded or the terminal fails.
pub fn execute(settings: &DatasetSettings, output: &dyn OutputWriter) -> Result<()> {
    let session = open_session(settings)?;
    let frontend = RatatuiFrontend::new()?;
    run_with(session, frontend, settings, output).map(|_| ())
}

/// Drive `frontend` over `session` and report the outcome
///
/// The controller (and with it the frontend) is dropped before anything is
/// printed, so a terminal frontend has already left the alternate screen.
pub(crate) fn run_with<F: Frontend>(
    session: CurationSession,
    frontend: F,
    settings: &DatasetSettings,
    output: &dyn OutputWriter,
) -> Result<BrowseOutcome> {
    let outcome = {
        let mut controller = BrowseController::new(session, frontend, settings.export.clone());
        controller.run()?
    };

    report_outcome(&outcome, output);
    Ok(outcome)
}

fn report_outcome(outcome: &BrowseOutcome, output: &dyn OutputWriter) {
    if let Some(summary) = &outcome.last_export {
        report_summary(summary, output);
    }

    if outcome.unexported_changes {
        output.warning(&format!(
            "Selection changed since the last export ({} record(s) selected, not written)",
            outcome.selected
        ));
    } else if outcome.exports == 0 {
        output.info("Nothing exported");
    }
}

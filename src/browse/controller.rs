//! Browse controller: drives a [`Frontend`] over a [`CurationSession`]

use super::actions::{self, Opener};
use super::models::{BrowseOutcome, Intent};
use crate::export::ExportOptions;
use crate::session::{self, CurationSession};
use crate::ui::{self, BrowseFrame, Frontend, StatusMessage};

/// Owns the session and relays intents from a frontend
///
/// Intent failures become status messages; only frontend errors end the
/// loop early.
pub struct BrowseController<F: Frontend> {
    session: CurationSession,
    frontend: F,
    options: ExportOptions,
    opener: Opener,
    status: Option<StatusMessage>,
    outcome: BrowseOutcome,
}

impl<F: Frontend> BrowseController<F> {
    /// Create a controller that exports with `options`
    #[must_use]
    pub fn new(session: CurationSession, frontend: F, options: ExportOptions) -> Self {
        Self {
            session,
            frontend,
            options,
            opener: actions::system_opener(),
            status: None,
            outcome: BrowseOutcome::default(),
        }
    }

    /// Replace the function used to open images
    #[must_use]
    pub fn with_opener(mut self, opener: Opener) -> Self {
        self.opener = opener;
        self
    }

    #[must_use]
    pub const fn session(&self) -> &CurationSession {
        &self.session
    }

    #[must_use]
    pub const fn frontend(&self) -> &F {
        &self.frontend
    }

    /// Message shown with the next frame
    #[must_use]
    pub const fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// Render and apply intents until the frontend asks to quit
    ///
    /// # Errors
    ///
    /// Returns a UI error if the frontend fails to draw or read input.
    pub fn run(&mut self) -> ui::Result<BrowseOutcome> {
        if self.session.is_empty() {
            self.status = Some(StatusMessage::warning("No records loaded"));
        }

        loop {
            let frame = BrowseFrame {
                view: self.session.view(),
                status: self.status.as_ref(),
                dirty: self.session.is_dirty(),
            };
            self.frontend.render(&frame)?;

            match self.frontend.next_intent()? {
                Intent::Quit => break,
                intent => self.apply(intent),
            }
        }

        self.outcome.selected = self.session.selected_count();
        self.outcome.unexported_changes = self.session.is_dirty();
        tracing::info!(
            selected = self.outcome.selected,
            exports = self.outcome.exports,
            "Browse session ended"
        );
        Ok(self.outcome.clone())
    }

    /// Apply one intent, updating the status message
    ///
    /// Plain navigation and flag changes leave the previous message in place.
    pub fn apply(&mut self, intent: Intent) {
        tracing::debug!(?intent, "Apply intent");

        match self.dispatch(intent) {
            Ok(Some(message)) => self.status = Some(message),
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(?intent, error = %e, "Intent failed");
                self.status = Some(actions::describe_error(&e));
            }
        }
    }

    fn dispatch(&mut self, intent: Intent) -> session::Result<Option<StatusMessage>> {
        match intent {
            Intent::GoTo(requested) => {
                let landed = self.session.go_to(requested)?;
                Ok(Self::clamp_notice(requested, landed, self.session.len()))
            }
            Intent::Next => self.session.next().map(|_| None),
            Intent::Previous => self.session.previous().map(|_| None),
            Intent::First => self.session.go_to(0).map(|_| None),
            Intent::Last => self.session.go_to(i64::MAX).map(|_| None),
            Intent::SetCurrent(value) => self.session.toggle_current(value).map(|()| None),
            Intent::ToggleCurrent => self.session.flip_current().map(|_| None),
            Intent::SelectAll => {
                self.session.select_all();
                Ok(Some(StatusMessage::info(format!(
                    "Selected all {} records",
                    self.session.len()
                ))))
            }
            Intent::ClearAll => {
                self.session.clear_all();
                Ok(Some(StatusMessage::info("Selection cleared")))
            }
            Intent::Export => {
                let summary = self.session.export(&self.options)?;
                let message = actions::describe_export(&summary);
                self.outcome.exports += 1;
                self.outcome.last_export = Some(summary);
                Ok(Some(message))
            }
            Intent::OpenImage => {
                let view = self.session.view().ok_or(session::SessionError::EmptyDataset)?;
                Ok(Some(actions::execute_open_image(
                    view.image.as_deref(),
                    view.record.image_path(),
                    &mut self.opener,
                )))
            }
            Intent::Quit => Ok(None),
        }
    }

    fn clamp_notice(requested: i64, landed: usize, total: usize) -> Option<StatusMessage> {
        let landed_i64 = i64::try_from(landed).unwrap_or(i64::MAX);
        (landed_i64 != requested).then(|| {
            StatusMessage::info(format!(
                "Record {} is out of range, showing {} of {total}",
                requested.saturating_add(1),
                landed + 1
            ))
        })
    }
}

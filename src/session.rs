//! Curation session: navigation and export over the preview window
//!
//! The session is the single owner of the selection store and the active
//! index. Frontends never mutate either directly; they read a [`RecordView`]
//! snapshot and send intents through the session's methods.
//!
//! # Lifecycle
//!
//! ```text
//! MetadataTable loaded
//!     ↓
//! CurationSession::new  (all unselected, active = 0 or none)
//!     ↓
//! ┌─→ go_to / next / previous      (active index, clamped)
//! │   toggle_current / flip_current (one flag)
//! │   select_all / clear_all        (every flag)
//! │   export                        (side effect only, no state change)
//! └── loop until the frontend exits
//! ```

use crate::dataset::{MetadataTable, Record};
use crate::export::{self, ExportError, ExportItem, ExportOptions, ExportSummary};
use crate::resolve::ImageResolver;
use crate::selection::{SelectionError, SelectionStore};
use std::path::PathBuf;
use thiserror::Error;

/// Session error type
pub type Result<T> = std::result::Result<T, SessionError>;

/// Errors surfaced by session operations
#[derive(Debug, Error)]
pub enum SessionError {
    /// No records in the preview window
    #[error("No records loaded")]
    EmptyDataset,

    /// Export requested with nothing selected
    #[error("No records selected, nothing to export")]
    EmptySelection,

    /// Store access outside the window
    #[error(transparent)]
    Selection(#[from] SelectionError),

    /// Export aborted
    #[error("Export failed: {0}")]
    Export(#[from] ExportError),
}

/// Snapshot of the active record for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordView<'a> {
    pub record: &'a Record,
    /// Active index (0-based)
    pub index: usize,
    /// Preview window size
    pub total: usize,
    /// Whether the active record is kept
    pub selected: bool,
    pub selected_count: usize,
    /// Resolved image file, if one exists
    pub image: Option<PathBuf>,
}

/// A selected record with its resolved image file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportEntry<'a> {
    pub record: &'a Record,
    pub image: Option<PathBuf>,
}

/// Interactive curation session over the first N records of a table
#[derive(Debug)]
pub struct CurationSession {
    table: MetadataTable,
    window: usize,
    store: SelectionStore,
    active: Option<usize>,
    resolver: ImageResolver,
    /// Selection changed since the last successful export
    dirty: bool,
}

impl CurationSession {
    /// Start a session over the first `preview_size` records of `table`
    #[must_use]
    pub fn new(table: MetadataTable, preview_size: usize, resolver: ImageResolver) -> Self {
        let window = preview_size.min(table.len());
        tracing::info!(
            records = table.len(),
            window,
            images = %resolver.base_dir().display(),
            "Session started"
        );

        Self {
            table,
            window,
            store: SelectionStore::new(window),
            active: (window > 0).then_some(0),
            resolver,
            dirty: false,
        }
    }

    /// Source table
    #[must_use]
    pub const fn table(&self) -> &MetadataTable {
        &self.table
    }

    /// Records in the preview window
    #[must_use]
    pub fn window(&self) -> &[Record] {
        self.table.preview(self.window)
    }

    /// Preview window size
    #[must_use]
    pub const fn len(&self) -> usize {
        self.window
    }

    /// Whether the preview window is empty
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.window == 0
    }

    /// Active index, `None` when the window is empty
    #[must_use]
    pub const fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// Read-only view of the selection store
    #[must_use]
    pub const fn selection(&self) -> &SelectionStore {
        &self.store
    }

    /// Number of selected records
    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.store.count_selected()
    }

    /// Selection changed since the last successful export
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Image resolver used for display and export
    #[must_use]
    pub const fn resolver(&self) -> &ImageResolver {
        &self.resolver
    }

    /// Move to `index`, clamped into the window
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyDataset` when the window is empty; the
    /// active index stays unset.
    pub fn go_to(&mut self, index: i64) -> Result<usize> {
        if self.window == 0 {
            return Err(SessionError::EmptyDataset);
        }

        let last = self.window - 1;
        let clamped = usize::try_from(index.max(0)).map_or(last, |i| i.min(last));
        if self.active != Some(clamped) {
            tracing::debug!(requested = index, index = clamped, "Navigate");
        }
        self.active = Some(clamped);
        Ok(clamped)
    }

    /// Move one record forward (stays on the last record)
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyDataset` when the window is empty.
    pub fn next(&mut self) -> Result<usize> {
        let current = self.require_active()?;
        self.go_to(Self::as_i64(current).saturating_add(1))
    }

    /// Move one record back (stays on the first record)
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyDataset` when the window is empty.
    pub fn previous(&mut self) -> Result<usize> {
        let current = self.require_active()?;
        self.go_to(Self::as_i64(current) - 1)
    }

    /// Set the active record's flag to `value`
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyDataset` when there is no active record.
    pub fn toggle_current(&mut self, value: bool) -> Result<()> {
        let index = self.require_active()?;
        if self.store.get(index)? != value {
            self.dirty = true;
        }
        self.store.set(index, value)?;
        Ok(())
    }

    /// Invert the active record's flag, returning the new value
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyDataset` when there is no active record.
    pub fn flip_current(&mut self) -> Result<bool> {
        let index = self.require_active()?;
        let value = self.store.toggle(index)?;
        self.dirty = true;
        Ok(value)
    }

    /// Mark every record in the window as kept
    pub fn select_all(&mut self) {
        self.set_all(true);
    }

    /// Unmark every record in the window
    pub fn clear_all(&mut self) {
        self.set_all(false);
    }

    fn set_all(&mut self, value: bool) {
        let target = if value { self.window } else { 0 };
        if self.store.count_selected() != target {
            self.dirty = true;
        }
        self.store.set_all(value);
    }

    /// Render snapshot of the active record
    #[must_use]
    pub fn view(&self) -> Option<RecordView<'_>> {
        let index = self.active?;
        let record = self.table.get(index)?;

        Some(RecordView {
            record,
            index,
            total: self.window,
            selected: self.store.get(index).unwrap_or(false),
            selected_count: self.store.count_selected(),
            image: self.resolver.resolve(record.image_path()),
        })
    }

    /// Selected records in index order, each with its resolved image
    #[must_use]
    pub fn export_result(&self) -> Vec<ExportEntry<'_>> {
        self.store
            .selected_indices()
            .filter_map(|i| self.table.get(i))
            .map(|record| ExportEntry {
                record,
                image: self.resolver.resolve(record.image_path()),
            })
            .collect()
    }

    /// Export the selected records and their images
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyDataset` when the window is empty,
    /// `SessionError::EmptySelection` (nothing written) when no record is
    /// selected, or `SessionError::Export` when the export aborts.
    pub fn export(&mut self, options: &ExportOptions) -> Result<ExportSummary> {
        self.require_active()?;
        let entries = self.export_result();
        if entries.is_empty() {
            return Err(SessionError::EmptySelection);
        }

        let items: Vec<ExportItem<'_>> = entries
            .iter()
            .map(|entry| ExportItem {
                record: entry.record,
                image: entry.image.as_deref(),
            })
            .collect();

        let summary = export::run(&self.table, &items, options)?;
        self.dirty = false;
        Ok(summary)
    }

    fn require_active(&self) -> Result<usize> {
        self.active.ok_or(SessionError::EmptyDataset)
    }

    fn as_i64(index: usize) -> i64 {
        i64::try_from(index).unwrap_or(i64::MAX)
    }
}

//! Per-record "kept" flags for the preview window
//!
//! The store is fully materialized: it holds exactly one flag for every
//! index of the preview window, all `false` after initialization. Entries
//! are never added or removed after that, only overwritten.

use thiserror::Error;

/// Errors raised by bounds-checked store access
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// Index outside `[0, len - 1]`
    #[error("Index {index} is out of range for a window of {len} record(s)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Result type for selection store operations
pub type Result<T> = std::result::Result<T, SelectionError>;

/// Mapping from preview-window index to a boolean "kept" flag
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionStore {
    flags: Vec<bool>,
}

impl SelectionStore {
    /// Create a store with `n` entries, all unselected
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            flags: vec![false; n],
        }
    }

    /// Reset the store to `n` unselected entries, discarding prior state
    pub fn initialize(&mut self, n: usize) {
        self.flags.clear();
        self.flags.resize(n, false);
    }

    /// Number of entries (the preview window size)
    #[must_use]
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Whether the window is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Flag for index `i`
    ///
    /// # Errors
    ///
    /// Returns `SelectionError::IndexOutOfRange` if `i >= len()`.
    pub fn get(&self, i: usize) -> Result<bool> {
        self.flags
            .get(i)
            .copied()
            .ok_or(SelectionError::IndexOutOfRange {
                index: i,
                len: self.len(),
            })
    }

    /// Overwrite the flag for index `i`
    ///
    /// # Errors
    ///
    /// Returns `SelectionError::IndexOutOfRange` if `i >= len()`.
    pub fn set(&mut self, i: usize, value: bool) -> Result<()> {
        let len = self.len();
        let flag = self
            .flags
            .get_mut(i)
            .ok_or(SelectionError::IndexOutOfRange { index: i, len })?;
        *flag = value;
        Ok(())
    }

    /// Invert the flag for index `i`, returning the new value
    ///
    /// # Errors
    ///
    /// Returns `SelectionError::IndexOutOfRange` if `i >= len()`.
    pub fn toggle(&mut self, i: usize) -> Result<bool> {
        let value = !self.get(i)?;
        self.set(i, value)?;
        Ok(value)
    }

    /// Set every entry to `value`
    pub fn set_all(&mut self, value: bool) {
        self.flags.fill(value);
    }

    /// Number of entries currently selected
    #[must_use]
    pub fn count_selected(&self) -> usize {
        self.flags.iter().filter(|&&flag| flag).count()
    }

    /// Selected indices in ascending order
    pub fn selected_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.flags
            .iter()
            .enumerate()
            .filter_map(|(i, &flag)| flag.then_some(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_all_unselected() {
        for n in [0, 1, 5, 100] {
            let store = SelectionStore::new(n);
            assert_eq!(store.len(), n);
            assert_eq!(store.count_selected(), 0);
            for i in 0..n {
                assert_eq!(store.get(i), Ok(false));
            }
        }
    }

    #[test]
    fn test_reinitialize_discards_state() {
        let mut store = SelectionStore::new(3);
        store.set_all(true);
        store.initialize(5);
        assert_eq!(store.len(), 5);
        assert_eq!(store.count_selected(), 0);
    }

    #[test]
    fn test_set_only_touches_one_entry() {
        let mut store = SelectionStore::new(6);
        for value in [true, false, true] {
            store.set(2, value).unwrap();
            assert_eq!(store.get(2), Ok(value));
            for j in (0..6).filter(|&j| j != 2) {
                assert_eq!(store.get(j), Ok(false));
            }
        }
    }

    #[test]
    fn test_out_of_range() {
        let mut store = SelectionStore::new(3);
        assert_eq!(
            store.get(3),
            Err(SelectionError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert!(store.set(10, true).is_err());
        assert!(SelectionStore::new(0).get(0).is_err());
    }

    #[test]
    fn test_set_all_and_count() {
        let mut store = SelectionStore::new(4);
        store.set_all(true);
        assert_eq!(store.count_selected(), 4);
        store.set_all(false);
        assert_eq!(store.count_selected(), 0);
    }

    #[test]
    fn test_toggle_and_selected_indices() {
        let mut store = SelectionStore::new(5);
        assert_eq!(store.toggle(3), Ok(true));
        assert_eq!(store.toggle(1), Ok(true));
        assert_eq!(store.selected_indices().collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(store.toggle(3), Ok(false));
        assert_eq!(store.count_selected(), 1);
    }
}

//! Command implementations
//!
//! Each command is a module with an execute function that takes resolved
//! settings and writes its results through an [`OutputWriter`](crate::ui::OutputWriter).

pub mod browse;
pub mod completions;
pub mod config;
pub mod export;
pub mod list;
pub mod show;

// Re-export execute functions for convenience
pub use browse::execute as browse;
pub use completions::execute as completions;
pub use self::config::execute as config;
pub use export::execute as export;
pub use list::execute as list;
pub use show::execute as show;

use crate::config::DatasetSettings;
use crate::dataset::MetadataTable;
use crate::resolve::ImageResolver;
use crate::session::CurationSession;
use crate::CuratrError;

type Result<T> = std::result::Result<T, CuratrError>;

/// Load the configured table and start a session over its preview window
///
/// # Errors
///
/// Returns `CuratrError::DatasetError` if the table cannot be read.
pub fn open_session(settings: &DatasetSettings) -> Result<CurationSession> {
    let table = MetadataTable::load(&settings.metadata_path)?;
    Ok(CurationSession::new(
        table,
        settings.preview_size,
        ImageResolver::new(settings.image_dir.clone()),
    ))
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Fixture;

    #[test]
    fn test_open_session_uses_window() {
        let fixture = Fixture::new(8);
        let session = open_session(&test_support::settings(&fixture, 5)).unwrap();
        assert_eq!(session.len(), 5);
        assert_eq!(session.table().len(), 8);
    }

    #[test]
    fn test_open_session_missing_table() {
        let fixture = Fixture::new(1);
        let mut settings = test_support::settings(&fixture, 5);
        settings.metadata_path = fixture.root().join("absent.csv");
        assert!(matches!(
            open_session(&settings),
            Err(CuratrError::DatasetError(_))
        ));
    }
}

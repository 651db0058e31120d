//! Show command - print one record with its resolved image

use super::open_session;
use crate::{
    config::DatasetSettings,
    resolve::ImageResolver,
    selection::SelectionError,
    session::RecordView,
    ui::OutputWriter,
    CuratrError,
};

type Result<T> = std::result::Result<T, CuratrError>;

const LABEL_WIDTH: usize = 16;

/// Execute the show command
///
/// # Errors
///
/// Returns `CuratrError::SelectionError` if `index` lies outside the preview
/// window, or a dataset error if the table cannot be loaded.
pub fn execute(settings: &DatasetSettings, index: usize, output: &dyn OutputWriter) -> Result<()> {
    let mut session = open_session(settings)?;
    let len = session.len();
    if index >= len {
        return Err(SelectionError::IndexOutOfRange { index, len }.into());
    }

    session.go_to(i64::try_from(index).unwrap_or(i64::MAX))?;
    if let Some(view) = session.view() {
        for line in describe(&view) {
            output.write(&line);
        }
        if view.image.is_none() {
            output.warning(&format!("Image not found: {}", view.record.image_path()));
        }
    }
    Ok(())
}

fn field(name: &str, value: &str) -> String {
    format!("{name:<LABEL_WIDTH$}{value}")
}

/// Lines describing the record in `view`
pub(crate) fn describe(view: &RecordView<'_>) -> Vec<String> {
    let mut lines = vec![format!("Record {} / {}", view.index + 1, view.total)];

    match &view.image {
        Some(path) => {
            lines.push(field("image", &path.display().to_string()));
            match ImageResolver::inspect(path) {
                Ok(info) => lines.push(field("", &info.summary())),
                Err(e) => tracing::debug!(path = %path.display(), error = %e, "Cannot inspect image"),
            }
        }
        None => lines.push(field("image", &format!("{}  (not found)", view.record.image_path()))),
    }

    for (name, value) in view.record.fields().labeled() {
        lines.push(field(name, value.unwrap_or("-")));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support;
    use crate::testing::Fixture;
    use crate::ui::mock::MockOutput;
    use crate::ui::MessageLevel;

    #[test]
    fn test_show_record() {
        let fixture = Fixture::new(3);
        let output = MockOutput::new();

        execute(&test_support::settings(&fixture, 100), 2, &output).unwrap();

        let lines = output.at_level(MessageLevel::Normal);
        assert_eq!(lines[0], "Record 3 / 3");
        assert!(lines[1].ends_with("img_2.jpg"));
        assert_eq!(lines.len(), 10);
        assert!(lines[2].starts_with(&" ".repeat(LABEL_WIDTH)));
        assert!(lines.contains(&field("caption", "caption 2")));
        assert!(lines.contains(&field("pathology", "-")));
        assert!(output.at_level(MessageLevel::Warning).is_empty());
    }

    #[test]
    fn test_show_missing_image() {
        let fixture = Fixture::new(2);
        fixture.remove_image(0);
        let output = MockOutput::new();

        execute(&test_support::settings(&fixture, 100), 0, &output).unwrap();

        let lines = output.at_level(MessageLevel::Normal);
        assert_eq!(lines[1], field("image", "img_0.jpg  (not found)"));
        assert_eq!(
            output.at_level(MessageLevel::Warning),
            vec!["Image not found: img_0.jpg"]
        );
    }

    #[test]
    fn test_show_outside_window() {
        let fixture = Fixture::new(5);
        let result = execute(&test_support::settings(&fixture, 2), 2, &MockOutput::new());
        assert!(matches!(
            result,
            Err(CuratrError::SelectionError(SelectionError::IndexOutOfRange { index: 2, len: 2 }))
        ));
    }
}

//! User input abstraction layer
//!
//! Confirmation prompts for CLI commands. The TUI asks its own questions
//! through an in-screen dialog instead.

use std::io;

/// Trait for user input operations
///
/// # Examples
///
/// ```no_run
/// use curatr::ui::input::{UserInput, DialoguerInput};
///
/// let input = DialoguerInput::new();
/// if let Some(true) = input.prompt_confirm("Overwrite existing export?", false).unwrap() {
///     println!("Overwriting...");
/// }
/// ```
pub trait UserInput {
    /// Prompt user for confirmation (yes/no)
    ///
    /// # Returns
    ///
    /// * `Ok(Some(bool))` - User confirmed (true) or denied (false)
    /// * `Ok(None)` - User cancelled (ESC)
    /// * `Err(_)` - Input operation failed
    fn prompt_confirm(&self, prompt: &str, default: bool) -> Result<Option<bool>>;
}

/// Result type for user input operations
pub type Result<T> = std::result::Result<T, InputError>;

/// Errors that can occur during user input
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// IO error during input
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// CLI-based user input using dialoguer
pub struct DialoguerInput {
    theme: dialoguer::theme::ColorfulTheme,
}

impl DialoguerInput {
    /// Create a new dialoguer-based input handler
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: dialoguer::theme::ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerInput {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInput for DialoguerInput {
    fn prompt_confirm(&self, prompt: &str, default: bool) -> Result<Option<bool>> {
        use dialoguer::Confirm;

        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact_opt()
            .map_err(|e| InputError::Io(io::Error::other(e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_from_io() {
        let io_err = io::Error::other("test error");
        let input_err: InputError = io_err.into();
        assert!(matches!(input_err, InputError::Io(_)));
    }

    #[test]
    fn test_dialoguer_input_creation() {
        let _input = DialoguerInput::new();
        let _input2 = DialoguerInput::default();
    }
}

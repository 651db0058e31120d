//! UI abstraction layer
//!
//! This module provides a backend-agnostic interface for the interactive
//! browser, confirmation prompts, and status output. The browse controller
//! talks to a [`Frontend`]; the ratatui terminal UI is one implementation
//! and a scripted mock is another.
//!
//! # Core Traits
//!
//! - **`Frontend`** - Draw a [`BrowseFrame`], read the next [`Intent`](crate::browse::Intent)
//! - **`UserInput`** - Confirmation prompts for CLI commands
//! - **`OutputWriter`** - Status messages with severity levels
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │      Business Logic Layer               │
//! │   (session, browse controller, export)  │
//! └────────────────┬────────────────────────┘
//!                  │ Uses traits
//!                  ▼
//! ┌─────────────────────────────────────────┐
//! │      UI Trait Abstraction               │
//! │  (Frontend, UserInput, OutputWriter)    │
//! └────────────────┬────────────────────────┘
//!                  │ Implemented by
//!         ┌────────┴────────┐
//!         ▼                 ▼
//! ┌───────────────┐  ┌───────────────────┐
//! │ CLI Adapters  │  │ TUI Adapter       │
//! │ - Dialoguer   │  │ - RatatuiFrontend │
//! │ - Stdout      │  │                   │
//! └───────────────┘  └───────────────────┘
//! ```
//!
//! ## Implementing a Custom Frontend
//!
//! ```no_run
//! use curatr::browse::Intent;
//! use curatr::ui::{BrowseFrame, Frontend, Result};
//!
//! struct LineFrontend;
//!
//! impl Frontend for LineFrontend {
//!     fn render(&mut self, frame: &BrowseFrame<'_>) -> Result<()> {
//!         if let Some(view) = &frame.view {
//!             println!("{}/{} {}", view.index + 1, view.total, view.record.image_path());
//!         }
//!         Ok(())
//!     }
//!
//!     fn next_intent(&mut self) -> Result<Intent> {
//!         Ok(Intent::Quit)
//!     }
//! }
//! ```

mod error;
mod traits;
mod types;

pub mod input;
pub mod output;
pub mod ratatui_adapter;

#[cfg(test)]
pub mod mock;

pub use error::{Result, UiError};
pub use input::{DialoguerInput, InputError, UserInput};
pub use output::{MessageLevel, OutputWriter, StdoutWriter};
pub use ratatui_adapter::RatatuiFrontend;
pub use traits::{BrowseFrame, Frontend};
pub use types::StatusMessage;

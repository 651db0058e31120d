//! Browse module - interactive record-by-record curation
//!
//! The controller is UI-agnostic: any [`Frontend`](crate::ui::Frontend)
//! (the ratatui terminal UI, or a scripted mock in tests) renders frames
//! and reports [`Intent`]s, and the controller applies them to the session.
//!
//! # Architecture
//!
//! - `models`: `Intent` and `BrowseOutcome`
//! - `actions`: side-effecting actions and status message wording
//! - `controller`: the render / read / apply loop

pub mod actions;
pub mod controller;
pub mod models;

pub use actions::{Opener, system_opener};
pub use controller::BrowseController;
pub use models::{BrowseOutcome, Intent};

//! Ratatui-based browse frontend
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │           RatatuiFrontend                   │
//! │  (implements Frontend trait)                │
//! └────────────────────┬────────────────────────┘
//!                      │
//!        ┌─────────────┼─────────────┐
//!        ▼             ▼             ▼
//! ┌────────────┐ ┌───────────┐ ┌───────────┐
//! │  AppState  │ │  Ratatui  │ │ Crossterm │
//! │  (screen)  │ │ (widgets) │ │  (events) │
//! └────────────┘ └───────────┘ └───────────┘
//! ```
//!
//! # Layout
//!
//! - **Header**: record position, kept marker, selection count
//! - **Record pane**: image file details and text fields
//! - **Status bar**: last action's outcome, export state
//! - **Help bar**: key hints; full reference on `?` / F1

mod events;
mod frontend;
mod state;
mod theme;
pub mod widgets;

pub use frontend::RatatuiFrontend;
pub use state::{AppState, Mode, Screen};
pub use theme::Theme;

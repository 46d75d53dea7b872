//! Interactive terminal picker for `folio`.
//!
//! The picker wraps a [`folio_catalog::SearchSession`] in a ratatui front
//! end: a query editor with a title/author selector, a status line, the
//! paginated results table, and a detail card for the highlighted book.
//! Requests run on a [`folio_catalog::FetchWorker`] thread so the interface
//! keeps drawing while a page loads.

mod app;
mod builder;
pub mod components;
mod config;
pub mod input;
mod outcome;
mod runtime;
pub mod style;

pub use app::App;
pub use builder::Picker;
pub use config::UiLabels;
pub use outcome::SearchOutcome;

pub use crate::input::QueryInput;
pub use crate::style::{StyleConfig, Theme, default_theme};

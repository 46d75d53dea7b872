//! Core application state and behavior for the interactive picker.
//!
//! The [`App`] type owns the search session, the query editor and the
//! results table. Supporting modules partition the implementation: key
//! handling, fetch coordination with the background worker, and rendering.

mod actions;
mod fetch;
mod render;
mod results;
mod state;

#[cfg(test)]
mod tests;

pub(crate) use fetch::FetchRuntime;
pub use state::App;

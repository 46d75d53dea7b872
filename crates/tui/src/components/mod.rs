//! UI building blocks shared across rendering and state modules.

/// Detail card for the highlighted book.
pub mod card;
/// Query row with the mode selector.
pub mod prompt;
pub mod scrollbar;
/// Status line beneath the prompt.
pub mod status;
/// Results table rendering.
pub mod tables;

pub use card::render_card;
pub use prompt::{InputContext, render_input};
pub use scrollbar::{ScrollMetrics, render_scrollbar};
pub use status::{StatusContext, render_status};
pub use tables::{TableSpec, render_table};

//! Visual styling for the picker.
//!
//! Themes hold the colour scheme. [`StyleConfig`] wraps the active theme so
//! other presentation knobs can sit next to it.

/// Theme definitions and the bundled themes.
pub mod theme;

pub use theme::{Theme, ThemeDescriptor, by_name, default_theme, descriptors};

/// Styling applied to the running picker.
#[derive(Clone, Debug, Default)]
pub struct StyleConfig {
	/// The active theme for the UI.
	pub theme: Theme,
}

impl StyleConfig {
	#[must_use]
	pub fn with_theme(theme: Theme) -> Self {
		Self { theme }
	}
}

mod builtins;
mod registry;
mod types;

pub use registry::{by_name, default_theme, descriptors};
pub use types::{Theme, ThemeDescriptor};

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

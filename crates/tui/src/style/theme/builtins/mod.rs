mod loader;

use include_dir::{Dir, include_dir};

pub(crate) use loader::{BundledThemes, load_bundled};

const BUILTIN_THEME_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/style/theme/builtins/themes");

/// Parses the theme files compiled into the binary.
pub(super) fn bundled() -> anyhow::Result<BundledThemes> {
	load_bundled(&BUILTIN_THEME_DIR)
}

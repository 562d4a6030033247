//! Filesystem path helpers.

use std::path::{Path, PathBuf};

/// Normalize a path to absolute form.
///
/// Canonicalizes when the path exists, otherwise joins relative paths onto
/// the current directory.
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

//! Path normalization utilities.
//!
//! - `normalize_path` - file system paths (canonicalize + fallback)
//! - `expand_tilde` - `~` expansion for user-supplied paths

use std::path::{Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to:
/// - Return as-is if already absolute
/// - Join with current directory if relative
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Expand a leading `~` to the home directory.
///
/// Non UTF-8 paths are returned unchanged.
pub fn expand_tilde(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(s) => PathBuf::from(shellexpand::tilde(s).into_owned()),
        None => path.to_path_buf(),
    }
}

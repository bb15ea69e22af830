// Single-match removal

use std::fs;
use std::io;
use std::path::Path;

/// Removes a matched path without following symlinks.
/// Directories are only removed when empty.
pub fn remove_path(path: &Path) -> io::Result<()> {
    let metadata = fs::symlink_metadata(path)?;
    if metadata.is_dir() {
        fs::remove_dir(path)
    } else {
        fs::remove_file(path)
    }
}

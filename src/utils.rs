use std::fs;
use std::io;
use std::path::Path;

/// Creates the directory `path` will live in, along with any missing ancestors.
/// Succeeds without doing anything when it already exists.
pub fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

/// Directory component of `path`, `.` for a bare file name.
pub fn parent_or_current(path: &Path) -> &Path {
    path.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
}

//! Filesystem helpers built on `cap-std` and `camino`.
//!
//! All file access goes through capability handles opened from the path's
//! parent directory, so helpers never follow a path outside the directory
//! the caller named.

use std::io;

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};

/// Open a UTF-8 file path for reading using ambient authority.
pub(crate) fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Create (or truncate) a UTF-8 file path for writing.
///
/// Missing parent directories are created first; the deepest one is then
/// opened as a capability and the file is created inside it.
pub(crate) fn create_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    ensure_parent_dir(path)?;
    let (dir, file_name) = open_dir_and_file(path)?;
    dir.create(file_name)
}

/// Ensure the parent directory for `path` exists, handling absolute paths
/// safely for cap-std.
fn ensure_parent_dir(path: &Utf8Path) -> io::Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_str().is_empty() || parent == Utf8Path::new("/") {
        return Ok(());
    }

    let (base, relative) = if parent.is_absolute() {
        let relative = parent
            .strip_prefix("/")
            .map_err(|_| io::Error::other("failed to strip root from absolute path"))?;
        (Utf8Path::new("/"), relative)
    } else {
        (Utf8Path::new("."), parent)
    };
    let base_dir = fs_utf8::Dir::open_ambient_dir(base, ambient_authority())?;
    base_dir.create_dir_all(relative)?;
    Ok(())
}

/// Return whether a path exists and is a regular file using capability-based IO.
pub(crate) fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, file_name) = open_dir_and_file(path)?;
    dir.metadata(file_name.as_str()).map(|meta| meta.is_file())
}

/// Resolve an ambient directory for the given path and return the directory
/// with the file name.
///
/// Bare file names resolve against the current directory.
fn open_dir_and_file(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::other("target should include a file name"))?
        .to_string();
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, file_name))
}

//! Filesystem helpers for reading export requests and writing documents.
//!
//! Everything goes through `cap-std` directory handles opened with ambient
//! authority, addressed with `camino` UTF-8 paths.
#![forbid(unsafe_code)]

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use std::io::{self, Write};
use std::process;

/// Open a UTF-8 file path for reading.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Open the directory containing `path` and return it with the file name.
pub fn open_parent_dir(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::other(format!("`{path}` does not name a file")))?
        .to_owned();
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, file_name))
}

/// Whether `path` exists and is a regular file.
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = open_parent_dir(path)?;
    match dir.metadata(name.as_str()) {
        Ok(meta) => Ok(meta.is_file()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err),
    }
}

/// Create the parent directories of `path` when they are missing.
pub fn ensure_parent_dir(path: &Utf8Path) -> io::Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    let (base, missing) = nearest_existing_ancestor(parent)?;
    if missing.as_str().is_empty() {
        return Ok(());
    }
    base.create_dir_all(&missing)
}

/// Write `contents` to `path` through a temporary sibling file.
///
/// The temporary file is renamed over `path` only once every byte has been
/// written and synced, so readers see either the old file or the complete
/// new one. The temporary file is removed when writing fails.
///
/// # Examples
/// ```
/// use camino::Utf8PathBuf;
///
/// # fn main() -> std::io::Result<()> {
/// let dir = tempfile::tempdir()?;
/// let path = Utf8PathBuf::from_path_buf(dir.path().join("route.grf"))
///     .map_err(|_| std::io::Error::other("non-UTF-8 temp dir"))?;
/// grf_fs::write_atomically(&path, b"<GRFDOC/>")?;
/// assert_eq!(std::fs::read(&path)?, b"<GRFDOC/>");
/// # Ok(())
/// # }
/// ```
pub fn write_atomically(path: &Utf8Path, contents: &[u8]) -> io::Result<()> {
    ensure_parent_dir(path)?;
    let (dir, name) = open_parent_dir(path)?;
    let temp_name = format!(".{name}.{}.tmp", process::id());
    let written = write_and_sync(&dir, &temp_name, contents)
        .and_then(|()| dir.rename(&temp_name, &dir, &name));
    if written.is_err() {
        // Cleanup failures are ignored.
        drop(dir.remove_file(&temp_name));
    }
    written
}

fn write_and_sync(dir: &fs_utf8::Dir, name: &str, contents: &[u8]) -> io::Result<()> {
    let mut file = dir.create(name)?;
    file.write_all(contents)?;
    file.sync_all()
}

/// Open the deepest existing ancestor of `dir` and return it with the
/// missing remainder below it.
fn nearest_existing_ancestor(dir: &Utf8Path) -> io::Result<(fs_utf8::Dir, Utf8PathBuf)> {
    for ancestor in dir.ancestors() {
        let base = if ancestor.as_str().is_empty() {
            Utf8Path::new(".")
        } else {
            ancestor
        };
        match fs_utf8::Dir::open_ambient_dir(base, ambient_authority()) {
            Ok(opened) => {
                let missing = dir
                    .strip_prefix(ancestor)
                    .map_err(|_| io::Error::other(format!("`{dir}` is not below `{ancestor}`")))?;
                return Ok((opened, missing.to_path_buf()));
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => return Err(err),
        }
    }
    Err(io::Error::new(
        io::ErrorKind::NotFound,
        format!("no ancestor of `{dir}` exists"),
    ))
}

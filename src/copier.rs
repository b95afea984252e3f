//! Recursive template copy.

use std::fs;
use std::io;
use std::path::Path;

use log::debug;
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Copies every file and directory under `source` into `target`, keeping the
/// relative layout.
///
/// The target directory is created when missing. Files already present in the
/// target are overwritten; anything else in it is left alone. Symlinks are
/// recreated as symlinks with the same link text and are not followed.
///
/// # Returns
/// * `Result<usize>` - Number of files copied
///
/// # Errors
/// * `Error::CopyFailed` on the first I/O error, carrying the offending path.
///   Files copied before the error are not removed.
pub fn copy_template<S: AsRef<Path>, T: AsRef<Path>>(source: S, target: T) -> Result<usize> {
    let source = source.as_ref();
    let target = target.as_ref();
    debug!("Copying '{}' into '{}'.", source.display(), target.display());

    let mut copied = 0;
    for entry in WalkDir::new(source) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(source).to_path_buf();
            Error::CopyFailed { path, source: e.into() }
        })?;
        let path = entry.path();
        let relative = path.strip_prefix(source).map_err(|_| Error::CopyFailed {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "path outside template"),
        })?;
        let destination = target.join(relative);

        let copy_failed = |source: io::Error| Error::CopyFailed {
            path: path.to_path_buf(),
            source,
        };

        if entry.file_type().is_dir() {
            fs::create_dir_all(&destination).map_err(copy_failed)?;
        } else if entry.file_type().is_symlink() {
            if let Some(parent) = destination.parent() {
                fs::create_dir_all(parent).map_err(copy_failed)?;
            }
            copy_symlink(path, &destination).map_err(copy_failed)?;
            debug!("Linked '{}'.", relative.display());
            copied += 1;
        } else {
            if let Some(parent) = destination.parent() {
                fs::create_dir_all(parent).map_err(copy_failed)?;
            }
            fs::copy(path, &destination).map_err(copy_failed)?;
            debug!("Copied '{}'.", relative.display());
            copied += 1;
        }
    }

    Ok(copied)
}

fn copy_symlink(source: &Path, destination: &Path) -> io::Result<()> {
    let link = fs::read_link(source)?;

    if let Ok(existing) = destination.symlink_metadata() {
        if existing.is_dir() {
            fs::remove_dir_all(destination)?;
        } else {
            fs::remove_file(destination)?;
        }
    }

    make_symlink(source, &link, destination)
}

#[cfg(unix)]
fn make_symlink(_source: &Path, link: &Path, destination: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(link, destination)
}

#[cfg(windows)]
fn make_symlink(source: &Path, link: &Path, destination: &Path) -> io::Result<()> {
    if fs::metadata(source).map(|m| m.is_dir()).unwrap_or(false) {
        std::os::windows::fs::symlink_dir(link, destination)
    } else {
        std::os::windows::fs::symlink_file(link, destination)
    }
}

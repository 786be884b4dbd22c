//! File system utility functions
//!
//! Safe file operations for staging and relocating generated documentation.

use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Move a directory tree, falling back to copy + delete across filesystems.
///
/// The staging area lives outside the workspace, which on some runners is a
/// different mount than `/tmp`, so a plain rename is not guaranteed to work.
pub fn move_dir<P: AsRef<Path>, Q: AsRef<Path>>(src: P, dst: Q) -> io::Result<()> {
    let src = src.as_ref();
    let dst = dst.as_ref();

    debug!("Moving directory: {} -> {}", src.display(), dst.display());

    // checked up front: the copy fallback would otherwise see the directory
    // its own create_dir_all produced when src and dst alias the same path,
    // and report success after moving nothing
    if !src.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("source directory not found: {}", src.display()),
        ));
    }

    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent)?;
    }

    match fs::rename(src, dst) {
        Ok(()) => {
            debug!("Directory moved via rename");
            Ok(())
        }
        Err(e) => {
            debug!("Rename failed ({}), trying copy + delete", e);
            copy_dir_all(src, dst)?;
            fs::remove_dir_all(src)?;
            debug!("Directory moved via copy + delete");
            Ok(())
        }
    }
}

/// Recursively copy a directory tree.
fn copy_dir_all(src: &Path, dst: &Path) -> io::Result<()> {
    fs::create_dir_all(dst)?;

    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let target = dst.join(entry.file_name());

        if entry.file_type()?.is_dir() {
            copy_dir_all(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }

    Ok(())
}

/// Remove a file if it exists, reporting whether anything was removed.
pub fn remove_file_if_exists<P: AsRef<Path>>(path: P) -> io::Result<bool> {
    let path = path.as_ref();

    match fs::remove_file(path) {
        Ok(()) => {
            debug!("Removed file: {}", path.display());
            Ok(true)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("File does not exist: {}", path.display());
            Ok(false)
        }
        Err(e) => Err(e),
    }
}

/// Remove a directory and all its contents if it exists.
pub fn remove_dir_all_if_exists<P: AsRef<Path>>(path: P) -> io::Result<bool> {
    let path = path.as_ref();

    match fs::remove_dir_all(path) {
        Ok(()) => {
            debug!("Removed directory: {}", path.display());
            Ok(true)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("Directory does not exist: {}", path.display());
            Ok(false)
        }
        Err(e) => Err(e),
    }
}

/// Write content to a file, creating parent directories if needed.
pub fn write_file<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> io::Result<()> {
    let path = path.as_ref();

    debug!("Writing file: {}", path.display());

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, contents)
}

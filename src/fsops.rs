//! Filesystem primitives: parent creation, recursive copy, tree
//! mirroring, and atomic output writes.

use std::path::Path;

use crate::error::AssetError;

/// Ensure the parent directory of `path` exists, creating it (and any
/// ancestors) if necessary.
///
/// # Errors
///
/// Returns [`AssetError::Io`] if the directory cannot be created.
pub fn ensure_parent_dir(path: &Path) -> Result<(), AssetError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|source| AssetError::Io {
            context: format!("creating directory {}", parent.display()),
            source,
        })?;
    }
    Ok(())
}

/// Recursively copy a directory tree, returning the number of files copied.
///
/// Symlinks within the source tree are *followed*: the function uses
/// [`Path::is_dir`] (which follows symlinks) so directory symlinks are
/// recursed into and their contents materialised rather than copying the
/// link itself.
///
/// # Errors
///
/// Returns [`AssetError::Io`] if the destination directory cannot be
/// created, a source entry cannot be read, or a file cannot be copied.
pub fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<u32, AssetError> {
    std::fs::create_dir_all(dst).map_err(|source| AssetError::Io {
        context: format!("creating directory {}", dst.display()),
        source,
    })?;
    let mut copied = 0u32;
    for entry in std::fs::read_dir(src).map_err(|source| AssetError::Io {
        context: format!("reading directory {}", src.display()),
        source,
    })? {
        let entry = entry.map_err(|source| AssetError::Io {
            context: format!("reading entry in {}", src.display()),
            source,
        })?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());
        if src_path.is_dir() {
            copied += copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path).map_err(|source| AssetError::Io {
                context: format!(
                    "copying {} to {}",
                    src_path.display(),
                    dst_path.display()
                ),
                source,
            })?;
            copied += 1;
        }
    }
    Ok(copied)
}

/// Replace `dst` with a fresh copy of the directory tree at `src`,
/// returning the number of files copied.
///
/// The source tree is validated before the previous output is removed, so
/// a missing source never destroys an existing destination.
///
/// # Errors
///
/// Returns [`AssetError::MissingSourceTree`] if `src` is not a directory,
/// and [`AssetError::Io`] if the previous destination cannot be removed or
/// the copy fails.
pub fn mirror_dir(src: &Path, dst: &Path) -> Result<u32, AssetError> {
    if !src.is_dir() {
        return Err(AssetError::MissingSourceTree {
            path: src.to_path_buf(),
        });
    }
    if dst.exists() {
        std::fs::remove_dir_all(dst).map_err(|source| AssetError::Io {
            context: format!("removing {}", dst.display()),
            source,
        })?;
    }
    copy_dir_recursive(src, dst)
}

/// Write `bytes` to `path` atomically: the content goes to a temporary
/// file in the destination directory which is renamed over `path` once
/// fully written, so readers never observe a truncated output.
///
/// Parent directories are created as needed.
///
/// # Errors
///
/// Returns [`AssetError::Io`] if the temporary file cannot be created or
/// written, or the rename fails.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), AssetError> {
    use std::io::Write as _;

    ensure_parent_dir(path)?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|source| AssetError::Io {
        context: format!("creating temporary file in {}", dir.display()),
        source,
    })?;
    tmp.write_all(bytes).map_err(|source| AssetError::Io {
        context: format!("writing {}", path.display()),
        source,
    })?;
    tmp.persist(path).map_err(|e| AssetError::Io {
        context: format!("replacing {}", path.display()),
        source: e.error,
    })?;
    Ok(())
}

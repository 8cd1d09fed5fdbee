//! Writes template assets onto the filesystem.

use std::fs;
use std::io;
use std::path::Path;

use crate::domain::{AppError, Asset, AssetTree, substitute};
use crate::ports::AssetSource;

/// Render a single-file asset to `dest`, creating or overwriting it.
///
/// The parent of `dest` must already exist.
pub fn copy_file<S: AssetSource + ?Sized>(
    source: &S,
    asset: Asset,
    dest: &Path,
    replacements: &[(&str, &str)],
) -> Result<(), AppError> {
    let content = source.read_text(asset)?;
    fs::write(dest, substitute(&content, replacements))?;
    Ok(())
}

/// Copy an asset tree verbatim into `dest_dir`, which must not exist yet.
pub fn copy_tree<S: AssetSource + ?Sized>(
    source: &S,
    tree: AssetTree,
    dest_dir: &Path,
) -> Result<(), AppError> {
    let files = source.tree_files(tree)?;

    if let Some(parent) = dest_dir.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::create_dir(dest_dir).map_err(|err| match err.kind() {
        io::ErrorKind::AlreadyExists => AppError::AlreadyExists(dest_dir.display().to_string()),
        _ => AppError::Io(err),
    })?;

    for file in files {
        let path = dest_dir.join(&file.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, &file.contents)?;
    }

    Ok(())
}

/// Create an empty file, truncating any existing one.
pub fn touch(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, "")?;
    Ok(())
}

use std::fs;
use std::io;
use std::path::PathBuf;

use walkdir::WalkDir;

use crate::domain::{AppError, Asset, AssetFile, AssetTree};
use crate::ports::AssetSource;

/// Asset source reading templates from a directory laid out like the
/// embedded bundle (`package.json`, `template.html`, `svelte-app/`, ...).
#[derive(Debug, Clone)]
pub struct DirectoryAssetSource {
    root: PathBuf,
}

impl DirectoryAssetSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetSource for DirectoryAssetSource {
    fn read_text(&self, asset: Asset) -> Result<String, AppError> {
        let path = self.root.join(asset.file_name());
        fs::read_to_string(&path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => AppError::AssetNotFound(path.display().to_string()),
            _ => AppError::Io(err),
        })
    }

    fn tree_files(&self, tree: AssetTree) -> Result<Vec<AssetFile>, AppError> {
        let dir = self.root.join(tree.dir_name());
        if !dir.is_dir() {
            return Err(AppError::AssetNotFound(dir.display().to_string()));
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&dir).sort_by_file_name() {
            let entry = entry.map_err(io::Error::from)?;
            if !entry.file_type().is_file() {
                continue;
            }
            let Ok(relative) = entry.path().strip_prefix(&dir) else {
                continue;
            };
            let contents = fs::read(entry.path())?;
            files.push(AssetFile { path: relative.to_path_buf(), contents });
        }

        Ok(files)
    }
}

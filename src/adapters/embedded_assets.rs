use std::path::Path;

use include_dir::{Dir, DirEntry, include_dir};

use crate::domain::{AppError, Asset, AssetFile, AssetTree};
use crate::ports::AssetSource;

static PROJECT_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/project");

/// Asset source backed by the templates compiled into the binary.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedAssetSource;

impl EmbeddedAssetSource {
    pub fn new() -> Self {
        Self
    }
}

impl AssetSource for EmbeddedAssetSource {
    fn read_text(&self, asset: Asset) -> Result<String, AppError> {
        PROJECT_DIR
            .get_file(asset.file_name())
            .and_then(|file| file.contents_utf8())
            .map(str::to_string)
            .ok_or_else(|| AppError::AssetNotFound(asset.to_string()))
    }

    fn tree_files(&self, tree: AssetTree) -> Result<Vec<AssetFile>, AppError> {
        let dir = PROJECT_DIR
            .get_dir(tree.dir_name())
            .ok_or_else(|| AppError::AssetNotFound(tree.to_string()))?;

        let mut files = Vec::new();
        collect_files(dir, dir.path(), &mut files);
        files.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(files)
    }
}

fn collect_files(dir: &'static Dir, root: &Path, files: &mut Vec<AssetFile>) {
    for entry in dir.entries() {
        match entry {
            DirEntry::File(file) => {
                let path = file.path().strip_prefix(root).unwrap_or(file.path()).to_path_buf();
                files.push(AssetFile { path, contents: file.contents().to_vec() });
            }
            DirEntry::Dir(subdir) => collect_files(subdir, root, files),
        }
    }
}

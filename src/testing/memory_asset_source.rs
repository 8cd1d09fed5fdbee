use std::collections::HashMap;

use crate::domain::{AppError, Asset, AssetFile, AssetTree};
use crate::ports::AssetSource;

/// In-memory asset source for testing.
#[derive(Default)]
#[allow(dead_code)]
pub struct MemoryAssetSource {
    texts: HashMap<&'static str, String>,
    trees: HashMap<&'static str, Vec<AssetFile>>,
}

#[allow(dead_code)]
impl MemoryAssetSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, asset: Asset, text: &str) -> Self {
        self.texts.insert(asset.file_name(), text.to_string());
        self
    }

    pub fn with_tree(mut self, tree: AssetTree, files: Vec<AssetFile>) -> Self {
        self.trees.insert(tree.dir_name(), files);
        self
    }

    /// A complete minimal asset set for a scaffolded project.
    pub fn project() -> Self {
        Self::new()
            .with_text(Asset::Manifest, "{\n  \"name\": \"##app-name##\"\n}\n")
            .with_text(
                Asset::BuildConfig,
                "// rollup\nlet svelte_apps = [];\nexport default svelte_apps;\n",
            )
            .with_text(Asset::StyleConfig, "export default {};\n")
            .with_text(Asset::BackendEntry, "from flask import Flask\n")
            .with_text(Asset::PageHtml, "<title>##svelte-app##</title>\n")
            .with_tree(
                AssetTree::PageStub,
                vec![AssetFile { path: "main.js".into(), contents: b"import App;\n".to_vec() }],
            )
    }
}

impl AssetSource for MemoryAssetSource {
    fn read_text(&self, asset: Asset) -> Result<String, AppError> {
        self.texts
            .get(asset.file_name())
            .cloned()
            .ok_or_else(|| AppError::AssetNotFound(asset.to_string()))
    }

    fn tree_files(&self, tree: AssetTree) -> Result<Vec<AssetFile>, AppError> {
        self.trees
            .get(tree.dir_name())
            .cloned()
            .ok_or_else(|| AppError::AssetNotFound(tree.to_string()))
    }
}

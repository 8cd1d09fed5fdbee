use std::fmt;
use std::path::PathBuf;

/// Single-file template assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Asset {
    /// `package.json` template, carries the app-name marker.
    Manifest,
    /// `rollup.config.js` template, carries the page-list declaration.
    BuildConfig,
    /// `tailwind.config.js`.
    StyleConfig,
    /// Sample Flask application.
    BackendEntry,
    /// Per-page HTML entry, carries the page-name marker.
    PageHtml,
}

impl Asset {
    pub const ALL: [Asset; 5] = [
        Asset::Manifest,
        Asset::BuildConfig,
        Asset::StyleConfig,
        Asset::BackendEntry,
        Asset::PageHtml,
    ];

    /// File name inside an asset source.
    pub fn file_name(self) -> &'static str {
        match self {
            Asset::Manifest => "package.json",
            Asset::BuildConfig => "rollup.config.js",
            Asset::StyleConfig => "tailwind.config.js",
            Asset::BackendEntry => "app.py",
            Asset::PageHtml => "template.html",
        }
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Directory template assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetTree {
    /// Frontend stub copied for each new page.
    PageStub,
}

impl AssetTree {
    pub fn dir_name(self) -> &'static str {
        match self {
            AssetTree::PageStub => "svelte-app",
        }
    }
}

impl fmt::Display for AssetTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// A file inside an asset tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetFile {
    /// Path relative to the tree root.
    pub path: PathBuf,
    pub contents: Vec<u8>,
}

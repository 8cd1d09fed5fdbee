use crate::domain::{AppError, Asset, AssetFile, AssetTree};

/// Port for reading template assets.
pub trait AssetSource {
    /// Read a single-file asset as UTF-8 text.
    fn read_text(&self, asset: Asset) -> Result<String, AppError>;

    /// List every file of an asset tree, sorted by relative path.
    fn tree_files(&self, tree: AssetTree) -> Result<Vec<AssetFile>, AppError>;
}

impl<T: AssetSource + ?Sized> AssetSource for Box<T> {
    fn read_text(&self, asset: Asset) -> Result<String, AppError> {
        (**self).read_text(asset)
    }

    fn tree_files(&self, tree: AssetTree) -> Result<Vec<AssetFile>, AppError> {
        (**self).tree_files(tree)
    }
}

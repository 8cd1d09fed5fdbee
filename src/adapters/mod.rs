//! Filesystem and asset adapters.

mod build_config_file;
mod directory_assets;
mod embedded_assets;
pub mod materializer;

pub use build_config_file::BuildConfigFile;
pub use directory_assets::DirectoryAssetSource;
pub use embedded_assets::EmbeddedAssetSource;

mod asset_source;

pub use asset_source::AssetSource;

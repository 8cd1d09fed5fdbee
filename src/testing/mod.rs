mod memory_asset_source;

pub use memory_asset_source::MemoryAssetSource;

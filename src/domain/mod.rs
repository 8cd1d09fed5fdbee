pub mod asset;
pub mod error;
pub mod layout;
pub mod page_list;
pub mod placeholder;

pub use asset::{Asset, AssetFile, AssetTree};
pub use error::AppError;
pub use layout::{DEFAULT_PAGE, ProjectLayout};
pub use page_list::PAGE_LIST_VARIABLE;
pub use placeholder::{APP_NAME_MARKER, PAGE_NAME_MARKER, substitute};

//! flask-svelte: scaffold Flask projects with per-page Svelte frontends.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use std::path::Path;

use adapters::{DirectoryAssetSource, EmbeddedAssetSource};
use app::{AppContext, commands};
use domain::ProjectLayout;
use ports::AssetSource;

pub use app::commands::add_page::PageOutcome;
pub use app::commands::create::ProjectOutcome;
pub use domain::AppError;

/// Create a new project at `<parent>/<name>` with its default `index` page.
///
/// Templates are read from `templates` when given, otherwise from the set
/// compiled into the binary.
pub fn create(
    parent: &Path,
    name: &str,
    templates: Option<&Path>,
) -> Result<ProjectOutcome, AppError> {
    let ctx = AppContext::new(asset_source(templates));
    commands::create::execute(&ctx, parent, name)
}

/// Add a page named `name` to the project rooted at `project_root`.
pub fn add_page(
    project_root: &Path,
    name: &str,
    templates: Option<&Path>,
) -> Result<PageOutcome, AppError> {
    let ctx = AppContext::new(asset_source(templates));
    commands::add_page::execute(&ctx, &ProjectLayout::new(project_root), name)
}

fn asset_source(templates: Option<&Path>) -> Box<dyn AssetSource> {
    match templates {
        Some(dir) => Box::new(DirectoryAssetSource::new(dir)),
        None => Box::new(EmbeddedAssetSource::new()),
    }
}

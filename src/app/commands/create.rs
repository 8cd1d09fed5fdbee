//! Project generator: scaffolds a new project with its default page.

use std::fs;
use std::path::{Path, PathBuf};

use crate::adapters::materializer;
use crate::app::AppContext;
use crate::app::commands::add_page::{self, PageOutcome};
use crate::domain::{APP_NAME_MARKER, AppError, Asset, DEFAULT_PAGE, ProjectLayout};
use crate::ports::AssetSource;

/// Result of a successful create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectOutcome {
    pub name: String,
    pub root: PathBuf,
    pub page: PageOutcome,
}

/// Execute the create command, placing the project at `<parent>/<name>`.
///
/// The root may be absent or an empty directory; anything else is rejected
/// before the first write.
pub fn execute<A>(
    ctx: &AppContext<A>,
    parent: &Path,
    name: &str,
) -> Result<ProjectOutcome, AppError>
where
    A: AssetSource,
{
    let layout = ProjectLayout::new(parent.join(name));
    ensure_root_available(layout.root())?;

    for dir in layout.skeleton_dirs() {
        fs::create_dir_all(&dir)?;
    }

    let assets = ctx.assets();
    let manifest_replacements = [(APP_NAME_MARKER, name)];
    materializer::copy_file(assets, Asset::Manifest, &layout.manifest(), &manifest_replacements)?;
    materializer::copy_file(assets, Asset::BuildConfig, &layout.build_config(), &[])?;
    materializer::copy_file(assets, Asset::StyleConfig, &layout.style_config(), &[])?;
    materializer::copy_file(assets, Asset::BackendEntry, &layout.backend_entry(), &[])?;
    materializer::touch(&layout.global_stylesheet())?;

    let page = add_page::execute(ctx, &layout, DEFAULT_PAGE)?;

    Ok(ProjectOutcome { name: name.to_string(), root: layout.root().to_path_buf(), page })
}

fn ensure_root_available(root: &Path) -> Result<(), AppError> {
    if !root.exists() {
        return Ok(());
    }
    if root.is_dir() && fs::read_dir(root)?.next().is_none() {
        return Ok(());
    }
    Err(AppError::ProjectExists(root.display().to_string()))
}

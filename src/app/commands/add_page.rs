//! Page generator: adds one page to an existing project.

use std::fs;
use std::path::PathBuf;

use crate::adapters::{BuildConfigFile, materializer};
use crate::app::AppContext;
use crate::domain::{
    AppError, Asset, AssetTree, PAGE_LIST_VARIABLE, PAGE_NAME_MARKER, ProjectLayout, page_list,
};
use crate::ports::AssetSource;

/// Files and directories created for a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOutcome {
    pub name: String,
    pub html: PathBuf,
    pub sources: PathBuf,
    pub static_dir: PathBuf,
}

/// Execute the add-page command against the project at `layout`.
///
/// Nothing is written when the name is already in use or would not read back
/// unchanged from the build config. Once writing starts
/// there is no rollback: a failed build-config update leaves the page files
/// on disk without a registration.
pub fn execute<A>(
    ctx: &AppContext<A>,
    layout: &ProjectLayout,
    name: &str,
) -> Result<PageOutcome, AppError>
where
    A: AssetSource,
{
    if !page_list::is_representable(PAGE_LIST_VARIABLE, name) {
        return Err(AppError::InvalidPageName(name.to_string()));
    }

    let config = BuildConfigFile::new(layout.build_config());
    ensure_page_available(&config, layout, name)?;

    let static_dir = layout.page_static_dir(name);
    fs::create_dir_all(&static_dir)?;

    let sources = layout.page_sources(name);
    materializer::copy_tree(ctx.assets(), AssetTree::PageStub, &sources)?;

    let html = layout.page_html(name);
    materializer::copy_file(ctx.assets(), Asset::PageHtml, &html, &[(PAGE_NAME_MARKER, name)])?;

    config.append_page(name)?;

    Ok(PageOutcome { name: name.to_string(), html, sources, static_dir })
}

fn ensure_page_available(
    config: &BuildConfigFile,
    layout: &ProjectLayout,
    name: &str,
) -> Result<(), AppError> {
    let registered = config.registered_pages()?;
    if registered.iter().any(|page| page == name)
        || layout.page_sources(name).exists()
        || layout.page_html(name).exists()
    {
        return Err(AppError::PageExists(name.to_string()));
    }
    Ok(())
}

//! Add-page command implementation.

use std::path::Path;

use crate::domain::AppError;

pub fn run_add_page(name: &str, templates: Option<&Path>) -> Result<(), AppError> {
    let root = std::env::current_dir()?;
    println!("Project root: {}", root.display());

    let outcome = crate::add_page(&root, name, templates)?;
    println!("✅ Added page: {}", outcome.name);
    Ok(())
}

//! Create command implementation.

use std::path::Path;

use colored::Colorize;

use crate::domain::AppError;

pub fn run_create(name: &str, templates: Option<&Path>) -> Result<(), AppError> {
    println!("Creating project {}...", name);

    let cwd = std::env::current_dir()?;
    let outcome = crate::create(&cwd, name, templates)?;

    println!("✅ Added page: {}", outcome.page.name);
    println!("✅ Created project at {}", outcome.root.display());
    println!();
    println!("Your project is ready! Run:");
    println!("{}", format!("cd {}", name).green());
    println!("npm install");
    println!("Then run `npm run dev` to start the development server.");
    Ok(())
}

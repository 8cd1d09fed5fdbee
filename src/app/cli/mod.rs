//! CLI Adapter.

mod add_page;
mod create;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "flask-svelte")]
#[command(version)]
#[command(about = "Scaffold Flask projects with per-page Svelte frontends", long_about = None)]
struct Cli {
    /// Read templates from this directory instead of the built-in set
    #[arg(long, global = true, value_name = "DIR")]
    templates: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new project in ./<NAME>
    #[clap(visible_alias = "c")]
    Create {
        /// Project name
        name: String,
    },
    /// Add a page to the project in the current directory
    #[clap(visible_aliases = ["a", "add_page"])]
    AddPage {
        /// Page name
        name: String,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    let templates = cli.templates.as_deref();

    let result: Result<(), AppError> = match cli.command {
        Commands::Create { name } => create::run_create(&name, templates),
        Commands::AddPage { name } => add_page::run_add_page(&name, templates),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

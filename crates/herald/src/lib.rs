//! `herald` - generate command declarations for multiple languages from
//! JSON command schemas.
//!
//! The CLI is a thin layer over [`orchestrate`], which validates every
//! schema source, dispatches to the renderers registered in
//! `herald-codegen`, and writes the output tree.

use clap::{Parser, Subcommand};

pub mod commands;
pub mod orchestrate;

pub use orchestrate::{GenerateError, LanguageSelection};

#[derive(Parser)]
#[command(
    name = "herald",
    version,
    about = "Generate command declarations for multiple languages from JSON command schemas"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate code for one or more target languages
    Generate(commands::generate::GenerateArgs),
    /// Validate schema sources without writing anything
    Check(commands::check::CheckArgs),
    /// List registered target languages
    Languages,
}

/// Parse arguments and run the selected command.
pub fn run() -> Result<(), GenerateError> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Generate(args) => commands::generate::run(args),
        Commands::Check(args) => commands::check::run(args),
        Commands::Languages => {
            commands::languages::run();
            Ok(())
        }
    }
}

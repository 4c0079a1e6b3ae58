//! Check command - validate schema sources without writing anything.

use clap::Args;
use std::path::PathBuf;

use herald_codegen::input::load_commands;

use crate::orchestrate::{self, GenerateError};

#[derive(Args)]
pub struct CheckArgs {
    /// Source JSON file, or a directory of JSON files
    #[arg(short, long)]
    pub source: PathBuf,
}

pub fn run(args: CheckArgs) -> Result<(), GenerateError> {
    let sources = orchestrate::collect_sources(&args.source)?;
    for (stem, raw) in &sources {
        let commands = load_commands(raw).map_err(|e| GenerateError::Schema {
            source_name: stem.clone(),
            source: e,
        })?;
        println!("{stem}: OK ({} commands)", commands.len());
    }
    Ok(())
}

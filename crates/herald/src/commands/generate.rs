//! Generate command - render schema sources into per-language output trees.

use clap::Args;
use std::path::PathBuf;

use crate::orchestrate::{self, GenerateError, LanguageSelection};

#[derive(Args)]
pub struct GenerateArgs {
    /// Source JSON file, or a directory of JSON files
    #[arg(short, long)]
    pub source: PathBuf,

    /// Build output directory (one subdirectory per language)
    #[arg(short, long)]
    pub build: PathBuf,

    /// Target language; repeatable, defaults to all registered languages
    #[arg(short, long)]
    pub lang: Vec<String>,

    /// Directory of static support files overriding the embedded set
    /// (expects one subdirectory per language)
    #[arg(long)]
    pub assets: Option<PathBuf>,
}

pub fn run(args: GenerateArgs) -> Result<(), GenerateError> {
    let sources = orchestrate::collect_sources(&args.source)?;
    let selection = if args.lang.is_empty() {
        LanguageSelection::All
    } else {
        LanguageSelection::Named(args.lang)
    };
    orchestrate::run(&sources, &selection, &args.build, args.assets.as_deref())
}

//! CLI command implementations - one command per file.

pub mod check;
pub mod generate;
pub mod languages;

//! Schema loading and validation.
//!
//! Raw parsed JSON goes in, a validated [`Vec<Command>`](crate::ir::Command)
//! comes out. All validation happens here, before any renderer runs.

mod commands;

pub use commands::{SchemaError, load_commands};

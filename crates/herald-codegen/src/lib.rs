//! Multi-language command declaration generation from JSON command schemas.
//!
//! `herald-codegen` converts a declarative command schema (command name →
//! typed fields + documentation) into source-code declarations for multiple
//! target languages: one canonical intermediate representation, one renderer
//! per language.
//!
//! # Architecture
//!
//! ```text
//! Input                  IR                Renderers
//! ─────────────      ─────────────     ──────────────────
//! JSON schema  ────> Vec<Command> ──┬─> Python dataclasses
//! (input.rs)         (ir.rs)        ├─> C++ classes
//!                                   ├─> C# classes
//!                                   └─> JavaScript classes
//! ```
//!
//! # Example
//!
//! ```
//! use herald_codegen::{input::load_commands, registry::get_renderer};
//!
//! let schema = serde_json::json!({
//!     "PingCommand": {
//!         "ABOUT": "Check that the peer is alive.",
//!         "timeoutSeconds": { "type": "int", "comment": "Give up after this many seconds" }
//!     }
//! });
//!
//! let commands = load_commands(&schema).unwrap();
//! let renderer = get_renderer("python").unwrap();
//! let code = renderer.render_file(&commands);
//! assert!(code.contains("class PingCommand(Command):"));
//! assert!(code.contains("timeout_seconds: int"));
//! ```
//!
//! # Feature Flags
//!
//! One `lang-*` flag per renderer, all enabled by default:
//! - `lang-python` - Python dataclasses
//! - `lang-cplusplus` - C++ classes in a header
//! - `lang-csharp` - C# classes with auto-properties
//! - `lang-javascript` - JavaScript classes with JSDoc types

pub mod casing;
pub mod input;
pub mod ir;
pub mod output;
pub mod registry;
pub mod traits;

// Re-export commonly used items
pub use input::{SchemaError, load_commands};
pub use ir::{Command, CommandEntry, EntryType};
pub use traits::{Renderer, StaticAssetError, StaticFile};

// Re-export registry functions
pub use registry::{get_renderer, register_renderer, renderer_names, renderers};

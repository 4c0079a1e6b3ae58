//! Intermediate representation for command definitions.
//!
//! The schema loader normalizes raw JSON documents to this IR before any
//! renderer runs. All renderers consume it read-only.

use serde::{Deserialize, Serialize};

/// The primitive type of a command field.
///
/// Closed set: adding a variant requires updating every renderer's type
/// table (the tables are exhaustive `match`es, so the compiler enforces it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryType {
    Str,
    Int,
    Float,
    Bool,
}

impl EntryType {
    /// Parse the schema wire spelling (`"str"`, `"int"`, `"float"`, `"bool"`).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "str" => Some(Self::Str),
            "int" => Some(Self::Int),
            "float" => Some(Self::Float),
            "bool" => Some(Self::Bool),
            _ => None,
        }
    }

    /// The wire spelling, for error messages and round-tripping.
    pub fn schema_name(&self) -> &'static str {
        match self {
            Self::Str => "str",
            Self::Int => "int",
            Self::Float => "float",
            Self::Bool => "bool",
        }
    }
}

/// One field of a command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandEntry {
    /// Field name as it appears in the schema (conventionally camelCase).
    pub name: String,
    /// Field type.
    pub ty: EntryType,
    /// Human-readable description, rendered as a comment above the field.
    pub comment: String,
    /// Whether the field may be absent/null in the target representation.
    pub optional: bool,
}

impl CommandEntry {
    pub fn new(name: impl Into<String>, ty: EntryType, comment: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty,
            comment: comment.into(),
            optional: false,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// One generated declaration (class/struct) with documentation and fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Command {
    /// Declaration identifier (PascalCase by convention).
    pub name: String,
    /// Documentation string; may span multiple lines.
    pub about: String,
    /// Fields in schema order. Order is significant: it determines
    /// declaration order in every target language.
    pub entries: Vec<CommandEntry>,
}

impl Command {
    pub fn new(name: impl Into<String>, about: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            about: about.into(),
            entries: Vec::new(),
        }
    }

    pub fn with_entry(mut self, entry: CommandEntry) -> Self {
        self.entries.push(entry);
        self
    }
}

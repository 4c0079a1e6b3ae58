//! Command schema validation.

use serde_json::Value;
use tracing::debug;

use crate::ir::{Command, CommandEntry, EntryType};

/// Documentation key inside each command object. Every other key is a field.
const ABOUT_KEY: &str = "ABOUT";

/// A defect in a raw schema document. Always fatal for the whole document:
/// a single invalid command fails the load for its schema source.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("schema root must be a JSON object mapping command names to definitions")]
    NotAnObject,

    #[error("command `{command}` has no ABOUT documentation")]
    MissingAbout { command: String },

    #[error("command `{command}`, field `{field}`: {reason}")]
    InvalidField {
        command: String,
        field: String,
        reason: String,
    },

    #[error(
        "command `{command}`, field `{field}`: unknown type `{value}` \
         (expected str, int, float or bool)"
    )]
    UnknownType {
        command: String,
        field: String,
        value: String,
    },
}

/// Convert a raw schema document into validated [`Command`] values.
///
/// Validation runs per command in document order; the first defect aborts
/// the load. `serde_json` is built with `preserve_order`, so field order in
/// the document is the field order of the resulting commands.
pub fn load_commands(raw: &Value) -> Result<Vec<Command>, SchemaError> {
    let root = raw.as_object().ok_or(SchemaError::NotAnObject)?;

    let mut commands = Vec::with_capacity(root.len());
    for (name, body) in root {
        commands.push(load_command(name, body)?);
    }
    debug!(commands = commands.len(), "loaded command schema");
    Ok(commands)
}

fn load_command(name: &str, body: &Value) -> Result<Command, SchemaError> {
    let missing_about = || SchemaError::MissingAbout {
        command: name.to_string(),
    };

    let body = body.as_object().ok_or_else(missing_about)?;
    let about = body.get(ABOUT_KEY).ok_or_else(missing_about)?;
    let about = match about {
        Value::String(s) => s.as_str(),
        Value::Array(_) => {
            return Err(invalid(
                name,
                ABOUT_KEY,
                "positional-list ABOUT is a legacy format; \
                 use a string and give each field its own `comment`",
            ));
        }
        _ => return Err(invalid(name, ABOUT_KEY, "ABOUT must be a string")),
    };
    if about.trim().is_empty() {
        return Err(missing_about());
    }

    let mut command = Command::new(name, about);
    for (field, value) in body {
        if field == ABOUT_KEY {
            continue;
        }
        command.entries.push(load_entry(name, field, value)?);
    }
    Ok(command)
}

fn load_entry(command: &str, field: &str, value: &Value) -> Result<CommandEntry, SchemaError> {
    let def = value
        .as_object()
        .ok_or_else(|| invalid(command, field, "field definition is not an object"))?;

    let ty = def
        .get("type")
        .ok_or_else(|| invalid(command, field, "missing `type`"))?;
    let comment = def
        .get("comment")
        .ok_or_else(|| invalid(command, field, "missing `comment`"))?;
    let comment = comment
        .as_str()
        .ok_or_else(|| invalid(command, field, "`comment` must be a string"))?;
    if comment.trim().is_empty() {
        return Err(invalid(command, field, "`comment` must not be empty"));
    }

    let ty = ty
        .as_str()
        .ok_or_else(|| invalid(command, field, "`type` must be a string"))?;
    let ty = EntryType::parse(ty).ok_or_else(|| SchemaError::UnknownType {
        command: command.to_string(),
        field: field.to_string(),
        value: ty.to_string(),
    })?;

    let optional = match def.get("optional") {
        None => false,
        Some(Value::Bool(b)) => *b,
        Some(_) => return Err(invalid(command, field, "`optional` must be a boolean")),
    };

    if !is_identifier(field) {
        return Err(invalid(command, field, "not a valid identifier"));
    }

    let mut entry = CommandEntry::new(field, ty, comment);
    entry.optional = optional;
    Ok(entry)
}

/// `[A-Za-z_][A-Za-z0-9_]*` — valid in every target language after casing
/// conversion.
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn invalid(command: &str, field: &str, reason: &str) -> SchemaError {
    SchemaError::InvalidField {
        command: command.to_string(),
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

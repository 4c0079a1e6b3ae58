//! C++ renderer: one class per command in a single header, inside the
//! `GeneratedCommands` namespace, inheriting the shared `Command` base
//! from `base-command.hpp`.

use crate::casing::pascal_case;
use crate::ir::{Command, CommandEntry, EntryType};
use crate::traits::{Renderer, StaticFile, indent};

pub struct CPlusPlusRenderer;

pub static CPLUSPLUS_RENDERER: CPlusPlusRenderer = CPlusPlusRenderer;

static STATIC_FILES: &[StaticFile] = &[StaticFile {
    name: "base-command.hpp",
    contents: include_str!("../static_files/cplusplus/base-command.hpp"),
}];

fn cpp_type(ty: EntryType) -> &'static str {
    match ty {
        EntryType::Str => "std::string",
        EntryType::Int => "int",
        EntryType::Float => "float",
        EntryType::Bool => "bool",
    }
}

impl Renderer for CPlusPlusRenderer {
    fn name(&self) -> &'static str {
        "cplusplus"
    }

    fn extension(&self) -> &'static str {
        "hpp"
    }

    fn static_files(&self) -> &'static [StaticFile] {
        STATIC_FILES
    }

    fn render_header(&self) -> Vec<String> {
        vec![
            "// Auto-generated file. Do not edit manually.".to_string(),
            "#pragma once".to_string(),
            String::new(),
            "#include \"base-command.hpp\"".to_string(),
            String::new(),
            "#include <optional>".to_string(),
            "#include <string>".to_string(),
            String::new(),
            "namespace GeneratedCommands".to_string(),
            "{".to_string(),
        ]
    }

    fn render_about(&self, command: &Command) -> Vec<String> {
        let mut lines = vec!["/**".to_string()];
        for (i, line) in command.about.lines().enumerate() {
            let line = line.trim();
            if i == 0 {
                lines.push(format!(" * @brief {line}"));
            } else {
                lines.push(format!(" * {line}"));
            }
        }
        lines.push(" */".to_string());
        lines
    }

    fn render_field(&self, entry: &CommandEntry) -> Vec<String> {
        let mut ty = cpp_type(entry.ty).to_string();
        if entry.optional {
            ty = format!("std::optional<{ty}>");
        }

        let mut lines = Vec::new();
        if !entry.comment.is_empty() {
            lines.push("/**".to_string());
            lines.push(format!(" * @brief {}", entry.comment));
            lines.push(" */".to_string());
        }
        lines.push(format!("{} {};", ty, pascal_case(&entry.name)));
        lines
    }

    fn render_fields(&self, command: &Command) -> Vec<String> {
        if command.entries.is_empty() {
            return vec!["// No fields defined".to_string()];
        }
        let mut lines = Vec::new();
        for entry in &command.entries {
            lines.extend(self.render_field(entry));
        }
        lines
    }

    fn render_command(&self, command: &Command) -> Vec<String> {
        let mut lines = self.render_about(command);
        lines.push(format!("class {} : public Command", command.name));
        lines.push("{".to_string());
        lines.push("public:".to_string());
        lines.extend(indent(self.render_fields(command)));
        lines.push("};".to_string());
        indent(lines)
    }

    fn render_footer(&self, _commands: &[Command]) -> Vec<String> {
        vec!["}".to_string()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_uses_pascal_case() {
        let entry = CommandEntry::new("someMessage", EntryType::Str, "Example message");
        let lines = CPLUSPLUS_RENDERER.render_field(&entry);
        assert_eq!(
            lines,
            vec!["/**", " * @brief Example message", " */", "std::string SomeMessage;"]
        );
    }

    #[test]
    fn optional_field_wraps_in_std_optional() {
        let entry = CommandEntry::new("couldBeNothing", EntryType::Str, "Optional string").optional();
        let lines = CPLUSPLUS_RENDERER.render_field(&entry);
        assert_eq!(
            lines.last().unwrap(),
            "std::optional<std::string> CouldBeNothing;"
        );
    }

    #[test]
    fn empty_command_renders_placeholder_comment() {
        let command = Command::new("EmptyCommand", "Nothing in here.");
        assert_eq!(
            CPLUSPLUS_RENDERER.render_fields(&command),
            vec!["// No fields defined"]
        );
    }

    #[test]
    fn command_is_wrapped_in_namespace() {
        let command = Command::new("EmptyCommand", "Nothing in here.");
        let file = CPLUSPLUS_RENDERER.render_file(&[command]);
        assert!(file.starts_with("// Auto-generated file. Do not edit manually.\n#pragma once\n"));
        assert!(file.contains("namespace GeneratedCommands\n{\n"));
        assert!(file.contains("    class EmptyCommand : public Command\n"));
        assert!(file.ends_with("\n}\n"));
    }

    #[test]
    fn numeric_types_map_to_primitives() {
        let count = CommandEntry::new("count", EntryType::Int, "Example count");
        let ratio = CommandEntry::new("ratio", EntryType::Float, "Some ratio");
        assert_eq!(CPLUSPLUS_RENDERER.render_field(&count).last().unwrap(), "int Count;");
        assert_eq!(CPLUSPLUS_RENDERER.render_field(&ratio).last().unwrap(), "float Ratio;");
    }
}

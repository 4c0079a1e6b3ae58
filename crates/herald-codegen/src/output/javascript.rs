//! JavaScript renderer: one class per command, fields declared in the
//! constructor with JSDoc `@type` annotations, extending the shared
//! `Command` base from `BaseCommand.js`.

use crate::casing::camel_to_snake;
use crate::ir::{Command, CommandEntry, EntryType};
use crate::traits::{Renderer, StaticFile, indent};

pub struct JavaScriptRenderer;

pub static JAVASCRIPT_RENDERER: JavaScriptRenderer = JavaScriptRenderer;

static STATIC_FILES: &[StaticFile] = &[StaticFile {
    name: "BaseCommand.js",
    contents: include_str!("../static_files/javascript/BaseCommand.js"),
}];

fn jsdoc_type(ty: EntryType) -> &'static str {
    match ty {
        EntryType::Str => "string",
        EntryType::Int => "number",
        EntryType::Float => "number",
        EntryType::Bool => "boolean",
    }
}

impl Renderer for JavaScriptRenderer {
    fn name(&self) -> &'static str {
        "javascript"
    }

    fn extension(&self) -> &'static str {
        "js"
    }

    fn static_files(&self) -> &'static [StaticFile] {
        STATIC_FILES
    }

    fn render_header(&self) -> Vec<String> {
        vec![
            "// Auto-generated file. Do not edit manually.".to_string(),
            "import { Command } from './BaseCommand.js';".to_string(),
            String::new(),
        ]
    }

    fn render_about(&self, command: &Command) -> Vec<String> {
        let mut lines = vec!["/**".to_string()];
        for line in command.about.lines() {
            lines.push(format!(" * {}", line.trim()));
        }
        lines.push(" */".to_string());
        lines
    }

    fn render_field(&self, entry: &CommandEntry) -> Vec<String> {
        let mut ty = jsdoc_type(entry.ty).to_string();
        if entry.optional {
            ty = format!("?{ty}");
        }

        let mut lines = Vec::new();
        if !entry.comment.is_empty() {
            lines.push(format!("// {}", entry.comment));
        }
        lines.push(format!("/** @type {{{ty}}} */"));
        lines.push(format!("this.{} = null;", camel_to_snake(&entry.name)));
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
        lines.push(format!("class {} extends Command {{", command.name));
        lines.push("    constructor() {".to_string());
        lines.push("        super();".to_string());
        lines.extend(indent(indent(self.render_fields(command))));
        lines.push("    }".to_string());
        lines.push("}".to_string());
        lines
    }

    fn render_footer(&self, commands: &[Command]) -> Vec<String> {
        if commands.is_empty() {
            return Vec::new();
        }
        let names: Vec<&str> = commands.iter().map(|c| c.name.as_str()).collect();
        vec![format!("export {{ {} }};", names.join(", "))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_declares_null_with_jsdoc_type() {
        let entry = CommandEntry::new("someMessage", EntryType::Str, "Example message");
        assert_eq!(
            JAVASCRIPT_RENDERER.render_field(&entry),
            vec![
                "// Example message",
                "/** @type {string} */",
                "this.some_message = null;"
            ]
        );
    }

    #[test]
    fn optional_field_uses_nullable_jsdoc_type() {
        let entry = CommandEntry::new("couldBeNothing", EntryType::Str, "Optional string").optional();
        let lines = JAVASCRIPT_RENDERER.render_field(&entry);
        assert_eq!(lines[1], "/** @type {?string} */");
    }

    #[test]
    fn int_and_float_both_map_to_number() {
        let count = CommandEntry::new("count", EntryType::Int, "Example count");
        let ratio = CommandEntry::new("ratio", EntryType::Float, "Some ratio");
        assert_eq!(JAVASCRIPT_RENDERER.render_field(&count)[1], "/** @type {number} */");
        assert_eq!(JAVASCRIPT_RENDERER.render_field(&ratio)[1], "/** @type {number} */");
    }

    #[test]
    fn empty_command_renders_placeholder_comment() {
        let command = Command::new("EmptyCommand", "Nothing in here.");
        assert_eq!(
            JAVASCRIPT_RENDERER.render_fields(&command),
            vec!["// No fields defined"]
        );
    }

    #[test]
    fn footer_exports_all_commands() {
        let commands = vec![
            Command::new("ExampleCommand", "Docs."),
            Command::new("AnotherExampleCommand", "Docs."),
        ];
        assert_eq!(
            JAVASCRIPT_RENDERER.render_footer(&commands),
            vec!["export { ExampleCommand, AnotherExampleCommand };"]
        );
    }

    #[test]
    fn footer_is_empty_without_commands() {
        assert!(JAVASCRIPT_RENDERER.render_footer(&[]).is_empty());
    }
}

//! C# renderer: one class per command with auto-properties, inside the
//! `GeneratedCommands` namespace, inheriting the shared `Command` base
//! from `BaseCommand.cs`.

use crate::casing::pascal_case;
use crate::ir::{Command, CommandEntry, EntryType};
use crate::traits::{Renderer, StaticFile, indent};

pub struct CSharpRenderer;

pub static CSHARP_RENDERER: CSharpRenderer = CSharpRenderer;

static STATIC_FILES: &[StaticFile] = &[StaticFile {
    name: "BaseCommand.cs",
    contents: include_str!("../static_files/csharp/BaseCommand.cs"),
}];

fn csharp_type(ty: EntryType) -> &'static str {
    match ty {
        EntryType::Str => "string",
        EntryType::Int => "int",
        EntryType::Float => "float",
        EntryType::Bool => "bool",
    }
}

impl Renderer for CSharpRenderer {
    fn name(&self) -> &'static str {
        "csharp"
    }

    fn extension(&self) -> &'static str {
        "cs"
    }

    fn static_files(&self) -> &'static [StaticFile] {
        STATIC_FILES
    }

    fn render_header(&self) -> Vec<String> {
        vec![
            "// Auto-generated file. Do not edit manually.".to_string(),
            "using System;".to_string(),
            String::new(),
            "namespace GeneratedCommands".to_string(),
            "{".to_string(),
        ]
    }

    fn render_about(&self, command: &Command) -> Vec<String> {
        let mut lines = vec!["/// <summary>".to_string()];
        for line in command.about.lines() {
            lines.push(format!("/// {}", line.trim()));
        }
        lines.push("/// </summary>".to_string());
        lines
    }

    fn render_field(&self, entry: &CommandEntry) -> Vec<String> {
        let mut ty = csharp_type(entry.ty).to_string();
        if entry.optional {
            ty = format!("{ty}?");
        }

        let mut lines = Vec::new();
        if !entry.comment.is_empty() {
            lines.push(format!("// {}", entry.comment));
        }
        lines.push(format!(
            "public {} {} {{ get; set; }}",
            ty,
            pascal_case(&entry.name)
        ));
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
        lines.push(format!("public class {} : Command", command.name));
        lines.push("{".to_string());
        lines.extend(indent(self.render_fields(command)));
        lines.push("}".to_string());
        indent(lines)
    }

    fn render_footer(&self, _commands: &[Command]) -> Vec<String> {
        vec!["}".to_string()]
    }
}

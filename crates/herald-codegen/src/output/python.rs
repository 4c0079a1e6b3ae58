//! Python renderer: one `@dataclass` per command, inheriting the shared
//! `Command` base from `base_command.py`.

use crate::casing::camel_to_snake;
use crate::ir::{Command, CommandEntry, EntryType};
use crate::traits::{Renderer, StaticFile, indent};

pub struct PythonRenderer;

pub static PYTHON_RENDERER: PythonRenderer = PythonRenderer;

static STATIC_FILES: &[StaticFile] = &[StaticFile {
    name: "base_command.py",
    contents: include_str!("../static_files/python/base_command.py"),
}];

fn python_type(ty: EntryType) -> &'static str {
    match ty {
        EntryType::Str => "str",
        EntryType::Int => "int",
        EntryType::Float => "float",
        EntryType::Bool => "bool",
    }
}

impl Renderer for PythonRenderer {
    fn name(&self) -> &'static str {
        "python"
    }

    fn extension(&self) -> &'static str {
        "py"
    }

    fn static_files(&self) -> &'static [StaticFile] {
        STATIC_FILES
    }

    fn render_header(&self) -> Vec<String> {
        vec![
            "from dataclasses import dataclass".to_string(),
            "from typing import Optional".to_string(),
            "from .base_command import Command".to_string(),
            String::new(),
            "# This file is auto-generated. Do not edit manually.".to_string(),
            String::new(),
        ]
    }

    fn render_about(&self, command: &Command) -> Vec<String> {
        let mut lines = vec!["\"\"\"".to_string()];
        for line in command.about.lines() {
            lines.push(line.trim().to_string());
        }
        lines.push("\"\"\"".to_string());
        lines
    }

    fn render_field(&self, entry: &CommandEntry) -> Vec<String> {
        let mut ty = python_type(entry.ty).to_string();
        if entry.optional {
            ty = format!("Optional[{ty}]");
        }

        let mut lines = Vec::new();
        if !entry.comment.is_empty() {
            lines.push(format!("# {}", entry.comment));
        }
        lines.push(format!("{}: {}", camel_to_snake(&entry.name), ty));
        lines
    }

    fn render_fields(&self, command: &Command) -> Vec<String> {
        if command.entries.is_empty() {
            return vec!["pass".to_string()];
        }
        let mut lines = Vec::new();
        for entry in &command.entries {
            lines.extend(self.render_field(entry));
        }
        lines
    }

    fn render_command(&self, command: &Command) -> Vec<String> {
        let mut lines = vec![
            "@dataclass".to_string(),
            format!("class {}(Command):", command.name),
        ];
        lines.extend(indent(self.render_about(command)));
        lines.extend(indent(self.render_fields(command)));
        lines
    }
}

//! The rendering contract every target-language backend implements.

use std::path::PathBuf;

use crate::ir::{Command, CommandEntry};

/// A hand-written support file shipped alongside generated code
/// (e.g. the shared `Command` base type), embedded at compile time.
#[derive(Debug, Clone, Copy)]
pub struct StaticFile {
    /// File name inside the language's output directory.
    pub name: &'static str,
    /// Full file contents.
    pub contents: &'static str,
}

/// Failure locating an on-disk static-asset override directory.
#[derive(Debug, thiserror::Error)]
pub enum StaticAssetError {
    #[error("static asset directory not found: {}", path.display())]
    Missing { path: PathBuf },
    #[error("static asset path is not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },
}

/// A code renderer for one target language.
///
/// Renderers are pure: they turn a command slice into text and perform no
/// I/O. For a given slice the output is byte-identical across calls,
/// processes, and platforms; the build pipeline and the golden-fixture
/// tests rely on this.
///
/// Only three axes legitimately differ between renderers: the primitive
/// type table, the identifier casing, and the optional-wrapper syntax
/// (plus the comment-block dialect those are rendered with). Traversal
/// order, the empty-body placeholder policy, and line joining are shared
/// contract, expressed by the default method bodies below.
///
/// # Implementing Custom Renderers
///
/// ```ignore
/// use herald_codegen::{Renderer, StaticFile, register_renderer};
///
/// struct KotlinRenderer;
///
/// impl Renderer for KotlinRenderer {
///     fn name(&self) -> &'static str { "kotlin" }
///     fn extension(&self) -> &'static str { "kt" }
///     // ...
/// }
///
/// // Register before first use
/// static KOTLIN_RENDERER: KotlinRenderer = KotlinRenderer;
/// register_renderer(&KOTLIN_RENDERER);
/// ```
pub trait Renderer: Send + Sync {
    /// Unique renderer identifier and output subdirectory name
    /// (e.g. "python", "cplusplus").
    fn name(&self) -> &'static str;

    /// File extension for generated code, without the dot (e.g. "py", "hpp").
    fn extension(&self) -> &'static str;

    /// Embedded support files written next to the generated code.
    fn static_files(&self) -> &'static [StaticFile];

    /// File-level preamble: auto-generated banner, imports/using
    /// directives, namespace opener.
    fn render_header(&self) -> Vec<String>;

    /// The command's `about` as the language's doc-comment idiom, one
    /// comment line per (trimmed) line of the about text.
    fn render_about(&self, command: &Command) -> Vec<String>;

    /// One field: leading comment lines (the `comment` line is omitted
    /// when the entry's comment is empty) plus exactly one declaration
    /// line.
    fn render_field(&self, entry: &CommandEntry) -> Vec<String>;

    /// All fields of a command in schema order; a command with zero
    /// fields yields a single language-idiomatic placeholder line (an
    /// empty declaration body is invalid or ambiguous in several target
    /// languages).
    fn render_fields(&self, command: &Command) -> Vec<String>;

    /// Documentation block plus declaration for one command.
    fn render_command(&self, command: &Command) -> Vec<String>;

    /// File-level epilogue: namespace closer, export list. Empty for
    /// languages that need neither.
    fn render_footer(&self, _commands: &[Command]) -> Vec<String> {
        Vec::new()
    }

    /// Full content of one output source file covering all commands from
    /// one schema source.
    fn render_file(&self, commands: &[Command]) -> String {
        let mut lines = self.render_header();
        for command in commands {
            lines.extend(self.render_command(command));
            lines.push(String::new());
        }
        lines.extend(self.render_footer(commands));
        while lines.last().is_some_and(|line| line.is_empty()) {
            lines.pop();
        }
        let mut text = lines.join("\n");
        text.push('\n');
        text
    }
}

/// Prefix every non-blank line with one four-space indentation level.
pub fn indent(lines: Vec<String>) -> Vec<String> {
    lines
        .into_iter()
        .map(|line| {
            if line.is_empty() {
                line
            } else {
                format!("    {line}")
            }
        })
        .collect()
}

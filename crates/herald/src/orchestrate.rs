//! Orchestration: discover and validate schema sources, resolve renderers,
//! render, and write the output tree.
//!
//! All validation happens before anything is written, so a malformed source
//! never leaves a partially generated tree behind. Writes themselves are not
//! transactional; re-running fully overwrites previous output.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, info};
use walkdir::WalkDir;

use herald_codegen::input::{SchemaError, load_commands};
use herald_codegen::registry::{get_renderer, renderer_names, renderers};
use herald_codegen::traits::{Renderer, StaticAssetError};

/// Which target languages a run generates for.
#[derive(Debug, Clone)]
pub enum LanguageSelection {
    /// Every registered renderer.
    All,
    /// Only the named renderers.
    Named(Vec<String>),
}

/// A failed generation run. One descriptive message per failure; the CLI
/// prints it and exits non-zero.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("schema source `{source_name}`: {source}")]
    Schema {
        source_name: String,
        #[source]
        source: SchemaError,
    },

    #[error("unsupported language `{name}` (available: {available})")]
    UnsupportedLanguage { name: String, available: String },

    #[error(transparent)]
    StaticAsset(#[from] StaticAssetError),

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no .json schema sources found in {}", path.display())]
    NoSources { path: PathBuf },

    #[error("{}: invalid JSON: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

fn io_err(path: &Path, source: io::Error) -> GenerateError {
    GenerateError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Discover and parse schema sources.
///
/// A file path is a single source; a directory contributes its immediate
/// `.json` children. Sources are keyed by file stem, which also names the
/// generated files.
pub fn collect_sources(path: &Path) -> Result<BTreeMap<String, Value>, GenerateError> {
    let metadata = fs::metadata(path).map_err(|e| io_err(path, e))?;

    let mut sources = BTreeMap::new();
    if metadata.is_file() {
        let (stem, raw) = parse_source(path)?;
        sources.insert(stem, raw);
    } else {
        for entry in WalkDir::new(path)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| io_err(path, e.into()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            if entry.path().extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let (stem, raw) = parse_source(entry.path())?;
            sources.insert(stem, raw);
        }
    }

    if sources.is_empty() {
        return Err(GenerateError::NoSources {
            path: path.to_path_buf(),
        });
    }
    Ok(sources)
}

fn parse_source(path: &Path) -> Result<(String, Value), GenerateError> {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let content = fs::read_to_string(path).map_err(|e| io_err(path, e))?;
    let raw = serde_json::from_str(&content).map_err(|e| GenerateError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;
    debug!(source = %path.display(), "parsed schema source");
    Ok((stem, raw))
}

/// Run one generation pass: validate every source, then render and write
/// one subdirectory per selected language.
pub fn run(
    sources: &BTreeMap<String, Value>,
    languages: &LanguageSelection,
    output_root: &Path,
    assets_override: Option<&Path>,
) -> Result<(), GenerateError> {
    // Validate everything before writing anything.
    let mut validated = Vec::with_capacity(sources.len());
    for (stem, raw) in sources {
        let commands = load_commands(raw).map_err(|e| GenerateError::Schema {
            source_name: stem.clone(),
            source: e,
        })?;
        debug!(source = %stem, commands = commands.len(), "validated schema source");
        validated.push((stem.as_str(), commands));
    }

    let selected = resolve_languages(languages)?;

    for renderer in selected {
        let lang_dir = output_root.join(renderer.name());
        fs::create_dir_all(&lang_dir).map_err(|e| io_err(&lang_dir, e))?;

        for (stem, commands) in &validated {
            let file = lang_dir.join(format!("{stem}.{}", renderer.extension()));
            fs::write(&file, renderer.render_file(commands)).map_err(|e| io_err(&file, e))?;
            info!(path = %file.display(), "wrote generated file");
        }

        write_static_files(renderer, &lang_dir, assets_override)?;
    }
    Ok(())
}

fn resolve_languages(
    languages: &LanguageSelection,
) -> Result<Vec<&'static dyn Renderer>, GenerateError> {
    match languages {
        LanguageSelection::All => Ok(renderers()),
        LanguageSelection::Named(names) => names
            .iter()
            .map(|name| {
                get_renderer(name).ok_or_else(|| GenerateError::UnsupportedLanguage {
                    name: name.clone(),
                    available: renderer_names().join(", "),
                })
            })
            .collect(),
    }
}

/// Write the renderer's support files into its output directory,
/// overwriting on conflict. With an override root, the files under
/// `<override>/<language>/` are copied verbatim instead of the embedded
/// set.
fn write_static_files(
    renderer: &dyn Renderer,
    lang_dir: &Path,
    assets_override: Option<&Path>,
) -> Result<(), GenerateError> {
    let Some(root) = assets_override else {
        for file in renderer.static_files() {
            let dest = lang_dir.join(file.name);
            fs::write(&dest, file.contents).map_err(|e| io_err(&dest, e))?;
            info!(path = %dest.display(), "wrote static support file");
        }
        return Ok(());
    };

    let dir = root.join(renderer.name());
    if !dir.exists() {
        return Err(StaticAssetError::Missing { path: dir }.into());
    }
    if !dir.is_dir() {
        return Err(StaticAssetError::NotADirectory { path: dir }.into());
    }

    let mut entries: Vec<_> = fs::read_dir(&dir)
        .map_err(|e| io_err(&dir, e))?
        .collect::<Result<_, _>>()
        .map_err(|e| io_err(&dir, e))?;
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let dest = lang_dir.join(entry.file_name());
        fs::copy(&path, &dest).map_err(|e| io_err(&dest, e))?;
        info!(path = %dest.display(), "copied static support file");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn example_sources() -> BTreeMap<String, Value> {
        let mut sources = BTreeMap::new();
        sources.insert(
            "example_commands".to_string(),
            json!({
                "ExampleCommand": {
                    "ABOUT": "This is a test command.",
                    "someMessage": { "type": "str", "comment": "Example message" }
                }
            }),
        );
        sources
    }

    /// Collect every file under a root as (relative path, contents).
    fn snapshot_tree(root: &Path) -> BTreeMap<String, String> {
        let mut tree = BTreeMap::new();
        for entry in WalkDir::new(root) {
            let entry = entry.unwrap();
            if entry.file_type().is_file() {
                let rel = entry
                    .path()
                    .strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .into_owned();
                tree.insert(rel, fs::read_to_string(entry.path()).unwrap());
            }
        }
        tree
    }

    #[test]
    fn writes_one_subdirectory_per_language() {
        let out = tempfile::tempdir().unwrap();
        run(&example_sources(), &LanguageSelection::All, out.path(), None).unwrap();

        assert!(out.path().join("python/example_commands.py").is_file());
        assert!(out.path().join("python/base_command.py").is_file());
        assert!(out.path().join("cplusplus/example_commands.hpp").is_file());
        assert!(out.path().join("cplusplus/base-command.hpp").is_file());
        assert!(out.path().join("csharp/example_commands.cs").is_file());
        assert!(out.path().join("csharp/BaseCommand.cs").is_file());
        assert!(out.path().join("javascript/example_commands.js").is_file());
        assert!(out.path().join("javascript/BaseCommand.js").is_file());
    }

    #[test]
    fn rerunning_produces_an_identical_tree() {
        let sources = example_sources();
        let out = tempfile::tempdir().unwrap();

        run(&sources, &LanguageSelection::All, out.path(), None).unwrap();
        let first = snapshot_tree(out.path());

        run(&sources, &LanguageSelection::All, out.path(), None).unwrap();
        let second = snapshot_tree(out.path());

        assert_eq!(first, second);
    }

    #[test]
    fn named_selection_only_writes_those_languages() {
        let out = tempfile::tempdir().unwrap();
        let selection = LanguageSelection::Named(vec!["python".to_string()]);
        run(&example_sources(), &selection, out.path(), None).unwrap();

        assert!(out.path().join("python").is_dir());
        assert!(!out.path().join("cplusplus").exists());
        assert!(!out.path().join("csharp").exists());
        assert!(!out.path().join("javascript").exists());
    }

    #[test]
    fn unsupported_language_enumerates_available() {
        let out = tempfile::tempdir().unwrap();
        let selection = LanguageSelection::Named(vec!["cobol".to_string()]);
        let err = run(&example_sources(), &selection, out.path(), None).unwrap_err();
        match err {
            GenerateError::UnsupportedLanguage { name, available } => {
                assert_eq!(name, "cobol");
                assert!(available.contains("python"));
            }
            other => panic!("expected UnsupportedLanguage, got {other:?}"),
        }
    }

    #[test]
    fn invalid_source_fails_before_any_write() {
        let mut sources = example_sources();
        sources.insert("broken".to_string(), json!({ "NoAbout": {} }));

        let out = tempfile::tempdir().unwrap();
        let err = run(&sources, &LanguageSelection::All, out.path(), None).unwrap_err();
        assert!(matches!(err, GenerateError::Schema { .. }));
        assert!(snapshot_tree(out.path()).is_empty());
    }

    #[test]
    fn assets_override_replaces_embedded_files() {
        let assets = tempfile::tempdir().unwrap();
        fs::create_dir(assets.path().join("python")).unwrap();
        fs::write(assets.path().join("python/base_command.py"), "# custom base\n").unwrap();

        let out = tempfile::tempdir().unwrap();
        let selection = LanguageSelection::Named(vec!["python".to_string()]);
        run(
            &example_sources(),
            &selection,
            out.path(),
            Some(assets.path()),
        )
        .unwrap();

        let base = fs::read_to_string(out.path().join("python/base_command.py")).unwrap();
        assert_eq!(base, "# custom base\n");
    }

    #[test]
    fn missing_assets_directory_is_an_error() {
        let assets = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let selection = LanguageSelection::Named(vec!["python".to_string()]);
        let err = run(
            &example_sources(),
            &selection,
            out.path(),
            Some(assets.path()),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            GenerateError::StaticAsset(StaticAssetError::Missing { .. })
        ));
    }

    #[test]
    fn collect_sources_from_directory_ignores_non_json() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b_commands.json"), "{}").unwrap();
        fs::write(dir.path().join("a_commands.json"), "{}").unwrap();
        fs::write(dir.path().join("notes.txt"), "not a schema").unwrap();

        let sources = collect_sources(dir.path()).unwrap();
        let stems: Vec<&str> = sources.keys().map(String::as_str).collect();
        assert_eq!(stems, ["a_commands", "b_commands"]);
    }

    #[test]
    fn collect_sources_from_single_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("my_commands.json");
        fs::write(&file, "{}").unwrap();

        let sources = collect_sources(&file).unwrap();
        assert!(sources.contains_key("my_commands"));
    }

    #[test]
    fn empty_directory_is_no_sources() {
        let dir = tempfile::tempdir().unwrap();
        let err = collect_sources(dir.path()).unwrap_err();
        assert!(matches!(err, GenerateError::NoSources { .. }));
    }

    #[test]
    fn unparseable_json_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("bad.json"), "{ not json").unwrap();
        let err = collect_sources(dir.path()).unwrap_err();
        assert!(matches!(err, GenerateError::Parse { .. }));
    }
}

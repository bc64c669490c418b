//! Project configuration for `phrasebook generate`.
//!
//! Lets a project keep its grammar and output location in a TOML file
//! instead of repeating them on every invocation. Command line flags take
//! precedence over file values.
//!
//! # Example
//!
//! ```toml
//! [generate]
//! grammar = "grammar/smart_light.yml"
//! out = "src/main/kotlin/com/example/voice/Intents.kt"
//! target = "kotlin"
//! source_roots = ["src/main/kotlin"]
//! ```
//!
//! Relative paths are resolved against the directory holding the file.

use std::path::{Path, PathBuf};

use phrasebook_codegen::Target;
use serde::Deserialize;

/// File picked up from the working directory when `--config` is absent.
pub(crate) const DEFAULT_CONFIG_FILE: &str = "phrasebook.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct PhrasebookConfig {
    #[serde(default)]
    pub generate: GenerateSettings,
}

/// `[generate]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct GenerateSettings {
    pub grammar: Option<PathBuf>,
    pub out: Option<PathBuf>,
    pub target: Option<Target>,
    pub package: Option<String>,
    #[serde(default)]
    pub source_roots: Vec<PathBuf>,
}

/// Read and parse a config file from `path`.
///
/// Returns a human-readable error string on failure.
pub(crate) fn read_config(path: &Path) -> Result<PhrasebookConfig, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("could not read '{}': {}", path.display(), e))?;
    let mut config = parse_config(&content)
        .map_err(|e| format!("could not parse '{}': {}", path.display(), e))?;

    let base = path.parent().unwrap_or_else(|| Path::new(""));
    config.generate.resolve_paths(base);
    Ok(config)
}

fn parse_config(content: &str) -> Result<PhrasebookConfig, toml::de::Error> {
    toml::from_str(content)
}

impl GenerateSettings {
    fn resolve_paths(&mut self, base: &Path) {
        let resolve = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        };
        if let Some(grammar) = self.grammar.as_mut() {
            resolve(grammar);
        }
        if let Some(out) = self.out.as_mut() {
            resolve(out);
        }
        self.source_roots.iter_mut().for_each(resolve);
    }
}

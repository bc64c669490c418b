use std::path::{Path, PathBuf};
use std::process;

use phrasebook_codegen::{GenerateConfig, RenderOptions, Target};

use super::load_grammar;
use crate::config::{read_config, GenerateSettings, DEFAULT_CONFIG_FILE};
use crate::package::infer_package;
use crate::{report_error, OutputFormat};

/// `generate` flags as given on the command line.
pub(crate) struct GenerateArgs {
    pub grammar: Option<PathBuf>,
    pub target: Option<Target>,
    pub out: Option<PathBuf>,
    pub package: Option<String>,
    pub source_roots: Vec<PathBuf>,
    pub config: Option<PathBuf>,
}

/// Flags merged over the config file.
#[derive(Debug, PartialEq)]
struct GenerateRequest {
    grammar: Option<PathBuf>,
    target: Target,
    out: Option<PathBuf>,
    package: Option<String>,
}

fn merge(args: GenerateArgs, settings: GenerateSettings) -> GenerateRequest {
    let target = args.target.or(settings.target).unwrap_or_default();
    let out = args.out.or(settings.out);
    let source_roots = if args.source_roots.is_empty() {
        settings.source_roots
    } else {
        args.source_roots
    };
    let package = args.package.or(settings.package).or_else(|| match (&out, target) {
        (Some(out), Target::Kotlin) => infer_package(out, &source_roots),
        _ => None,
    });
    GenerateRequest {
        grammar: args.grammar.or(settings.grammar),
        target,
        out,
        package,
    }
}

fn load_settings(explicit: Option<&Path>) -> Result<GenerateSettings, String> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !default.is_file() {
                return Ok(GenerateSettings::default());
            }
            default
        }
    };
    tracing::debug!(path = %path.display(), "reading config");
    read_config(&path).map(|config| config.generate)
}

pub(crate) fn cmd_generate(args: GenerateArgs, output: OutputFormat, quiet: bool) {
    let settings = match load_settings(args.config.as_deref()) {
        Ok(s) => s,
        Err(e) => {
            report_error(&format!("config error: {}", e), output, quiet);
            process::exit(1);
        }
    };
    let request = merge(args, settings);

    let Some(grammar) = request.grammar.as_deref() else {
        report_error(
            "no grammar file given: pass one or set [generate] grammar in phrasebook.toml",
            output,
            quiet,
        );
        process::exit(1);
    };
    let source = load_grammar(grammar, output, quiet);

    let Some(out_file) = request.out else {
        let options = RenderOptions {
            package: request.package,
        };
        match phrasebook_codegen::generate_source(&source, request.target, &options) {
            Ok(text) => print!("{}", text),
            Err(e) => {
                report_error(&format!("generation error: {}", e), output, quiet);
                process::exit(1);
            }
        }
        return;
    };

    let config = GenerateConfig {
        out_file,
        target: request.target,
        package: request.package,
    };
    match phrasebook_codegen::generate(&source, &config) {
        Ok(path) => {
            if !quiet {
                match output {
                    OutputFormat::Text => {
                        println!("Generated {} decoder in {}", config.target, path.display());
                    }
                    OutputFormat::Json => {
                        let json = serde_json::json!({
                            "output_file": path.display().to_string(),
                            "target": config.target.name(),
                            "package": config.package,
                        });
                        println!("{}", json);
                    }
                }
            }
        }
        Err(e) => {
            report_error(&format!("generation error: {}", e), output, quiet);
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> GenerateArgs {
        GenerateArgs {
            grammar: None,
            target: None,
            out: None,
            package: None,
            source_roots: Vec::new(),
            config: None,
        }
    }

    #[test]
    fn flags_override_config() {
        let settings = GenerateSettings {
            grammar: Some(PathBuf::from("config.yml")),
            out: Some(PathBuf::from("config.rs")),
            target: Some(Target::Kotlin),
            package: Some("from.config".to_owned()),
            source_roots: Vec::new(),
        };
        let request = merge(
            GenerateArgs {
                grammar: Some(PathBuf::from("flag.yml")),
                target: Some(Target::Rust),
                ..args()
            },
            settings,
        );
        assert_eq!(
            request,
            GenerateRequest {
                grammar: Some(PathBuf::from("flag.yml")),
                target: Target::Rust,
                out: Some(PathBuf::from("config.rs")),
                package: Some("from.config".to_owned()),
            }
        );
    }

    #[test]
    fn kotlin_package_is_inferred_from_source_roots() {
        let request = merge(
            GenerateArgs {
                target: Some(Target::Kotlin),
                out: Some(PathBuf::from("src/main/kotlin/com/example/Intents.kt")),
                source_roots: vec![PathBuf::from("src/main/kotlin")],
                ..args()
            },
            GenerateSettings::default(),
        );
        assert_eq!(request.package.as_deref(), Some("com.example"));
    }

    #[test]
    fn explicit_package_beats_inference() {
        let request = merge(
            GenerateArgs {
                target: Some(Target::Kotlin),
                out: Some(PathBuf::from("src/com/example/Intents.kt")),
                package: Some("voice".to_owned()),
                source_roots: vec![PathBuf::from("src")],
                ..args()
            },
            GenerateSettings::default(),
        );
        assert_eq!(request.package.as_deref(), Some("voice"));
    }

    #[test]
    fn rust_target_never_infers_a_package() {
        let request = merge(
            GenerateArgs {
                out: Some(PathBuf::from("src/voice/intents.rs")),
                source_roots: vec![PathBuf::from("src")],
                ..args()
            },
            GenerateSettings::default(),
        );
        assert_eq!(request.target, Target::Rust);
        assert_eq!(request.package, None);
    }
}

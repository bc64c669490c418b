//! phrasebook-codegen: renders a compiled grammar into decoder source.
//!
//! Two targets are supported: a self-contained Rust module and a Kotlin
//! file. Each target brings its own reserved-word set, so the grammar is
//! compiled per target (see [`compile`]).

mod error;
mod kotlin;
mod rust;

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use phrasebook_core::{CompileError, Context, GrammarSource, Sanitizer};
use serde::Deserialize;

pub use error::CodegenError;

/// First line of every generated file.
pub(crate) const GENERATED_HEADER: &str = "// This file is generated by phrasebook. Do not edit.";

/// Output language of the generated decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    #[default]
    Rust,
    Kotlin,
}

impl Target {
    /// Sanitizer built on this target's keyword set.
    pub fn sanitizer(self) -> Sanitizer {
        match self {
            Target::Rust => Sanitizer::rust(),
            Target::Kotlin => Sanitizer::kotlin(),
        }
    }

    /// File extension of generated files, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Target::Rust => "rs",
            Target::Kotlin => "kt",
        }
    }

    /// Identifier an intent is rendered under in this target.
    pub fn intent_type_name(self, intent: &str) -> String {
        match self {
            Target::Rust => rust::intent_variant(intent),
            Target::Kotlin => kotlin::intent_class(intent),
        }
    }

    /// Names the generated decoder itself declares next to the intents.
    fn reserved_type_names(self) -> &'static [&'static str] {
        match self {
            Target::Rust => &["NotUnderstood"],
            Target::Kotlin => &["NotUnderstood", "Intent", "Companion"],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Target::Rust => "rust",
            Target::Kotlin => "kotlin",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Target {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rust" => Ok(Target::Rust),
            "kotlin" => Ok(Target::Kotlin),
            other => Err(format!(
                "unknown target '{}': expected 'rust' or 'kotlin'",
                other
            )),
        }
    }
}

/// Per-file rendering options.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Package declaration for Kotlin output. Ignored for Rust.
    pub package: Option<String>,
}

/// Configuration for [`generate`].
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub out_file: PathBuf,
    pub target: Target,
    pub package: Option<String>,
}

/// Compile a grammar with the sanitizer of `target`.
pub fn compile(source: &GrammarSource, target: Target) -> Result<Context, CompileError> {
    phrasebook_core::compile(source, &target.sanitizer())
}

/// Render a compiled grammar. Deterministic: the same context always
/// produces the same text.
pub fn render(context: &Context, target: Target, options: &RenderOptions) -> String {
    match target {
        Target::Rust => rust::render(context),
        Target::Kotlin => kotlin::render(context, options.package.as_deref()),
    }
}

/// Check that every intent renders under a distinct identifier that the
/// decoder does not already use.
pub fn check_intent_names(context: &Context, target: Target) -> Result<(), CodegenError> {
    let mut taken: Vec<(String, &str)> = Vec::with_capacity(context.intents.len());
    for intent in &context.intents {
        let type_name = target.intent_type_name(&intent.name);
        if target.reserved_type_names().contains(&type_name.as_str()) {
            return Err(CodegenError::ReservedIntentName {
                intent: intent.name.clone(),
                type_name,
                target,
            });
        }
        if let Some((_, first)) = taken.iter().find(|(name, _)| *name == type_name) {
            return Err(CodegenError::IntentNameClash {
                first: (*first).to_owned(),
                second: intent.name.clone(),
                type_name,
                target,
            });
        }
        taken.push((type_name, intent.name.as_str()));
    }
    Ok(())
}

/// Compile, check intent names and render in one step.
pub fn generate_source(
    source: &GrammarSource,
    target: Target,
    options: &RenderOptions,
) -> Result<String, CodegenError> {
    let context = compile(source, target)?;
    check_intent_names(&context, target)?;
    Ok(render(&context, target, options))
}

/// Compile, render and write the decoder to `config.out_file`, creating
/// parent directories. Returns the path written.
pub fn generate(source: &GrammarSource, config: &GenerateConfig) -> Result<PathBuf, CodegenError> {
    let out = &config.out_file;
    if out.is_dir() {
        return Err(CodegenError::OutputIsDirectory { path: out.clone() });
    }
    let expected = config.target.extension();
    if out.extension().and_then(|e| e.to_str()) != Some(expected) {
        return Err(CodegenError::WrongExtension {
            path: out.clone(),
            expected,
        });
    }

    let options = RenderOptions {
        package: config.package.clone(),
    };
    let text = generate_source(source, config.target, &options)?;

    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| CodegenError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(out, text).map_err(|source| CodegenError::Io {
        path: out.clone(),
        source,
    })?;

    tracing::info!(path = %out.display(), target = %config.target, "wrote decoder");
    Ok(out.clone())
}

/// Escape `s` as the body of a double-quoted string literal. Both targets
/// share backslash escapes; Kotlin also treats `$` as a template start.
pub(crate) fn quote(s: &str, escape_dollar: bool) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '$' if escape_dollar => out.push_str("\\$"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Elements in declared order with repeats dropped; repeated enum labels
/// would not compile in either target.
pub(crate) fn distinct_elements(elements: &[String]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::with_capacity(elements.len());
    for element in elements {
        if !seen.contains(&element.as_str()) {
            seen.push(element);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_round_trips_through_str() {
        for target in [Target::Rust, Target::Kotlin] {
            assert_eq!(target.to_string().parse::<Target>(), Ok(target));
        }
        assert!("java".parse::<Target>().is_err());
    }

    #[test]
    fn target_sanitizers_differ() {
        assert_eq!(Target::Kotlin.sanitizer().sanitize("fun"), "Fun");
        assert_eq!(Target::Rust.sanitizer().sanitize("fun"), "fun");
        assert_eq!(Target::Rust.sanitizer().sanitize("fn"), "Fn");
    }

    fn context_with_intents(names: &[&str]) -> Context {
        let source = names
            .iter()
            .fold(GrammarSource::default(), |source, name| {
                source.with_intent(name, ["say it"])
            });
        phrasebook_core::compile(&source, &Sanitizer::rust()).expect("compiles")
    }

    #[test]
    fn keyword_intents_render_escaped() {
        let context = context_with_intents(&["match", "object"]);
        assert!(check_intent_names(&context, Target::Rust).is_ok());
        assert!(check_intent_names(&context, Target::Kotlin).is_ok());

        let rust = render(&context, Target::Rust, &RenderOptions::default());
        assert!(rust.contains("    Match,\n    object,\n"));
        assert!(rust.contains("        \"match\" => Ok(Intent::Match),\n"));

        let kotlin = render(&context, Target::Kotlin, &RenderOptions::default());
        assert!(kotlin.contains("    object match : Intent\n"));
        assert!(kotlin.contains("    object Object : Intent\n"));
        assert!(kotlin.contains("                \"object\" -> Object\n"));
    }

    #[test]
    fn rust_self_intents_escape_to_self_underscore() {
        let context = context_with_intents(&["Self"]);
        assert_eq!(Target::Rust.intent_type_name("Self"), "Self_");
        assert!(check_intent_names(&context, Target::Rust).is_ok());
    }

    #[test]
    fn intent_named_like_not_understood_is_rejected() {
        let context = context_with_intents(&["Stop", "NotUnderstood"]);
        let err = check_intent_names(&context, Target::Rust).unwrap_err();
        assert!(matches!(
            err,
            CodegenError::ReservedIntentName { ref intent, ref type_name, target: Target::Rust }
                if intent == "NotUnderstood" && type_name == "NotUnderstood"
        ));
        assert_eq!(
            err.to_string(),
            "intent NotUnderstood renders as NotUnderstood, which the rust decoder already declares"
        );

        let context = context_with_intents(&["Intent"]);
        assert!(check_intent_names(&context, Target::Rust).is_ok());
        assert!(matches!(
            check_intent_names(&context, Target::Kotlin),
            Err(CodegenError::ReservedIntentName { .. })
        ));
    }

    #[test]
    fn intents_escaping_to_the_same_name_clash() {
        let context = context_with_intents(&["Fun", "fun"]);
        assert!(check_intent_names(&context, Target::Rust).is_ok());
        let err = check_intent_names(&context, Target::Kotlin).unwrap_err();
        assert_eq!(
            err.to_string(),
            "intents Fun and fun both render as Fun in kotlin output"
        );
    }

    #[test]
    fn generate_source_reports_unusable_intent_names() {
        let source = GrammarSource::default().with_intent("NotUnderstood", ["huh"]);
        let err = generate_source(&source, Target::Kotlin, &RenderOptions::default())
            .unwrap_err();
        assert!(matches!(err, CodegenError::ReservedIntentName { .. }));
    }

    #[test]
    fn quote_escapes() {
        assert_eq!(quote("a\"b", false), "\"a\\\"b\"");
        assert_eq!(quote("$x", true), "\"\\$x\"");
        assert_eq!(quote("$x", false), "\"$x\"");
    }

    #[test]
    fn distinct_elements_keep_first() {
        let elements = vec!["b".to_owned(), "a".to_owned(), "b".to_owned()];
        assert_eq!(distinct_elements(&elements), vec!["b", "a"]);
    }
}

//! Deserialization from grammar documents into a [`GrammarSource`].
//!
//! The main entry point is [`parse`]; [`read_grammar`] adds file reading
//! and picks the format from the file extension.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use phrasebook_core::GrammarSource;

use crate::types::{ContextNode, GrammarDocument, GrammarFormat, JsonItem, ListItem, YamlItem};

/// Errors while reading a grammar document.
#[derive(Debug, thiserror::Error)]
pub enum InterchangeError {
    #[error("grammar document is empty")]
    EmptyDocument,

    #[error("grammar document must have a root node 'context:'")]
    MissingContext,

    #[error("at least one intent must be defined in 'expressions:'")]
    MissingExpressions,

    #[error("intent {intent} must have at least one phrase")]
    EmptyIntent { intent: String },

    #[error("slot {slot} must have at least one element")]
    EmptySlot { slot: String },

    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported grammar file '{}': expected .yml, .yaml or .json", .path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("error reading '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub fn from_yaml_str(text: &str) -> Result<GrammarSource, InterchangeError> {
    parse(text, GrammarFormat::Yaml)
}

pub fn from_json_str(text: &str) -> Result<GrammarSource, InterchangeError> {
    parse(text, GrammarFormat::Json)
}

/// Parse a grammar document and check its structure.
pub fn parse(text: &str, format: GrammarFormat) -> Result<GrammarSource, InterchangeError> {
    if text.trim().is_empty() {
        return Err(InterchangeError::EmptyDocument);
    }
    match format {
        GrammarFormat::Yaml => {
            let document: GrammarDocument<YamlItem> = serde_yaml::from_str(text)?;
            into_source(document.context.ok_or(InterchangeError::MissingContext)?)
        }
        GrammarFormat::Json => {
            let document: GrammarDocument<JsonItem> = serde_json::from_str(text)?;
            into_source(document.context.ok_or(InterchangeError::MissingContext)?)
        }
    }
}

/// Read and parse a grammar file. The format follows the file extension.
pub fn read_grammar(path: &Path) -> Result<GrammarSource, InterchangeError> {
    let format = GrammarFormat::from_path(path).ok_or_else(|| InterchangeError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    let text = std::fs::read_to_string(path).map_err(|source| InterchangeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), ?format, "reading grammar");
    parse(&text, format)
}

fn into_source<T: ListItem>(context: ContextNode<T>) -> Result<GrammarSource, InterchangeError> {
    let expressions = context
        .expressions
        .filter(|e| !e.is_empty())
        .ok_or(InterchangeError::MissingExpressions)?;

    let expressions = string_lists(expressions, |intent| InterchangeError::EmptyIntent { intent })?;
    let slots = string_lists(context.slots.unwrap_or_default(), |slot| {
        InterchangeError::EmptySlot { slot }
    })?;

    Ok(GrammarSource { slots, expressions })
}

fn string_lists<T: ListItem>(
    map: IndexMap<String, Option<Vec<T>>>,
    on_empty: impl Fn(String) -> InterchangeError,
) -> Result<Vec<(String, Vec<String>)>, InterchangeError> {
    map.into_iter()
        .map(|(name, items)| match items {
            Some(items) if !items.is_empty() => {
                Ok((name, items.into_iter().map(T::into_text).collect()))
            }
            _ => Err(on_empty(name)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_documents_are_not_allowed() {
        assert!(matches!(from_yaml_str(""), Err(InterchangeError::EmptyDocument)));
        assert!(matches!(from_yaml_str("  \n"), Err(InterchangeError::EmptyDocument)));
    }

    #[test]
    fn context_must_contain_at_least_one_expression() {
        assert!(matches!(
            from_yaml_str("context:"),
            Err(InterchangeError::MissingExpressions) | Err(InterchangeError::MissingContext)
        ));
        assert!(matches!(
            from_yaml_str("context:\n  slots:\n    A: [x]\n"),
            Err(InterchangeError::MissingExpressions)
        ));
        assert!(matches!(
            from_yaml_str("context:\n  expressions: {}\n"),
            Err(InterchangeError::MissingExpressions)
        ));
    }

    #[test]
    fn root_node_is_required() {
        assert!(matches!(
            from_yaml_str("expressions:\n  Foo: [do]\n"),
            Err(InterchangeError::MissingContext)
        ));
    }

    #[test]
    fn reads_yaml_in_declaration_order() {
        let source = from_yaml_str(
            "context:
  expressions:
    Foo:
      - do $Slot:bla $Slot:bloo
    Bar:
      - do that $Slot:bla
  slots:
    Slot:
      - One
      - Two
",
        )
        .unwrap();
        assert_eq!(
            source,
            GrammarSource::default()
                .with_slot("Slot", ["One", "Two"])
                .with_intent("Foo", ["do $Slot:bla $Slot:bloo"])
                .with_intent("Bar", ["do that $Slot:bla"])
        );
    }

    #[test]
    fn typed_scalars_keep_their_text() {
        let source = from_yaml_str(
            "context:
  expressions:
    Foo: [do $Slot:bla]
  slots:
    Slot:
      - true
      - 5
      - Two
",
        )
        .unwrap();
        assert_eq!(source.slots[0].1, vec!["true", "5", "Two"]);
    }

    #[test]
    fn yaml_scalars_are_read_as_written() {
        let source = from_yaml_str(
            "context:
  expressions:
    Foo: [do $Slot:bla]
  slots:
    Slot: [True, TRUE, 2.50, 0x1F, 1e3, 007, false]
",
        )
        .unwrap();
        assert_eq!(
            source.slots[0].1,
            vec!["True", "TRUE", "2.50", "0x1F", "1e3", "007", "false"]
        );
    }

    #[test]
    fn null_items_read_as_null_text() {
        let source = from_yaml_str(
            "context:
  expressions:
    Foo: [do $Slot:bla]
  slots:
    Slot:
      - null
      - ~
      - some
",
        )
        .unwrap();
        assert_eq!(source.slots[0].1, vec!["null", "null", "some"]);

        let source = from_json_str(
            r#"{"context": {"expressions": {"Foo": ["do"]}, "slots": {"Slot": [null, true, 3]}}}"#,
        )
        .unwrap();
        assert_eq!(source.slots[0].1, vec!["null", "true", "3"]);
    }

    #[test]
    fn slots_are_optional() {
        let source = from_yaml_str("context:\n  expressions:\n    Stop: [stop]\n").unwrap();
        assert!(source.slots.is_empty());
        assert_eq!(source.expressions.len(), 1);
    }

    #[test]
    fn intent_without_phrases() {
        let err = from_yaml_str("context:\n  expressions:\n    Foo:\n").unwrap_err();
        assert!(matches!(err, InterchangeError::EmptyIntent { intent } if intent == "Foo"));
    }

    #[test]
    fn slot_without_elements() {
        let err =
            from_yaml_str("context:\n  expressions:\n    Foo: [do]\n  slots:\n    Empty: []\n")
                .unwrap_err();
        assert!(matches!(err, InterchangeError::EmptySlot { slot } if slot == "Empty"));
    }

    #[test]
    fn reads_json() {
        let source = from_json_str(
            r#"{"context": {
                "expressions": {"Zed": ["z $Slot:a"], "Alpha": ["a"]},
                "slots": {"Slot": ["x", "y"]}
            }}"#,
        )
        .unwrap();
        let intents: Vec<_> = source.expressions.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(intents, vec!["Zed", "Alpha"]);
        assert_eq!(source.slots[0].1, vec!["x", "y"]);
    }

    #[test]
    fn malformed_yaml() {
        assert!(matches!(
            from_yaml_str("context: [unclosed"),
            Err(InterchangeError::Yaml(_))
        ));
    }

    #[test]
    fn nested_list_items_are_rejected() {
        assert!(from_yaml_str("context:\n  expressions:\n    Foo:\n      - {a: b}\n").is_err());
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(
            GrammarFormat::from_path(Path::new("a/grammar.yml")),
            Some(GrammarFormat::Yaml)
        );
        assert_eq!(
            GrammarFormat::from_path(Path::new("grammar.json")),
            Some(GrammarFormat::Json)
        );
        assert_eq!(GrammarFormat::from_path(Path::new("grammar.rhn")), None);
    }

    #[test]
    fn read_grammar_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grammar.yaml");
        std::fs::write(&path, "context:\n  expressions:\n    Stop: [stop]\n").unwrap();
        let source = read_grammar(&path).unwrap();
        assert_eq!(source.expressions[0].0, "Stop");

        let missing = read_grammar(&dir.path().join("missing.yml")).unwrap_err();
        assert!(matches!(missing, InterchangeError::Io { .. }));
        let unsupported = read_grammar(&dir.path().join("grammar.txt")).unwrap_err();
        assert!(matches!(unsupported, InterchangeError::UnsupportedFormat { .. }));
    }
}

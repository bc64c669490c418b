//! Document shapes accepted by the grammar reader.

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

/// Markup format of a grammar document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrammarFormat {
    Yaml,
    Json,
}

impl GrammarFormat {
    /// Pick the format from a file extension (`.yml`, `.yaml`, `.json`).
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yml") | Some("yaml") => Some(GrammarFormat::Yaml),
            Some("json") => Some(GrammarFormat::Json),
            _ => None,
        }
    }
}

/// Whole document. `T` is the list item type of the format being read.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub(crate) struct GrammarDocument<T> {
    #[serde(default)]
    pub context: Option<ContextNode<T>>,
}

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub(crate) struct ContextNode<T> {
    #[serde(default)]
    pub expressions: Option<IndexMap<String, Option<Vec<T>>>>,
    #[serde(default)]
    pub slots: Option<IndexMap<String, Option<Vec<T>>>>,
}

/// A phrase or slot element as written in the document.
pub(crate) trait ListItem {
    fn into_text(self) -> String;
}

/// A YAML list item. Plain scalars are read as the text written, so
/// `True`, `2.50` or `0x1F` stay exactly that; a null item reads as `null`.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub(crate) struct YamlItem(Option<String>);

impl ListItem for YamlItem {
    fn into_text(self) -> String {
        self.0.unwrap_or_else(|| "null".to_owned())
    }
}

/// A JSON list item. JSON types its literals, so booleans and numbers are
/// turned back into text.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum JsonItem {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl ListItem for JsonItem {
    fn into_text(self) -> String {
        match self {
            JsonItem::Null => "null".to_owned(),
            JsonItem::Bool(b) => b.to_string(),
            JsonItem::Int(i) => i.to_string(),
            JsonItem::Float(f) => f.to_string(),
            JsonItem::Text(s) => s,
        }
    }
}

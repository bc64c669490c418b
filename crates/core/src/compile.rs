//! Whole-grammar compilation: declared slots first, then every intent.

use crate::error::CompileError;
use crate::intent::build_intent;
use crate::model::{Context, Slot};
use crate::sanitize::Sanitizer;

/// The structural content of a grammar document, in declaration order.
///
/// `slots` maps slot names to their elements and `expressions` maps intent
/// names to their phrases. Front ends that read a concrete markup format
/// produce this.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GrammarSource {
    pub slots: Vec<(String, Vec<String>)>,
    pub expressions: Vec<(String, Vec<String>)>,
}

impl GrammarSource {
    pub fn with_slot<S: Into<String>>(mut self, name: &str, elements: impl IntoIterator<Item = S>) -> Self {
        self.slots.push((
            name.to_owned(),
            elements.into_iter().map(Into::into).collect(),
        ));
        self
    }

    pub fn with_intent<S: Into<String>>(mut self, name: &str, phrases: impl IntoIterator<Item = S>) -> Self {
        self.expressions.push((
            name.to_owned(),
            phrases.into_iter().map(Into::into).collect(),
        ));
        self
    }
}

/// Compile a grammar into a [`Context`], or return the first error.
///
/// Slot names, slot elements and variable names pass through `sanitizer`.
/// Intent names are kept as declared since they double as the lookup key
/// for inference results.
pub fn compile(source: &GrammarSource, sanitizer: &Sanitizer) -> Result<Context, CompileError> {
    let slots: Vec<Slot> = source
        .slots
        .iter()
        .map(|(name, elements)| Slot {
            name: sanitizer.sanitize(name),
            elements: elements.iter().map(|e| sanitizer.sanitize(e)).collect(),
        })
        .collect();

    let intents = source
        .expressions
        .iter()
        .map(|(name, phrases)| {
            build_intent(name, phrases, &slots, sanitizer).map_err(|e| e.in_intent(name))
        })
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(
        intents = intents.len(),
        slots = slots.len(),
        "compiled grammar"
    );

    Ok(Context { intents, slots })
}

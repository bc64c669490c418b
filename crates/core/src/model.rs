//! The typed intermediate model produced by [`crate::compile()`].
//!
//! All identifier fields hold sanitized names and can be emitted by a code
//! generator as-is.

use serde::Serialize;

// ──────────────────────────────────────────────
// Slots
// ──────────────────────────────────────────────

/// A declared slot: a named closed enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slot {
    pub name: String,
    pub elements: Vec<String>,
}

impl Slot {
    /// Index of the first element spelled exactly like `raw`.
    pub fn parse(&self, raw: &str) -> Option<usize> {
        self.elements.iter().position(|e| e == raw)
    }
}

/// Index of a slot in [`Context::slots`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SlotId(pub usize);

// ──────────────────────────────────────────────
// Variables
// ──────────────────────────────────────────────

/// Built-in slot kinds that decode into primitive values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveKind {
    Char,
    Integer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SlotVariableType {
    Primitive { primitive: PrimitiveKind },
    Custom { slot: SlotId },
}

impl SlotVariableType {
    pub fn char() -> Self {
        SlotVariableType::Primitive {
            primitive: PrimitiveKind::Char,
        }
    }

    pub fn integer() -> Self {
        SlotVariableType::Primitive {
            primitive: PrimitiveKind::Integer,
        }
    }

    pub fn custom(slot: SlotId) -> Self {
        SlotVariableType::Custom { slot }
    }
}

/// One value an intent instance carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotVariable {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: SlotVariableType,
    pub is_required: bool,
}

// ──────────────────────────────────────────────
// Intents and the compiled context
// ──────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Intent {
    pub name: String,
    pub variables: Vec<SlotVariable>,
}

impl Intent {
    pub fn variable(&self, name: &str) -> Option<&SlotVariable> {
        self.variables.iter().find(|v| v.name == name)
    }
}

/// The compiled grammar. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Context {
    pub intents: Vec<Intent>,
    pub slots: Vec<Slot>,
}

impl Context {
    pub fn intent(&self, name: &str) -> Option<&Intent> {
        self.intents.iter().find(|i| i.name == name)
    }

    /// The slot a [`SlotId`] points at. Ids are only minted by the builder
    /// for this context's own slot list.
    pub fn slot(&self, id: SlotId) -> &Slot {
        &self.slots[id.0]
    }
}

//! Slot type resolution: built-in kinds first, then declared slots.

use crate::model::{PrimitiveKind, Slot, SlotId, SlotVariableType};

/// Built-in slot type tags and the primitive kind each decodes into.
pub const BUILTIN_SLOT_TYPES: &[(&str, PrimitiveKind)] = &[
    ("pv.Alphabetic", PrimitiveKind::Char),
    ("pv.Alphanumeric", PrimitiveKind::Char),
    ("pv.Percent", PrimitiveKind::Integer),
    ("pv.SingleDigitInteger", PrimitiveKind::Integer),
    ("pv.SingleDigitOrdinal", PrimitiveKind::Integer),
    ("pv.TwoDigitInteger", PrimitiveKind::Integer),
    ("pv.TwoDigitOrdinal", PrimitiveKind::Integer),
];

pub fn builtin(type_tag: &str) -> Option<PrimitiveKind> {
    BUILTIN_SLOT_TYPES
        .iter()
        .find(|(tag, _)| *tag == type_tag)
        .map(|(_, kind)| *kind)
}

/// Resolve a type tag. Built-in tags win over declared slots of the same
/// name; among declared slots the first exact name match wins. Returns
/// `None` when the tag names nothing.
pub fn resolve(type_tag: &str, declared_slots: &[Slot]) -> Option<SlotVariableType> {
    if let Some(primitive) = builtin(type_tag) {
        return Some(SlotVariableType::Primitive { primitive });
    }
    declared_slots
        .iter()
        .position(|slot| slot.name == type_tag)
        .map(|idx| SlotVariableType::custom(SlotId(idx)))
}

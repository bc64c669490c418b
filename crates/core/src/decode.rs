//! Interpretive decoder over a compiled [`Context`].
//!
//! Applies the same rules as the generated `decode` functions to an
//! untyped inference result (intent name, understood flag, slot values).

use std::collections::HashMap;

use serde::Serialize;

use crate::error::DecodeError;
use crate::model::{Context, PrimitiveKind, SlotVariable, SlotVariableType};

/// A typed slot value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SlotValue {
    Char { value: char },
    Integer { value: i64 },
    Element {
        slot: String,
        element: String,
        index: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedVariable {
    pub name: String,
    /// `None` for an optional variable the inference did not fill.
    pub value: Option<SlotValue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DecodedIntent {
    NotUnderstood,
    Understood {
        intent: String,
        variables: Vec<DecodedVariable>,
    },
}

impl DecodedIntent {
    pub fn value(&self, variable: &str) -> Option<&SlotValue> {
        match self {
            DecodedIntent::NotUnderstood => None,
            DecodedIntent::Understood { variables, .. } => variables
                .iter()
                .find(|v| v.name == variable)
                .and_then(|v| v.value.as_ref()),
        }
    }
}

pub fn decode(
    context: &Context,
    intent_name: &str,
    is_understood: bool,
    slots: &HashMap<String, String>,
) -> Result<DecodedIntent, DecodeError> {
    if !is_understood {
        return Ok(DecodedIntent::NotUnderstood);
    }
    let intent = context
        .intent(intent_name)
        .ok_or_else(|| DecodeError::UnknownIntentName {
            intent: intent_name.to_owned(),
        })?;

    let variables = intent
        .variables
        .iter()
        .map(|variable| {
            let value = match slots.get(&variable.name) {
                Some(raw) => Some(decode_value(context, variable, raw)?),
                None if variable.is_required => {
                    return Err(DecodeError::MissingRequiredVariable {
                        variable: variable.name.clone(),
                    })
                }
                None => None,
            };
            Ok(DecodedVariable {
                name: variable.name.clone(),
                value,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(DecodedIntent::Understood {
        intent: intent.name.clone(),
        variables,
    })
}

fn decode_value(
    context: &Context,
    variable: &SlotVariable,
    raw: &str,
) -> Result<SlotValue, DecodeError> {
    match variable.ty {
        SlotVariableType::Primitive {
            primitive: PrimitiveKind::Char,
        } => {
            let mut chars = raw.chars();
            match (chars.next(), chars.next()) {
                (Some(value), None) => Ok(SlotValue::Char { value }),
                _ => Err(DecodeError::InvalidCharValue {
                    variable: variable.name.clone(),
                    raw: raw.to_owned(),
                }),
            }
        }
        SlotVariableType::Primitive {
            primitive: PrimitiveKind::Integer,
        } => raw
            .parse::<i64>()
            .map(|value| SlotValue::Integer { value })
            .map_err(|_| DecodeError::InvalidIntegerValue {
                variable: variable.name.clone(),
                raw: raw.to_owned(),
            }),
        SlotVariableType::Custom { slot } => {
            let slot = context.slot(slot);
            slot.parse(raw)
                .map(|index| SlotValue::Element {
                    slot: slot.name.clone(),
                    element: slot.elements[index].clone(),
                    index,
                })
                .ok_or_else(|| DecodeError::InvalidEnumValue {
                    slot: slot.name.clone(),
                    element: raw.to_owned(),
                    variable: variable.name.clone(),
                })
        }
    }
}

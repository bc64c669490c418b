// This file is generated by phrasebook. Do not edit.

use std::collections::HashMap;
use std::fmt;

/// Intents of this grammar, decoded from an inference result.
#[allow(non_camel_case_types, non_snake_case)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// The input was not understood.
    NotUnderstood,
    changeColor {
        location: Option<location>,
        color: color,
    },
    changeBrightness {
        location: Option<location>,
        brightness: i64,
    },
    labelRoom {
        location: location,
        letter: char,
    },
    turnOff,
}

#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum color {
    red,
    green,
    blue,
}

impl color {
    pub const NAME: &'static str = "color";
    pub const ELEMENTS: &'static [&'static str] = &["red", "green", "blue"];

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "red" => Some(color::red),
            "green" => Some(color::green),
            "blue" => Some(color::blue),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match *self {
            color::red => "red",
            color::green => "green",
            color::blue => "blue",
        }
    }
}

#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum location {
    kitchen,
    bedroom,
    office,
}

impl location {
    pub const NAME: &'static str = "location";
    pub const ELEMENTS: &'static [&'static str] = &["kitchen", "bedroom", "office"];

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "kitchen" => Some(location::kitchen),
            "bedroom" => Some(location::bedroom),
            "office" => Some(location::office),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match *self {
            location::kitchen => "kitchen",
            location::bedroom => "bedroom",
            location::office => "office",
        }
    }
}

/// Why an inference result does not fit the generated intents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    UnknownIntentName {
        intent: String,
    },
    MissingRequiredVariable {
        variable: &'static str,
    },
    InvalidCharValue {
        variable: &'static str,
        raw: String,
    },
    InvalidIntegerValue {
        variable: &'static str,
        raw: String,
    },
    InvalidEnumValue {
        slot: &'static str,
        element: String,
        variable: &'static str,
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::UnknownIntentName { intent } => {
                write!(f, "intent {} is not a legal intent kind", intent)
            }
            DecodeError::MissingRequiredVariable { variable } => write!(
                f,
                "variable {} is required by all expressions, but is not present",
                variable
            ),
            DecodeError::InvalidCharValue { variable, raw } => write!(
                f,
                "variable {} must be a single char string but was '{}'",
                variable, raw
            ),
            DecodeError::InvalidIntegerValue { variable, raw } => write!(
                f,
                "variable {} must be an integer string but was '{}'",
                variable, raw
            ),
            DecodeError::InvalidEnumValue {
                slot,
                element,
                variable,
            } => write!(
                f,
                "slot {} does not have element {} given for variable {}",
                slot, element, variable
            ),
        }
    }
}

impl std::error::Error for DecodeError {}

/// Decode an inference result into an [`Intent`].
#[allow(unused_variables)]
pub fn decode(
    intent: &str,
    is_understood: bool,
    slots: &HashMap<String, String>,
) -> Result<Intent, DecodeError> {
    if !is_understood {
        return Ok(Intent::NotUnderstood);
    }
    match intent {
        "changeColor" => Ok(Intent::changeColor {
            location: slot_element(slots, "location", location::NAME, location::parse)?,
            color: required("color", slot_element(slots, "color", color::NAME, color::parse)?)?,
        }),
        "changeBrightness" => Ok(Intent::changeBrightness {
            location: slot_element(slots, "location", location::NAME, location::parse)?,
            brightness: required("brightness", slot_integer(slots, "brightness")?)?,
        }),
        "labelRoom" => Ok(Intent::labelRoom {
            location: required("location", slot_element(slots, "location", location::NAME, location::parse)?)?,
            letter: required("letter", slot_char(slots, "letter")?)?,
        }),
        "turnOff" => Ok(Intent::turnOff),
        _ => Err(DecodeError::UnknownIntentName {
            intent: intent.to_string(),
        }),
    }
}

#[allow(dead_code)]
fn required<T>(variable: &'static str, value: Option<T>) -> Result<T, DecodeError> {
    value.ok_or(DecodeError::MissingRequiredVariable { variable })
}

#[allow(dead_code)]
fn slot_char(
    slots: &HashMap<String, String>,
    variable: &'static str,
) -> Result<Option<char>, DecodeError> {
    let Some(raw) = slots.get(variable) else {
        return Ok(None);
    };
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(Some(c)),
        _ => Err(DecodeError::InvalidCharValue {
            variable,
            raw: raw.clone(),
        }),
    }
}

#[allow(dead_code)]
fn slot_integer(
    slots: &HashMap<String, String>,
    variable: &'static str,
) -> Result<Option<i64>, DecodeError> {
    let Some(raw) = slots.get(variable) else {
        return Ok(None);
    };
    raw.parse::<i64>()
        .map(Some)
        .map_err(|_| DecodeError::InvalidIntegerValue {
            variable,
            raw: raw.clone(),
        })
}

#[allow(dead_code)]
fn slot_element<T>(
    slots: &HashMap<String, String>,
    variable: &'static str,
    slot: &'static str,
    parse: fn(&str) -> Option<T>,
) -> Result<Option<T>, DecodeError> {
    let Some(raw) = slots.get(variable) else {
        return Ok(None);
    };
    parse(raw)
        .map(Some)
        .ok_or_else(|| DecodeError::InvalidEnumValue {
            slot,
            element: raw.clone(),
            variable,
        })
}

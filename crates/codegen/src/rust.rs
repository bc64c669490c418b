//! Rust target: a self-contained module with no dependencies outside std.

use phrasebook_core::{
    Context, Intent, PrimitiveKind, Sanitizer, Slot, SlotVariable, SlotVariableType,
};

use crate::{distinct_elements, quote, GENERATED_HEADER};

const DECODE_ERROR: &str = r#"/// Why an inference result does not fit the generated intents.
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
"#;

const HELPERS: &str = r#"#[allow(dead_code)]
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
"#;

/// `Self` is the one keyword that capitalizing cannot escape.
fn ident(name: &str) -> String {
    if name == "Self" {
        "Self_".to_owned()
    } else {
        name.to_owned()
    }
}

/// Enum variant an intent renders as. The raw name stays the `match` key.
pub(crate) fn intent_variant(name: &str) -> String {
    ident(&Sanitizer::rust().sanitize(name))
}

fn field_type(context: &Context, variable: &SlotVariable) -> String {
    let base = match variable.ty {
        SlotVariableType::Primitive {
            primitive: PrimitiveKind::Char,
        } => "char".to_owned(),
        SlotVariableType::Primitive {
            primitive: PrimitiveKind::Integer,
        } => "i64".to_owned(),
        SlotVariableType::Custom { slot } => ident(&context.slot(slot).name),
    };
    if variable.is_required {
        base
    } else {
        format!("Option<{}>", base)
    }
}

/// Expression that reads `variable` out of the `slots` map.
fn field_value(context: &Context, variable: &SlotVariable) -> String {
    let key = quote(&variable.name, false);
    let lookup = match variable.ty {
        SlotVariableType::Primitive {
            primitive: PrimitiveKind::Char,
        } => format!("slot_char(slots, {})?", key),
        SlotVariableType::Primitive {
            primitive: PrimitiveKind::Integer,
        } => format!("slot_integer(slots, {})?", key),
        SlotVariableType::Custom { slot } => {
            let ty = ident(&context.slot(slot).name);
            format!("slot_element(slots, {}, {}::NAME, {}::parse)?", key, ty, ty)
        }
    };
    if variable.is_required {
        format!("required({}, {})?", key, lookup)
    } else {
        lookup
    }
}

fn render_intent_enum(out: &mut String, context: &Context) {
    out.push_str("/// Intents of this grammar, decoded from an inference result.\n");
    out.push_str("#[allow(non_camel_case_types, non_snake_case)]\n");
    out.push_str("#[derive(Debug, Clone, PartialEq, Eq)]\n");
    out.push_str("pub enum Intent {\n");
    out.push_str("    /// The input was not understood.\n");
    out.push_str("    NotUnderstood,\n");
    for intent in &context.intents {
        render_intent_variant(out, context, intent);
    }
    out.push_str("}\n\n");
}

fn render_intent_variant(out: &mut String, context: &Context, intent: &Intent) {
    if intent.variables.is_empty() {
        out.push_str(&format!("    {},\n", intent_variant(&intent.name)));
        return;
    }
    out.push_str(&format!("    {} {{\n", intent_variant(&intent.name)));
    for variable in &intent.variables {
        out.push_str(&format!(
            "        {}: {},\n",
            ident(&variable.name),
            field_type(context, variable)
        ));
    }
    out.push_str("    },\n");
}

fn render_slot_enum(out: &mut String, slot: &Slot) {
    let name = ident(&slot.name);
    let elements = distinct_elements(&slot.elements);

    out.push_str("#[allow(non_camel_case_types)]\n");
    out.push_str("#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]\n");
    out.push_str(&format!("pub enum {} {{\n", name));
    for element in &elements {
        out.push_str(&format!("    {},\n", ident(element)));
    }
    out.push_str("}\n\n");

    out.push_str(&format!("impl {} {{\n", name));
    out.push_str(&format!(
        "    pub const NAME: &'static str = {};\n",
        quote(&slot.name, false)
    ));
    let listed: Vec<String> = elements.iter().map(|e| quote(e, false)).collect();
    out.push_str(&format!(
        "    pub const ELEMENTS: &'static [&'static str] = &[{}];\n\n",
        listed.join(", ")
    ));

    out.push_str("    pub fn parse(raw: &str) -> Option<Self> {\n");
    out.push_str("        match raw {\n");
    for element in &elements {
        out.push_str(&format!(
            "            {} => Some({}::{}),\n",
            quote(element, false),
            name,
            ident(element)
        ));
    }
    out.push_str("            _ => None,\n");
    out.push_str("        }\n");
    out.push_str("    }\n\n");

    out.push_str("    pub fn as_str(&self) -> &'static str {\n");
    out.push_str("        match *self {\n");
    for element in &elements {
        out.push_str(&format!(
            "            {}::{} => {},\n",
            name,
            ident(element),
            quote(element, false)
        ));
    }
    out.push_str("        }\n");
    out.push_str("    }\n");
    out.push_str("}\n\n");
}

fn render_decode_fn(out: &mut String, context: &Context) {
    out.push_str("/// Decode an inference result into an [`Intent`].\n");
    out.push_str("#[allow(unused_variables)]\n");
    out.push_str("pub fn decode(\n");
    out.push_str("    intent: &str,\n");
    out.push_str("    is_understood: bool,\n");
    out.push_str("    slots: &HashMap<String, String>,\n");
    out.push_str(") -> Result<Intent, DecodeError> {\n");
    out.push_str("    if !is_understood {\n");
    out.push_str("        return Ok(Intent::NotUnderstood);\n");
    out.push_str("    }\n");
    out.push_str("    match intent {\n");
    for intent in &context.intents {
        let key = quote(&intent.name, false);
        let variant = intent_variant(&intent.name);
        if intent.variables.is_empty() {
            out.push_str(&format!("        {} => Ok(Intent::{}),\n", key, variant));
            continue;
        }
        out.push_str(&format!("        {} => Ok(Intent::{} {{\n", key, variant));
        for variable in &intent.variables {
            out.push_str(&format!(
                "            {}: {},\n",
                ident(&variable.name),
                field_value(context, variable)
            ));
        }
        out.push_str("        }),\n");
    }
    out.push_str("        _ => Err(DecodeError::UnknownIntentName {\n");
    out.push_str("            intent: intent.to_string(),\n");
    out.push_str("        }),\n");
    out.push_str("    }\n");
    out.push_str("}\n\n");
}

pub(crate) fn render(context: &Context) -> String {
    let mut out = String::new();
    out.push_str(GENERATED_HEADER);
    out.push_str("\n\n");
    out.push_str("use std::collections::HashMap;\n");
    out.push_str("use std::fmt;\n\n");

    render_intent_enum(&mut out, context);
    for slot in &context.slots {
        render_slot_enum(&mut out, slot);
    }
    out.push_str(DECODE_ERROR);
    out.push('\n');
    render_decode_fn(&mut out, context);
    out.push_str(HELPERS);
    out
}

use std::path::Path;

use phrasebook_codegen::Target;
use phrasebook_core::{Context, PrimitiveKind, SlotVariable, SlotVariableType};
use serde_json::{json, Value};

use super::{compile_grammar, load_grammar};
use crate::OutputFormat;

pub(crate) fn cmd_check(grammar: &Path, target: Target, output: OutputFormat, quiet: bool) {
    let source = load_grammar(grammar, output, quiet);
    let context = compile_grammar(&source, target, output, quiet);

    if quiet {
        return;
    }
    match output {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&model_json(&context))
                .unwrap_or_else(|e| format!("{{\"error\": \"serialization: {}\"}}", e));
            println!("{}", json);
        }
        OutputFormat::Text => print!("{}", summary(&context)),
    }
}

fn type_name(context: &Context, variable: &SlotVariable) -> String {
    match variable.ty {
        SlotVariableType::Primitive {
            primitive: PrimitiveKind::Char,
        } => "char".to_owned(),
        SlotVariableType::Primitive {
            primitive: PrimitiveKind::Integer,
        } => "integer".to_owned(),
        SlotVariableType::Custom { slot } => context.slot(slot).name.clone(),
    }
}

/// The model with slot references replaced by slot names.
fn model_json(context: &Context) -> Value {
    let intents: Vec<Value> = context
        .intents
        .iter()
        .map(|intent| {
            let variables: Vec<Value> = intent
                .variables
                .iter()
                .map(|v| {
                    json!({
                        "name": v.name,
                        "type": type_name(context, v),
                        "required": v.is_required,
                    })
                })
                .collect();
            json!({ "name": intent.name, "variables": variables })
        })
        .collect();
    let slots: Vec<Value> = context
        .slots
        .iter()
        .map(|slot| json!({ "name": slot.name, "elements": slot.elements }))
        .collect();
    json!({ "intents": intents, "slots": slots })
}

fn summary(context: &Context) -> String {
    let mut out = format!(
        "Grammar OK: {} intent(s), {} slot(s)\n",
        context.intents.len(),
        context.slots.len()
    );
    for intent in &context.intents {
        out.push_str(&format!("  {}\n", intent.name));
        for variable in &intent.variables {
            let marker = if variable.is_required { "" } else { " (optional)" };
            out.push_str(&format!(
                "    {}: {}{}\n",
                variable.name,
                type_name(context, variable),
                marker
            ));
        }
    }
    for slot in &context.slots {
        out.push_str(&format!(
            "  slot {}: {}\n",
            slot.name,
            slot.elements.join(", ")
        ));
    }
    out
}

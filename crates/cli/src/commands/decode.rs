use std::collections::HashMap;
use std::path::Path;
use std::process;

use phrasebook_codegen::Target;
use phrasebook_core::{DecodedIntent, SlotValue};

use super::{compile_grammar, load_grammar};
use crate::{report_error, OutputFormat};

/// Parse a `--slot key=value` argument. The value may itself contain `=`.
pub(crate) fn parse_slot(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_owned(), value.to_owned())),
        _ => Err(format!("expected key=value, got '{}'", arg)),
    }
}

pub(crate) fn cmd_decode(
    grammar: &Path,
    intent: &str,
    is_understood: bool,
    slots: Vec<(String, String)>,
    target: Target,
    output: OutputFormat,
    quiet: bool,
) {
    let source = load_grammar(grammar, output, quiet);
    let context = compile_grammar(&source, target, output, quiet);
    let slots: HashMap<String, String> = slots.into_iter().collect();

    let decoded = match phrasebook_core::decode(&context, intent, is_understood, &slots) {
        Ok(d) => d,
        Err(e) => {
            report_error(&format!("decode error: {}", e), output, quiet);
            process::exit(1);
        }
    };

    if quiet {
        return;
    }
    match output {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&decoded)
                .unwrap_or_else(|e| format!("{{\"error\": \"serialization: {}\"}}", e));
            println!("{}", json);
        }
        OutputFormat::Text => print!("{}", describe(&decoded)),
    }
}

fn describe(decoded: &DecodedIntent) -> String {
    match decoded {
        DecodedIntent::NotUnderstood => "NotUnderstood\n".to_owned(),
        DecodedIntent::Understood { intent, variables } => {
            let mut out = format!("{}\n", intent);
            for variable in variables {
                let value = match &variable.value {
                    None => "(absent)".to_owned(),
                    Some(SlotValue::Char { value }) => format!("'{}'", value),
                    Some(SlotValue::Integer { value }) => value.to_string(),
                    Some(SlotValue::Element { slot, element, .. }) => {
                        format!("{}.{}", slot, element)
                    }
                };
                out.push_str(&format!("  {} = {}\n", variable.name, value));
            }
            out
        }
    }
}

//! Intent model builder: merges the slot references of every phrase of one
//! intent into a single variable list.
//!
//! A variable is required iff it occurs outside optional/choice nesting in
//! every phrase of the intent. Variables keep first-seen order and the type
//! of their first occurrence.

use std::collections::HashSet;

use crate::error::CompileError;
use crate::model::{Intent, Slot, SlotVariable};
use crate::resolve::resolve;
use crate::sanitize::Sanitizer;
use crate::scanner::scan;

pub fn build_intent(
    name: &str,
    phrases: &[String],
    slots: &[Slot],
    sanitizer: &Sanitizer,
) -> Result<Intent, CompileError> {
    let mut variables: Vec<SlotVariable> = Vec::new();
    // Intersection of the per-phrase required sets; None until the first phrase.
    let mut required: Option<HashSet<String>> = None;

    for phrase in phrases {
        let mut local_names: HashSet<String> = HashSet::new();
        let mut local_required: HashSet<String> = HashSet::new();

        for occurrence in scan(phrase) {
            let occurrence = occurrence?;
            let var_name = sanitizer.sanitize(occurrence.raw_name);

            // Distinct raw names can still collide after sanitizing (`true`, `True`).
            if !local_names.insert(var_name.clone()) {
                return Err(CompileError::DuplicateVariableInPhrase {
                    phrase: phrase.clone(),
                    name: occurrence.raw_name.to_owned(),
                });
            }

            let ty = resolve(&sanitizer.sanitize(occurrence.raw_type_tag), slots).ok_or_else(
                || CompileError::UnknownSlotType {
                    phrase: phrase.clone(),
                    variable: occurrence.raw_name.to_owned(),
                    type_tag: occurrence.raw_type_tag.to_owned(),
                },
            )?;

            if !occurrence.is_in_optional_context {
                local_required.insert(var_name.clone());
            }

            match variables.iter().find(|v| v.name == var_name) {
                Some(existing) if existing.ty != ty => {
                    tracing::warn!(
                        intent = name,
                        variable = %var_name,
                        phrase = %phrase,
                        "variable reused with a different slot type; keeping the first"
                    );
                }
                Some(_) => {}
                None => variables.push(SlotVariable {
                    name: var_name,
                    ty,
                    is_required: false,
                }),
            }
        }

        required = Some(match required {
            None => local_required,
            Some(acc) => acc.intersection(&local_required).cloned().collect(),
        });
    }

    let required = required.unwrap_or_default();
    for variable in &mut variables {
        variable.is_required = required.contains(&variable.name);
    }

    tracing::debug!(
        intent = name,
        phrases = phrases.len(),
        variables = variables.len(),
        required = required.len(),
        "built intent"
    );

    Ok(Intent {
        name: name.to_owned(),
        variables,
    })
}

//! Kotlin target: a sealed `Intent` interface with a `from` factory.

use phrasebook_core::{
    Context, Intent, PrimitiveKind, Sanitizer, Slot, SlotVariable, SlotVariableType,
};

use crate::{distinct_elements, quote, GENERATED_HEADER};

const EXCEPTIONS: &str = r#"sealed class IntentDecodingException(message: String) : Exception(message) {
    class UnknownIntentName(val intent: String?) :
        IntentDecodingException("Intent $intent is not a legal intent kind")

    class MissingRequiredVariable(val variable: String) :
        IntentDecodingException("Variable $variable is required by all expressions, but is not present")

    class InvalidCharValue(val variable: String, val raw: String) :
        IntentDecodingException("Variable $variable must be a single char string but was '$raw'")

    class InvalidIntegerValue(val variable: String, val raw: String) :
        IntentDecodingException("Variable $variable must be an integer string but was '$raw'")

    class InvalidEnumValue(val slot: String, val element: String, val variable: String) :
        IntentDecodingException("Slot $slot does not have element $element given for variable $variable")
}
"#;

const HELPERS: &str = r#"private inline fun <reified T : Enum<T>> Map<String, String>.getSlot(key: String, slot: String): T? =
    this[key]?.let { raw ->
        enumValues<T>().firstOrNull { it.name == raw }
            ?: throw IntentDecodingException.InvalidEnumValue(slot, raw, key)
    }

private fun Map<String, String>.getInt(key: String): Int? =
    this[key]?.let { it.toIntOrNull() ?: throw IntentDecodingException.InvalidIntegerValue(key, it) }

private fun Map<String, String>.getChar(key: String): Char? =
    this[key]?.let { it.singleOrNull() ?: throw IntentDecodingException.InvalidCharValue(key, it) }

private fun <T> T?.require(key: String): T =
    this ?: throw IntentDecodingException.MissingRequiredVariable(key)
"#;

fn kt_str(s: &str) -> String {
    quote(s, true)
}

/// Class or object an intent renders as. The raw name stays the `when` key.
pub(crate) fn intent_class(name: &str) -> String {
    Sanitizer::kotlin().sanitize(name)
}

fn data_type(context: &Context, variable: &SlotVariable) -> String {
    let base = match variable.ty {
        SlotVariableType::Primitive {
            primitive: PrimitiveKind::Char,
        } => "Char",
        SlotVariableType::Primitive {
            primitive: PrimitiveKind::Integer,
        } => "Int",
        SlotVariableType::Custom { slot } => context.slot(slot).name.as_str(),
    };
    if variable.is_required {
        base.to_owned()
    } else {
        format!("{}?", base)
    }
}

fn instantiating_call(context: &Context, variable: &SlotVariable) -> String {
    let key = kt_str(&variable.name);
    let lookup = match variable.ty {
        SlotVariableType::Primitive {
            primitive: PrimitiveKind::Char,
        } => format!("slots.getChar({})", key),
        SlotVariableType::Primitive {
            primitive: PrimitiveKind::Integer,
        } => format!("slots.getInt({})", key),
        SlotVariableType::Custom { slot } => {
            let slot = context.slot(slot);
            format!(
                "slots.getSlot<{}>({}, {})",
                slot.name,
                key,
                kt_str(&slot.name)
            )
        }
    };
    if variable.is_required {
        format!("{}.require({})", lookup, key)
    } else {
        lookup
    }
}

fn type_declaration(context: &Context, intent: &Intent) -> String {
    if intent.variables.is_empty() {
        return format!("object {} : Intent", intent_class(&intent.name));
    }
    let fields: Vec<String> = intent
        .variables
        .iter()
        .map(|v| format!("val {}: {}", v.name, data_type(context, v)))
        .collect();
    format!(
        "data class {}({}) : Intent",
        intent_class(&intent.name),
        fields.join(", ")
    )
}

fn instantiation(context: &Context, intent: &Intent) -> String {
    if intent.variables.is_empty() {
        return intent_class(&intent.name);
    }
    let args: Vec<String> = intent
        .variables
        .iter()
        .map(|v| instantiating_call(context, v))
        .collect();
    format!("{}({})", intent_class(&intent.name), args.join(", "))
}

fn slot_enum(slot: &Slot) -> String {
    format!(
        "enum class {} {{ {} }}",
        slot.name,
        distinct_elements(&slot.elements).join(", ")
    )
}

pub(crate) fn render(context: &Context, package: Option<&str>) -> String {
    let mut out = String::new();
    out.push_str(GENERATED_HEADER);
    out.push('\n');
    if let Some(package) = package {
        out.push_str(&format!("package {}\n", package));
    }
    out.push('\n');

    out.push_str("sealed interface Intent {\n");
    out.push_str("    object NotUnderstood : Intent\n");
    for intent in &context.intents {
        out.push_str(&format!("    {}\n", type_declaration(context, intent)));
    }
    out.push('\n');
    out.push_str("    companion object {\n");
    out.push_str(
        "        fun from(intent: String?, isUnderstood: Boolean, slots: Map<String, String>): Intent {\n",
    );
    out.push_str("            if (!isUnderstood)\n");
    out.push_str("                return NotUnderstood\n");
    out.push_str("            return when (intent) {\n");
    for intent in &context.intents {
        out.push_str(&format!(
            "                {} -> {}\n",
            kt_str(&intent.name),
            instantiation(context, intent)
        ));
    }
    out.push_str("                else -> throw IntentDecodingException.UnknownIntentName(intent)\n");
    out.push_str("            }\n");
    out.push_str("        }\n");
    out.push_str("    }\n");
    out.push_str("}\n\n");

    for slot in &context.slots {
        out.push_str(&slot_enum(slot));
        out.push('\n');
    }
    out.push('\n');
    out.push_str(EXCEPTIONS);
    out.push('\n');
    out.push_str(HELPERS);
    out
}

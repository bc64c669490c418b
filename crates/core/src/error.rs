/// A grammar compilation error. The first failing phrase aborts the compile.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    /// A `$` reference without the `:` between type tag and variable name.
    #[error("malformed slot reference in phrase '{phrase}': expected '$<type>:<name>'")]
    MalformedSlotReference { phrase: String },

    /// The same variable name occurs twice in one phrase.
    #[error("phrase '{phrase}' contains duplicate variable {name}")]
    DuplicateVariableInPhrase { phrase: String, name: String },

    /// A type tag that is neither built in nor a declared slot.
    #[error(
        "phrase '{phrase}' has variable {variable} with slot type {type_tag} that does not exist"
    )]
    UnknownSlotType {
        phrase: String,
        variable: String,
        type_tag: String,
    },

    /// Wraps an error with the intent whose phrases produced it.
    #[error("intent {intent}: {source}")]
    InIntent {
        intent: String,
        #[source]
        source: Box<CompileError>,
    },
}

impl CompileError {
    /// Attach the name of the intent being built.
    pub fn in_intent(self, intent: &str) -> Self {
        CompileError::InIntent {
            intent: intent.to_owned(),
            source: Box::new(self),
        }
    }

    /// The underlying error, with any intent context stripped.
    pub fn root(&self) -> &CompileError {
        match self {
            CompileError::InIntent { source, .. } => source.root(),
            other => other,
        }
    }
}

/// A decode failure: the inference result does not fit the compiled model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("intent {intent} is not a legal intent kind")]
    UnknownIntentName { intent: String },

    #[error("variable {variable} is required by all expressions, but is not present")]
    MissingRequiredVariable { variable: String },

    #[error("variable {variable} must be a single char string but was '{raw}'")]
    InvalidCharValue { variable: String, raw: String },

    #[error("variable {variable} must be an integer string but was '{raw}'")]
    InvalidIntegerValue { variable: String, raw: String },

    #[error("slot {slot} does not have element {element} given for variable {variable}")]
    InvalidEnumValue {
        slot: String,
        element: String,
        variable: String,
    },
}

use std::path::PathBuf;

use phrasebook_core::CompileError;

use crate::Target;

/// Error type for code generation operations.
#[derive(Debug, thiserror::Error)]
pub enum CodegenError {
    /// The grammar did not compile.
    #[error(transparent)]
    Compile(#[from] CompileError),

    /// An intent renders under a name the generated decoder declares itself.
    #[error("intent {intent} renders as {type_name}, which the {target} decoder already declares")]
    ReservedIntentName {
        intent: String,
        type_name: String,
        target: Target,
    },

    /// Two intents render under the same identifier.
    #[error("intents {first} and {second} both render as {type_name} in {target} output")]
    IntentNameClash {
        first: String,
        second: String,
        type_name: String,
        target: Target,
    },

    /// The output path does not carry the target's extension.
    #[error("output file must end in .{expected}, got '{}'", .path.display())]
    WrongExtension {
        path: PathBuf,
        expected: &'static str,
    },

    /// The output path is an existing directory.
    #[error("output file must not be a directory, got '{}'", .path.display())]
    OutputIsDirectory { path: PathBuf },

    /// Writing the generated file failed.
    #[error("I/O error at '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub(crate) mod check;
pub(crate) mod decode;
pub(crate) mod generate;

use std::path::Path;
use std::process;

use phrasebook_codegen::Target;
use phrasebook_core::{Context, GrammarSource};

use crate::{report_error, OutputFormat};

/// Read a grammar file or exit with status 1.
pub(crate) fn load_grammar(path: &Path, output: OutputFormat, quiet: bool) -> GrammarSource {
    match phrasebook_interchange::read_grammar(path) {
        Ok(source) => source,
        Err(e) => {
            report_error(&format!("error reading grammar: {}", e), output, quiet);
            process::exit(1);
        }
    }
}

/// Compile a grammar with the keyword set of `target` or exit with status 1.
pub(crate) fn compile_grammar(
    source: &GrammarSource,
    target: Target,
    output: OutputFormat,
    quiet: bool,
) -> Context {
    match phrasebook_codegen::compile(source, target) {
        Ok(context) => context,
        Err(e) => {
            report_error(&format!("compile error: {}", e), output, quiet);
            process::exit(1);
        }
    }
}

//! phrasebook-core: compiler core for voice-intent grammars.
//!
//! Turns a declarative grammar (slots plus example phrases per intent) into
//! a typed [`Context`] that code generators render into decoder source.
//!
//! # Pipeline
//!
//! - [`scanner`] -- split one phrase into slot-reference occurrences
//! - [`resolve`] -- map a type tag to a built-in kind or a declared slot
//! - [`intent`] -- merge the occurrences of all phrases of one intent
//! - [`compile()`] -- run the above over a whole [`GrammarSource`]
//!
//! [`decode()`] interprets a compiled [`Context`] directly, with the same
//! contract as the generated decode functions.

pub mod compile;
pub mod decode;
pub mod error;
pub mod intent;
pub mod model;
pub mod resolve;
pub mod sanitize;
pub mod scanner;

// ── Convenience re-exports: key types ────────────────────────────────

pub use compile::GrammarSource;
pub use decode::{DecodedIntent, DecodedVariable, SlotValue};
pub use error::{CompileError, DecodeError};
pub use model::{Context, Intent, PrimitiveKind, Slot, SlotId, SlotVariable, SlotVariableType};
pub use sanitize::Sanitizer;
pub use scanner::VariableOccurrence;

// ── Convenience re-exports: pipeline entry points ────────────────────

pub use compile::compile;
pub use decode::decode;
pub use intent::build_intent;
pub use resolve::resolve;
pub use scanner::scan;

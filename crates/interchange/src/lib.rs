//! phrasebook-interchange: reads grammar documents into a
//! [`phrasebook_core::GrammarSource`].
//!
//! A grammar document has one root `context` node holding two maps:
//!
//! ```yaml
//! context:
//!   expressions:
//!     ChangeColor:
//!       - make it $Color:color (please)
//!   slots:
//!     Color:
//!       - red
//!       - green
//! ```
//!
//! YAML and JSON spellings of the same structure are both accepted.
//! Intents and slots keep their declaration order.

pub mod deserialize;
pub mod types;

pub use deserialize::{from_json_str, from_yaml_str, parse, read_grammar, InterchangeError};
pub use types::GrammarFormat;

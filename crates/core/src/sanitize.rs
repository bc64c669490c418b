//! Reserved-word avoidance for emitted identifiers.

/// Hard keywords of Kotlin.
pub const KOTLIN_KEYWORDS: &[&str] = &[
    "as",
    "break",
    "class",
    "continue",
    "do",
    "else",
    "false",
    "for",
    "fun",
    "if",
    "in",
    "interface",
    "is",
    "null",
    "object",
    "package",
    "return",
    "super",
    "this",
    "throw",
    "true",
    "try",
    "typealias",
    "typeof",
    "val",
    "var",
    "when",
    "while",
];

/// Strict and reserved keywords of Rust (2021 edition).
pub const RUST_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "static", "struct", "super", "trait", "true", "try", "type", "typeof",
    "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Maps raw names to identifiers that do not collide with a fixed keyword set.
#[derive(Debug, Clone, Copy)]
pub struct Sanitizer {
    keywords: &'static [&'static str],
}

impl Sanitizer {
    pub const fn new(keywords: &'static [&'static str]) -> Self {
        Sanitizer { keywords }
    }

    pub const fn kotlin() -> Self {
        Sanitizer::new(KOTLIN_KEYWORDS)
    }

    pub const fn rust() -> Self {
        Sanitizer::new(RUST_KEYWORDS)
    }

    pub fn is_reserved(&self, raw: &str) -> bool {
        self.keywords.contains(&raw)
    }

    /// Returns `raw` unchanged unless it is a reserved word, in which case
    /// its first character is upper-cased (`true` becomes `True`).
    pub fn sanitize(&self, raw: &str) -> String {
        if !self.is_reserved(raw) {
            return raw.to_owned();
        }
        let mut chars = raw.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl Default for Sanitizer {
    fn default() -> Self {
        Sanitizer::rust()
    }
}

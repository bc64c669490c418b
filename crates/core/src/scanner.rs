//! Phrase scanner: finds `$<type>:<name>` slot references in one phrase.
//!
//! Literal text is skipped. `(`...`)` (optional) and `[`...`]` (choice)
//! groups are tracked with a single depth counter; a reference read while
//! the depth is above zero is in optional context. Group shape is not
//! validated: an unterminated group keeps the rest of the phrase optional
//! and a stray closer is ignored.

use std::iter::FusedIterator;

use crate::error::CompileError;

/// One slot reference inside one phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariableOccurrence<'a> {
    pub raw_name: &'a str,
    pub raw_type_tag: &'a str,
    pub is_in_optional_context: bool,
}

/// Scan `phrase` lazily, left to right. Each call starts from scratch, so
/// scanning the same phrase twice yields the same sequence.
pub fn scan(phrase: &str) -> Scan<'_> {
    Scan {
        phrase,
        pos: 0,
        depth: 0,
        seen: Vec::new(),
        done: false,
    }
}

/// Iterator returned by [`scan`]. Stops after the first error.
#[derive(Debug, Clone)]
pub struct Scan<'a> {
    phrase: &'a str,
    pos: usize,
    depth: usize,
    seen: Vec<&'a str>,
    done: bool,
}

fn is_tag_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '.'
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Length in bytes of the longest prefix of `s` whose chars satisfy `pred`.
fn prefix_len(s: &str, pred: fn(char) -> bool) -> usize {
    s.find(|c: char| !pred(c)).unwrap_or(s.len())
}

impl<'a> Scan<'a> {
    fn fail(&mut self, err: CompileError) -> Option<Result<VariableOccurrence<'a>, CompileError>> {
        self.done = true;
        Some(Err(err))
    }

    /// Read the reference starting right after a `$` at `self.pos`.
    fn reference(&mut self) -> Option<Result<VariableOccurrence<'a>, CompileError>> {
        let phrase = self.phrase;
        let rest = &phrase[self.pos..];

        let tag_len = prefix_len(rest, is_tag_char);
        let raw_type_tag = &rest[..tag_len];
        let Some(after_colon) = rest[tag_len..].strip_prefix(':') else {
            return self.fail(CompileError::MalformedSlotReference {
                phrase: phrase.to_owned(),
            });
        };
        let name_len = prefix_len(after_colon, is_name_char);
        let raw_name = &after_colon[..name_len];
        if raw_type_tag.is_empty() || raw_name.is_empty() {
            return self.fail(CompileError::MalformedSlotReference {
                phrase: phrase.to_owned(),
            });
        }

        if self.seen.contains(&raw_name) {
            return self.fail(CompileError::DuplicateVariableInPhrase {
                phrase: phrase.to_owned(),
                name: raw_name.to_owned(),
            });
        }
        self.seen.push(raw_name);
        self.pos += tag_len + 1 + name_len;

        Some(Ok(VariableOccurrence {
            raw_name,
            raw_type_tag,
            is_in_optional_context: self.depth > 0,
        }))
    }
}

impl<'a> Iterator for Scan<'a> {
    type Item = Result<VariableOccurrence<'a>, CompileError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        while let Some(c) = self.phrase[self.pos..].chars().next() {
            self.pos += c.len_utf8();
            match c {
                '(' | '[' => self.depth += 1,
                ')' | ']' => {
                    if self.depth == 0 {
                        tracing::warn!(phrase = self.phrase, "unmatched '{}' ignored", c);
                    } else {
                        self.depth -= 1;
                    }
                }
                '$' => return self.reference(),
                _ => {}
            }
        }
        if self.depth > 0 {
            tracing::warn!(
                phrase = self.phrase,
                depth = self.depth,
                "phrase ends inside an optional or choice group"
            );
        }
        self.done = true;
        None
    }
}

impl FusedIterator for Scan<'_> {}

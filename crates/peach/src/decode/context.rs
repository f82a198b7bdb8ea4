use crate::error::{Error, Result};
use crate::options::DecodeOptions;

/// Cursor over the input text. All grammar rules share one context and
/// advance it as they consume characters; there is no backtracking.
///
/// Offsets are counted in characters, not bytes, so the position in an
/// error message matches what a reader sees in the document.
pub struct Context<'a> {
    chars: Vec<char>,
    pos: usize,
    options: &'a DecodeOptions,
}

impl<'a> Context<'a> {
    pub fn new(source: &str, options: &'a DecodeOptions) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            options,
        }
    }

    /// Character under the cursor, or `None` when the input is exhausted.
    pub fn current(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// Returns the current character and advances past it.
    pub fn next(&mut self) -> Result<char> {
        match self.current() {
            Some(c) => {
                self.pos += 1;
                Ok(c)
            }
            None => self.fail("unexpected end of input"),
        }
    }

    /// Skips `n` characters without inspecting them. Used after a
    /// literal has already been matched.
    pub fn skip(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.chars.len());
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn bigint_as_string(&self) -> bool {
        self.options.bigint_as_string
    }

    /// True when the input at the cursor starts with `literal`.
    pub fn matches(&self, literal: &str) -> bool {
        literal
            .chars()
            .enumerate()
            .all(|(i, c)| self.chars.get(self.pos + i) == Some(&c))
    }

    /// Consumes `literal` or fails on the first differing character.
    pub fn consume_literal(&mut self, literal: &str) -> Result<()> {
        if self.matches(literal) {
            self.skip(literal.chars().count());
            Ok(())
        } else {
            match self.current() {
                Some(c) => self.fail(format!("unexpected character '{c}'")),
                None => self.fail("unexpected end of input"),
            }
        }
    }

    /// Sole error-reporting path of the grammar rules: a decode error
    /// carrying the current offset.
    pub fn fail<T>(&self, message: impl Into<String>) -> Result<T> {
        Err(Error::Decode {
            position: self.pos,
            message: message.into(),
        })
    }
}

//! The incremental reveal engine.
//!
//! Owns the source text, the read position and the step size, and turns key
//! presses into escaped chunks of newly revealed text. The position only
//! moves forward; replacing the source text is the one operation that
//! rewinds it to zero.

use std::fmt::Write;

/// True for characters that must not reach the display surface verbatim.
///
/// Covers the literal markup characters plus the `U+00A0..=U+9999` range
/// (non-breaking space up through the bulk of the CJK blocks).
pub fn needs_escape(c: char) -> bool {
    matches!(c, '<' | '>' | '&') || ('\u{00A0}'..='\u{9999}').contains(&c)
}

/// Escape every unsafe character in `chunk` into a numeric character
/// reference (`&#<codepoint>;`). Safe characters pass through untouched.
pub fn escape_chunk(chunk: &str) -> String {
    let mut out = String::with_capacity(chunk.len());
    for c in chunk.chars() {
        if needs_escape(c) {
            // String formatting never fails
            let _ = write!(out, "&#{};", c as u32);
        } else {
            out.push(c);
        }
    }
    out
}

/// Cursor-driven reveal state.
///
/// Positions count Unicode scalar values, not bytes.
#[derive(Debug, Default)]
pub struct RevealState {
    /// Full text to be revealed.
    source: String,
    /// How far into `source` the user has typed, in characters.
    position: usize,
    /// Characters revealed per key press.
    step: usize,
    /// Everything revealed so far, already escaped.
    output: String,
}

impl RevealState {
    pub fn new(source: String, step: usize) -> Self {
        Self {
            source,
            position: 0,
            step,
            output: String::new(),
        }
    }

    /// Reveal the next `n` characters.
    ///
    /// Reads `[position, position + n)` clamped at end of text (reading past
    /// the end yields nothing), appends the escaped chunk to the output and
    /// advances the position by `n` unconditionally. The position may end up
    /// past the text length; it never decreases and never wraps.
    ///
    /// Returns the newly appended chunk so the caller can scroll it into view.
    pub fn advance(&mut self, n: usize) -> String {
        let chunk: String = self.source.chars().skip(self.position).take(n).collect();
        let escaped = escape_chunk(&chunk);
        self.output.push_str(&escaped);
        self.position = self.position.saturating_add(n);
        escaped
    }

    /// Reveal the next `step` characters.
    pub fn advance_step(&mut self) -> String {
        self.advance(self.step)
    }

    /// Install a new source text, rewinding the position and clearing the
    /// revealed output. The caller is responsible for persisting the text.
    pub fn replace_text(&mut self, text: String) {
        self.position = 0;
        self.output.clear();
        self.source = text;
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn source_is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn set_step(&mut self, step: usize) {
        self.step = step;
    }
}

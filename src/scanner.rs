//! Single-pass scanner for weighted prompt syntax.
//!
//! Recognised constructs:
//! - `{tag}` — emphasis, ×1.05 per nesting level
//! - `[tag]` — de-emphasis, ÷1.05 per nesting level
//! - `1.5::tag, tag ::` — colon weight, multiplies enclosed content by the
//!   number until a terminating `::`
//! - `<snippet:name>` — reference to a named reusable fragment
//! - `//comment//` — inert comment, may span lines
//!
//! Malformed syntax never fails the scan: unmatched delimiters degrade to
//! literal text and are reported through the `unclosed_*` diagnostics.

use crate::span::{ParseResult, Span, SpanKind};

/// Emphasis multiplier applied per `{}` / `[]` nesting level.
pub const WEIGHT_MULTIPLIER: f64 = 1.05;

/// Scan a prompt string into typed, weighted spans.
///
/// Pure and infallible: the returned spans are contiguous, sorted, and
/// cover the whole input. Offsets are UTF-8 byte positions.
#[must_use]
pub fn parse(input: &str) -> ParseResult {
    Scanner::new(input).scan()
}

struct Scanner {
    chars: Vec<(usize, char)>,
    pos: usize,
    spans: Vec<Span>,
    brace_depth: i32,
    bracket_depth: i32,
    colon_weight: Option<f64>,
}

impl Scanner {
    fn new(input: &str) -> Self {
        Self {
            chars: input.char_indices().collect(),
            pos: 0,
            spans: Vec::new(),
            brace_depth: 0,
            bracket_depth: 0,
            colon_weight: None,
        }
    }

    fn scan(mut self) -> ParseResult {
        // Defensive bound for pathological input. Every dispatch arm
        // consumes at least one character, so this should never trip;
        // if it does, return the spans accumulated so far.
        let limit = 2 * self.chars.len() + 100;
        let mut steps = 0;

        while self.pos < self.chars.len() {
            if steps >= limit {
                break;
            }
            steps += 1;

            let (byte_pos, ch) = self.chars[self.pos];
            match ch {
                '/' if self.peek(1) == Some('/') => self.scan_comment(byte_pos),
                '\n' => {
                    self.emit(byte_pos, byte_pos + 1, 1.0, SpanKind::Newline);
                    self.pos += 1;
                }
                '\r' => self.scan_carriage_return(byte_pos),
                '0'..='9' | '-' | '.' => {
                    if let Some((value, next, end)) = self.try_weight_start(self.pos) {
                        self.emit(byte_pos, end, value, SpanKind::WeightNum);
                        self.colon_weight = Some(value);
                        self.pos = next;
                    } else {
                        self.scan_text();
                    }
                }
                ':' if self.peek(1) == Some(':') => self.scan_double_colon(byte_pos),
                '{' => {
                    self.brace_depth += 1;
                    // the opening delimiter carries the depth it creates
                    let weight = WEIGHT_MULTIPLIER.powi(self.brace_depth);
                    self.emit(byte_pos, byte_pos + 1, weight, SpanKind::Brace);
                    self.pos += 1;
                }
                '}' => {
                    // the closing delimiter reports the scope it closes
                    let weight = WEIGHT_MULTIPLIER.powi(self.brace_depth);
                    self.emit(byte_pos, byte_pos + 1, weight, SpanKind::Brace);
                    self.brace_depth = (self.brace_depth - 1).max(0);
                    self.pos += 1;
                }
                '[' => {
                    self.bracket_depth += 1;
                    let weight = WEIGHT_MULTIPLIER.powi(-self.bracket_depth);
                    self.emit(byte_pos, byte_pos + 1, weight, SpanKind::Bracket);
                    self.pos += 1;
                }
                ']' => {
                    let weight = WEIGHT_MULTIPLIER.powi(-self.bracket_depth);
                    self.emit(byte_pos, byte_pos + 1, weight, SpanKind::Bracket);
                    self.bracket_depth = (self.bracket_depth - 1).max(0);
                    self.pos += 1;
                }
                ',' => {
                    self.emit(byte_pos, byte_pos + 1, 1.0, SpanKind::Comma);
                    self.pos += 1;
                }
                ' ' | '\t' => self.scan_whitespace(),
                '<' => self.scan_angle(byte_pos),
                _ => self.scan_text(),
            }
        }

        ParseResult {
            spans: self.spans,
            unclosed_braces: u32::try_from(self.brace_depth).unwrap_or(0),
            unclosed_brackets: u32::try_from(self.bracket_depth).unwrap_or(0),
            unclosed_weight: self.colon_weight.is_some(),
        }
    }

    fn char_at(&self, idx: usize) -> Option<char> {
        self.chars.get(idx).map(|&(_, ch)| ch)
    }

    fn peek(&self, offset: usize) -> Option<char> {
        self.char_at(self.pos + offset)
    }

    fn emit(&mut self, start: usize, end: usize, weight: f64, kind: SpanKind) {
        self.spans.push(Span {
            start,
            end,
            weight,
            kind,
        });
    }

    /// Weight in effect at the current scan position.
    fn ambient_weight(&self) -> f64 {
        let mut weight = 1.0;
        if self.brace_depth > 0 {
            weight *= WEIGHT_MULTIPLIER.powi(self.brace_depth);
        }
        if self.bracket_depth > 0 {
            weight /= WEIGHT_MULTIPLIER.powi(self.bracket_depth);
        }
        if let Some(w) = self.colon_weight {
            weight *= w;
        }
        weight
    }

    /// `//...//` — the whole construct becomes one inert comment span.
    /// Without a closing marker the two slashes are literal text.
    fn scan_comment(&mut self, start: usize) {
        let mut i = self.pos + 2;
        while i + 1 < self.chars.len() {
            if self.chars[i].1 == '/' && self.chars[i + 1].1 == '/' {
                let end = self.chars[i + 1].0 + 1;
                self.emit(start, end, 1.0, SpanKind::Comment);
                self.pos = i + 2;
                return;
            }
            i += 1;
        }

        let end = self.chars[self.pos + 1].0 + 1;
        let weight = self.ambient_weight();
        self.emit(start, end, weight, SpanKind::Text);
        self.pos += 2;
    }

    fn scan_carriage_return(&mut self, start: usize) {
        if self.peek(1) == Some('\n') {
            let end = self.chars[self.pos + 1].0 + 1;
            self.emit(start, end, 1.0, SpanKind::Newline);
            self.pos += 2;
        } else {
            self.emit(start, start + 1, 1.0, SpanKind::Newline);
            self.pos += 1;
        }
    }

    /// `::` terminates an active colon weight. A stray `::` with no weight
    /// open is emitted as literal text so the dispatch cannot revisit it.
    fn scan_double_colon(&mut self, start: usize) {
        let end = self.chars[self.pos + 1].0 + 1;
        if self.colon_weight.take().is_some() {
            self.emit(start, end, 1.0, SpanKind::WeightEnd);
        } else {
            self.emit(start, end, 1.0, SpanKind::Text);
        }
        self.pos += 2;
    }

    fn scan_whitespace(&mut self) {
        let (start, first) = self.chars[self.pos];
        let mut end = start + first.len_utf8();
        self.pos += 1;

        while let Some(&(byte, ch)) = self.chars.get(self.pos) {
            if ch == ' ' || ch == '\t' {
                end = byte + ch.len_utf8();
                self.pos += 1;
            } else {
                break;
            }
        }

        self.emit(start, end, 1.0, SpanKind::Whitespace);
    }

    /// `<` either opens a snippet reference or is literal text.
    fn scan_angle(&mut self, start: usize) {
        let weight = self.ambient_weight();
        if let Some((next, end)) = self.try_snippet_ref(self.pos) {
            self.emit(start, end, weight, SpanKind::Snippet);
            self.pos = next;
        } else {
            self.emit(start, start + 1, weight, SpanKind::Text);
            self.pos += 1;
        }
    }

    /// Greedy text run, stopping before any character another rule handles.
    fn scan_text(&mut self) {
        let (start, _) = self.chars[self.pos];
        let mut end = start;

        while let Some(&(byte, ch)) = self.chars.get(self.pos) {
            match ch {
                '{' | '}' | '[' | ']' | ',' | '\n' | '\r' | '<' | ' ' | '\t' => break,
                ':' if self.peek(1) == Some(':') => break,
                '/' if self.peek(1) == Some('/') => break,
                '0'..='9' | '-' | '.' => {
                    if self.try_weight_start(self.pos).is_some() {
                        break;
                    }
                    end = byte + ch.len_utf8();
                    self.pos += 1;
                }
                _ => {
                    end = byte + ch.len_utf8();
                    self.pos += 1;
                }
            }
        }

        if end > start {
            let weight = self.ambient_weight();
            self.emit(start, end, weight, SpanKind::Text);
        }
    }

    /// Lookahead for a colon-weight opener `number::` at `start`: an
    /// optional `-`, digits with at most one `.`, at least one digit,
    /// immediately followed by `::`.
    ///
    /// Returns `(value, next char index, end byte offset)`.
    fn try_weight_start(&self, start: usize) -> Option<(f64, usize, usize)> {
        let mut pos = start;
        let mut num = String::new();

        if self.char_at(pos) == Some('-') {
            num.push('-');
            pos += 1;
        }

        let mut has_digit = false;
        let mut has_dot = false;
        while let Some(ch) = self.char_at(pos) {
            if ch.is_ascii_digit() {
                num.push(ch);
                has_digit = true;
                pos += 1;
            } else if ch == '.' && !has_dot {
                num.push(ch);
                has_dot = true;
                pos += 1;
            } else {
                break;
            }
        }

        if !has_digit {
            return None;
        }

        if self.char_at(pos) == Some(':') && self.char_at(pos + 1) == Some(':') {
            let value: f64 = num.parse().ok()?;
            let end_byte = self.chars[pos + 1].0 + 1;
            Some((value, pos + 2, end_byte))
        } else {
            None
        }
    }

    /// Lookahead for `<snippet:name>` at `start`. The name may contain any
    /// character except `<` and a newline.
    ///
    /// Returns `(next char index, end byte offset)`.
    fn try_snippet_ref(&self, start: usize) -> Option<(usize, usize)> {
        let mut pos = start;
        for expected in "<snippet:".chars() {
            if self.char_at(pos) != Some(expected) {
                return None;
            }
            pos += 1;
        }

        while let Some(&(byte, ch)) = self.chars.get(pos) {
            match ch {
                '>' => return Some((pos + 1, byte + 1)),
                '<' | '\n' => return None,
                _ => pos += 1,
            }
        }

        None
    }
}

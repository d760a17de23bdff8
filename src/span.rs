use serde::{Deserialize, Serialize};

/// Syntactic category of a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanKind {
    /// Plain prompt text (a tag or part of one).
    Text,
    /// Tag separator `,`.
    Comma,
    /// Run of spaces and tabs.
    Whitespace,
    /// Emphasis delimiter `{` or `}`.
    Brace,
    /// De-emphasis delimiter `[` or `]`.
    Bracket,
    /// Colon-weight opener `<number>::`.
    WeightNum,
    /// Colon-weight terminator `::`.
    WeightEnd,
    /// Snippet reference `<snippet:name>`.
    Snippet,
    /// Line break (`\n`, `\r` or `\r\n`).
    Newline,
    /// Comment `//...//`.
    Comment,
}

/// A half-open range of the input with its effective emphasis weight.
///
/// Offsets are UTF-8 byte positions into the scanned string. A weight of
/// 1.0 means "no emphasis"; `{}` nesting multiplies by 1.05 per level,
/// `[]` nesting divides by 1.05 per level, and an active colon weight
/// multiplies by its numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub weight: f64,
    #[serde(rename = "type")]
    pub kind: SpanKind,
}

impl Span {
    /// The slice of `input` this span covers.
    #[must_use]
    pub fn text<'a>(&self, input: &'a str) -> &'a str {
        &input[self.start..self.end]
    }

    /// For a [`SpanKind::Snippet`] span, the referenced snippet name
    /// (the part between `<snippet:` and `>`). `None` for other kinds.
    #[must_use]
    pub fn snippet_name<'a>(&self, input: &'a str) -> Option<&'a str> {
        const PREFIX_LEN: usize = "<snippet:".len();
        if self.kind == SpanKind::Snippet {
            Some(&input[self.start + PREFIX_LEN..self.end - 1])
        } else {
            None
        }
    }
}

/// Result of scanning one prompt string.
///
/// The spans are sorted by `start`, contiguous, and cover the whole input;
/// concatenating their texts reproduces the input exactly. The three
/// diagnostics summarise unbalanced syntax at end of input. Serializes to
/// the wire shape consumed by editor frontends and the backend service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseResult {
    pub spans: Vec<Span>,
    /// `{` depth still open at end of input.
    pub unclosed_braces: u32,
    /// `[` depth still open at end of input.
    pub unclosed_brackets: u32,
    /// True if a colon weight was opened and never terminated by `::`.
    pub unclosed_weight: bool,
}

//! Weighted prompt syntax scanner for image-generation prompt editors.
//!
//! A single-pass tokenizer that turns raw prompt text into an ordered,
//! contiguous sequence of typed, weighted spans, suitable for live syntax
//! highlighting and as a conformance target for a second (backend)
//! implementation of the same grammar.
//!
//! # Quick start
//!
//! ## Scan a prompt
//!
//! ```
//! use promptspan_rs::{SpanKind, parse};
//!
//! let result = parse("{{detailed}}, best quality");
//! let text = result
//!     .spans
//!     .iter()
//!     .find(|s| s.kind == SpanKind::Text)
//!     .unwrap();
//! assert!((text.weight - 1.1025).abs() < 1e-9);
//! assert_eq!(result.unclosed_braces, 0);
//! ```
//!
//! ## Report unbalanced syntax
//!
//! ```
//! use promptspan_rs::parse;
//!
//! let result = parse("{{[1.5::a");
//! assert_eq!(result.unclosed_braces, 2);
//! assert_eq!(result.unclosed_brackets, 1);
//! assert!(result.unclosed_weight);
//! ```
//!
//! The scanner never fails: malformed syntax degrades to literal text and
//! is reported through the diagnostics above. Offsets are UTF-8 byte
//! positions; a reimplementation on a UTF-16 runtime must remap its
//! offsets before comparing results.

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod comment;
pub mod scanner;
pub mod span;

pub use comment::{CommentError, strip_comments};
pub use scanner::{WEIGHT_MULTIPLIER, parse};
pub use span::{ParseResult, Span, SpanKind};

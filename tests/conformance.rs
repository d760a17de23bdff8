//! Versioned conformance vectors.
//!
//! `tests/vectors/scanner_v1.json` is the shared contract between this
//! scanner and any second implementation of the same grammar (e.g. the
//! backend service copy): both must produce identical span boundaries and
//! kinds for every vector, with weights agreeing within `WEIGHT_EPSILON`.
//! Offsets in the vector file are UTF-8 byte offsets; an implementation
//! with a different native string representation must remap before
//! comparing.

mod common;

use common::{WEIGHT_EPSILON, assert_total_coverage};
use promptspan_rs::{ParseResult, parse};
use serde::Deserialize;

const VECTOR_FILE: &str = include_str!("vectors/scanner_v1.json");

#[derive(Deserialize)]
struct VectorFile {
    version: u32,
    vectors: Vec<Vector>,
}

#[derive(Deserialize)]
struct Vector {
    name: String,
    input: String,
    expected: ParseResult,
}

fn load() -> VectorFile {
    serde_json::from_str(VECTOR_FILE).expect("vector file parses")
}

#[test]
fn vector_file_version() {
    assert_eq!(load().version, 1);
}

#[test]
fn all_vectors_match() {
    for vector in &load().vectors {
        let actual = parse(&vector.input);
        let expected = &vector.expected;

        assert_eq!(
            actual.spans.len(),
            expected.spans.len(),
            "[{}] span count mismatch: got {:?}",
            vector.name,
            actual.spans
        );
        for (i, (got, want)) in actual.spans.iter().zip(&expected.spans).enumerate() {
            assert_eq!(
                (got.start, got.end, got.kind),
                (want.start, want.end, want.kind),
                "[{}] span {i} boundary/kind mismatch",
                vector.name
            );
            assert!(
                (got.weight - want.weight).abs() < WEIGHT_EPSILON,
                "[{}] span {i} weight mismatch: expected {}, got {}",
                vector.name,
                want.weight,
                got.weight
            );
        }

        assert_eq!(
            actual.unclosed_braces, expected.unclosed_braces,
            "[{}] unclosed_braces",
            vector.name
        );
        assert_eq!(
            actual.unclosed_brackets, expected.unclosed_brackets,
            "[{}] unclosed_brackets",
            vector.name
        );
        assert_eq!(
            actual.unclosed_weight, expected.unclosed_weight,
            "[{}] unclosed_weight",
            vector.name
        );
    }
}

#[test]
fn all_vectors_are_internally_consistent() {
    // the expected spans themselves must satisfy the coverage invariant,
    // otherwise the vector file is wrong regardless of the scanner
    for vector in &load().vectors {
        assert_total_coverage(&vector.input, &vector.expected);
    }
}

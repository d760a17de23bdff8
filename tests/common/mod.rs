#![allow(dead_code)]

use promptspan_rs::ParseResult;

/// Tolerance for comparing computed weights. The scanner derives weights
/// from repeated `powi`, so expected literals may differ in the last bits.
pub const WEIGHT_EPSILON: f64 = 1e-9;

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < WEIGHT_EPSILON,
        "weight mismatch: expected {expected}, got {actual}"
    );
}

/// Assert the spans are sorted, contiguous, non-empty, and cover the
/// whole input.
pub fn assert_total_coverage(input: &str, result: &ParseResult) {
    let mut pos = 0;
    for span in &result.spans {
        assert_eq!(
            span.start, pos,
            "gap or overlap at byte {pos} in {input:?}"
        );
        assert!(span.end > span.start, "empty span at byte {pos} in {input:?}");
        pos = span.end;
    }
    assert_eq!(pos, input.len(), "input {input:?} not fully covered");
}

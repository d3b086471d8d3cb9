//! Array sampler tests: element selection per strategy, endpoint dedup, and
//! strategy-token validation at the API boundary.

use std::str::FromStr;

use jsonshape_core::{sample, SampleStrategy, ShapeError};

fn picked(items: &[i32], strategy: SampleStrategy) -> Vec<i32> {
    sample(items, strategy).into_iter().copied().collect()
}

// ============================================================================
// Selection
// ============================================================================

#[test]
fn empty_sequence_selects_nothing() {
    assert!(picked(&[], SampleStrategy::First).is_empty());
    assert!(picked(&[], SampleStrategy::FirstLast).is_empty());
    assert!(picked(&[], SampleStrategy::FirstMidLast).is_empty());
    assert!(picked(&[], SampleStrategy::All).is_empty());
}

#[test]
fn first_selects_head_only() {
    assert_eq!(picked(&[10, 20, 30], SampleStrategy::First), vec![10]);
}

#[test]
fn first_last_selects_endpoints() {
    assert_eq!(picked(&[10, 20, 30], SampleStrategy::FirstLast), vec![10, 30]);
}

#[test]
fn first_last_dedupes_single_element() {
    assert_eq!(picked(&[10], SampleStrategy::FirstLast), vec![10]);
}

#[test]
fn first_mid_last_selects_floor_midpoint() {
    // mid = floor(4 / 2) = index 2
    assert_eq!(
        picked(&[10, 20, 30, 40], SampleStrategy::FirstMidLast),
        vec![10, 30, 40]
    );
    // mid = floor(5 / 2) = index 2
    assert_eq!(
        picked(&[10, 20, 30, 40, 50], SampleStrategy::FirstMidLast),
        vec![10, 30, 50]
    );
}

#[test]
fn first_mid_last_dedupes_short_sequences() {
    assert_eq!(picked(&[10], SampleStrategy::FirstMidLast), vec![10]);
    // mid = floor(2 / 2) = index 1 = last
    assert_eq!(picked(&[10, 20], SampleStrategy::FirstMidLast), vec![10, 20]);
}

#[test]
fn all_selects_everything_in_order() {
    assert_eq!(
        picked(&[10, 20, 30], SampleStrategy::All),
        vec![10, 20, 30]
    );
}

#[test]
fn selection_preserves_sequence_order() {
    assert_eq!(
        picked(&[3, 1, 2], SampleStrategy::FirstMidLast),
        vec![3, 1, 2]
    );
}

// ============================================================================
// Token parsing
// ============================================================================

#[test]
fn strategy_tokens_parse() {
    assert_eq!(
        SampleStrategy::from_str("first").unwrap(),
        SampleStrategy::First
    );
    assert_eq!(
        SampleStrategy::from_str("first+last").unwrap(),
        SampleStrategy::FirstLast
    );
    assert_eq!(
        SampleStrategy::from_str("first+mid+last").unwrap(),
        SampleStrategy::FirstMidLast
    );
    assert_eq!(SampleStrategy::from_str("all").unwrap(), SampleStrategy::All);
}

#[test]
fn display_roundtrips_through_from_str() {
    for strategy in [
        SampleStrategy::First,
        SampleStrategy::FirstLast,
        SampleStrategy::FirstMidLast,
        SampleStrategy::All,
    ] {
        assert_eq!(
            SampleStrategy::from_str(strategy.token()).unwrap(),
            strategy
        );
        assert_eq!(strategy.to_string(), strategy.token());
    }
}

#[test]
fn unknown_token_is_rejected_at_the_boundary() {
    let err = SampleStrategy::from_str("every-other").unwrap_err();
    match err {
        ShapeError::UnknownStrategy(token) => assert_eq!(token, "every-other"),
        other => panic!("expected UnknownStrategy, got {other:?}"),
    }
}

#[test]
fn unknown_token_diagnostic_lists_valid_tokens() {
    let err = SampleStrategy::from_str("median").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("median"));
    assert!(message.contains("first+mid+last"));
}

#[test]
fn tokens_are_case_sensitive() {
    assert!(SampleStrategy::from_str("First").is_err());
    assert!(SampleStrategy::from_str("ALL").is_err());
}

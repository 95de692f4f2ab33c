use super::*;

#[test]
fn test_span_basic() {
    let span = Span::new(10, 20);
    assert_eq!(span.len(), 10);
    assert!(!span.is_empty());
    assert!(span.contains(15));
    assert!(!span.contains(20));
}

#[test]
fn test_span_merge() {
    let a = Span::new(10, 20);
    let b = Span::new(15, 30);
    assert_eq!(a.merge(b), Span::new(10, 30));
    assert_eq!(b.merge(a), Span::new(10, 30));
}

#[test]
fn test_span_try_from_range() {
    assert_eq!(Span::try_from_range(4..9), Ok(Span::new(4, 9)));
}

#[cfg(target_pointer_width = "64")]
#[test]
fn test_span_try_from_range_overflow() {
    let too_big = u32::MAX as usize + 1;
    assert_eq!(
        Span::try_from_range(too_big..too_big + 1),
        Err(SpanError::StartTooLarge(too_big))
    );
    assert_eq!(
        Span::try_from_range(0..too_big),
        Err(SpanError::EndTooLarge(too_big))
    );
}

#[test]
fn test_span_error_display() {
    let msg = SpanError::EndTooLarge(5_000_000_000).to_string();
    assert!(msg.starts_with("span end 5000000000"), "actual: {msg}");
    assert!(msg.contains("0xFFFFFFFF"), "actual: {msg}");
}

#[test]
fn test_span_debug_and_display() {
    let span = Span::new(3, 7);
    assert_eq!(format!("{span:?}"), "3..7");
    assert_eq!(span.to_string(), "3..7");
}

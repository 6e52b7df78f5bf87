use pretty_assertions::assert_eq;
use tvm_ir::Span;

use super::*;
use crate::ErrorCode;

fn error_at(start: u32, message: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E5001)
        .with_message(message)
        .with_label(Span::new(start, start + 1), "here")
}

#[test]
fn flush_sorts_by_location() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig::unlimited());
    queue.add(error_at(30, "third"));
    queue.add(error_at(10, "first"));
    queue.add(error_at(20, "second"));

    let messages: Vec<String> = queue.flush().into_iter().map(|d| d.message).collect();
    assert_eq!(messages, vec!["first", "second", "third"]);
    assert_eq!(queue.error_count(), 0);
}

#[test]
fn duplicates_at_same_location_are_dropped() {
    let mut queue = DiagnosticQueue::new();
    assert!(queue.add(error_at(5, "cannot store `function`")));
    assert!(!queue.add(error_at(5, "cannot store `function`")));
    assert!(queue.add(error_at(6, "cannot store `function`")));
    assert_eq!(queue.error_count(), 2);
}

#[test]
fn error_limit_stops_errors_but_not_warnings() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig {
        error_limit: 1,
        deduplicate: false,
    });
    assert!(queue.add(error_at(1, "one")));
    assert!(queue.limit_reached());
    assert!(!queue.add(error_at(2, "two")));
    assert!(queue.add(Diagnostic::warning(ErrorCode::E5003).with_message("w")));
    assert_eq!(queue.error_count(), 1);
    assert_eq!(queue.warning_count(), 1);
    assert_eq!(queue.peek().count(), 2);
}

#[test]
fn fatal_errors_bypass_the_limit() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig {
        error_limit: 1,
        deduplicate: true,
    });
    assert!(queue.add(error_at(1, "one")));
    assert!(queue.limit_reached());
    assert!(!queue.add(error_at(2, "two")));
    assert!(queue.add_fatal(error_at(3, "three")));
    assert!(!queue.add_fatal(error_at(3, "three")));
    assert_eq!(queue.error_count(), 2);
}

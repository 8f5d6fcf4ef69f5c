use super::*;
use crate::ErrorCode;
use pretty_assertions::assert_eq;

fn diag(line: u32) -> Diagnostic {
    Diagnostic::new(ErrorCode::E1006, "Missing ';' at end of statement", line, 1, "x")
}

#[test]
fn test_keeps_insertion_order() {
    let mut queue = DiagnosticQueue::new();
    assert!(queue.add(diag(3)));
    assert!(queue.add(diag(1)));
    let lines: Vec<_> = queue.flush().iter().map(|d| d.line).collect();
    assert_eq!(lines, vec![3, 1]);
    assert!(queue.is_empty());
}

#[test]
fn test_error_limit_counts_suppressed() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig { error_limit: 2 });
    assert!(queue.add(diag(1)));
    assert!(queue.add(diag(2)));
    assert!(queue.limit_reached());
    assert!(!queue.add(diag(3)));
    assert!(!queue.add(diag(4)));
    assert_eq!(queue.len(), 2);
    assert_eq!(queue.suppressed(), 2);
}

#[test]
fn test_unlimited() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig { error_limit: 0 });
    for line in 1..=500 {
        assert!(queue.add(diag(line)));
    }
    assert_eq!(queue.len(), 500);
    assert_eq!(queue.suppressed(), 0);
}

#[test]
fn test_default_limit_is_one_hundred() {
    assert_eq!(DiagnosticConfig::default().error_limit, 100);
}

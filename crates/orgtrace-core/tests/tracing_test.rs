//! Subscriber installation and span macros.

use orgtrace_core::tracing_setup::{init_tracing_with_filter, spans::names};
use orgtrace_core::{matching_span, review_span};

#[test]
fn subscriber_installs_once_and_spans_carry_phase_names() {
    assert!(init_tracing_with_filter("debug"));
    assert!(!init_tracing_with_filter("info"));

    let span = matching_span!(3usize, 4usize);
    assert_eq!(span.metadata().map(|m| m.name()), Some(names::MATCHING));
    let span = review_span!(2usize);
    assert_eq!(span.metadata().map(|m| m.name()), Some(names::REVIEW));
}

use dfa_diagnostic::ErrorCode;
use dfa_ir::{AnalysisUnit, DerivedKind, Span};
use pretty_assertions::assert_eq;

use super::*;
use crate::{
    array_index_problem, cast_problem, null_dereference_problem, ArrayIndexProblem, CastProblem,
};

/// Source: `let s = x as String\nlet v = arr[i]\n*p`
fn unit() -> (AnalysisUnit, Vec<Problem>) {
    let mut unit = AnalysisUnit::new();
    let x = unit.alloc_expr("x", Span::new(8, 9));
    let cast = unit.alloc_expr("x as String", Span::new(8, 19));
    let arr = unit.alloc_expr("arr", Span::new(28, 31));
    let i = unit.alloc_expr("i", Span::new(32, 33));
    let p = unit.alloc_expr("p", Span::new(36, 37));
    let len = unit.alloc_derived(DerivedKind::ArrayLength, arr);
    let problems = vec![
        null_dereference_problem(p),
        array_index_problem(len, i),
        cast_problem(x, cast),
    ];
    (unit, problems)
}

const SOURCE: &str = "let s = x as String\nlet v = arr[i]\n*p";

#[test]
fn new_sink_is_empty() {
    let sink = ProblemSink::new();
    assert!(sink.is_empty());
    assert_eq!(sink.len(), 0);
    assert_eq!(sink.iter().count(), 0);
}

#[test]
fn record_deduplicates() {
    let (_, problems) = unit();
    let mut sink = ProblemSink::new();

    assert!(sink.record(problems[0]));
    assert!(!sink.record(problems[0]));
    assert!(sink.record(problems[1]));
    assert!(!sink.record(problems[1]));

    assert_eq!(sink.len(), 2);
}

#[test]
fn record_keeps_first_seen_order() {
    let (_, problems) = unit();
    let mut sink = ProblemSink::new();
    for problem in problems.iter().chain(problems.iter().rev()) {
        sink.record(*problem);
    }
    assert_eq!(sink.into_problems(), problems);
}

#[test]
fn record_accepts_variant_structs() {
    let (_, problems) = unit();
    let Problem::ArrayIndex(index) = problems[1] else {
        panic!("expected an array index problem");
    };

    let mut sink = ProblemSink::new();
    assert!(sink.record(ArrayIndexProblem::new(
        index.length_descriptor(),
        index.index()
    )));
    assert!(!sink.record(problems[1]));
    assert!(sink.contains(&problems[1]));
    assert!(!sink.contains(&problems[0]));
}

#[test]
fn bounded_yields_only_bounded_accesses() {
    let (_, problems) = unit();
    let mut sink = ProblemSink::new();
    for problem in &problems {
        sink.record(*problem);
    }

    let descriptors: Vec<_> = sink.bounded().map(|b| b.length_descriptor()).collect();
    assert_eq!(descriptors, vec![problems[1].length_descriptor().unwrap()]);
}

#[test]
fn borrowed_sink_iterates() {
    let (_, problems) = unit();
    let mut sink = ProblemSink::new();
    sink.record(problems[2]);

    let mut seen = Vec::new();
    for problem in &sink {
        seen.push(*problem);
    }
    assert_eq!(seen, vec![problems[2]]);
}

#[test]
fn report_orders_by_source_position() {
    let (unit, problems) = unit();
    let mut sink = ProblemSink::new();
    for problem in &problems {
        sink.record(*problem);
    }

    let diagnostics = sink.report(&unit, SOURCE, &ReportConfig::default());
    let codes: Vec<_> = diagnostics.iter().map(|d| d.code).collect();
    assert_eq!(
        codes,
        vec![ErrorCode::E7001, ErrorCode::E7002, ErrorCode::E7003]
    );
    assert!(diagnostics.iter().all(Diagnostic::is_warning));
}

#[test]
fn report_with_foreign_unit_produces_internal_error() {
    let (_, problems) = unit();
    let mut sink = ProblemSink::new();
    sink.record(problems[2]);

    let other = AnalysisUnit::new();
    let diagnostics = sink.report(&other, "", &ReportConfig::default());
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, ErrorCode::E9001);
    assert!(diagnostics[0].is_error());
}

#[test]
fn shared_sink_handles_see_the_same_problems() {
    let (_, problems) = unit();
    let sink = SharedProblemSink::new();
    let other = sink.clone();

    assert!(sink.record(problems[0]));
    assert!(!other.record(problems[0]));
    assert!(other.record(CastProblem::new(
        problems[2].anchor(),
        problems[2].anchor()
    )));

    assert_eq!(sink.len(), 2);
    assert_eq!(other.snapshot(), sink.snapshot());
}

#[test]
fn shared_sink_take_leaves_it_empty() {
    let (_, problems) = unit();
    let sink = SharedProblemSink::new();
    sink.record(problems[1]);

    let taken = sink.take();
    assert_eq!(taken.len(), 1);
    assert!(sink.is_empty());

    // A fresh sink deduplicates from scratch.
    assert!(sink.record(problems[1]));
}

use dfa_ir::{AnalysisUnit, DerivedKind, ExprId};
use pretty_assertions::assert_eq;

use super::*;
use crate::{array_index_problem, cast_problem, null_dereference_problem};

/// One `xs[iN]` access per line: `xs[i0]\nxs[i1]\n...`
fn indexed_lines(count: u32) -> (AnalysisUnit, String, Vec<Problem>) {
    let mut unit = AnalysisUnit::new();
    let mut source = String::new();
    let mut problems = Vec::new();
    for n in 0..count {
        let start = u32::try_from(source.len()).unwrap();
        let line = format!("xs[i{n}]");
        let xs = unit.alloc_expr("xs", Span::new(start, start + 2));
        let index_end = start + u32::try_from(line.len()).unwrap() - 1;
        let i = unit.alloc_expr(format!("i{n}"), Span::new(start + 3, index_end));
        let len = unit.alloc_derived(DerivedKind::ArrayLength, xs);
        problems.push(array_index_problem(len, i));
        source.push_str(&line);
        source.push('\n');
    }
    (unit, source, problems)
}

#[test]
fn default_config_reports_warnings() {
    let config = ReportConfig::default();
    assert_eq!(config.severity, Severity::Warning);
    assert_eq!(config.queue, DiagnosticConfig::default());
}

#[test]
fn strict_config_reports_errors_with_limit() {
    let config = ReportConfig::strict();
    assert_eq!(config.severity, Severity::Error);
    assert_eq!(config.queue.error_limit, 10);
}

#[test]
fn empty_input_renders_nothing() {
    let unit = AnalysisUnit::new();
    let none: [Problem; 0] = [];
    let diagnostics = report_problems(&none, &unit, "", &ReportConfig::default());
    assert!(diagnostics.is_empty());
}

#[test]
fn severity_follows_config() {
    let (unit, source, problems) = indexed_lines(2);

    let warnings = report_problems(&problems, &unit, &source, &ReportConfig::default());
    assert!(warnings.iter().all(Diagnostic::is_warning));

    let errors = report_problems(&problems, &unit, &source, &ReportConfig::strict());
    assert_eq!(errors.len(), 2);
    assert!(errors.iter().all(Diagnostic::is_error));
}

#[test]
fn output_is_sorted_by_position() {
    let (unit, source, problems) = indexed_lines(3);
    let reversed: Vec<_> = problems.iter().rev().copied().collect();

    let diagnostics = report_problems(&reversed, &unit, &source, &ReportConfig::default());
    let messages: Vec<_> = diagnostics.iter().map(|d| d.message.as_str()).collect();
    assert_eq!(
        messages,
        vec![
            "index `i0` may be out of bounds",
            "index `i1` may be out of bounds",
            "index `i2` may be out of bounds",
        ]
    );
}

#[test]
fn error_limit_appends_too_many_errors() {
    let (unit, source, problems) = indexed_lines(12);

    let diagnostics = report_problems(&problems, &unit, &source, &ReportConfig::strict());
    assert_eq!(diagnostics.len(), 11);
    let last = diagnostics.last().unwrap();
    assert_eq!(last.code, ErrorCode::E9002);
    assert_eq!(last.message, "aborting due to 10 previous errors");
    // Points at the first access that was cut.
    assert_eq!(last.primary_span(), unit.expr_span(problems[10].anchor()).ok());
}

#[test]
fn warnings_are_not_limited() {
    let (unit, source, problems) = indexed_lines(12);
    let config = ReportConfig {
        severity: Severity::Warning,
        queue: DiagnosticConfig::with_error_limit(10),
    };

    let diagnostics = report_problems(&problems, &unit, &source, &config);
    assert_eq!(diagnostics.len(), 12);
    assert!(diagnostics.iter().all(|d| d.code == ErrorCode::E7002));
}

#[test]
fn unresolved_problem_becomes_internal_error() {
    let (unit, source, mut problems) = indexed_lines(1);
    let stale = ExprId::new(99);
    problems.push(null_dereference_problem(stale));

    let diagnostics = report_problems(&problems, &unit, &source, &ReportConfig::default());
    assert_eq!(diagnostics.len(), 2);

    // No span, so it sorts to the top.
    let internal = &diagnostics[0];
    assert_eq!(internal.code, ErrorCode::E9001);
    assert!(internal.is_error());
    assert_eq!(internal.message, LookupError::UnknownExpr(stale).to_string());
    assert!(internal.notes[0].contains("E7003"));
    assert_eq!(diagnostics[1].code, ErrorCode::E7002);
}

#[test]
fn casts_on_one_line_are_deduplicated_by_message() {
    let mut unit = AnalysisUnit::new();
    let x = unit.alloc_expr("x", Span::new(0, 1));
    let cast = unit.alloc_expr("x as T", Span::new(0, 6));
    let again = unit.alloc_expr("x as T", Span::new(10, 16));
    let problems = [cast_problem(x, cast), cast_problem(x, again)];

    let deduped = report_problems(&problems, &unit, "x as T;   x as T", &ReportConfig::default());
    assert_eq!(deduped.len(), 1);

    let config = ReportConfig {
        queue: DiagnosticConfig::unlimited(),
        ..ReportConfig::default()
    };
    let all = report_problems(&problems, &unit, "x as T;   x as T", &config);
    assert_eq!(all.len(), 2);
}

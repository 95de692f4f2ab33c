//! Rendering problems into diagnostics.

use dfa_diagnostic::queue::too_many_errors;
use dfa_diagnostic::span_utils::LineOffsetTable;
use dfa_diagnostic::{Diagnostic, DiagnosticConfig, DiagnosticQueue, ErrorCode, Severity};
use dfa_ir::{LookupError, ProgramView, Span};
use tracing::{debug, error};

use crate::Problem;

/// How recorded problems are turned into diagnostics.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ReportConfig {
    /// Severity given to data-flow problems.
    pub severity: Severity,
    /// Error limit and deduplication for the output queue.
    pub queue: DiagnosticConfig,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            severity: Severity::Warning,
            queue: DiagnosticConfig::default(),
        }
    }
}

impl ReportConfig {
    /// Report problems as errors and stop after ten of them.
    pub fn strict() -> Self {
        ReportConfig {
            severity: Severity::Error,
            queue: DiagnosticConfig::with_error_limit(10),
        }
    }
}

/// Render `problems` against `view`, sorted by position in `source`.
///
/// A problem whose handles do not resolve in `view` becomes an `E9001`
/// internal error instead of a warning. If the error limit cuts the output
/// short, an `E9002` diagnostic is appended.
#[tracing::instrument(level = "debug", skip_all)]
pub fn report_problems<'a>(
    problems: impl IntoIterator<Item = &'a Problem>,
    view: &dyn ProgramView,
    source: &str,
    config: &ReportConfig,
) -> Vec<Diagnostic> {
    let lines = LineOffsetTable::build(source);
    let mut queue = DiagnosticQueue::with_config(config.queue.clone());
    let mut first_dropped: Option<Span> = None;

    for problem in problems {
        let diag = match problem.to_diagnostic(view) {
            Ok(mut diag) => {
                diag.severity = config.severity;
                diag
            }
            Err(err) => {
                error!(?problem, %err, "problem does not resolve in this analysis unit");
                unresolved(problem, err)
            }
        };

        let span = diag.primary_span();
        let (line, column) =
            span.map_or((1, 1), |span| lines.offset_to_line_col(source, span.start));
        let is_error = diag.is_error();
        if !queue.add(diag, line, column) && is_error && queue.limit_reached() {
            first_dropped.get_or_insert(span.unwrap_or(Span::DUMMY));
        }
    }

    debug!(
        errors = queue.error_count(),
        warnings = queue.warning_count(),
        "rendered problems"
    );

    let mut diagnostics = queue.flush();
    if let Some(span) = first_dropped {
        diagnostics.push(too_many_errors(config.queue.error_limit, span));
    }
    diagnostics
}

#[cold]
fn unresolved(problem: &Problem, err: LookupError) -> Diagnostic {
    Diagnostic::error(ErrorCode::E9001)
        .with_message(err.to_string())
        .with_note(format!(
            "raised while rendering a {} problem; it was recorded against a different analysis unit",
            problem.code()
        ))
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;

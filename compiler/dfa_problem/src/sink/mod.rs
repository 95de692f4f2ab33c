//! Problem sinks.
//!
//! The interpreter reaches the same program point along many paths and
//! re-derives the same finding each time. Sinks keep one copy of each
//! structurally distinct problem, in the order it was first seen.

use std::sync::Arc;

use dfa_diagnostic::Diagnostic;
use dfa_ir::ProgramView;
use parking_lot::Mutex;
use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use crate::report::{report_problems, ReportConfig};
use crate::{BoundedAccessProblem, Problem, UnsatisfiedConditionProblem};

/// Deduplicating problem collector for one analysis pass.
#[derive(Clone, Debug, Default)]
pub struct ProblemSink {
    problems: Vec<Problem>,
    seen: FxHashSet<Problem>,
}

impl ProblemSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        ProblemSink::default()
    }

    /// Record a problem.
    ///
    /// Returns `false` if a structurally equal problem was already recorded.
    pub fn record(&mut self, problem: impl UnsatisfiedConditionProblem) -> bool {
        let problem: Problem = problem.into();
        if !self.seen.insert(problem) {
            trace!(?problem, "duplicate problem");
            return false;
        }
        debug!(code = %problem.code(), anchor = ?problem.anchor(), "recorded problem");
        self.problems.push(problem);
        true
    }

    /// Number of distinct problems recorded.
    pub fn len(&self) -> usize {
        self.problems.len()
    }

    /// Check if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    /// Check if a structurally equal problem was recorded.
    pub fn contains(&self, problem: &Problem) -> bool {
        self.seen.contains(problem)
    }

    /// Iterate over recorded problems in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &Problem> {
        self.problems.iter()
    }

    /// Iterate over recorded problems that are bounded accesses.
    pub fn bounded(&self) -> impl Iterator<Item = &dyn BoundedAccessProblem> {
        self.problems.iter().filter_map(Problem::as_bounded)
    }

    /// Render every recorded problem, sorted by source position.
    ///
    /// See [`report_problems`].
    pub fn report(
        &self,
        view: &dyn ProgramView,
        source: &str,
        config: &ReportConfig,
    ) -> Vec<Diagnostic> {
        report_problems(&self.problems, view, source, config)
    }

    /// Consume the sink, returning problems in first-seen order.
    pub fn into_problems(self) -> Vec<Problem> {
        self.problems
    }
}

impl<'a> IntoIterator for &'a ProblemSink {
    type Item = &'a Problem;
    type IntoIter = std::slice::Iter<'a, Problem>;

    fn into_iter(self) -> Self::IntoIter {
        self.problems.iter()
    }
}

/// A [`ProblemSink`] shared between threads analysing independent units.
///
/// Cloning yields another handle to the same sink.
#[derive(Clone, Debug, Default)]
pub struct SharedProblemSink {
    inner: Arc<Mutex<ProblemSink>>,
}

impl SharedProblemSink {
    pub fn new() -> Self {
        SharedProblemSink::default()
    }

    /// Record a problem. See [`ProblemSink::record`].
    pub fn record(&self, problem: impl UnsatisfiedConditionProblem) -> bool {
        self.inner.lock().record(problem)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Copy of the problems recorded so far, in first-seen order.
    pub fn snapshot(&self) -> Vec<Problem> {
        self.inner.lock().problems.clone()
    }

    /// Take the recorded problems, leaving the shared sink empty.
    pub fn take(&self) -> ProblemSink {
        std::mem::take(&mut *self.inner.lock())
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;

//! Problem taxonomy for a data-flow engine.
//!
//! When the abstract interpreter proves that a runtime precondition may be
//! violated at some program point, it packages the evidence into a
//! [`Problem`]. Problems describe *what* may go wrong; [`report`] turns them
//! into [`Diagnostic`](dfa_diagnostic::Diagnostic)s.
//!
//! # Design
//!
//! - **Sum type**: [`Problem`] has one variant per kind of finding, each
//!   carrying its own evidence struct. `Problem` is not `#[non_exhaustive]`,
//!   so adding a kind breaks every exhaustive `match` until it is handled.
//! - **Capabilities**: generic interpreter code works through traits instead
//!   of matching. [`UnsatisfiedConditionProblem`] is implemented by every
//!   kind; [`BoundedAccessProblem`] only by kinds that index into something
//!   with a symbolic length.
//! - **Values**: evidence is a handful of `Copy` handles. Problems are
//!   immutable, hash structurally, and are `Send + Sync`.
//!
//! # Usage
//!
//! ```
//! use dfa_ir::{AnalysisUnit, DerivedKind, Span};
//! use dfa_problem::{array_index_problem, ProblemSink, ReportConfig};
//!
//! let source = "arr[i]";
//! let mut unit = AnalysisUnit::new();
//! let arr = unit.alloc_expr("arr", Span::new(0, 3));
//! let i = unit.alloc_expr("i", Span::new(4, 5));
//! let len = unit.alloc_derived(DerivedKind::ArrayLength, arr);
//!
//! let mut sink = ProblemSink::new();
//! sink.record(array_index_problem(len, i));
//! sink.record(array_index_problem(len, i)); // reached again on another path
//!
//! let diagnostics = sink.report(&unit, source, &ReportConfig::default());
//! assert_eq!(diagnostics.len(), 1);
//! assert_eq!(diagnostics[0].message, "index `i` may be out of bounds");
//! ```

mod capability;
mod problem;
pub mod report;
pub mod sink;

pub use capability::{bounds_note, BoundedAccessProblem, UnsatisfiedConditionProblem};
pub use problem::{
    array_index_problem, cast_problem, null_dereference_problem, ArrayIndexProblem, CastProblem,
    NullDereferenceProblem, Problem,
};
pub use report::{report_problems, ReportConfig};
pub use sink::{ProblemSink, SharedProblemSink};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=dfa_problem=debug` to log every recorded problem.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

//! Structured problem types.
//!
//! Each kind of finding is a small evidence struct with its own renderer;
//! [`Problem`] is the closed sum over them.

mod cast;
mod index;
mod null;

pub use cast::CastProblem;
pub use index::ArrayIndexProblem;
pub use null::NullDereferenceProblem;

use dfa_diagnostic::{Diagnostic, ErrorCode};
use dfa_ir::{DerivedId, ExprId, LookupError, ProgramView};

use crate::{BoundedAccessProblem, UnsatisfiedConditionProblem};

/// Generate `From<T> for Problem` implementation.
macro_rules! impl_from_problem {
    ($source:ty => $variant:path) => {
        impl From<$source> for Problem {
            fn from(p: $source) -> Self {
                $variant(p)
            }
        }
    };
}

/// Generate type predicates for Problem enum.
macro_rules! impl_problem_predicates {
    ($enum_name:ident { $( $variant:ident => $method:ident ),* $(,)? }) => {
        impl $enum_name {
            $(
                #[doc = concat!("Check if this is a ", stringify!($variant), " problem.")]
                pub fn $method(&self) -> bool {
                    matches!(self, $enum_name::$variant(_))
                }
            )*
        }
    };
}

/// A precondition the interpreter proved may be violated at runtime.
///
/// Equality and hashing are structural: two problems are equal iff they are
/// the same kind with the same evidence handles. This is what lets a sink
/// merge the same finding reached along different control-flow paths.
///
/// Adding a kind is a breaking change for exhaustive matches, which is
/// intended:
///
/// ```compile_fail
/// use dfa_problem::Problem;
///
/// fn headline(problem: &Problem) -> &'static str {
///     match problem {
///         Problem::Cast(_) => "cast may fail",
///         Problem::ArrayIndex(_) => "index may be out of bounds",
///     }
/// }
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Problem {
    /// A cast whose operand may not have the target type.
    Cast(CastProblem),

    /// An array index that may lie outside `0..length`.
    ArrayIndex(ArrayIndexProblem),

    /// A dereference of a value that may be null.
    NullDereference(NullDereferenceProblem),
}

impl Problem {
    /// Error code identifying the kind of problem.
    pub fn code(&self) -> ErrorCode {
        match self {
            Problem::Cast(_) => ErrorCode::E7001,
            Problem::ArrayIndex(_) => ErrorCode::E7002,
            Problem::NullDereference(_) => ErrorCode::E7003,
        }
    }

    /// The expression the problem is reported at.
    pub fn anchor(&self) -> ExprId {
        match self {
            Problem::Cast(p) => p.cast(),
            Problem::ArrayIndex(p) => p.index(),
            Problem::NullDereference(p) => p.dereference(),
        }
    }

    /// View this problem as a bounded access, if its kind has that capability.
    pub fn as_bounded(&self) -> Option<&dyn BoundedAccessProblem> {
        match self {
            Problem::ArrayIndex(p) => Some(p),
            _ => None,
        }
    }

    /// Length descriptor of a bounded access, `None` for other kinds.
    pub fn length_descriptor(&self) -> Option<DerivedId> {
        self.as_bounded().map(BoundedAccessProblem::length_descriptor)
    }

    /// Convert this problem into a diagnostic.
    ///
    /// Fails if any evidence handle does not resolve in `view`.
    #[cold]
    pub fn to_diagnostic(&self, view: &dyn ProgramView) -> Result<Diagnostic, LookupError> {
        match self {
            Problem::Cast(p) => p.to_diagnostic(view),
            Problem::ArrayIndex(p) => p.to_diagnostic(view),
            Problem::NullDereference(p) => p.to_diagnostic(view),
        }
    }
}

impl_problem_predicates!(Problem {
    Cast => is_cast,
    ArrayIndex => is_array_index,
    NullDereference => is_null_dereference,
});

impl_from_problem!(CastProblem => Problem::Cast);
impl_from_problem!(ArrayIndexProblem => Problem::ArrayIndex);
impl_from_problem!(NullDereferenceProblem => Problem::NullDereference);

impl UnsatisfiedConditionProblem for Problem {}
impl UnsatisfiedConditionProblem for CastProblem {}
impl UnsatisfiedConditionProblem for ArrayIndexProblem {}
impl UnsatisfiedConditionProblem for NullDereferenceProblem {}

/// Problem for a cast of `operand` at `cast_site` that may fail.
pub fn cast_problem(operand: ExprId, cast_site: ExprId) -> Problem {
    CastProblem::new(operand, cast_site).into()
}

/// Problem for an `index` that may fall outside `0..length_descriptor`.
pub fn array_index_problem(length_descriptor: DerivedId, index: ExprId) -> Problem {
    ArrayIndexProblem::new(length_descriptor, index).into()
}

/// Problem for a `dereference` of a possibly-null value.
pub fn null_dereference_problem(dereference: ExprId) -> Problem {
    NullDereferenceProblem::new(dereference).into()
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::Problem;
    dfa_ir::static_assert_size!(Problem, 12);
}

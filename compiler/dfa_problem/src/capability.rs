//! Capability traits shared across problem kinds.
//!
//! Generic interpreter code is written against these traits so it keeps
//! working, unchanged, when a new kind of problem is added.

use std::fmt;
use std::hash::Hash;

use dfa_ir::{DerivedId, LookupError, ProgramView};

use crate::Problem;

/// A condition the interpreter flags once it proves the condition can fail.
///
/// Every problem kind implements this. It carries no operations beyond
/// identity (structural `Eq` + `Hash`) and conversion into [`Problem`], which
/// is all the shared "unsatisfied condition" path needs to deduplicate and
/// store findings of any kind.
pub trait UnsatisfiedConditionProblem:
    Clone + Eq + Hash + fmt::Debug + Send + Sync + Into<Problem>
{
}

/// An access that must stay within a symbolic bound.
///
/// Bounds-checking code asks for the derived variable holding the length
/// without knowing which concrete problem it is looking at.
pub trait BoundedAccessProblem {
    /// The derived variable (e.g. an array length) bounding the access.
    fn length_descriptor(&self) -> DerivedId;
}

/// Explain the valid range of a bounded access, e.g. ``index must be in `0..len(arr)` ``.
pub fn bounds_note(
    problem: &dyn BoundedAccessProblem,
    view: &dyn ProgramView,
) -> Result<String, LookupError> {
    let length = view.derived_text(problem.length_descriptor())?;
    Ok(format!("index must be in `0..{length}`"))
}

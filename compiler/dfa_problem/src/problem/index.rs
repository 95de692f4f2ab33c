//! Array index that may be out of bounds.

use dfa_diagnostic::{Diagnostic, ErrorCode};
use dfa_ir::{DerivedId, ExprId, LookupError, ProgramView};

use crate::{bounds_note, BoundedAccessProblem};

/// `index` may lie outside `0..length`, where the length is the derived
/// variable named by `length_descriptor`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ArrayIndexProblem {
    length_descriptor: DerivedId,
    index: ExprId,
}

impl ArrayIndexProblem {
    pub fn new(length_descriptor: DerivedId, index: ExprId) -> Self {
        ArrayIndexProblem {
            length_descriptor,
            index,
        }
    }

    /// The index expression.
    pub fn index(&self) -> ExprId {
        self.index
    }

    pub(super) fn to_diagnostic(&self, view: &dyn ProgramView) -> Result<Diagnostic, LookupError> {
        let index = view.expr_text(self.index)?;
        let array = view.derived(self.length_descriptor)?.qualifier;
        Ok(Diagnostic::warning(ErrorCode::E7002)
            .with_message(format!("index `{index}` may be out of bounds"))
            .with_label(view.expr_span(self.index)?, "index may be out of bounds")
            .with_secondary_label(
                view.expr_span(array)?,
                format!("`{}` is indexed here", view.expr_text(array)?),
            )
            .with_note(bounds_note(self, view)?))
    }
}

impl BoundedAccessProblem for ArrayIndexProblem {
    fn length_descriptor(&self) -> DerivedId {
        self.length_descriptor
    }
}

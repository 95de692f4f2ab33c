//! Cast that may fail at runtime.

use dfa_diagnostic::{Diagnostic, ErrorCode};
use dfa_ir::{ExprId, LookupError, ProgramView};

/// The dynamic type of `operand` is not guaranteed to be compatible with
/// the target type of the `cast` expression.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct CastProblem {
    operand: ExprId,
    cast: ExprId,
}

impl CastProblem {
    pub fn new(operand: ExprId, cast: ExprId) -> Self {
        CastProblem { operand, cast }
    }

    /// The value being cast.
    pub fn operand(&self) -> ExprId {
        self.operand
    }

    /// The cast expression.
    pub fn cast(&self) -> ExprId {
        self.cast
    }

    pub(super) fn to_diagnostic(&self, view: &dyn ProgramView) -> Result<Diagnostic, LookupError> {
        let cast = view.expr_text(self.cast)?;
        let operand = view.expr_text(self.operand)?;
        Ok(Diagnostic::warning(ErrorCode::E7001)
            .with_message(format!("cast `{cast}` may fail"))
            .with_label(view.expr_span(self.cast)?, "this cast may fail at runtime")
            .with_secondary_label(
                view.expr_span(self.operand)?,
                format!("operand `{operand}` is not guaranteed to have the target type"),
            )
            .with_suggestion(format!("check the type of `{operand}` before casting")))
    }
}

//! Dereference of a possibly-null value.

use dfa_diagnostic::{Diagnostic, ErrorCode};
use dfa_ir::{ExprId, LookupError, ProgramView};

/// The value dereferenced at `dereference` may be null on some path.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct NullDereferenceProblem {
    dereference: ExprId,
}

impl NullDereferenceProblem {
    pub fn new(dereference: ExprId) -> Self {
        NullDereferenceProblem { dereference }
    }

    /// The expression whose value is dereferenced.
    pub fn dereference(&self) -> ExprId {
        self.dereference
    }

    pub(super) fn to_diagnostic(&self, view: &dyn ProgramView) -> Result<Diagnostic, LookupError> {
        let expr = view.expr_text(self.dereference)?;
        Ok(Diagnostic::warning(ErrorCode::E7003)
            .with_message(format!("`{expr}` may be null"))
            .with_label(view.expr_span(self.dereference)?, "dereferenced here")
            .with_suggestion(format!("check `{expr}` for null first")))
    }
}

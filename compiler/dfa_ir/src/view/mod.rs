//! Handle resolution seam.
//!
//! Renderers resolve handles through [`ProgramView`]. The host interpreter
//! implements it over whatever storage it already has; [`AnalysisUnit`]
//! is a ready-made implementation.
//!
//! [`AnalysisUnit`]: crate::AnalysisUnit

use crate::{DerivedDescriptor, DerivedId, ExprId, Span};

/// A handle did not resolve in the view it was looked up in.
///
/// This happens when a problem outlives the analysis unit that produced its
/// handles, or is rendered against the wrong unit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum LookupError {
    #[error("expression {0:?} does not belong to this analysis unit")]
    UnknownExpr(ExprId),
    #[error("derived variable {0:?} does not belong to this analysis unit")]
    UnknownDerived(DerivedId),
}

/// Read-only access to the program representation a handle points into.
pub trait ProgramView {
    /// Source text of an expression.
    fn expr_text(&self, id: ExprId) -> Result<&str, LookupError>;

    /// Source location of an expression.
    fn expr_span(&self, id: ExprId) -> Result<Span, LookupError>;

    /// Descriptor of a derived variable.
    fn derived(&self, id: DerivedId) -> Result<DerivedDescriptor, LookupError>;

    /// Render a derived variable as `kind(qualifier)`, e.g. `len(arr)`.
    fn derived_text(&self, id: DerivedId) -> Result<String, LookupError> {
        let descriptor = self.derived(id)?;
        let qualifier = self.expr_text(descriptor.qualifier)?;
        Ok(format!("{}({qualifier})", descriptor.kind))
    }
}

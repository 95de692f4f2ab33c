//! Arena for one analysis pass.
//!
//! Hosts that do not already own an expression table can allocate expressions
//! and derived descriptors here. Handles are dense indices in allocation
//! order and are only meaningful for the unit that issued them.

use crate::{DerivedDescriptor, DerivedId, DerivedKind, ExprId, LookupError, ProgramView, Span};

/// An expression slot: source text plus location.
#[derive(Clone, Debug, PartialEq, Eq)]
struct ExprSlot {
    text: String,
    span: Span,
}

/// Expressions and derived descriptors for a single analysis unit.
#[derive(Clone, Debug, Default)]
pub struct AnalysisUnit {
    exprs: Vec<ExprSlot>,
    derived: Vec<DerivedDescriptor>,
}

impl AnalysisUnit {
    /// Create an empty unit.
    pub fn new() -> Self {
        AnalysisUnit::default()
    }

    /// Allocate an expression and return its handle.
    ///
    /// # Panics
    /// Panics if the unit already holds `u32::MAX` expressions.
    pub fn alloc_expr(&mut self, text: impl Into<String>, span: Span) -> ExprId {
        let id = ExprId::new(next_index(self.exprs.len()));
        self.exprs.push(ExprSlot {
            text: text.into(),
            span,
        });
        id
    }

    /// Allocate a derived descriptor over `qualifier` and return its handle.
    ///
    /// # Panics
    /// Panics if the unit already holds `u32::MAX` descriptors.
    pub fn alloc_derived(&mut self, kind: DerivedKind, qualifier: ExprId) -> DerivedId {
        let id = DerivedId::new(next_index(self.derived.len()));
        self.derived.push(DerivedDescriptor::new(kind, qualifier));
        id
    }

    /// Number of expressions allocated.
    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    /// Check if no expressions have been allocated.
    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }

    fn slot(&self, id: ExprId) -> Result<&ExprSlot, LookupError> {
        self.exprs.get(id.index()).ok_or(LookupError::UnknownExpr(id))
    }
}

/// Next handle index, keeping `u32::MAX` free for the `INVALID` sentinel.
fn next_index(len: usize) -> u32 {
    match u32::try_from(len) {
        Ok(index) if index < u32::MAX => index,
        _ => panic!("analysis unit exceeded {} slots", u32::MAX),
    }
}

impl ProgramView for AnalysisUnit {
    fn expr_text(&self, id: ExprId) -> Result<&str, LookupError> {
        self.slot(id).map(|slot| slot.text.as_str())
    }

    fn expr_span(&self, id: ExprId) -> Result<Span, LookupError> {
        self.slot(id).map(|slot| slot.span)
    }

    fn derived(&self, id: DerivedId) -> Result<DerivedDescriptor, LookupError> {
        self.derived
            .get(id.index())
            .copied()
            .ok_or(LookupError::UnknownDerived(id))
    }
}

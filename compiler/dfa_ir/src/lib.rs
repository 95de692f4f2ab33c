//! DFA IR - handles into an analysed program
//!
//! The data-flow problem crates never see the analysed program's syntax
//! tree. They hold only what this crate defines:
//! - Spans for source locations
//! - `ExprId` handles to expressions owned by a front-end
//! - `DerivedId` handles to derived quantities (array length, collection
//!   size) owned by the interpreter
//! - The [`ProgramView`] seam used to resolve handles when rendering
//!
//! # Design Philosophy
//!
//! - **Handles, not pointers**: every reference into the program is a `u32`
//!   index, so problem records are `Copy` and can never dangle.
//! - **Resolution is fallible**: a handle from another analysis unit resolves
//!   to a [`LookupError`], not to the wrong node.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod derived;
mod ids;
mod span;
mod unit;
mod view;

pub use derived::{DerivedDescriptor, DerivedKind};
pub use ids::{DerivedId, ExprId};
pub use span::{Span, SpanError};
pub use unit::AnalysisUnit;
pub use view::{LookupError, ProgramView};

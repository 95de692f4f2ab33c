//! Derived-variable descriptors.
//!
//! A derived variable is a symbolic quantity the interpreter tracks alongside
//! a value, such as the length of an array. The descriptor names which
//! quantity it is and which expression it is derived from.

use std::fmt;

use crate::ExprId;

/// The kind of quantity a derived variable tracks.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum DerivedKind {
    /// Length of an array.
    ArrayLength,
    /// Length of a string, in characters.
    StringLength,
    /// Number of elements in a collection.
    CollectionSize,
}

impl DerivedKind {
    /// Function-style name used when rendering the quantity.
    pub fn as_str(&self) -> &'static str {
        match self {
            DerivedKind::ArrayLength | DerivedKind::StringLength => "len",
            DerivedKind::CollectionSize => "size",
        }
    }
}

impl fmt::Display for DerivedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A derived quantity and the expression it is derived from.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct DerivedDescriptor {
    pub kind: DerivedKind,
    pub qualifier: ExprId,
}

impl DerivedDescriptor {
    pub const fn new(kind: DerivedKind, qualifier: ExprId) -> Self {
        DerivedDescriptor { kind, qualifier }
    }
}

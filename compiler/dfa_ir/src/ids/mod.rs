//! Opaque handles into interpreter-owned storage.
//!
//! A problem record never owns the program it talks about. It stores these
//! `u32` handles instead, and the host resolves them through a
//! [`ProgramView`](crate::ProgramView) when a diagnostic is rendered.
//!
//! Equality is handle identity: two handles are equal iff they name the same
//! slot, regardless of what the slot contains.

use std::fmt;

/// Define a `u32` handle type with an `INVALID` sentinel.
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Invalid handle (sentinel value).
            pub const INVALID: $name = $name(u32::MAX);

            /// Create a handle from a raw index.
            #[inline]
            pub const fn new(index: u32) -> Self {
                $name(index)
            }

            /// Get the index into the owning arena.
            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }

            /// Get the raw u32 value.
            #[inline]
            pub const fn raw(self) -> u32 {
                self.0
            }

            /// Check if this is a valid handle.
            #[inline]
            pub const fn is_valid(self) -> bool {
                self.0 != u32::MAX
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.is_valid() {
                    write!(f, concat!(stringify!($name), "({})"), self.0)
                } else {
                    write!(f, concat!(stringify!($name), "::INVALID"))
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::INVALID
            }
        }
    };
}

define_id! {
    /// Handle to an expression node owned by the analysed program's front-end.
    ExprId
}

define_id! {
    /// Handle to a derived-variable descriptor (e.g. the length of an array)
    /// tracked by the interpreter.
    DerivedId
}

crate::static_assert_size!(ExprId, 4);
crate::static_assert_size!(DerivedId, 4);

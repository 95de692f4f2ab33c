//! Error codes for data-flow diagnostics.
//!
//! Each code is a unique identifier (e.g., `E7001`) with the first digit
//! indicating the family.

use std::fmt;

/// Error codes for all diagnostics this workspace produces.
///
/// Format: E#### where first digit indicates family:
/// - E7xxx: Data-flow problems (a runtime precondition may be violated)
/// - E9xxx: Internal errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Data-flow problems (E7xxx)
    /// Cast may fail
    E7001,
    /// Index may be out of bounds
    E7002,
    /// Possible null dereference
    E7003,

    // Internal Errors (E9xxx)
    /// Problem references a handle outside the analysis unit
    E9001,
    /// Too many diagnostics
    E9002,
}

/// The string does not name a known error code.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown error code `{0}`")]
pub struct UnknownErrorCode(pub String);

impl ErrorCode {
    /// All error code variants, for exhaustive testing.
    ///
    /// Kept in sync with `as_str()`; `test_all_variants_classified` catches
    /// any omission.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E7001,
        ErrorCode::E7002,
        ErrorCode::E7003,
        ErrorCode::E9001,
        ErrorCode::E9002,
    ];

    /// Get the numeric code as a string (e.g., "E7001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E7001 => "E7001",
            ErrorCode::E7002 => "E7002",
            ErrorCode::E7003 => "E7003",
            ErrorCode::E9001 => "E9001",
            ErrorCode::E9002 => "E9002",
        }
    }

    /// One-line summary of what the code means.
    pub fn summary(&self) -> &'static str {
        match self {
            ErrorCode::E7001 => "cast may fail at runtime",
            ErrorCode::E7002 => "index may be out of bounds",
            ErrorCode::E7003 => "value may be null when dereferenced",
            ErrorCode::E9001 => "problem refers to code outside its analysis unit",
            ErrorCode::E9002 => "too many diagnostics",
        }
    }

    /// Check if this is a data-flow problem (E7xxx range).
    pub fn is_dataflow_problem(&self) -> bool {
        matches!(
            self,
            ErrorCode::E7001 | ErrorCode::E7002 | ErrorCode::E7003
        )
    }

    /// Check if this is an internal error (E9xxx range).
    pub fn is_internal_error(&self) -> bool {
        matches!(self, ErrorCode::E9001 | ErrorCode::E9002)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ErrorCode {
    type Err = UnknownErrorCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or_else(|| UnknownErrorCode(s.to_string()))
    }
}

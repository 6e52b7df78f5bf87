//! Error codes for codegen diagnostics.
//!
//! Format: E#### where the first digit indicates the phase:
//! - E5xxx: Codegen errors a user can trigger
//! - E9xxx: Internal compiler errors

use std::fmt;

/// Error codes for codegen diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Codegen Errors (E5xxx)
    /// Type has no encoding for the requested operation
    E5001,
    /// Struct used as a mapping key has a non-numeric member
    E5002,
    /// Struct used as a mapping key has no members (warning)
    E5003,

    // Internal Errors (E9xxx)
    /// Reserved encoding requested (address-width signed store)
    E9001,
    /// Integer or `bytesN` width outside the range the language allows
    E9002,
}

impl ErrorCode {
    /// All error codes, for documentation lookups.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E5001,
        ErrorCode::E5002,
        ErrorCode::E5003,
        ErrorCode::E9001,
        ErrorCode::E9002,
    ];

    /// Get the error code as a string (e.g., "E5001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E5001 => "E5001",
            ErrorCode::E5002 => "E5002",
            ErrorCode::E5003 => "E5003",
            ErrorCode::E9001 => "E9001",
            ErrorCode::E9002 => "E9002",
        }
    }

    /// One-line description for `--explain` style output.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E5001 => "type has no encoding for this operation",
            ErrorCode::E5002 => "struct mapping key has a non-numeric member",
            ErrorCode::E5003 => "struct mapping key has no members",
            ErrorCode::E9001 => "reserved encoding requested",
            ErrorCode::E9002 => "type width out of range",
        }
    }

    /// Check if this is an internal compiler error.
    pub fn is_internal(&self) -> bool {
        self.as_str().starts_with("E9")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests;

//! Encoding failures and their diagnostics.

use std::fmt;

use tvm_diagnostic::{Diagnostic, ErrorCode};
use tvm_ir::Span;

/// The encoding operation a type was rejected by.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum EncodingOp {
    DictKey,
    Store,
}

impl fmt::Display for EncodingOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodingOp::DictKey => f.write_str("as a mapping key"),
            EncodingOp::Store => f.write_str("with a direct store"),
        }
    }
}

/// Fatal encoding error. Types are already rendered for display.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum EncodingError {
    /// The type has no mapping for the requested operation.
    #[error("type `{ty}` cannot be encoded {operation}")]
    UnsupportedType { operation: EncodingOp, ty: String },

    /// A struct mapping key has a member that is not numeric.
    #[error("struct `{struct_name}` cannot be a mapping key: member `{member}` has type `{member_ty}`")]
    InvalidStructKey {
        struct_name: String,
        member: String,
        member_ty: String,
    },

    /// Signed store at the address width, which TVM reserves for
    /// variable-length address encoding.
    #[error("signed {bits}-bit store is reserved for address encoding")]
    ReservedEncoding { bits: u16 },

    /// An integer or `bytesN` type whose width the language cannot spell.
    #[error("type `{ty}` has a width outside the supported range")]
    InvalidWidth { ty: String },
}

impl EncodingError {
    pub fn code(&self) -> ErrorCode {
        match self {
            EncodingError::UnsupportedType { .. } => ErrorCode::E5001,
            EncodingError::InvalidStructKey { .. } => ErrorCode::E5002,
            EncodingError::ReservedEncoding { .. } => ErrorCode::E9001,
            EncodingError::InvalidWidth { .. } => ErrorCode::E9002,
        }
    }

    /// Convert to a diagnostic anchored at `span`.
    pub fn to_diagnostic(&self, span: Span) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match self {
            EncodingError::UnsupportedType { operation, .. } => {
                let diag = diag.with_label(span, format!("used {operation} here"));
                match operation {
                    EncodingOp::DictKey => diag.with_suggestion(
                        "use an integer, address, string, bytes or all-integer struct as the key",
                    ),
                    EncodingOp::Store => diag,
                }
            }
            EncodingError::InvalidStructKey { member, .. } => diag
                .with_label(span, "struct used as a mapping key here")
                .with_note("struct keys are flattened into a fixed-width integer tuple")
                .with_suggestion(format!(
                    "change `{member}` to an integer type, or key the mapping by a different type"
                )),
            EncodingError::ReservedEncoding { .. } => diag
                .with_label(span, "while encoding this value")
                .with_note("this is a compiler bug, please report it"),
            EncodingError::InvalidWidth { .. } => diag
                .with_label(span, "while encoding this value")
                .with_note("integers are 1 to 256 bits wide and `bytesN` has 1 to 32 bytes")
                .with_note("this is a compiler bug, please report it"),
        }
    }
}

/// Warning for a struct key whose members add up to zero bits.
pub(crate) fn empty_struct_key(struct_name: &str, span: Span) -> Diagnostic {
    Diagnostic::warning(ErrorCode::E5003)
        .with_message(format!(
            "struct `{struct_name}` has no members and makes a zero-width mapping key"
        ))
        .with_label(span, "used as a mapping key here")
        .with_note("every key of such a mapping is the same")
}

#[cfg(test)]
mod tests;

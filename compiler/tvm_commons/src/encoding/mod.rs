//! Type encoding resolver.
//!
//! Maps semantic types to their bit-exact TVM representation: dictionary
//! key kind and width, store mnemonic, enum packing width. Every query is a
//! pure function of the type; rejected types are reported once, at the use
//! site, and come back as `Err(FatalError)`.

mod classify;
mod dict_key;

pub use classify::{
    classify, enum_bit_width, has_valid_width, is_address_or_contract, is_byte_array_or_string,
    is_integral, is_ref_type, is_string, is_string_or_string_literal_or_bytes, is_usual_array,
    numeric_info, NumericInfo, TypeClass,
};
pub use dict_key::{DictKey, DictKeyKind};

use tvm_diagnostic::{DiagnosticReporter, FatalError};
use tvm_ir::{Program, Span, StructId, Type};

use crate::error::{empty_struct_key, EncodingError, EncodingOp};
use crate::TargetProfile;

/// Encoding queries over one program.
///
/// Holds only shared borrows, so one encoder can serve many codegen workers
/// as long as the reporter is internally synchronized.
#[derive(Clone, Copy)]
pub struct TypeEncoder<'a> {
    program: &'a Program,
    target: &'a TargetProfile,
    reporter: &'a dyn DiagnosticReporter,
}

impl<'a> TypeEncoder<'a> {
    pub fn new(
        program: &'a Program,
        target: &'a TargetProfile,
        reporter: &'a dyn DiagnosticReporter,
    ) -> Self {
        TypeEncoder {
            program,
            target,
            reporter,
        }
    }

    #[inline]
    pub fn program(&self) -> &'a Program {
        self.program
    }

    #[inline]
    pub fn target(&self) -> &'a TargetProfile {
        self.target
    }

    #[inline]
    pub fn classify(&self, ty: &Type) -> TypeClass {
        classify(ty)
    }

    /// Which dictionary family a key of type `ty` selects.
    ///
    /// Integers pick the signed or unsigned integer dictionary; byte arrays,
    /// strings and literals are keyed by their unsigned content hash;
    /// everything else is a slice key.
    pub fn dict_key_encoding(&self, ty: &Type) -> DictKeyKind {
        match classify(ty) {
            TypeClass::Numeric(info) if info.signed => DictKeyKind::Signed,
            TypeClass::Numeric(_) => DictKeyKind::Unsigned,
            class if class.is_string_literal_or_bytes() => DictKeyKind::Unsigned,
            _ => DictKeyKind::Slice,
        }
    }

    /// Fixed bit width of a dictionary key of type `ty`.
    ///
    /// Struct keys are the concatenation of their members and must be all
    /// numeric. Types with no fixed-width key are fatal.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn dict_key_bit_length(&self, ty: &Type, span: Span) -> Result<u32, FatalError> {
        match classify(ty) {
            TypeClass::AddressOrContract => Ok(self.target.std_addr_length),
            TypeClass::Numeric(info) => {
                self.check_width(ty, span)?;
                Ok(u32::from(info.bits))
            }
            TypeClass::ByteArrayOrString | TypeClass::StringLiteral => {
                Ok(self.target.content_hash_key_length)
            }
            TypeClass::Struct(id) => self.struct_key_bit_length(id, span),
            TypeClass::UsualArray | TypeClass::Other => {
                Err(self.unsupported(EncodingOp::DictKey, ty, span))
            }
        }
    }

    /// Kind and width of a dictionary key of type `ty`.
    pub fn dict_key(&self, ty: &Type, span: Span) -> Result<DictKey, FatalError> {
        Ok(DictKey {
            kind: self.dict_key_encoding(ty),
            bits: self.dict_key_bit_length(ty, span)?,
        })
    }

    /// Store mnemonic for writing a value of type `ty` into a builder.
    ///
    /// `reverse` selects the variant taking the builder below the value.
    /// Integers yield `STI`/`STU` (`STIR`/`STUR`) with their width as the
    /// immediate; addresses and contracts are stored as slices.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn store_instruction(
        &self,
        ty: &Type,
        reverse: bool,
        span: Span,
    ) -> Result<String, FatalError> {
        match classify(ty) {
            TypeClass::AddressOrContract => {
                Ok(if reverse { "STSLICER" } else { "STSLICE" }.to_owned())
            }
            TypeClass::Numeric(info) => {
                if info.signed && u32::from(info.bits) == self.target.std_addr_length {
                    let error = EncodingError::ReservedEncoding { bits: info.bits };
                    return Err(self.fail(error, span));
                }
                self.check_width(ty, span)?;
                let op = match (info.signed, reverse) {
                    (true, false) => "STI",
                    (true, true) => "STIR",
                    (false, false) => "STU",
                    (false, true) => "STUR",
                };
                Ok(format!("{op} {}", info.bits))
            }
            TypeClass::UsualArray
            | TypeClass::ByteArrayOrString
            | TypeClass::StringLiteral
            | TypeClass::Struct(_)
            | TypeClass::Other => Err(self.unsupported(EncodingOp::Store, ty, span)),
        }
    }

    fn struct_key_bit_length(&self, id: StructId, span: Span) -> Result<u32, FatalError> {
        let def = self.program.struct_def(id);
        let mut bits = 0u32;
        for member in &def.members {
            let Some(info) = numeric_info(&member.ty) else {
                let error = EncodingError::InvalidStructKey {
                    struct_name: self.program.name(def.name).to_owned(),
                    member: self.program.name(member.name).to_owned(),
                    member_ty: member.ty.display(self.program).to_string(),
                };
                tracing::debug!(code = %error.code(), %error, "fatal encoding error");
                let diagnostic = error
                    .to_diagnostic(span)
                    .with_secondary_label(def.span, "struct declared here");
                return Err(self.reporter.fatal(diagnostic));
            };
            self.check_width(&member.ty, span)?;
            bits += u32::from(info.bits);
        }
        if def.members.is_empty() {
            self.reporter
                .warning(empty_struct_key(self.program.name(def.name), span));
        }
        Ok(bits)
    }

    fn check_width(&self, ty: &Type, span: Span) -> Result<(), FatalError> {
        if has_valid_width(ty) {
            return Ok(());
        }
        Err(self.fail(
            EncodingError::InvalidWidth {
                ty: ty.display(self.program).to_string(),
            },
            span,
        ))
    }

    fn unsupported(&self, operation: EncodingOp, ty: &Type, span: Span) -> FatalError {
        self.fail(
            EncodingError::UnsupportedType {
                operation,
                ty: ty.display(self.program).to_string(),
            },
            span,
        )
    }

    fn fail(&self, error: EncodingError, span: Span) -> FatalError {
        tracing::debug!(code = %error.code(), %error, "fatal encoding error");
        self.reporter.fatal(error.to_diagnostic(span))
    }
}

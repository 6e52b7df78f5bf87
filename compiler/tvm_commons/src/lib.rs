//! Codegen commons for the TVM contract backend.
//!
//! Two read-only query services over a finished [`Program`](tvm_ir::Program):
//!
//! - **Type encoding** ([`TypeEncoder`]) - how a semantic type is laid out on
//!   the target machine: dictionary key kind and width, store mnemonic,
//!   enum packing width.
//! - **Contract hierarchy** ([`HierarchyResolver`]) - base-first
//!   linearization, override winners, and `super` dispatch targets.
//!
//! Neither keeps state between calls. Fatal conditions go to the injected
//! [`DiagnosticReporter`](tvm_diagnostic::DiagnosticReporter) and surface as
//! `Err(FatalError)`; callers propagate it and stop generating code for the
//! current unit.

pub mod encoding;
mod error;
pub mod hierarchy;
pub mod naming;
mod target;

pub use encoding::{
    classify, enum_bit_width, numeric_info, DictKey, DictKeyKind, NumericInfo, TypeClass,
    TypeEncoder,
};
pub use error::{EncodingError, EncodingOp};
pub use hierarchy::{ContractChain, HierarchyResolver};
pub use naming::{effective_name, is_function_for_inlining, is_intrinsic, is_macro};
pub use target::TargetProfile;

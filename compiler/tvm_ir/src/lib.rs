//! TVM IR - resolved program model for the contract codegen backend.
//!
//! This crate holds the data the front end hands to code generation:
//! - Spans for source locations
//! - Names for interned identifiers
//! - The closed semantic [`Type`] union
//! - The [`Program`] arena of contracts, functions and structs
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: identifiers are `Name(u32)`
//! - **Flatten Everything**: entities reference each other through
//!   `ContractId`/`FunctionId`/`StructId` indices into one arena, never
//!   through owning pointers, so back-references (a function to its
//!   contract, a type to its struct) cannot form ownership cycles.
//! - **Read-only after construction**: the codegen resolvers only borrow a
//!   finished `Program`.

/// Compile-time assertion that a type has a specific size.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod interner;
mod name;
mod program;
mod span;
mod ty;

pub use interner::{InternError, StringInterner};
pub use name::Name;
pub use program::{
    ContractDef, ContractId, FunctionDecl, FunctionId, FunctionRole, Program, StructDef,
    StructId, StructMember,
};
pub use span::Span;
pub use ty::{ArrayKind, IntegerType, Type, TypeDisplay};

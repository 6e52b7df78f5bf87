//! Function naming rules shared by dispatch and emission.

use tvm_ir::{FunctionDecl, FunctionRole, Name, Program};

/// Prefix reserved for compiler intrinsics.
pub const INTRINSIC_PREFIX: &str = "tvm_";

/// Suffix marking a function whose body is expanded as a macro.
pub const MACRO_SUFFIX: &str = "_macro";

/// Suffix that forces inlining regardless of the `inline` flag.
pub const INLINE_SUFFIX: &str = "_inline";

/// Name used to match overrides across the inheritance chain.
///
/// Special roles have fixed names; a constructor takes its contract's name.
pub fn effective_name(program: &Program, function: &FunctionDecl) -> Name {
    match function.role {
        FunctionRole::Constructor => program.contract(function.contract).name,
        FunctionRole::Receive => program.intern("receive"),
        FunctionRole::Fallback => program.intern("fallback"),
        FunctionRole::OnBounce => program.intern("onBounce"),
        FunctionRole::Regular => function.name,
    }
}

/// Whether `name` refers to a compiler intrinsic.
#[inline]
pub fn is_intrinsic(name: &str) -> bool {
    name.starts_with(INTRINSIC_PREFIX)
}

/// Whether `name` refers to a macro function.
#[inline]
pub fn is_macro(name: &str) -> bool {
    name.ends_with(MACRO_SUFFIX)
}

/// Whether calls to `function` are expanded in place instead of called.
///
/// Message handlers are always inlined into the dispatcher.
pub fn is_function_for_inlining(program: &Program, function: &FunctionDecl) -> bool {
    program.name(function.name).ends_with(INLINE_SUFFIX)
        || function.is_inline
        || matches!(
            function.role,
            FunctionRole::Receive | FunctionRole::Fallback | FunctionRole::OnBounce
        )
}

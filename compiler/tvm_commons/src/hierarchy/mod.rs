//! Contract hierarchy resolver.
//!
//! Turns the front end's most-derived-first linearization into base-first
//! deployment order and answers "which definition runs" questions on it:
//!
//! - override winner: the *last* declaration of an effective name in
//!   base-first order
//! - visible functions: one winner per effective name, no constructors,
//!   no intrinsics
//! - `super` target: the last declaration strictly before the executing
//!   contract in the main contract's chain
//!
//! Override compatibility (signatures, visibility) is the type checker's
//! job; here the most-derived declaration simply wins.

use rayon::prelude::*;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tvm_ir::{ContractId, FunctionId, Name, Program};

use crate::naming::{effective_name, is_intrinsic};

/// Base-first contract chain. Most chains are short.
pub type ContractChain = SmallVec<[ContractId; 4]>;

/// Inheritance-aware function resolution over one program.
#[derive(Clone, Copy, Debug)]
pub struct HierarchyResolver<'a> {
    program: &'a Program,
}

impl<'a> HierarchyResolver<'a> {
    pub fn new(program: &'a Program) -> Self {
        HierarchyResolver { program }
    }

    /// Effective (override-matching) name of `function`.
    #[inline]
    pub fn effective_name(&self, function: FunctionId) -> Name {
        effective_name(self.program, self.program.function(function))
    }

    /// Chain of `contract` in deployment order: most basic contract first,
    /// `contract` itself last.
    pub fn linearize(&self, contract: ContractId) -> ContractChain {
        let bases = self.program.contract(contract).linearized_bases();
        if bases.is_empty() {
            return SmallVec::from_elem(contract, 1);
        }
        bases.iter().rev().copied().collect()
    }

    /// Every function declaration in the chain with its owning contract,
    /// base-first, then declaration order within each contract.
    pub fn function_pairs(&self, contract: ContractId) -> Vec<(FunctionId, ContractId)> {
        self.linearize(contract)
            .into_iter()
            .flat_map(|c| {
                self.program
                    .contract(c)
                    .functions()
                    .iter()
                    .map(move |&f| (f, c))
            })
            .collect()
    }

    /// All non-constructor declarations of effective name `name` in the
    /// chain of `contract`, base-first. The last element is the override
    /// winner.
    ///
    /// Intrinsic names never take part in override resolution and yield an
    /// empty list; use [`exact_name_lookup`](Self::exact_name_lookup).
    pub fn resolve_override(&self, contract: ContractId, name: Name) -> Vec<FunctionId> {
        if is_intrinsic(self.program.name(name)) {
            return Vec::new();
        }
        self.function_pairs(contract)
            .into_iter()
            .map(|(f, _)| f)
            .filter(|&f| {
                !self.program.function(f).is_constructor() && self.effective_name(f) == name
            })
            .collect()
    }

    /// Most-derived declaration of effective name `name`, if any.
    pub fn override_winner(&self, contract: ContractId, name: Name) -> Option<FunctionId> {
        self.resolve_override(contract, name).last().copied()
    }

    /// The functions `contract` actually dispatches: for every effective
    /// name in the chain, its override winner. Constructors and intrinsics
    /// are left out. Order follows [`function_pairs`](Self::function_pairs).
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn visible_functions(&self, contract: ContractId) -> Vec<FunctionId> {
        let candidates: Vec<(FunctionId, Name)> = self
            .function_pairs(contract)
            .into_iter()
            .filter(|&(f, _)| !self.program.function(f).is_constructor())
            .map(|(f, _)| (f, self.effective_name(f)))
            .filter(|&(_, name)| !is_intrinsic(self.program.name(name)))
            .collect();

        // Later (more derived) declarations overwrite earlier ones.
        let mut winners: FxHashMap<Name, FunctionId> = FxHashMap::default();
        for &(f, name) in &candidates {
            winners.insert(name, f);
        }

        let visible: Vec<FunctionId> = candidates
            .into_iter()
            .filter(|&(f, name)| winners.get(&name) == Some(&f))
            .map(|(f, _)| f)
            .collect();
        tracing::debug!(count = visible.len(), "resolved visible functions");
        visible
    }

    /// [`visible_functions`](Self::visible_functions) for every contract in
    /// the program, computed in parallel. Results are in contract order.
    pub fn all_visible_functions(&self) -> Vec<(ContractId, Vec<FunctionId>)> {
        let contracts: Vec<ContractId> = self.program.contracts().map(|(id, _)| id).collect();
        contracts
            .into_par_iter()
            .map(|c| (c, self.visible_functions(c)))
            .collect()
    }

    /// Contract whose declaration a `super.name(...)` call inside `current`
    /// reaches, when compiling `main`.
    ///
    /// Walks `main`'s base-first chain up to, not including, `current`, and
    /// returns the last contract declaring `name`. Contracts at or after
    /// `current` are never eligible.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn super_contract(
        &self,
        current: ContractId,
        main: ContractId,
        name: Name,
    ) -> Option<ContractId> {
        self.linearize(main)
            .into_iter()
            .take_while(|&c| c != current)
            .filter(|&c| self.exact_name_lookup(c, name).is_some())
            .last()
    }

    /// Declaration a `super.name(...)` call inside `current` dispatches to.
    ///
    /// `None` is an ordinary answer: no strictly earlier ancestor declares
    /// `name`. The caller decides whether that is an error.
    pub fn resolve_super(
        &self,
        current: ContractId,
        main: ContractId,
        name: Name,
    ) -> Option<FunctionId> {
        let target = self.super_contract(current, main, name)?;
        self.exact_name_lookup(target, name)
    }

    /// First declaration in `contract` itself whose declared name is `name`.
    ///
    /// No inheritance and no override resolution; used for direct calls to
    /// intrinsics and for `super` lookups.
    pub fn exact_name_lookup(&self, contract: ContractId, name: Name) -> Option<FunctionId> {
        self.program
            .contract(contract)
            .functions()
            .iter()
            .copied()
            .find(|&f| self.program.function(f).name == name)
    }
}

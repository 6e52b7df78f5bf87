//! Arena-based program model.
//!
//! The front end builds one [`Program`] per compilation; code generation
//! only borrows it. Contracts, functions and structs live in flat vectors
//! and refer to each other by index:
//!
//! - `ContractDef::functions` → [`FunctionId`]s in declaration order
//! - `FunctionDecl::contract` → owning [`ContractId`] (back-reference)
//! - `ContractDef` linearized bases → [`ContractId`]s, most-derived first
//! - `Type::Struct` → [`StructId`]

use smallvec::SmallVec;

use crate::{Name, Span, StringInterner, Type};

macro_rules! arena_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
        #[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            #[inline]
            pub const fn new(index: u32) -> Self {
                $name(index)
            }

            /// Index into the owning arena vector.
            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }
        }
    };
}

arena_id!(
    /// Index of a contract in [`Program`].
    ContractId
);
arena_id!(
    /// Index of a function declaration in [`Program`].
    FunctionId
);
arena_id!(
    /// Index of a struct definition in [`Program`].
    StructId
);

fn next_id(len: usize, what: &str) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("too many {what} in one program"))
}

/// Role of a function within its contract.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum FunctionRole {
    Regular,
    Constructor,
    /// Plain value transfer without a payload.
    Receive,
    /// Message whose function id matches nothing.
    Fallback,
    /// Bounced outbound message.
    OnBounce,
}

/// A function declaration owned by exactly one contract.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct FunctionDecl {
    /// Declared name; empty for constructors and special handlers.
    pub name: Name,
    pub role: FunctionRole,
    pub is_inline: bool,
    pub contract: ContractId,
    pub span: Span,
}

impl FunctionDecl {
    #[inline]
    pub fn is_constructor(&self) -> bool {
        self.role == FunctionRole::Constructor
    }
}

/// A contract definition.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct ContractDef {
    pub name: Name,
    pub span: Span,
    /// Output of the front end's linearization, most-derived first.
    linearized_bases: SmallVec<[ContractId; 4]>,
    /// Own function declarations, in source order.
    functions: Vec<FunctionId>,
}

impl ContractDef {
    /// Linearized bases, most-derived first (the contract itself leads).
    ///
    /// Empty when the front end recorded no bases.
    #[inline]
    pub fn linearized_bases(&self) -> &[ContractId] {
        &self.linearized_bases
    }

    /// Own function declarations in declaration order.
    #[inline]
    pub fn functions(&self) -> &[FunctionId] {
        &self.functions
    }
}

/// A named struct member.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct StructMember {
    pub name: Name,
    pub ty: Type,
}

/// A struct definition.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct StructDef {
    pub name: Name,
    pub span: Span,
    pub members: Vec<StructMember>,
}

/// The whole resolved program.
#[derive(Debug, Default)]
pub struct Program {
    interner: StringInterner,
    contracts: Vec<ContractDef>,
    functions: Vec<FunctionDecl>,
    structs: Vec<StructDef>,
}

impl Program {
    /// Create an empty program.
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern an identifier.
    #[inline]
    pub fn intern(&self, s: &str) -> Name {
        self.interner.intern(s)
    }

    /// Resolve an identifier back to its text.
    #[inline]
    pub fn name(&self, name: Name) -> &'static str {
        self.interner.lookup(name)
    }

    #[inline]
    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    // ── Construction ────────────────────────────────────────────

    /// Add a contract with no recorded bases.
    pub fn add_contract(&mut self, name: &str, span: Span) -> ContractId {
        let id = ContractId::new(next_id(self.contracts.len(), "contracts"));
        let name = self.intern(name);
        self.contracts.push(ContractDef {
            name,
            span,
            linearized_bases: SmallVec::new(),
            functions: Vec::new(),
        });
        id
    }

    /// Record the front end's linearization for `contract`, most-derived
    /// first, starting with `contract` itself.
    pub fn set_linearized_bases(
        &mut self,
        contract: ContractId,
        bases: impl IntoIterator<Item = ContractId>,
    ) {
        self.contracts[contract.index()].linearized_bases = bases.into_iter().collect();
    }

    /// Declare a function in `contract`, appended after its existing ones.
    pub fn add_function(
        &mut self,
        contract: ContractId,
        name: &str,
        role: FunctionRole,
        span: Span,
    ) -> FunctionId {
        let id = FunctionId::new(next_id(self.functions.len(), "functions"));
        let name = self.intern(name);
        self.functions.push(FunctionDecl {
            name,
            role,
            is_inline: false,
            contract,
            span,
        });
        self.contracts[contract.index()].functions.push(id);
        id
    }

    /// Set the `inline` flag of a declared function.
    pub fn set_inline(&mut self, function: FunctionId, is_inline: bool) {
        self.functions[function.index()].is_inline = is_inline;
    }

    /// Add a struct with the given members in declaration order.
    pub fn add_struct<'a>(
        &mut self,
        name: &str,
        members: impl IntoIterator<Item = (&'a str, Type)>,
        span: Span,
    ) -> StructId {
        let id = StructId::new(next_id(self.structs.len(), "structs"));
        let name = self.intern(name);
        let members = members
            .into_iter()
            .map(|(member, ty)| StructMember {
                name: self.intern(member),
                ty,
            })
            .collect();
        self.structs.push(StructDef {
            name,
            span,
            members,
        });
        id
    }

    // ── Lookup ──────────────────────────────────────────────────

    #[inline]
    pub fn contract(&self, id: ContractId) -> &ContractDef {
        &self.contracts[id.index()]
    }

    #[inline]
    pub fn function(&self, id: FunctionId) -> &FunctionDecl {
        &self.functions[id.index()]
    }

    #[inline]
    pub fn struct_def(&self, id: StructId) -> &StructDef {
        &self.structs[id.index()]
    }

    /// Find a contract by name.
    pub fn contract_by_name(&self, name: &str) -> Option<ContractId> {
        let name = self.interner.get(name)?;
        self.contracts
            .iter()
            .position(|c| c.name == name)
            .map(|index| ContractId::new(next_id(index, "contracts")))
    }

    /// Iterate over all contracts with their ids.
    pub fn contracts(&self) -> impl Iterator<Item = (ContractId, &ContractDef)> + '_ {
        self.contracts
            .iter()
            .enumerate()
            .map(|(index, def)| (ContractId::new(next_id(index, "contracts")), def))
    }
}

#[cfg(test)]
mod tests;

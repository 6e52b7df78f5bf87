//! Target platform profile.
//!
//! Widths the TVM fixes for storage layout. They are inputs to code
//! generation, not something it derives.

use tvm_ir::IntegerType;

/// Platform constants used by type encoding.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TargetProfile {
    /// Bit length of a standard internal address (`addr_std` without anycast).
    pub std_addr_length: u32,
    /// Key width of the persistent data dictionary.
    pub persistent_key_length: u16,
    /// Key width of array dictionaries.
    pub array_key_length: u16,
    /// Key width for byte-array and string keys, which are content hashes.
    pub content_hash_key_length: u32,
}

impl TargetProfile {
    /// The TVM profile.
    pub const fn tvm() -> Self {
        TargetProfile {
            std_addr_length: 267,
            persistent_key_length: 64,
            array_key_length: 32,
            content_hash_key_length: 256,
        }
    }

    /// Key type of the persistent data dictionary.
    pub const fn persistent_key_type(&self) -> IntegerType {
        IntegerType::unsigned(self.persistent_key_length)
    }

    /// Key type of array dictionaries.
    pub const fn array_key_type(&self) -> IntegerType {
        IntegerType::unsigned(self.array_key_length)
    }
}

impl Default for TargetProfile {
    fn default() -> Self {
        Self::tvm()
    }
}

#[cfg(test)]
mod tests;

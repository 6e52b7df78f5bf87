//! Interned identifier handle.

use std::fmt;

/// Interned string identifier.
///
/// Layout: 32-bit index split into shard (3 bits) + local index (29 bits)
/// - Bits 31-29: Shard index (0-7)
/// - Bits 28-0: Local index within shard
///
/// Equality is an integer compare, which is what override resolution relies
/// on when it groups declarations by effective name.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Name(u32);

impl Name {
    /// Pre-interned empty string (the declared name of special functions).
    pub const EMPTY: Name = Name(0);

    /// Maximum local index per shard.
    pub const MAX_LOCAL: u32 = 0x1FFF_FFFF;

    /// Number of shards.
    pub const NUM_SHARDS: usize = 8;

    /// Create from shard and local index.
    #[inline]
    pub const fn new(shard: u32, local: u32) -> Self {
        debug_assert!(shard < 8);
        debug_assert!(local <= Self::MAX_LOCAL);
        Name((shard << 29) | local)
    }

    /// Extract shard index.
    #[inline]
    pub const fn shard(self) -> usize {
        (self.0 >> 29) as usize
    }

    /// Extract local index.
    #[inline]
    pub const fn local(self) -> usize {
        (self.0 & Self::MAX_LOCAL) as usize
    }

    /// Check if this is the empty name.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({}:{})", self.shard(), self.local())
    }
}

impl Default for Name {
    fn default() -> Self {
        Self::EMPTY
    }
}

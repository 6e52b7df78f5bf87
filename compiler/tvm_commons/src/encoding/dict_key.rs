//! Dictionary key encodings.

use std::fmt;

/// How a dictionary key is compared by the TVM dictionary primitives.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum DictKeyKind {
    /// Signed integer key (`DICTI*`).
    Signed,
    /// Unsigned integer key (`DICTU*`).
    Unsigned,
    /// Raw bit-string key (`DICT*`); the value itself is sliced.
    Slice,
}

impl DictKeyKind {
    /// Letter inserted after `DICT` in dictionary opcodes.
    pub fn dict_char(self) -> &'static str {
        match self {
            DictKeyKind::Signed => "I",
            DictKeyKind::Unsigned => "U",
            DictKeyKind::Slice => "",
        }
    }
}

/// Kind and width of a dictionary key.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct DictKey {
    pub kind: DictKeyKind,
    pub bits: u32,
}

impl DictKey {
    /// Dictionary opcode for this key, e.g. `opcode("GET")` → `DICTUGET`.
    pub fn opcode(&self, op: &str) -> String {
        format!("DICT{}{op}", self.kind.dict_char())
    }
}

impl fmt::Display for DictKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            DictKeyKind::Signed => "int",
            DictKeyKind::Unsigned => "uint",
            DictKeyKind::Slice => "slice",
        };
        write!(f, "{kind}{}", self.bits)
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// Damage value meaning "any variant". Valid for matching recipe inputs,
/// meaningless for a fixed recipe output.
pub const ANY_DAMAGE: i32 = -1;

/// Identifies an item type, e.g. `iron_ingot`. Legacy numeric ids are kept
/// as their decimal string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemId(pub String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// An (id, meta) pair as looked up in the item registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemKey {
    pub id: ItemId,
    pub meta: i32,
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.meta == ANY_DAMAGE {
            write!(f, "{}:*", self.id)
        } else {
            write!(f, "{}:{}", self.id, self.meta)
        }
    }
}

/// Identifies an enchantment type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EnchantmentId(pub u16);

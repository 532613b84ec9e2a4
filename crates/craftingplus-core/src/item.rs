use crate::enchantment::EnchantmentInstance;
use crate::id::*;
use serde::{Deserialize, Serialize};

// ===========================================================================
// Item specs (the on-disk description of an item)
// ===========================================================================

/// Item identity as written in a data file: a name or a legacy numeric id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpecId {
    Numeric(i64),
    Named(String),
}

/// Structured description of an item, deserialized into an [`Item`] by an
/// [`ItemDeserializer`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSpec {
    pub id: SpecId,
    #[serde(default)]
    pub damage: i32,
    #[serde(default = "default_count")]
    pub count: u32,
    /// Opaque extra data carried through to the item untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nbt: Option<serde_json::Value>,
}

fn default_count() -> u32 {
    1
}

impl ItemSpec {
    pub fn named(id: &str) -> Self {
        Self {
            id: SpecId::Named(id.to_string()),
            damage: 0,
            count: 1,
            nbt: None,
        }
    }

    pub fn with_damage(mut self, damage: i32) -> Self {
        self.damage = damage;
        self
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }
}

// ===========================================================================
// Items
// ===========================================================================

/// An immutable item value. Modifications return a changed copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    meta: i32,
    count: u32,
    #[serde(default)]
    custom_name: Option<String>,
    #[serde(default)]
    enchantments: Vec<EnchantmentInstance>,
    #[serde(default)]
    nbt: Option<serde_json::Value>,
}

impl Item {
    pub fn new(id: impl Into<ItemId>, meta: i32, count: u32) -> Self {
        Self {
            id: id.into(),
            meta,
            count,
            custom_name: None,
            enchantments: Vec::new(),
            nbt: None,
        }
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn meta(&self) -> i32 {
        self.meta
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn key(&self) -> ItemKey {
        ItemKey {
            id: self.id.clone(),
            meta: self.meta,
        }
    }

    pub fn has_any_damage_value(&self) -> bool {
        self.meta == ANY_DAMAGE
    }

    pub fn custom_name(&self) -> Option<&str> {
        self.custom_name.as_deref()
    }

    pub fn enchantments(&self) -> &[EnchantmentInstance] {
        &self.enchantments
    }

    pub fn nbt(&self) -> Option<&serde_json::Value> {
        self.nbt.as_ref()
    }

    pub fn with_nbt(&self, nbt: serde_json::Value) -> Self {
        let mut item = self.clone();
        item.nbt = Some(nbt);
        item
    }

    pub fn with_custom_name(&self, name: impl Into<String>) -> Self {
        let mut item = self.clone();
        item.custom_name = Some(name.into());
        item
    }

    /// Adds an enchantment, replacing any instance of the same type.
    pub fn with_enchantment(&self, instance: EnchantmentInstance) -> Self {
        let mut item = self.clone();
        match item
            .enchantments
            .iter_mut()
            .find(|e| e.enchantment.id == instance.enchantment.id)
        {
            Some(existing) => *existing = instance,
            None => item.enchantments.push(instance),
        }
        item
    }
}

// ===========================================================================
// Deserialization
// ===========================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ItemError {
    #[error("item id must not be empty")]
    EmptyId,
    #[error("invalid damage value {damage} for '{id}'")]
    InvalidDamage { id: String, damage: i32 },
    #[error("item count for '{id}' must be at least 1")]
    ZeroCount { id: String },
}

/// Turns an [`ItemSpec`] into an [`Item`]. Supplied by the host item system.
pub trait ItemDeserializer {
    fn deserialize(&self, spec: &ItemSpec) -> Result<Item, ItemError>;
}

/// Default deserializer: trims and lowercases names and strips the
/// `minecraft:` namespace. Numeric ids keep their decimal form.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardItemDeserializer;

impl StandardItemDeserializer {
    pub fn normalize_id(id: &SpecId) -> String {
        match id {
            SpecId::Numeric(n) => n.to_string(),
            SpecId::Named(name) => {
                let name = name.trim().to_ascii_lowercase();
                match name.strip_prefix("minecraft:") {
                    Some(stripped) => stripped.to_string(),
                    None => name,
                }
            }
        }
    }
}

impl ItemDeserializer for StandardItemDeserializer {
    fn deserialize(&self, spec: &ItemSpec) -> Result<Item, ItemError> {
        let id = Self::normalize_id(&spec.id);
        if id.is_empty() {
            return Err(ItemError::EmptyId);
        }
        if spec.damage < ANY_DAMAGE {
            return Err(ItemError::InvalidDamage {
                id,
                damage: spec.damage,
            });
        }
        if spec.count == 0 {
            return Err(ItemError::ZeroCount { id });
        }

        let item = Item::new(id, spec.damage, spec.count);
        Ok(match &spec.nbt {
            Some(nbt) => item.with_nbt(nbt.clone()),
            None => item,
        })
    }
}

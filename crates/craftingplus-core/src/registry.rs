use crate::id::*;
use std::collections::HashMap;

/// Answers whether an (id, meta) pair names an item the host knows about.
pub trait ItemRegistry {
    fn is_registered(&self, id: &ItemId, meta: i32) -> bool;
}

/// How an item type accepts meta values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariantRule {
    /// Only the listed meta values exist.
    Exact(Vec<i32>),
    /// Tools and armour: every damage value from 0 to `max_durability`.
    Durable { max_durability: i32 },
}

impl VariantRule {
    fn accepts(&self, meta: i32) -> bool {
        match self {
            VariantRule::Exact(metas) => metas.contains(&meta),
            VariantRule::Durable { max_durability } => (0..=*max_durability).contains(&meta),
        }
    }
}

/// An item type definition in the table.
#[derive(Debug, Clone)]
pub struct ItemTypeDef {
    pub id: ItemId,
    pub variants: VariantRule,
}

/// Builder for constructing an immutable [`ItemTable`].
/// Two-phase lifecycle: registration -> finalization.
#[derive(Debug, Default)]
pub struct ItemTableBuilder {
    items: Vec<ItemTypeDef>,
    index: HashMap<ItemId, usize>,
}

impl ItemTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an item with a single variant at meta 0.
    pub fn register_item(&mut self, id: &str) -> &mut Self {
        self.register_variant(id, 0)
    }

    /// Register one meta variant of an item, e.g. a wool colour.
    pub fn register_variant(&mut self, id: &str, meta: i32) -> &mut Self {
        let id = ItemId::new(id);
        match self.index.get(&id) {
            Some(&i) => {
                if let VariantRule::Exact(metas) = &mut self.items[i].variants {
                    if !metas.contains(&meta) {
                        metas.push(meta);
                    }
                } else {
                    self.items[i].variants = VariantRule::Exact(vec![meta]);
                }
            }
            None => self.push(id, VariantRule::Exact(vec![meta])),
        }
        self
    }

    /// Register a damageable item accepting every damage value up to
    /// `max_durability`.
    pub fn register_durable(&mut self, id: &str, max_durability: i32) -> &mut Self {
        let id = ItemId::new(id);
        let rule = VariantRule::Durable { max_durability };
        match self.index.get(&id) {
            Some(&i) => self.items[i].variants = rule,
            None => self.push(id, rule),
        }
        self
    }

    fn push(&mut self, id: ItemId, variants: VariantRule) {
        self.index.insert(id.clone(), self.items.len());
        self.items.push(ItemTypeDef { id, variants });
    }

    /// Finalize and build the immutable table.
    pub fn build(self) -> Result<ItemTable, RegistryError> {
        for item in &self.items {
            if item.id.as_str().is_empty() {
                return Err(RegistryError::EmptyId);
            }
            match &item.variants {
                VariantRule::Exact(metas) => {
                    if let Some(&meta) = metas.iter().find(|&&m| m < 0) {
                        return Err(RegistryError::InvalidMeta {
                            id: item.id.clone(),
                            meta,
                        });
                    }
                }
                VariantRule::Durable { max_durability } if *max_durability < 0 => {
                    return Err(RegistryError::InvalidMeta {
                        id: item.id.clone(),
                        meta: *max_durability,
                    });
                }
                VariantRule::Durable { .. } => {}
            }
        }

        Ok(ItemTable {
            items: self.items,
            index: self.index,
        })
    }
}

/// Immutable item table. Frozen after build().
#[derive(Debug)]
pub struct ItemTable {
    items: Vec<ItemTypeDef>,
    index: HashMap<ItemId, usize>,
}

impl ItemTable {
    pub fn get(&self, id: &ItemId) -> Option<&ItemTypeDef> {
        self.index.get(id).map(|&i| &self.items[i])
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ItemRegistry for ItemTable {
    fn is_registered(&self, id: &ItemId, meta: i32) -> bool {
        self.get(id).is_some_and(|def| def.variants.accepts(meta))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("item id must not be empty")]
    EmptyId,
    #[error("invalid meta {meta} for item '{id}'")]
    InvalidMeta { id: ItemId, meta: i32 },
}

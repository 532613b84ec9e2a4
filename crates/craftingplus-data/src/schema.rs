//! Serde data file structs for recipe definitions.
//!
//! A recipe document is a map with up to three optional categories
//! (`shapeless`, `shaped`, `smelting`), each an ordered list of entries.
//! Entries are kept as raw trees until the loader has read their station
//! tag, so an entry for an unrecognized station is skipped before any of
//! its other fields are looked at.

use craftingplus_core::item::ItemSpec;
use craftingplus_core::recipe::{FurnaceType, ShapelessRecipeType};
use serde::de::{Error as _, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;

// ===========================================================================
// Document
// ===========================================================================

/// The three recipe categories, in the order they are loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecipeCategory {
    Shapeless,
    Shaped,
    Smelting,
}

impl RecipeCategory {
    pub const ALL: [RecipeCategory; 3] = [
        RecipeCategory::Shapeless,
        RecipeCategory::Shaped,
        RecipeCategory::Smelting,
    ];

    pub fn key(self) -> &'static str {
        match self {
            RecipeCategory::Shapeless => "shapeless",
            RecipeCategory::Shaped => "shaped",
            RecipeCategory::Smelting => "smelting",
        }
    }
}

impl fmt::Display for RecipeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A parsed recipe document with its entries still unvalidated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeDocument {
    pub shapeless: Vec<Value>,
    pub shaped: Vec<Value>,
    pub smelting: Vec<Value>,
}

impl RecipeDocument {
    /// Split a parsed tree into categories. The root must be a map; a
    /// category that is present must be a list. Absent and `null`
    /// categories are empty. Other keys are ignored.
    pub fn from_tree(tree: Value) -> Result<Self, String> {
        let Value::Object(mut root) = tree else {
            return Err("root must be a map of recipe categories".to_string());
        };

        let mut take = |category: RecipeCategory| match root.get_mut(category.key()) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::Array(entries)) => Ok(std::mem::take(entries)),
            Some(_) => Err(format!("'{category}' must be a list of recipes")),
        };

        Ok(Self {
            shapeless: take(RecipeCategory::Shapeless)?,
            shaped: take(RecipeCategory::Shaped)?,
            smelting: take(RecipeCategory::Smelting)?,
        })
    }

    pub fn entries(&self, category: RecipeCategory) -> &[Value] {
        match category {
            RecipeCategory::Shapeless => &self.shapeless,
            RecipeCategory::Shaped => &self.shaped,
            RecipeCategory::Smelting => &self.smelting,
        }
    }

    pub fn len(&self) -> usize {
        self.shapeless.len() + self.shaped.len() + self.smelting.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ===========================================================================
// Station tags
// ===========================================================================

/// The `block` field every entry carries.
#[derive(Debug, Clone, Deserialize)]
pub struct EntryHeader {
    pub block: String,
}

/// A crafting station named by an entry's `block` tag. Tags match exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Station {
    CraftingTable,
    Stonecutter,
    Furnace,
    BlastFurnace,
    Smoker,
    Unrecognized(String),
}

impl Station {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "crafting_table" => Station::CraftingTable,
            "stonecutter" => Station::Stonecutter,
            "furnace" => Station::Furnace,
            "blast_furnace" => Station::BlastFurnace,
            "smoker" => Station::Smoker,
            other => Station::Unrecognized(other.to_string()),
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            Station::CraftingTable => "crafting_table",
            Station::Stonecutter => "stonecutter",
            Station::Furnace => "furnace",
            Station::BlastFurnace => "blast_furnace",
            Station::Smoker => "smoker",
            Station::Unrecognized(tag) => tag,
        }
    }

    pub fn shapeless_type(&self) -> Option<ShapelessRecipeType> {
        match self {
            Station::CraftingTable => Some(ShapelessRecipeType::Crafting),
            Station::Stonecutter => Some(ShapelessRecipeType::Stonecutter),
            _ => None,
        }
    }

    pub fn accepts_shaped(&self) -> bool {
        matches!(self, Station::CraftingTable)
    }

    pub fn furnace_type(&self) -> Option<FurnaceType> {
        match self {
            Station::Furnace => Some(FurnaceType::Furnace),
            Station::BlastFurnace => Some(FurnaceType::BlastFurnace),
            Station::Smoker => Some(FurnaceType::Smoker),
            _ => None,
        }
    }
}

// ===========================================================================
// Entries
// ===========================================================================

/// A shapeless recipe entry. The station tag is read from [`EntryHeader`].
#[derive(Debug, Clone, Deserialize)]
pub struct ShapelessEntry {
    pub input: Vec<ItemSpec>,
    pub output: Vec<ItemSpec>,
}

/// A shaped recipe entry.
#[derive(Debug, Clone, Deserialize)]
pub struct ShapedEntry {
    pub shape: Vec<String>,
    pub input: ShapedInputData,
    pub output: ShapedOutputData,
}

/// A smelting entry: one input, one output.
#[derive(Debug, Clone, Deserialize)]
pub struct SmeltingEntry {
    pub input: ItemSpec,
    pub output: ItemSpec,
}

/// Shaped recipe ingredients: keyed by shape symbol, or a plain list bound
/// to the shape's symbols in first-appearance order.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ShapedInputData {
    Keyed(std::collections::BTreeMap<String, ItemSpec>),
    Ordered(Vec<ItemSpec>),
}

/// Shaped recipe outputs plus the optional `name` and `enchantments`
/// modifiers.
///
/// Accepted forms:
/// - a list of item specs (no modifiers);
/// - one item spec (a map with an `id` key) whose `name` and
///   `enchantments` keys are the modifiers;
/// - a map whose `name` and `enchantments` keys are the modifiers and whose
///   other values are item specs, kept in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapedOutputData {
    pub items: Vec<ItemSpec>,
    pub name: Option<String>,
    pub enchantments: Option<EnchantmentList>,
}

impl ShapedOutputData {
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        match value {
            Value::Array(_) => Ok(Self {
                items: serde_json::from_value(value)?,
                ..Self::default()
            }),
            Value::Object(map) => {
                let mut output = Self::default();
                let mut rest = serde_json::Map::new();
                for (key, value) in map {
                    match key.as_str() {
                        "name" => output.name = serde_json::from_value(value)?,
                        "enchantments" => output.enchantments = serde_json::from_value(value)?,
                        _ => {
                            rest.insert(key, value);
                        }
                    }
                }
                output.items = if rest.contains_key("id") {
                    vec![serde_json::from_value(Value::Object(rest))?]
                } else {
                    rest.into_iter()
                        .map(|(_, spec)| serde_json::from_value(spec))
                        .collect::<Result<_, _>>()?
                };
                Ok(output)
            }
            _ => Err(serde_json::Error::custom(
                "output must be a list or map of item specs",
            )),
        }
    }
}

impl<'de> Deserialize<'de> for ShapedOutputData {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(value).map_err(D::Error::custom)
    }
}

/// `enchantment name -> level` pairs in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnchantmentList(pub Vec<(String, i32)>);

impl EnchantmentList {
    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> {
        self.0.iter().map(|(name, level)| (name.as_str(), *level))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for EnchantmentList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ListVisitor;

        impl<'de> Visitor<'de> for ListVisitor {
            type Value = EnchantmentList;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of enchantment names to levels")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut pairs = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, level)) = map.next_entry::<String, i32>()? {
                    pairs.push((name, level));
                }
                Ok(EnchantmentList(pairs))
            }
        }

        deserializer.deserialize_map(ListVisitor)
    }
}

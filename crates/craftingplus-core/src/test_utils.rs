//! Shared test helpers for unit and integration tests.
//!
//! Gated behind `#[cfg(any(test, feature = "test-utils"))]` so these helpers
//! are available in unit tests and, via the `test-utils` feature, in other
//! crates' tests.

use crate::crafting::{CraftingManager, CraftingRegistry, FurnaceRecipeManager};
use crate::item::Item;
use crate::recipe::*;
use crate::registry::{ItemTable, ItemTableBuilder};

// ===========================================================================
// Item constructors
// ===========================================================================

pub fn item(id: &str) -> Item {
    Item::new(id, 0, 1)
}

/// Items used across the test suites.
pub const TEST_ITEMS: &[&str] = &[
    "oak_log",
    "oak_planks",
    "wood_planks",
    "stick",
    "cobblestone",
    "stone",
    "stone_slab",
    "stone_bricks",
    "iron_ore",
    "iron_ingot",
    "iron_block",
    "gold_ore",
    "gold_ingot",
    "raw_iron",
    "beef",
    "cooked_beef",
    "sand",
    "glass",
    "diamond",
    "wheat",
    "bread",
    "hay_block",
];

/// An item table holding [`TEST_ITEMS`], a few wool colours and durable
/// diamond tools.
pub fn test_item_table() -> ItemTable {
    let mut b = ItemTableBuilder::new();
    for id in TEST_ITEMS {
        b.register_item(id);
    }
    b.register_variant("wool", 0)
        .register_variant("wool", 14)
        .register_durable("diamond_sword", 1561)
        .register_durable("diamond_pickaxe", 1561);
    b.build().expect("test item table is valid")
}

// ===========================================================================
// Registry wrapper
// ===========================================================================

/// A [`CraftingManager`] that also counts registration calls.
#[derive(Debug, Default)]
pub struct CountingRegistry {
    pub inner: CraftingManager,
    pub shapeless_calls: usize,
    pub shaped_calls: usize,
    pub furnace_calls: usize,
}

impl CountingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_calls(&self) -> usize {
        self.shapeless_calls + self.shaped_calls + self.furnace_calls
    }
}

impl CraftingRegistry for CountingRegistry {
    fn register_shapeless_recipe(&mut self, recipe: ShapelessRecipe) {
        self.shapeless_calls += 1;
        self.inner.register_shapeless_recipe(recipe);
    }

    fn register_shaped_recipe(&mut self, recipe: ShapedRecipe) {
        self.shaped_calls += 1;
        self.inner.register_shaped_recipe(recipe);
    }

    /// Counted on lookup: each lookup is followed by exactly one `register`.
    fn furnace_recipe_manager(&mut self, kind: FurnaceType) -> &mut FurnaceRecipeManager {
        self.furnace_calls += 1;
        self.inner.furnace_recipe_manager(kind)
    }
}

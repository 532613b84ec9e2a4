use crate::recipe::*;
use std::collections::BTreeMap;

/// Recipes registered for one kind of smelting station.
#[derive(Debug, Default)]
pub struct FurnaceRecipeManager {
    recipes: Vec<FurnaceRecipe>,
}

impl FurnaceRecipeManager {
    pub fn register(&mut self, recipe: FurnaceRecipe) {
        self.recipes.push(recipe);
    }

    pub fn recipes(&self) -> &[FurnaceRecipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

/// The host's crafting manager. Takes ownership of every recipe handed to it.
pub trait CraftingRegistry {
    fn register_shapeless_recipe(&mut self, recipe: ShapelessRecipe);

    fn register_shaped_recipe(&mut self, recipe: ShapedRecipe);

    /// The smelting sub-registry for one station kind.
    fn furnace_recipe_manager(&mut self, kind: FurnaceType) -> &mut FurnaceRecipeManager;
}

/// In-memory [`CraftingRegistry`].
#[derive(Debug)]
pub struct CraftingManager {
    shapeless: Vec<ShapelessRecipe>,
    shaped: Vec<ShapedRecipe>,
    furnaces: BTreeMap<FurnaceType, FurnaceRecipeManager>,
}

impl Default for CraftingManager {
    fn default() -> Self {
        Self::new()
    }
}

impl CraftingManager {
    pub fn new() -> Self {
        Self {
            shapeless: Vec::new(),
            shaped: Vec::new(),
            furnaces: FurnaceType::ALL
                .into_iter()
                .map(|kind| (kind, FurnaceRecipeManager::default()))
                .collect(),
        }
    }

    pub fn shapeless_recipes(&self) -> &[ShapelessRecipe] {
        &self.shapeless
    }

    pub fn shaped_recipes(&self) -> &[ShapedRecipe] {
        &self.shaped
    }

    pub fn furnace_recipes(&self, kind: FurnaceType) -> &[FurnaceRecipe] {
        self.furnaces
            .get(&kind)
            .map(FurnaceRecipeManager::recipes)
            .unwrap_or(&[])
    }

    /// Total recipes across every table.
    pub fn recipe_count(&self) -> usize {
        self.shapeless.len()
            + self.shaped.len()
            + self.furnaces.values().map(FurnaceRecipeManager::len).sum::<usize>()
    }
}

impl CraftingRegistry for CraftingManager {
    fn register_shapeless_recipe(&mut self, recipe: ShapelessRecipe) {
        self.shapeless.push(recipe);
    }

    fn register_shaped_recipe(&mut self, recipe: ShapedRecipe) {
        self.shaped.push(recipe);
    }

    fn furnace_recipe_manager(&mut self, kind: FurnaceType) -> &mut FurnaceRecipeManager {
        self.furnaces.entry(kind).or_default()
    }
}

//! Recipe value types.
//!
//! Constructors validate structure (grid dimensions, ingredient counts) and
//! take ownership of the item lists; a constructed recipe is immutable.

use crate::item::Item;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Maximum number of ingredients in a shapeless recipe (a 3x3 grid).
pub const MAX_SHAPELESS_INGREDIENTS: usize = 9;

/// Maximum rows and columns of a shaped recipe grid.
pub const MAX_GRID_SIZE: usize = 3;

/// The station a shapeless recipe is crafted at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapelessRecipeType {
    Crafting,
    Stonecutter,
}

/// The smelting station a furnace recipe belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FurnaceType {
    Furnace,
    BlastFurnace,
    Smoker,
}

impl FurnaceType {
    pub const ALL: [FurnaceType; 3] = [
        FurnaceType::Furnace,
        FurnaceType::BlastFurnace,
        FurnaceType::Smoker,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecipeError {
    #[error("shapeless recipes cannot have more than 9 ingredients, got {0}")]
    TooManyIngredients(usize),
    #[error("expected 1, 2 or 3 rows, got {0}")]
    InvalidRowCount(usize),
    #[error("expected 1, 2 or 3 columns, got {0}")]
    InvalidColumnCount(usize),
    #[error("shaped recipe rows must all have the same length")]
    RaggedShape,
    #[error("no item specified for symbol '{0}'")]
    MissingIngredient(char),
    #[error("symbol '{0}' does not appear in the recipe shape")]
    UnusedIngredient(char),
}

// ===========================================================================
// Shapeless
// ===========================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ShapelessRecipe {
    ingredients: Vec<Item>,
    results: Vec<Item>,
    recipe_type: ShapelessRecipeType,
}

impl ShapelessRecipe {
    pub fn new(
        ingredients: Vec<Item>,
        results: Vec<Item>,
        recipe_type: ShapelessRecipeType,
    ) -> Result<Self, RecipeError> {
        if ingredients.len() > MAX_SHAPELESS_INGREDIENTS {
            return Err(RecipeError::TooManyIngredients(ingredients.len()));
        }
        Ok(Self {
            ingredients,
            results,
            recipe_type,
        })
    }

    pub fn ingredients(&self) -> &[Item] {
        &self.ingredients
    }

    pub fn results(&self) -> &[Item] {
        &self.results
    }

    pub fn recipe_type(&self) -> ShapelessRecipeType {
        self.recipe_type
    }
}

// ===========================================================================
// Shaped
// ===========================================================================

/// A crafting recipe whose ingredients must occupy a grid pattern.
/// A space in the shape is an empty cell.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapedRecipe {
    shape: Vec<String>,
    ingredients: BTreeMap<char, Item>,
    results: Vec<Item>,
}

impl ShapedRecipe {
    pub fn new(
        shape: Vec<String>,
        ingredients: BTreeMap<char, Item>,
        results: Vec<Item>,
    ) -> Result<Self, RecipeError> {
        let rows = shape.len();
        if rows == 0 || rows > MAX_GRID_SIZE {
            return Err(RecipeError::InvalidRowCount(rows));
        }
        let width = shape[0].chars().count();
        if width == 0 || width > MAX_GRID_SIZE {
            return Err(RecipeError::InvalidColumnCount(width));
        }
        if shape.iter().any(|row| row.chars().count() != width) {
            return Err(RecipeError::RaggedShape);
        }

        for symbol in shape.iter().flat_map(|row| row.chars()) {
            if symbol != ' ' && !ingredients.contains_key(&symbol) {
                return Err(RecipeError::MissingIngredient(symbol));
            }
        }
        for &symbol in ingredients.keys() {
            if !shape.iter().any(|row| row.contains(symbol)) {
                return Err(RecipeError::UnusedIngredient(symbol));
            }
        }

        Ok(Self {
            shape,
            ingredients,
            results,
        })
    }

    pub fn shape(&self) -> &[String] {
        &self.shape
    }

    pub fn width(&self) -> usize {
        self.shape[0].chars().count()
    }

    pub fn height(&self) -> usize {
        self.shape.len()
    }

    pub fn ingredient(&self, symbol: char) -> Option<&Item> {
        self.ingredients.get(&symbol)
    }

    pub fn ingredients(&self) -> &BTreeMap<char, Item> {
        &self.ingredients
    }

    /// The ingredient at grid cell (x, y), or `None` for an empty cell.
    pub fn ingredient_at(&self, x: usize, y: usize) -> Option<&Item> {
        let symbol = self.shape.get(y)?.chars().nth(x)?;
        self.ingredients.get(&symbol)
    }

    pub fn results(&self) -> &[Item] {
        &self.results
    }
}

/// Distinct non-space symbols of a shape, in order of first appearance.
pub fn shape_symbols(shape: &[String]) -> Vec<char> {
    let mut symbols = Vec::new();
    for symbol in shape.iter().flat_map(|row| row.chars()) {
        if symbol != ' ' && !symbols.contains(&symbol) {
            symbols.push(symbol);
        }
    }
    symbols
}

// ===========================================================================
// Furnace
// ===========================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct FurnaceRecipe {
    result: Item,
    input: Item,
}

impl FurnaceRecipe {
    pub fn new(result: Item, input: Item) -> Self {
        Self { result, input }
    }

    pub fn result(&self) -> &Item {
        &self.result
    }

    pub fn input(&self) -> &Item {
        &self.input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str) -> Item {
        Item::new(id, 0, 1)
    }

    fn shape(rows: &[&str]) -> Vec<String> {
        rows.iter().map(|r| r.to_string()).collect()
    }

    fn keyed(pairs: &[(char, &str)]) -> BTreeMap<char, Item> {
        pairs.iter().map(|&(c, id)| (c, item(id))).collect()
    }

    #[test]
    fn shapeless_accepts_nine_ingredients() {
        let recipe = ShapelessRecipe::new(
            vec![item("wheat"); 9],
            vec![item("hay_block")],
            ShapelessRecipeType::Crafting,
        )
        .unwrap();
        assert_eq!(recipe.ingredients().len(), 9);
        assert_eq!(recipe.recipe_type(), ShapelessRecipeType::Crafting);
    }

    #[test]
    fn shapeless_rejects_ten_ingredients() {
        let result = ShapelessRecipe::new(
            vec![item("wheat"); 10],
            vec![item("hay_block")],
            ShapelessRecipeType::Crafting,
        );
        assert_eq!(result, Err(RecipeError::TooManyIngredients(10)));
    }

    #[test]
    fn empty_results_are_accepted() {
        let shapeless =
            ShapelessRecipe::new(vec![item("stone")], vec![], ShapelessRecipeType::Stonecutter).unwrap();
        assert!(shapeless.results().is_empty());

        let shaped = ShapedRecipe::new(shape(&["A"]), keyed(&[('A', "stick")]), vec![]).unwrap();
        assert!(shaped.results().is_empty());
    }

    #[test]
    fn shaped_grid_lookup() {
        let recipe = ShapedRecipe::new(
            shape(&["AB", "BA"]),
            keyed(&[('A', "oak_log"), ('B', "stick")]),
            vec![item("oak_planks")],
        )
        .unwrap();
        assert_eq!(recipe.width(), 2);
        assert_eq!(recipe.height(), 2);
        assert_eq!(recipe.ingredient_at(1, 0).unwrap().id().as_str(), "stick");
        assert_eq!(recipe.ingredient_at(1, 1).unwrap().id().as_str(), "oak_log");
        assert!(recipe.ingredient_at(2, 0).is_none());
    }

    #[test]
    fn shaped_spaces_are_empty_cells() {
        let recipe = ShapedRecipe::new(
            shape(&["A ", " A"]),
            keyed(&[('A', "stick")]),
            vec![item("ladder")],
        )
        .unwrap();
        assert!(recipe.ingredient_at(1, 0).is_none());
        assert!(recipe.ingredient_at(0, 0).is_some());
    }

    #[test]
    fn shaped_row_count_errors() {
        let none = ShapedRecipe::new(vec![], BTreeMap::new(), vec![item("x")]);
        assert_eq!(none, Err(RecipeError::InvalidRowCount(0)));

        let four = ShapedRecipe::new(
            shape(&["A", "A", "A", "A"]),
            keyed(&[('A', "stick")]),
            vec![item("x")],
        );
        assert_eq!(four, Err(RecipeError::InvalidRowCount(4)));
    }

    #[test]
    fn shaped_column_errors() {
        let wide = ShapedRecipe::new(shape(&["AAAA"]), keyed(&[('A', "stick")]), vec![item("x")]);
        assert_eq!(wide, Err(RecipeError::InvalidColumnCount(4)));

        let ragged = ShapedRecipe::new(shape(&["AA", "A"]), keyed(&[('A', "stick")]), vec![item("x")]);
        assert_eq!(ragged, Err(RecipeError::RaggedShape));
    }

    #[test]
    fn shaped_symbol_errors() {
        let missing = ShapedRecipe::new(shape(&["AB"]), keyed(&[('A', "stick")]), vec![item("x")]);
        assert_eq!(missing, Err(RecipeError::MissingIngredient('B')));

        let unused = ShapedRecipe::new(
            shape(&["AA"]),
            keyed(&[('A', "stick"), ('C', "coal")]),
            vec![item("x")],
        );
        assert_eq!(unused, Err(RecipeError::UnusedIngredient('C')));
    }

    #[test]
    fn symbols_in_first_appearance_order() {
        assert_eq!(shape_symbols(&shape(&["BA ", " AC"])), vec!['B', 'A', 'C']);
        assert!(shape_symbols(&shape(&["   "])).is_empty());
    }

    #[test]
    fn furnace_recipe_accessors() {
        let recipe = FurnaceRecipe::new(item("iron_ingot"), item("iron_ore"));
        assert_eq!(recipe.result().id().as_str(), "iron_ingot");
        assert_eq!(recipe.input().id().as_str(), "iron_ore");
    }
}

//! Property-based tests for the core item and recipe model.
//!
//! Generates random item specs and crafting grids, then verifies the
//! structural invariants of deserialization and recipe construction.

use craftingplus_core::id::*;
use craftingplus_core::item::*;
use craftingplus_core::recipe::*;
use craftingplus_core::registry::ItemRegistry;
use craftingplus_core::test_utils::*;
use craftingplus_core::text_format::{AmpersandColorizer, ESCAPE, TextFormatter};
use proptest::prelude::*;
use std::collections::BTreeMap;

// ===========================================================================
// Generators
// ===========================================================================

/// A valid item spec naming one of the fixture items.
fn arb_spec() -> impl Strategy<Value = ItemSpec> {
    (
        proptest::sample::select(TEST_ITEMS),
        -1..64i32,
        1..=64u32,
    )
        .prop_map(|(id, damage, count)| ItemSpec::named(id).with_damage(damage).with_count(count))
}

/// A rectangular grid of up to 3x3 cells drawn from a small symbol set.
fn arb_shape() -> impl Strategy<Value = Vec<String>> {
    (1..=MAX_GRID_SIZE, 1..=MAX_GRID_SIZE).prop_flat_map(|(rows, cols)| {
        proptest::collection::vec(
            proptest::collection::vec(prop_oneof![Just('A'), Just('B'), Just('C'), Just(' ')], cols),
            rows,
        )
        .prop_map(|grid| grid.into_iter().map(String::from_iter).collect())
    })
}

// ===========================================================================
// Properties
// ===========================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn deserialize_preserves_identity_meta_and_count(spec in arb_spec()) {
        let item = StandardItemDeserializer.deserialize(&spec).unwrap();
        let SpecId::Named(name) = &spec.id else { unreachable!() };
        prop_assert_eq!(item.id().as_str(), name.as_str());
        prop_assert_eq!(item.meta(), spec.damage);
        prop_assert_eq!(item.count(), spec.count);
        prop_assert_eq!(item.has_any_damage_value(), spec.damage == ANY_DAMAGE);
    }

    #[test]
    fn namespace_and_case_are_normalized(spec in arb_spec()) {
        let SpecId::Named(name) = &spec.id else { unreachable!() };
        let decorated = ItemSpec {
            id: SpecId::Named(format!("  minecraft:{}  ", name.to_ascii_uppercase())),
            ..spec.clone()
        };
        let plain = StandardItemDeserializer.deserialize(&spec).unwrap();
        let normalized = StandardItemDeserializer.deserialize(&decorated).unwrap();
        prop_assert_eq!(plain.key(), normalized.key());
    }

    #[test]
    fn wildcard_meta_is_never_registered(spec in arb_spec()) {
        let table = test_item_table();
        let item = StandardItemDeserializer.deserialize(&spec.with_damage(ANY_DAMAGE)).unwrap();
        prop_assert!(!table.is_registered(item.id(), item.meta()));
    }

    #[test]
    fn shaped_recipe_accepts_exactly_its_symbols(shape in arb_shape()) {
        let symbols = shape_symbols(&shape);
        let ingredients: BTreeMap<char, _> = symbols.iter().map(|&s| (s, item("stick"))).collect();
        // A grid of only spaces has no symbols and is still a valid shape.
        let recipe = ShapedRecipe::new(shape.clone(), ingredients, vec![item("stone")]).unwrap();

        prop_assert_eq!(recipe.ingredients().len(), symbols.len());
        prop_assert_eq!(recipe.height(), shape.len());
        prop_assert_eq!(recipe.width(), shape[0].chars().count());
        for (y, row) in shape.iter().enumerate() {
            for (x, symbol) in row.chars().enumerate() {
                prop_assert_eq!(recipe.ingredient_at(x, y).is_some(), symbol != ' ');
            }
        }
    }

    #[test]
    fn shaped_recipe_rejects_missing_symbol(shape in arb_shape()) {
        let mut symbols = shape_symbols(&shape);
        prop_assume!(!symbols.is_empty());
        let dropped = symbols.remove(0);
        let ingredients: BTreeMap<char, _> = symbols.iter().map(|&s| (s, item("stick"))).collect();
        let result = ShapedRecipe::new(shape, ingredients, vec![item("stone")]);
        prop_assert!(matches!(result, Err(RecipeError::MissingIngredient(s)) if s == dropped));
    }

    #[test]
    fn shapeless_ingredient_limit(n in 0..=12usize) {
        let ingredients = vec![item("wheat"); n];
        let result = ShapelessRecipe::new(ingredients, vec![item("bread")], ShapelessRecipeType::Crafting);
        if n <= MAX_SHAPELESS_INGREDIENTS {
            prop_assert!(result.is_ok());
        } else {
            prop_assert!(matches!(result, Err(RecipeError::TooManyIngredients(m)) if m == n));
        }
    }

    #[test]
    fn colorize_without_ampersands_is_identity(raw in "[a-zA-Z0-9 ]{0,24}") {
        prop_assert_eq!(AmpersandColorizer.colorize(&raw), raw);
    }

    #[test]
    fn colorize_preserves_char_count(raw in "[&a-z0-9 ]{0,24}") {
        let out = AmpersandColorizer.colorize(&raw);
        prop_assert_eq!(out.chars().count(), raw.chars().count());
        prop_assert_eq!(out.chars().filter(|&c| c == ESCAPE).count() + out.matches('&').count(),
            raw.matches('&').count());
    }
}

//! CraftingPlus Core -- the item and recipe model the recipe loader targets.
//!
//! This crate holds the value types (items, enchantments, recipes) and the
//! host capability traits the loader calls into. Each trait comes with an
//! in-memory implementation so the loader can run without a host.
//!
//! # Key Types
//!
//! - [`item::Item`] -- Immutable item value; `with_*` methods return copies.
//! - [`item::ItemDeserializer`] -- Turns an [`item::ItemSpec`] into an item.
//! - [`registry::ItemRegistry`] -- Answers "is this (id, meta) known?".
//!   [`registry::ItemTable`] is the frozen in-memory implementation.
//! - [`enchantment::EnchantmentParser`] -- Resolves enchantment names.
//! - [`text_format::TextFormatter`] -- Expands `&`-style colour markup.
//! - [`recipe`] -- Shapeless, shaped and furnace recipe values.
//! - [`crafting::CraftingRegistry`] -- Where loaded recipes are registered.
//!   [`crafting::CraftingManager`] keeps them in memory.

pub mod crafting;
pub mod enchantment;
pub mod id;
pub mod item;
pub mod recipe;
pub mod registry;
pub mod text_format;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

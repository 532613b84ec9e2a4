//! Validates recipe documents and registers the recipes they describe.
//!
//! Loading is fail-fast: the first invalid entry aborts the document with a
//! [`LoadError::Validation`], while recipes registered before it stay
//! registered. Entries for an unrecognized station or with an output the
//! item registry doesn't know are skipped and reported, not errors.

use craftingplus_core::crafting::CraftingRegistry;
use craftingplus_core::enchantment::{EnchantmentInstance, EnchantmentParser, VanillaEnchantments};
use craftingplus_core::id::ItemKey;
use craftingplus_core::item::{Item, ItemDeserializer, ItemSpec, StandardItemDeserializer};
use craftingplus_core::recipe::{FurnaceRecipe, ShapedRecipe, ShapelessRecipe, shape_symbols};
use craftingplus_core::registry::ItemRegistry;
use craftingplus_core::text_format::{AmpersandColorizer, TextFormatter};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, warn};

use crate::config::TransformMode;
use crate::loader::{Format, LoadError, ValidationError, parse_tree};
use crate::schema::{
    EntryHeader, RecipeCategory, RecipeDocument, ShapedEntry, ShapedInputData, ShapedOutputData,
    ShapelessEntry, SmeltingEntry, Station,
};

/// Origin used in messages for documents loaded from memory.
pub const MEMORY_ORIGIN: &str = "<memory>";

// ===========================================================================
// Host services
// ===========================================================================

/// The read-only host capabilities the loader calls into.
#[derive(Clone, Copy)]
pub struct HostServices<'a> {
    pub items: &'a dyn ItemRegistry,
    pub deserializer: &'a dyn ItemDeserializer,
    pub enchantments: &'a dyn EnchantmentParser,
    pub formatter: &'a dyn TextFormatter,
}

impl<'a> HostServices<'a> {
    /// The standard deserializer, vanilla enchantments and `&` colour codes
    /// over the given item registry.
    pub fn standard(items: &'a dyn ItemRegistry) -> Self {
        Self {
            items,
            deserializer: &StandardItemDeserializer,
            enchantments: &VanillaEnchantments,
            formatter: &AmpersandColorizer,
        }
    }
}

// ===========================================================================
// Report
// ===========================================================================

/// Why an entry was left out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    UnrecognizedStation(String),
    UnknownOutput(ItemKey),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    pub origin: String,
    pub category: RecipeCategory,
    pub index: usize,
    pub reason: SkipReason,
}

/// What a load registered and what it left out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub shapeless: usize,
    pub shaped: usize,
    pub smelting: usize,
    pub skipped: Vec<SkippedEntry>,
    /// Enchantment names that did not resolve, in the order met.
    pub unresolved_enchantments: Vec<String>,
}

impl LoadReport {
    pub fn registered(&self) -> usize {
        self.shapeless + self.shaped + self.smelting
    }

    pub fn merge(&mut self, other: LoadReport) {
        self.shapeless += other.shapeless;
        self.shaped += other.shaped;
        self.smelting += other.smelting;
        self.skipped.extend(other.skipped);
        self.unresolved_enchantments
            .extend(other.unresolved_enchantments);
    }

    fn count(&mut self, category: RecipeCategory) {
        match category {
            RecipeCategory::Shapeless => self.shapeless += 1,
            RecipeCategory::Shaped => self.shaped += 1,
            RecipeCategory::Smelting => self.smelting += 1,
        }
    }
}

enum Outcome {
    Registered,
    Skipped(SkipReason),
}

// ===========================================================================
// Loader
// ===========================================================================

pub struct RecipeLoader<'a> {
    services: HostServices<'a>,
    transform_mode: TransformMode,
}

impl<'a> RecipeLoader<'a> {
    pub fn new(services: HostServices<'a>) -> Self {
        Self {
            services,
            transform_mode: TransformMode::default(),
        }
    }

    pub fn with_transform_mode(mut self, mode: TransformMode) -> Self {
        self.transform_mode = mode;
        self
    }

    /// Load a JSON document.
    pub fn load(
        &self,
        document: &[u8],
        registry: &mut dyn CraftingRegistry,
    ) -> Result<LoadReport, LoadError> {
        self.load_with_format(document, Format::Json, MEMORY_ORIGIN, registry)
    }

    /// Load a document in the given format. `origin` names it in errors,
    /// logs and the report.
    pub fn load_with_format(
        &self,
        document: &[u8],
        format: Format,
        origin: &str,
        registry: &mut dyn CraftingRegistry,
    ) -> Result<LoadReport, LoadError> {
        let tree = parse_tree(document, format, origin)?;
        let doc = RecipeDocument::from_tree(tree).map_err(|detail| LoadError::Parse {
            origin: origin.to_string(),
            detail,
        })?;
        if doc.is_empty() {
            warn!(origin, "document has no recipe entries");
        } else {
            debug!(origin, entries = doc.len(), "loading recipe document");
        }

        let mut report = LoadReport::default();
        for category in RecipeCategory::ALL {
            for (index, entry) in doc.entries(category).iter().enumerate() {
                let outcome = match category {
                    RecipeCategory::Shapeless => self.load_shapeless(entry, registry),
                    RecipeCategory::Shaped => {
                        self.load_shaped(entry, registry, &mut report.unresolved_enchantments)
                    }
                    RecipeCategory::Smelting => self.load_smelting(entry, registry),
                }
                .map_err(|reason| LoadError::Validation {
                    origin: origin.to_string(),
                    category,
                    index,
                    reason,
                })?;

                match outcome {
                    Outcome::Registered => {
                        debug!(origin, %category, index, "registered recipe");
                        report.count(category);
                    }
                    Outcome::Skipped(reason) => {
                        warn!(origin, %category, index, ?reason, "skipped recipe");
                        report.skipped.push(SkippedEntry {
                            origin: origin.to_string(),
                            category,
                            index,
                            reason,
                        });
                    }
                }
            }
        }

        Ok(report)
    }

    // -----------------------------------------------------------------------
    // Categories
    // -----------------------------------------------------------------------

    fn load_shapeless(
        &self,
        entry: &Value,
        registry: &mut dyn CraftingRegistry,
    ) -> Result<Outcome, ValidationError> {
        let station = station(entry)?;
        let Some(recipe_type) = station.shapeless_type() else {
            return Ok(unrecognized(station));
        };

        let entry = ShapelessEntry::deserialize(entry)?;
        let output = self.deserialize_all(&entry.output)?;
        if let Some(reason) = self.check_outputs(&output)? {
            return Ok(Outcome::Skipped(reason));
        }

        let input = self.deserialize_all(&entry.input)?;
        registry.register_shapeless_recipe(ShapelessRecipe::new(input, output, recipe_type)?);
        Ok(Outcome::Registered)
    }

    fn load_shaped(
        &self,
        entry: &Value,
        registry: &mut dyn CraftingRegistry,
        unresolved: &mut Vec<String>,
    ) -> Result<Outcome, ValidationError> {
        let station = station(entry)?;
        if !station.accepts_shaped() {
            return Ok(unrecognized(station));
        }

        let entry = ShapedEntry::deserialize(entry)?;
        let output = self.deserialize_all(&entry.output.items)?;
        if let Some(reason) = self.check_outputs(&output)? {
            return Ok(Outcome::Skipped(reason));
        }

        let output = self.apply_modifiers(output, &entry.output, unresolved);
        let ingredients = self.resolve_ingredients(&entry.shape, &entry.input)?;
        registry.register_shaped_recipe(ShapedRecipe::new(entry.shape, ingredients, output)?);
        Ok(Outcome::Registered)
    }

    fn load_smelting(
        &self,
        entry: &Value,
        registry: &mut dyn CraftingRegistry,
    ) -> Result<Outcome, ValidationError> {
        let station = station(entry)?;
        let Some(kind) = station.furnace_type() else {
            return Ok(unrecognized(station));
        };

        let entry = SmeltingEntry::deserialize(entry)?;
        let output = self.deserialize(&entry.output)?;
        if let Some(reason) = self.check_outputs(std::slice::from_ref(&output))? {
            return Ok(Outcome::Skipped(reason));
        }

        let input = self.deserialize(&entry.input)?;
        registry
            .furnace_recipe_manager(kind)
            .register(FurnaceRecipe::new(output, input));
        Ok(Outcome::Registered)
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    fn deserialize_all(&self, specs: &[ItemSpec]) -> Result<Vec<Item>, ValidationError> {
        specs
            .iter()
            .map(|spec| self.deserialize(spec))
            .collect()
    }

    fn deserialize(&self, spec: &ItemSpec) -> Result<Item, ValidationError> {
        self.services
            .deserializer
            .deserialize(spec)
            .map_err(ValidationError::from)
    }

    /// Wildcard outputs are an error wherever they appear; otherwise the
    /// first output the registry doesn't know makes the entry a skip.
    fn check_outputs(&self, outputs: &[Item]) -> Result<Option<SkipReason>, ValidationError> {
        if let Some(item) = outputs.iter().find(|i| i.has_any_damage_value()) {
            return Err(ValidationError::WildcardOutput(item.key()));
        }
        Ok(outputs
            .iter()
            .find(|i| !self.services.items.is_registered(i.id(), i.meta()))
            .map(|i| SkipReason::UnknownOutput(i.key())))
    }

    fn apply_modifiers(
        &self,
        original: Vec<Item>,
        modifiers: &ShapedOutputData,
        unresolved: &mut Vec<String>,
    ) -> Vec<Item> {
        let compound = self.transform_mode == TransformMode::Compound;
        let mut output = original.clone();

        if let Some(name) = modifiers.name.as_deref() {
            if !name.trim().is_empty() {
                let display = self.services.formatter.colorize(name);
                output = original
                    .iter()
                    .map(|item| item.with_custom_name(display.as_str()))
                    .collect();
            }
        }

        if let Some(enchantments) = &modifiers.enchantments {
            for (name, level) in enchantments.iter() {
                let base = if compound { &output } else { &original };
                output = match self.services.enchantments.parse(name) {
                    Some(enchantment) => base
                        .iter()
                        .map(|item| {
                            item.with_enchantment(EnchantmentInstance::new(enchantment.clone(), level))
                        })
                        .collect(),
                    None => {
                        warn!(enchantment = name, "unknown enchantment");
                        unresolved.push(name.to_string());
                        base.clone()
                    }
                };
            }
        }

        output
    }

    fn resolve_ingredients(
        &self,
        shape: &[String],
        input: &ShapedInputData,
    ) -> Result<BTreeMap<char, Item>, ValidationError> {
        match input {
            ShapedInputData::Keyed(specs) => specs
                .iter()
                .map(|(key, spec)| {
                    let mut chars = key.chars();
                    match (chars.next(), chars.next()) {
                        (Some(symbol), None) => self.deserialize(spec).map(|item| (symbol, item)),
                        _ => Err(ValidationError::Malformed(format!(
                            "ingredient key '{key}' must be a single character"
                        ))),
                    }
                })
                .collect(),
            ShapedInputData::Ordered(specs) => {
                let symbols = shape_symbols(shape);
                if symbols.len() != specs.len() {
                    return Err(ValidationError::Malformed(format!(
                        "shape uses {} symbols but {} inputs were given",
                        symbols.len(),
                        specs.len()
                    )));
                }
                symbols
                    .into_iter()
                    .zip(specs)
                    .map(|(symbol, spec)| self.deserialize(spec).map(|item| (symbol, item)))
                    .collect()
            }
        }
    }
}

fn station(entry: &Value) -> Result<Station, ValidationError> {
    let header = EntryHeader::deserialize(entry)?;
    Ok(Station::from_tag(&header.block))
}

fn unrecognized(station: Station) -> Outcome {
    Outcome::Skipped(SkipReason::UnrecognizedStation(station.tag().to_string()))
}

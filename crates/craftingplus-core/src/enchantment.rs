//! Enchantment types and name resolution.

use crate::id::EnchantmentId;
use serde::{Deserialize, Serialize};

/// An enchantment type known to the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Enchantment {
    pub id: EnchantmentId,
    pub name: String,
    pub max_level: u8,
}

/// An enchantment applied to an item at a given level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnchantmentInstance {
    pub enchantment: Enchantment,
    pub level: i32,
}

impl EnchantmentInstance {
    pub fn new(enchantment: Enchantment, level: i32) -> Self {
        Self { enchantment, level }
    }
}

/// Resolves a user-supplied enchantment name to an enchantment type.
pub trait EnchantmentParser {
    /// Returns `None` when the name is not known.
    fn parse(&self, name: &str) -> Option<Enchantment>;
}

/// (name, max level) in id order.
const VANILLA: &[(&str, u8)] = &[
    ("protection", 4),
    ("fire_protection", 4),
    ("feather_falling", 4),
    ("blast_protection", 4),
    ("projectile_protection", 4),
    ("thorns", 3),
    ("respiration", 3),
    ("depth_strider", 3),
    ("aqua_affinity", 1),
    ("sharpness", 5),
    ("smite", 5),
    ("bane_of_arthropods", 5),
    ("knockback", 2),
    ("fire_aspect", 2),
    ("looting", 3),
    ("efficiency", 5),
    ("silk_touch", 1),
    ("unbreaking", 3),
    ("fortune", 3),
    ("power", 5),
    ("punch", 2),
    ("flame", 1),
    ("infinity", 1),
    ("luck_of_the_sea", 3),
    ("lure", 3),
    ("frost_walker", 2),
    ("mending", 1),
    ("binding", 1),
    ("vanishing", 1),
    ("impaling", 5),
    ("riptide", 3),
    ("loyalty", 3),
    ("channeling", 1),
    ("multishot", 1),
    ("piercing", 4),
    ("quick_charge", 3),
    ("soul_speed", 3),
    ("swift_sneak", 3),
];

/// The vanilla enchantment table. Names match case-insensitively and treat
/// spaces and underscores alike, so `"Fire Aspect"` resolves to `fire_aspect`.
#[derive(Debug, Clone, Copy, Default)]
pub struct VanillaEnchantments;

impl VanillaEnchantments {
    fn normalize(name: &str) -> String {
        name.trim().to_ascii_lowercase().replace(' ', "_")
    }
}

impl EnchantmentParser for VanillaEnchantments {
    fn parse(&self, name: &str) -> Option<Enchantment> {
        let wanted = Self::normalize(name);
        VANILLA
            .iter()
            .position(|(n, _)| *n == wanted)
            .map(|index| Enchantment {
                id: EnchantmentId(index as u16),
                name: VANILLA[index].0.to_string(),
                max_level: VANILLA[index].1,
            })
    }
}

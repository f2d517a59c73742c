//! Enchantment identifiers

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Enchantment {
    Efficiency,
    Fortune,
    SilkTouch,
    Unbreaking,
    Mending,
    Sharpness,
    Smite,
    BaneOfArthropods,
    FireAspect,
    Looting,
    SweepingEdge,
    Knockback,
}

impl Enchantment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Enchantment::Efficiency => "EFFICIENCY",
            Enchantment::Fortune => "FORTUNE",
            Enchantment::SilkTouch => "SILK_TOUCH",
            Enchantment::Unbreaking => "UNBREAKING",
            Enchantment::Mending => "MENDING",
            Enchantment::Sharpness => "SHARPNESS",
            Enchantment::Smite => "SMITE",
            Enchantment::BaneOfArthropods => "BANE_OF_ARTHROPODS",
            Enchantment::FireAspect => "FIRE_ASPECT",
            Enchantment::Looting => "LOOTING",
            Enchantment::SweepingEdge => "SWEEPING_EDGE",
            Enchantment::Knockback => "KNOCKBACK",
        }
    }

    /// Resolve a configured name, accepting legacy server aliases
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_uppercase().replace(['-', ' '], "_");
        let name = name.strip_prefix("MINECRAFT:").unwrap_or(&name);
        match name {
            "EFFICIENCY" | "DIG_SPEED" => Some(Enchantment::Efficiency),
            "FORTUNE" | "LOOT_BONUS_BLOCKS" => Some(Enchantment::Fortune),
            "SILK_TOUCH" | "SILKTOUCH" => Some(Enchantment::SilkTouch),
            "UNBREAKING" | "DURABILITY" => Some(Enchantment::Unbreaking),
            "MENDING" => Some(Enchantment::Mending),
            "SHARPNESS" | "DAMAGE_ALL" => Some(Enchantment::Sharpness),
            "SMITE" | "DAMAGE_UNDEAD" => Some(Enchantment::Smite),
            "BANE_OF_ARTHROPODS" | "DAMAGE_ARTHROPODS" => Some(Enchantment::BaneOfArthropods),
            "FIRE_ASPECT" | "FIRE" => Some(Enchantment::FireAspect),
            "LOOTING" | "LOOT_BONUS_MOBS" => Some(Enchantment::Looting),
            "SWEEPING_EDGE" | "SWEEPING" => Some(Enchantment::SweepingEdge),
            "KNOCKBACK" => Some(Enchantment::Knockback),
            _ => None,
        }
    }
}

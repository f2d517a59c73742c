//! Capability classes and item classification
//!
//! An item's capability class is a pure function of its identifier: the
//! `_PICKAXE`/`_AXE`/`_SHOVEL`/`_HOE`/`_SWORD` suffix, or exact identity
//! for shears.

use crate::core::types::ItemId;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Category of action a tool or weapon is suited for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CapabilityClass {
    Pickaxe,
    Axe,
    Shovel,
    Hoe,
    Sword,
    Shears,
    None,
}

impl CapabilityClass {
    /// Every class that a tool can belong to, in classification order
    pub const TOOLS: [CapabilityClass; 6] = [
        CapabilityClass::Pickaxe,
        CapabilityClass::Axe,
        CapabilityClass::Shovel,
        CapabilityClass::Hoe,
        CapabilityClass::Sword,
        CapabilityClass::Shears,
    ];

    pub const COUNT: usize = 7;

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CapabilityClass::Pickaxe => "PICKAXE",
            CapabilityClass::Axe => "AXE",
            CapabilityClass::Shovel => "SHOVEL",
            CapabilityClass::Hoe => "HOE",
            CapabilityClass::Sword => "SWORD",
            CapabilityClass::Shears => "SHEARS",
            CapabilityClass::None => "NONE",
        }
    }

    /// Parse a configuration key (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PICKAXE" => Some(CapabilityClass::Pickaxe),
            "AXE" => Some(CapabilityClass::Axe),
            "SHOVEL" => Some(CapabilityClass::Shovel),
            "HOE" => Some(CapabilityClass::Hoe),
            "SWORD" => Some(CapabilityClass::Sword),
            "SHEARS" => Some(CapabilityClass::Shears),
            _ => None,
        }
    }
}

/// Fixed-size table indexed by the closed [`CapabilityClass`] enum
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassMap<T> {
    entries: [T; CapabilityClass::COUNT],
}

impl<T: Default> Default for ClassMap<T> {
    fn default() -> Self {
        Self {
            entries: std::array::from_fn(|_| T::default()),
        }
    }
}

impl<T> ClassMap<T> {
    pub fn iter(&self) -> impl Iterator<Item = (CapabilityClass, &T)> {
        CapabilityClass::TOOLS
            .iter()
            .map(move |class| (*class, &self.entries[class.index()]))
    }
}

impl<T> Index<CapabilityClass> for ClassMap<T> {
    type Output = T;

    fn index(&self, class: CapabilityClass) -> &T {
        &self.entries[class.index()]
    }
}

impl<T> IndexMut<CapabilityClass> for ClassMap<T> {
    fn index_mut(&mut self, class: CapabilityClass) -> &mut T {
        &mut self.entries[class.index()]
    }
}

/// Classify a tool by its identifier. Total: unknown items are `None`.
pub fn classify_tool(item: &ItemId) -> CapabilityClass {
    let name = item.as_str();
    if name == "SHEARS" {
        CapabilityClass::Shears
    } else if name.ends_with("_PICKAXE") {
        CapabilityClass::Pickaxe
    } else if name.ends_with("_AXE") {
        CapabilityClass::Axe
    } else if name.ends_with("_SHOVEL") {
        CapabilityClass::Shovel
    } else if name.ends_with("_HOE") {
        CapabilityClass::Hoe
    } else if name.ends_with("_SWORD") {
        CapabilityClass::Sword
    } else {
        CapabilityClass::None
    }
}

/// Swords and axes both count as weapons
pub fn classify_weapon(item: &ItemId) -> bool {
    let name = item.as_str();
    name.ends_with("_SWORD") || name.ends_with("_AXE")
}

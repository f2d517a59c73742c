//! Item stacks and candidate snapshots

use crate::core::types::ItemId;
use crate::inventory::enchantment::Enchantment;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An item stack as held in an inventory slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    pub id: ItemId,
    /// Enchantment levels, ordered by enchantment
    #[serde(default)]
    pub enchantments: BTreeMap<Enchantment, u32>,
    /// Remaining durability (0 for items without durability)
    #[serde(default)]
    pub durability: u32,
}

impl ItemStack {
    pub fn new(id: &str) -> Self {
        Self {
            id: ItemId::new(id),
            enchantments: BTreeMap::new(),
            durability: 0,
        }
    }

    pub fn with_enchantment(mut self, enchantment: Enchantment, level: u32) -> Self {
        if level > 0 {
            self.enchantments.insert(enchantment, level);
        }
        self
    }

    pub fn with_durability(mut self, durability: u32) -> Self {
        self.durability = durability;
        self
    }

    /// Level of an enchantment, 0 when absent
    pub fn level(&self, enchantment: Enchantment) -> u32 {
        self.enchantments.get(&enchantment).copied().unwrap_or(0)
    }
}

/// Immutable snapshot of an eligible item and where it was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateItem {
    pub slot: usize,
    pub stack: ItemStack,
}

impl CandidateItem {
    pub fn new(slot: usize, stack: ItemStack) -> Self {
        Self { slot, stack }
    }

    pub fn id(&self) -> &ItemId {
        &self.stack.id
    }

    pub fn level(&self, enchantment: Enchantment) -> u32 {
        self.stack.level(enchantment)
    }

    pub fn durability(&self) -> u32 {
        self.stack.durability
    }
}

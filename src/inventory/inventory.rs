//! Player inventory: hotbar, main storage and the held-slot pointer

use crate::core::error::{EquipError, Result};
use crate::inventory::stack::ItemStack;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Quick-access slots (0..9)
pub const HOTBAR_SIZE: usize = 9;
/// Main storage slots (9..36)
pub const MAIN_SIZE: usize = 27;
pub const INVENTORY_SIZE: usize = HOTBAR_SIZE + MAIN_SIZE;

/// Searchable inventory regions, in scan order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InventoryRegion {
    Hotbar,
    Main,
}

impl InventoryRegion {
    pub fn slots(&self) -> Range<usize> {
        match self {
            InventoryRegion::Hotbar => 0..HOTBAR_SIZE,
            InventoryRegion::Main => HOTBAR_SIZE..INVENTORY_SIZE,
        }
    }

    pub fn of_slot(slot: usize) -> Option<Self> {
        if slot < HOTBAR_SIZE {
            Some(InventoryRegion::Hotbar)
        } else if slot < INVENTORY_SIZE {
            Some(InventoryRegion::Main)
        } else {
            None
        }
    }
}

/// A player's inventory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerInventory {
    slots: Vec<Option<ItemStack>>,
    held_slot: usize,
    /// Bumped on every write so callers can detect mutations
    revision: u64,
}

impl Default for PlayerInventory {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerInventory {
    pub fn new() -> Self {
        Self {
            slots: vec![None; INVENTORY_SIZE],
            held_slot: 0,
            revision: 0,
        }
    }

    /// Place a stack in a slot (builder style). Out-of-range slots are
    /// ignored; use [`set_item`](Self::set_item) to get an error instead.
    pub fn with_item(mut self, slot: usize, stack: ItemStack) -> Self {
        match self.slots.get_mut(slot) {
            Some(entry) => *entry = Some(stack),
            None => tracing::warn!("Slot {} out of range, {} not placed", slot, stack.id),
        }
        self
    }

    pub fn item(&self, slot: usize) -> Option<&ItemStack> {
        self.slots.get(slot).and_then(|s| s.as_ref())
    }

    /// Replace a slot's contents, returning what was there
    pub fn set_item(&mut self, slot: usize, stack: Option<ItemStack>) -> Result<Option<ItemStack>> {
        let entry = self.slots.get_mut(slot).ok_or(EquipError::InvalidSlot(slot))?;
        self.revision += 1;
        Ok(std::mem::replace(entry, stack))
    }

    pub fn held_slot(&self) -> usize {
        self.held_slot
    }

    pub fn held_item(&self) -> Option<&ItemStack> {
        self.item(self.held_slot)
    }

    /// Point the held-item cursor at a hotbar slot
    pub fn select_hotbar_slot(&mut self, slot: usize) -> Result<()> {
        if slot >= HOTBAR_SIZE {
            return Err(EquipError::InvalidSlot(slot));
        }
        self.held_slot = slot;
        self.revision += 1;
        Ok(())
    }

    /// Exchange two slots in one step
    pub fn swap_slots(&mut self, a: usize, b: usize) -> Result<()> {
        if a >= self.slots.len() {
            return Err(EquipError::InvalidSlot(a));
        }
        if b >= self.slots.len() {
            return Err(EquipError::InvalidSlot(b));
        }
        self.slots.swap(a, b);
        self.revision += 1;
        Ok(())
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Occupied slots of a region in slot order
    pub fn region(&self, region: InventoryRegion) -> impl Iterator<Item = (usize, &ItemStack)> {
        let range = region.slots();
        let start = range.start;
        self.slots[range]
            .iter()
            .enumerate()
            .filter_map(move |(i, s)| s.as_ref().map(|stack| (start + i, stack)))
    }

    /// Every occupied slot in slot order
    pub fn occupied(&self) -> impl Iterator<Item = (usize, &ItemStack)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|stack| (i, stack)))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let file: InventoryFile = serde_json::from_str(json)?;
        file.into_inventory()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&InventoryFile::from(self))?)
    }
}

/// On-disk inventory snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryFile {
    #[serde(default)]
    pub held_slot: usize,
    #[serde(default)]
    pub slots: Vec<SlotEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotEntry {
    pub slot: usize,
    #[serde(flatten)]
    pub stack: ItemStack,
}

impl InventoryFile {
    pub fn into_inventory(self) -> Result<PlayerInventory> {
        let mut inventory = PlayerInventory::new();
        inventory.select_hotbar_slot(self.held_slot)?;
        for entry in self.slots {
            inventory.set_item(entry.slot, Some(entry.stack))?;
        }
        inventory.revision = 0;
        Ok(inventory)
    }
}

impl From<&PlayerInventory> for InventoryFile {
    fn from(inventory: &PlayerInventory) -> Self {
        Self {
            held_slot: inventory.held_slot,
            slots: inventory
                .occupied()
                .map(|(slot, stack)| SlotEntry {
                    slot,
                    stack: stack.clone(),
                })
                .collect(),
        }
    }
}

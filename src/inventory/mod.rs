//! Inventory model: item stacks, enchantments, slots and regions

pub mod enchantment;
#[allow(clippy::module_inception)]
pub mod inventory;
pub mod stack;

pub use enchantment::Enchantment;
pub use inventory::{
    InventoryFile, InventoryRegion, PlayerInventory, SlotEntry, HOTBAR_SIZE, INVENTORY_SIZE,
    MAIN_SIZE,
};
pub use stack::{CandidateItem, ItemStack};

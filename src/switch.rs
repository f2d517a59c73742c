//! Switch executor: put the winning item in the player's hand
//!
//! A winner in the hotbar only moves the held-slot pointer. A winner in
//! main storage is swapped with the held slot in a single inventory write,
//! so the item is never duplicated or lost in between.

use crate::core::error::Result;
use crate::inventory::{CandidateItem, InventoryRegion, PlayerInventory};

/// What equipping the winner did (or would do) to the inventory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchAction {
    /// The winner is already in hand
    AlreadyHeld,
    /// The winner is no longer in the inventory
    NotFound,
    /// Move the held-slot pointer to a hotbar slot
    SelectSlot { slot: usize },
    /// Exchange a main-storage slot with the held slot
    Swap { from_slot: usize, held_slot: usize },
}

impl SwitchAction {
    pub fn mutates(&self) -> bool {
        matches!(self, SwitchAction::SelectSlot { .. } | SwitchAction::Swap { .. })
    }
}

/// Decide how to equip `winner` without touching the inventory
pub fn plan_equip(inventory: &PlayerInventory, winner: &CandidateItem) -> SwitchAction {
    if inventory.held_item() == Some(&winner.stack) {
        return SwitchAction::AlreadyHeld;
    }

    let found = inventory
        .occupied()
        .find(|(_, stack)| **stack == winner.stack)
        .map(|(slot, _)| slot);

    match found.and_then(|slot| InventoryRegion::of_slot(slot).map(|region| (slot, region))) {
        None => SwitchAction::NotFound,
        Some((slot, InventoryRegion::Hotbar)) => SwitchAction::SelectSlot { slot },
        Some((slot, InventoryRegion::Main)) => SwitchAction::Swap {
            from_slot: slot,
            held_slot: inventory.held_slot(),
        },
    }
}

/// Apply a planned action
pub fn apply(inventory: &mut PlayerInventory, action: SwitchAction) -> Result<()> {
    match action {
        SwitchAction::AlreadyHeld | SwitchAction::NotFound => Ok(()),
        SwitchAction::SelectSlot { slot } => inventory.select_hotbar_slot(slot),
        SwitchAction::Swap {
            from_slot,
            held_slot,
        } => inventory.swap_slots(from_slot, held_slot),
    }
}

/// Equip `winner`, returning the action taken
pub fn equip(inventory: &mut PlayerInventory, winner: &CandidateItem) -> Result<SwitchAction> {
    let action = plan_equip(inventory, winner);
    apply(inventory, action)?;
    Ok(action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::ItemStack;

    fn pick(name: &str) -> ItemStack {
        ItemStack::new(name).with_durability(100)
    }

    #[test]
    fn test_already_held_is_noop() {
        let mut inventory = PlayerInventory::new().with_item(0, pick("IRON_PICKAXE"));
        let winner = CandidateItem::new(0, pick("IRON_PICKAXE"));
        let before = inventory.clone();

        let action = equip(&mut inventory, &winner).unwrap();

        assert_eq!(action, SwitchAction::AlreadyHeld);
        assert_eq!(inventory, before);
    }

    #[test]
    fn test_hotbar_winner_moves_pointer() {
        let mut inventory = PlayerInventory::new()
            .with_item(0, ItemStack::new("DIRT"))
            .with_item(5, pick("DIAMOND_PICKAXE"));
        let winner = CandidateItem::new(5, pick("DIAMOND_PICKAXE"));

        let action = equip(&mut inventory, &winner).unwrap();

        assert_eq!(action, SwitchAction::SelectSlot { slot: 5 });
        assert_eq!(inventory.held_slot(), 5);
        assert_eq!(inventory.item(0).unwrap().id.as_str(), "DIRT");
    }

    #[test]
    fn test_main_winner_swaps_with_held() {
        let mut inventory = PlayerInventory::new()
            .with_item(0, ItemStack::new("DIRT"))
            .with_item(20, pick("DIAMOND_PICKAXE"));
        let winner = CandidateItem::new(20, pick("DIAMOND_PICKAXE"));

        let action = equip(&mut inventory, &winner).unwrap();

        assert_eq!(action, SwitchAction::Swap { from_slot: 20, held_slot: 0 });
        assert_eq!(inventory.held_item().unwrap().id.as_str(), "DIAMOND_PICKAXE");
        assert_eq!(inventory.item(20).unwrap().id.as_str(), "DIRT");
        assert_eq!(inventory.occupied().count(), 2);
    }

    #[test]
    fn test_swap_into_empty_hand() {
        let mut inventory = PlayerInventory::new().with_item(30, pick("IRON_AXE"));
        let winner = CandidateItem::new(30, pick("IRON_AXE"));

        equip(&mut inventory, &winner).unwrap();

        assert_eq!(inventory.held_item().unwrap().id.as_str(), "IRON_AXE");
        assert!(inventory.item(30).is_none());
    }

    #[test]
    fn test_vanished_winner_is_noop() {
        let mut inventory = PlayerInventory::new().with_item(0, ItemStack::new("DIRT"));
        let winner = CandidateItem::new(12, pick("IRON_AXE"));
        let before = inventory.clone();

        let action = equip(&mut inventory, &winner).unwrap();

        assert_eq!(action, SwitchAction::NotFound);
        assert!(!action.mutates());
        assert_eq!(inventory, before);
    }

    #[test]
    fn test_first_structural_match_wins() {
        let inventory = PlayerInventory::new()
            .with_item(0, ItemStack::new("DIRT"))
            .with_item(14, pick("IRON_AXE"))
            .with_item(25, pick("IRON_AXE"));
        let winner = CandidateItem::new(25, pick("IRON_AXE"));

        assert_eq!(
            plan_equip(&inventory, &winner),
            SwitchAction::Swap { from_slot: 14, held_slot: 0 }
        );
    }
}

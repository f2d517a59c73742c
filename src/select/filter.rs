//! Eligibility filter: which inventory items may be considered at all

use crate::classify::{classify_tool, classify_weapon, CapabilityClass};
use crate::core::config::EngineConfig;
use crate::core::types::BlockId;
use crate::inventory::{CandidateItem, InventoryRegion, ItemStack, PlayerInventory};
use crate::oracle::WorldOracle;
use crate::tier::{required_tier, tier, HarvestRequirement};

/// Inventory regions to scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchScope {
    pub hotbar: bool,
    pub main: bool,
}

impl SearchScope {
    pub fn all() -> Self {
        Self {
            hotbar: true,
            main: true,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            hotbar: config.search_hotbar,
            main: config.search_main,
        }
    }

    /// Enabled regions, hotbar first
    pub fn regions(&self) -> impl Iterator<Item = InventoryRegion> {
        [
            (self.hotbar, InventoryRegion::Hotbar),
            (self.main, InventoryRegion::Main),
        ]
        .into_iter()
        .filter_map(|(enabled, region)| enabled.then_some(region))
    }
}

fn scan<F>(inventory: &PlayerInventory, scope: SearchScope, mut keep: F) -> Vec<CandidateItem>
where
    F: FnMut(&ItemStack) -> bool,
{
    scope
        .regions()
        .flat_map(|region| inventory.region(region))
        .filter(|(_, stack)| keep(*stack))
        .map(|(slot, stack)| CandidateItem::new(slot, stack.clone()))
        .collect()
}

/// Tools of `class` that may be used on `block`.
///
/// With `check_harvest_tier` set, tools below the block's required tier are
/// dropped. An empty result means nothing should be equipped.
pub fn select_candidates(
    inventory: &PlayerInventory,
    class: CapabilityClass,
    block: Option<&BlockId>,
    scope: SearchScope,
    check_harvest_tier: bool,
    oracle: &dyn WorldOracle,
) -> Vec<CandidateItem> {
    if class == CapabilityClass::None {
        return Vec::new();
    }

    let requirement = match block {
        Some(block) if check_harvest_tier => required_tier(block, oracle),
        _ => HarvestRequirement::None,
    };

    scan(inventory, scope, |stack| {
        classify_tool(&stack.id) == class && requirement.is_satisfied_by(tier(&stack.id))
    })
}

/// Every sword or axe in scope
pub fn select_weapons(inventory: &PlayerInventory, scope: SearchScope) -> Vec<CandidateItem> {
    scan(inventory, scope, |stack| classify_weapon(&stack.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::{BlockTag, StaticTagOracle};

    fn inventory() -> PlayerInventory {
        PlayerInventory::new()
            .with_item(0, ItemStack::new("STONE_PICKAXE"))
            .with_item(1, ItemStack::new("DIRT"))
            .with_item(3, ItemStack::new("IRON_SWORD"))
            .with_item(10, ItemStack::new("IRON_PICKAXE"))
            .with_item(11, ItemStack::new("WOODEN_AXE"))
            .with_item(30, ItemStack::new("DIAMOND_PICKAXE"))
    }

    fn oracle() -> StaticTagOracle {
        StaticTagOracle::new()
            .with("DIAMOND_ORE", &[BlockTag::MineablePickaxe, BlockTag::NeedsIronTool])
            .with("STONE", &[BlockTag::MineablePickaxe])
    }

    fn slots(candidates: &[CandidateItem]) -> Vec<usize> {
        candidates.iter().map(|c| c.slot).collect()
    }

    #[test]
    fn test_class_filter_in_scan_order() {
        let oracle = oracle();
        let block = BlockId::new("STONE");
        let found = select_candidates(
            &inventory(),
            CapabilityClass::Pickaxe,
            Some(&block),
            SearchScope::all(),
            true,
            &oracle,
        );
        assert_eq!(slots(&found), vec![0, 10, 30]);
    }

    #[test]
    fn test_tier_gate() {
        let oracle = oracle();
        let block = BlockId::new("DIAMOND_ORE");
        let gated = select_candidates(
            &inventory(),
            CapabilityClass::Pickaxe,
            Some(&block),
            SearchScope::all(),
            true,
            &oracle,
        );
        assert_eq!(slots(&gated), vec![10, 30]);

        let ungated = select_candidates(
            &inventory(),
            CapabilityClass::Pickaxe,
            Some(&block),
            SearchScope::all(),
            false,
            &oracle,
        );
        assert_eq!(slots(&ungated), vec![0, 10, 30]);
    }

    #[test]
    fn test_scope_limits_regions() {
        let oracle = oracle();
        let hotbar_only = SearchScope {
            hotbar: true,
            main: false,
        };
        let found = select_candidates(
            &inventory(),
            CapabilityClass::Pickaxe,
            None,
            hotbar_only,
            true,
            &oracle,
        );
        assert_eq!(slots(&found), vec![0]);

        let nothing = SearchScope {
            hotbar: false,
            main: false,
        };
        assert!(select_weapons(&inventory(), nothing).is_empty());
    }

    #[test]
    fn test_none_class_selects_nothing() {
        let oracle = oracle();
        let found = select_candidates(
            &inventory(),
            CapabilityClass::None,
            None,
            SearchScope::all(),
            false,
            &oracle,
        );
        assert!(found.is_empty());
    }

    #[test]
    fn test_weapons_include_axes() {
        let found = select_weapons(&inventory(), SearchScope::all());
        assert_eq!(slots(&found), vec![3, 11]);
    }
}

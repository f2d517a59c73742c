//! Material tiers and harvest requirements
//!
//! Tiers rank tool materials: Wooden < Stone < Golden < Copper < Iron <
//! Diamond < Netherite. The same rank gates harvesting (a block that needs
//! an iron tool rejects stone pickaxes) and feeds the MATERIAL criterion.

use crate::core::types::{BlockId, ItemId};
use crate::oracle::{BlockTag, WorldOracle};
use serde::{Deserialize, Serialize};

/// Ordinal material rank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MaterialTier {
    Wooden = 0,
    Stone = 1,
    Golden = 2,
    Copper = 3,
    Iron = 4,
    Diamond = 5,
    Netherite = 6,
}

/// Prefixes checked in priority order
const TIER_PREFIXES: [(&str, MaterialTier); 9] = [
    ("NETHERITE_", MaterialTier::Netherite),
    ("DIAMOND_", MaterialTier::Diamond),
    ("IRON_", MaterialTier::Iron),
    ("COPPER_", MaterialTier::Copper),
    ("GOLDEN_", MaterialTier::Golden),
    ("GOLD_", MaterialTier::Golden),
    ("STONE_", MaterialTier::Stone),
    ("WOODEN_", MaterialTier::Wooden),
    ("WOOD_", MaterialTier::Wooden),
];

/// Block that no tool can harvest
pub const UNHARVESTABLE_BLOCK: &str = "REINFORCED_DEEPSLATE";

impl MaterialTier {
    pub fn rank(self) -> i32 {
        self as i32
    }
}

/// Material tier of an item, `None` for untiered identifiers.
///
/// Shears carry no material prefix and are pinned to iron.
pub fn tier(item: &ItemId) -> Option<MaterialTier> {
    let name = item.as_str();
    TIER_PREFIXES
        .iter()
        .find(|(prefix, _)| name.starts_with(prefix))
        .map(|(_, tier)| *tier)
        .or_else(|| (name == "SHEARS").then_some(MaterialTier::Iron))
}

/// Integer form of [`tier`]: 0..=6, or -1 when untiered
pub fn tier_rank(item: &ItemId) -> i32 {
    tier(item).map(MaterialTier::rank).unwrap_or(-1)
}

/// Display name for an integer tier, "Unknown" outside 0..=6
pub fn tier_name(rank: i32) -> &'static str {
    match rank {
        6 => "Netherite",
        5 => "Diamond",
        4 => "Iron",
        3 => "Copper",
        2 => "Golden",
        1 => "Stone",
        0 => "Wooden",
        _ => "Unknown",
    }
}

/// What a block demands of the tool that harvests it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HarvestRequirement {
    /// Any tool of the right class works
    None,
    /// At least this tier is needed
    Tier(MaterialTier),
    /// No tool ever satisfies this block
    Impossible,
}

impl HarvestRequirement {
    /// Whether a tool of the given tier meets the requirement
    pub fn is_satisfied_by(&self, tool: Option<MaterialTier>) -> bool {
        match self {
            HarvestRequirement::None => true,
            HarvestRequirement::Tier(needed) => tool.is_some_and(|t| t >= *needed),
            HarvestRequirement::Impossible => false,
        }
    }
}

/// Minimum tier needed to harvest a block, per the oracle's tags
pub fn required_tier(block: &BlockId, oracle: &dyn WorldOracle) -> HarvestRequirement {
    if block.as_str() == UNHARVESTABLE_BLOCK {
        return HarvestRequirement::Impossible;
    }

    if oracle.is_tagged(block, BlockTag::NeedsDiamondTool) {
        HarvestRequirement::Tier(MaterialTier::Diamond)
    } else if oracle.is_tagged(block, BlockTag::NeedsIronTool) {
        HarvestRequirement::Tier(MaterialTier::Iron)
    } else if oracle.is_tagged(block, BlockTag::NeedsStoneTool) {
        HarvestRequirement::Tier(MaterialTier::Stone)
    } else {
        HarvestRequirement::None
    }
}

//! Block classification: which capability class a block asks for
//!
//! Two strategies share the [`BlockClassifier`] interface. [`TagClassifier`]
//! reads the oracle's mineable tags plus a fixed overlay of blocks the tags
//! miss; `PatternClassifier` (see `pattern.rs`) matches configured name
//! patterns instead.

use crate::classify::capability::CapabilityClass;
use crate::core::types::BlockId;
use crate::oracle::{BlockTag, WorldOracle};

/// Maps a target block to the capability class needed to harvest it.
///
/// `CapabilityClass::None` means no auto-switch applies to the block.
pub trait BlockClassifier: Send + Sync {
    fn required_class(&self, block: &BlockId, oracle: &dyn WorldOracle) -> CapabilityClass;
}

const PICKAXE_OVERLAY: &[&str] = &[
    "SPAWNER",
    "BEACON",
    "CONDUIT",
    "ENCHANTING_TABLE",
    "ENDER_CHEST",
    "RESPAWN_ANCHOR",
    "LODESTONE",
    "ANCIENT_DEBRIS",
    "CRYING_OBSIDIAN",
    "REINFORCED_DEEPSLATE",
];

const AXE_OVERLAY: &[&str] = &[
    "LADDER",
    "CRAFTING_TABLE",
    "BARREL",
    "LOOM",
    "COMPOSTER",
    "LECTERN",
    "NOTE_BLOCK",
    "JUKEBOX",
    "BEEHIVE",
    "BEE_NEST",
    "MELON",
    "PUMPKIN",
    "CARVED_PUMPKIN",
    "JACK_O_LANTERN",
];

const SHOVEL_OVERLAY: &[&str] = &[
    "GRASS_BLOCK",
    "PODZOL",
    "MYCELIUM",
    "FARMLAND",
    "DIRT_PATH",
    "ROOTED_DIRT",
    "SOUL_SAND",
    "SOUL_SOIL",
    "CLAY",
];

const HOE_OVERLAY: &[&str] = &[
    "HAY_BLOCK",
    "DRIED_KELP_BLOCK",
    "TARGET",
    "SPONGE",
    "WET_SPONGE",
    "SHROOMLIGHT",
    "NETHER_WART_BLOCK",
    "WARPED_WART_BLOCK",
];

const SHEARS_OVERLAY: &[&str] = &["COBWEB", "GLOW_LICHEN", "SEAGRASS", "TALL_SEAGRASS"];

/// Tag-then-overlay lookup order for the four mining classes
const MINEABLE: [(BlockTag, &[&str], CapabilityClass); 4] = [
    (BlockTag::MineablePickaxe, PICKAXE_OVERLAY, CapabilityClass::Pickaxe),
    (BlockTag::MineableAxe, AXE_OVERLAY, CapabilityClass::Axe),
    (BlockTag::MineableShovel, SHOVEL_OVERLAY, CapabilityClass::Shovel),
    (BlockTag::MineableHoe, HOE_OVERLAY, CapabilityClass::Hoe),
];

/// Oracle-tag backed classification
#[derive(Debug, Clone, Copy, Default)]
pub struct TagClassifier;

impl BlockClassifier for TagClassifier {
    fn required_class(&self, block: &BlockId, oracle: &dyn WorldOracle) -> CapabilityClass {
        let name = block.as_str();

        for (tag, overlay, class) in MINEABLE {
            if oracle.is_tagged(block, tag) || overlay.contains(&name) {
                return class;
            }
        }

        let shears_tagged = [BlockTag::Leaves, BlockTag::Wool, BlockTag::WoolCarpets]
            .into_iter()
            .any(|tag| oracle.is_tagged(block, tag));
        if shears_tagged || name.contains("VINE") || SHEARS_OVERLAY.contains(&name) {
            return CapabilityClass::Shears;
        }

        CapabilityClass::None
    }
}

/// Blocks that drop more useful items when mined with silk touch
pub fn prefers_silk_touch(block: &BlockId) -> bool {
    let name = block.as_str();
    name.contains("GLASS")
        || name.contains("ICE")
        || matches!(
            name,
            "GRASS_BLOCK" | "MYCELIUM" | "PODZOL" | "SEA_PICKLE" | "GLOWSTONE" | "MELON"
        )
}

/// Blocks whose drops scale with fortune
pub fn benefits_from_fortune(block: &BlockId, oracle: &dyn WorldOracle) -> bool {
    let name = block.as_str();
    if name.contains("_ORE") && name != "ANCIENT_DEBRIS" {
        return true;
    }
    matches!(
        name,
        "GRAVEL" | "MELON" | "CLAY" | "GLOWSTONE" | "SEA_LANTERN"
    ) || oracle.is_tagged(block, BlockTag::Leaves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::StaticTagOracle;

    fn oracle() -> StaticTagOracle {
        StaticTagOracle::new()
            .with("STONE", &[BlockTag::MineablePickaxe])
            .with("OAK_LOG", &[BlockTag::MineableAxe])
            .with("DIRT", &[BlockTag::MineableShovel])
            .with("MOSS_BLOCK", &[BlockTag::MineableHoe])
            .with("OAK_LEAVES", &[BlockTag::Leaves, BlockTag::MineableHoe])
            .with("WHITE_WOOL", &[BlockTag::Wool])
            .with("RED_CARPET", &[BlockTag::WoolCarpets])
    }

    fn class_of(name: &str) -> CapabilityClass {
        TagClassifier.required_class(&BlockId::new(name), &oracle())
    }

    #[test]
    fn test_tagged_blocks() {
        assert_eq!(class_of("STONE"), CapabilityClass::Pickaxe);
        assert_eq!(class_of("OAK_LOG"), CapabilityClass::Axe);
        assert_eq!(class_of("DIRT"), CapabilityClass::Shovel);
        assert_eq!(class_of("MOSS_BLOCK"), CapabilityClass::Hoe);
        assert_eq!(class_of("WHITE_WOOL"), CapabilityClass::Shears);
        assert_eq!(class_of("RED_CARPET"), CapabilityClass::Shears);
    }

    #[test]
    fn test_mining_tags_win_over_shears() {
        // Leaves are hoe-mineable in vanilla; the hoe check runs first
        assert_eq!(class_of("OAK_LEAVES"), CapabilityClass::Hoe);
    }

    #[test]
    fn test_overlay_blocks_without_tags() {
        assert_eq!(class_of("SPAWNER"), CapabilityClass::Pickaxe);
        assert_eq!(class_of("CRAFTING_TABLE"), CapabilityClass::Axe);
        assert_eq!(class_of("SOUL_SAND"), CapabilityClass::Shovel);
        assert_eq!(class_of("HAY_BLOCK"), CapabilityClass::Hoe);
        assert_eq!(class_of("COBWEB"), CapabilityClass::Shears);
        assert_eq!(class_of("TWISTING_VINES"), CapabilityClass::Shears);
    }

    #[test]
    fn test_unknown_block_is_none() {
        assert_eq!(class_of("BEDROCK"), CapabilityClass::None);
        assert_eq!(class_of("AIR"), CapabilityClass::None);
    }

    #[test]
    fn test_silk_touch_affinity() {
        assert!(prefers_silk_touch(&BlockId::new("GLASS")));
        assert!(prefers_silk_touch(&BlockId::new("BLUE_STAINED_GLASS_PANE")));
        assert!(prefers_silk_touch(&BlockId::new("PACKED_ICE")));
        assert!(prefers_silk_touch(&BlockId::new("GRASS_BLOCK")));
        assert!(!prefers_silk_touch(&BlockId::new("STONE")));
    }

    #[test]
    fn test_fortune_affinity() {
        let oracle = oracle();
        assert!(benefits_from_fortune(&BlockId::new("DEEPSLATE_DIAMOND_ORE"), &oracle));
        assert!(benefits_from_fortune(&BlockId::new("GRAVEL"), &oracle));
        assert!(benefits_from_fortune(&BlockId::new("OAK_LEAVES"), &oracle));
        assert!(!benefits_from_fortune(&BlockId::new("ANCIENT_DEBRIS"), &oracle));
        assert!(!benefits_from_fortune(&BlockId::new("STONE"), &oracle));
    }
}

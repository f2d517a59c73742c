//! Block tags and the world-introspection oracle

use crate::core::error::{EquipError, Result};
use crate::core::types::BlockId;
use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Capability tags the game engine attaches to blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlockTag {
    MineablePickaxe,
    MineableAxe,
    MineableShovel,
    MineableHoe,
    NeedsStoneTool,
    NeedsIronTool,
    NeedsDiamondTool,
    Leaves,
    Wool,
    WoolCarpets,
}

impl BlockTag {
    pub fn parse(s: &str) -> Option<Self> {
        let normalized = s.trim().to_ascii_uppercase().replace(['-', ' '], "_");
        let name = normalized.strip_prefix("MINECRAFT:").unwrap_or(&normalized);
        match name {
            "MINEABLE_PICKAXE" | "MINEABLE/PICKAXE" => Some(BlockTag::MineablePickaxe),
            "MINEABLE_AXE" | "MINEABLE/AXE" => Some(BlockTag::MineableAxe),
            "MINEABLE_SHOVEL" | "MINEABLE/SHOVEL" => Some(BlockTag::MineableShovel),
            "MINEABLE_HOE" | "MINEABLE/HOE" => Some(BlockTag::MineableHoe),
            "NEEDS_STONE_TOOL" => Some(BlockTag::NeedsStoneTool),
            "NEEDS_IRON_TOOL" => Some(BlockTag::NeedsIronTool),
            "NEEDS_DIAMOND_TOOL" => Some(BlockTag::NeedsDiamondTool),
            "LEAVES" => Some(BlockTag::Leaves),
            "WOOL" => Some(BlockTag::Wool),
            "WOOL_CARPETS" => Some(BlockTag::WoolCarpets),
            _ => None,
        }
    }
}

/// World-introspection oracle: pure, unknown blocks carry no tags
pub trait WorldOracle: Send + Sync {
    fn is_tagged(&self, block: &BlockId, tag: BlockTag) -> bool;
}

impl<T: WorldOracle + ?Sized> WorldOracle for &T {
    fn is_tagged(&self, block: &BlockId, tag: BlockTag) -> bool {
        (**self).is_tagged(block, tag)
    }
}

/// In-memory oracle backed by a block → tags table
#[derive(Debug, Clone, Default)]
pub struct StaticTagOracle {
    tags: AHashMap<BlockId, AHashSet<BlockTag>>,
}

impl StaticTagOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag a block (builder style)
    pub fn with(mut self, block: &str, tags: &[BlockTag]) -> Self {
        self.insert(BlockId::new(block), tags.iter().copied());
        self
    }

    pub fn insert(&mut self, block: BlockId, tags: impl IntoIterator<Item = BlockTag>) {
        self.tags.entry(block).or_default().extend(tags);
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Parse a `BLOCK = ["TAG", ...]` table. Unknown tags are dropped with a warning.
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        let raw: AHashMap<String, Vec<String>> = toml::from_str(content)?;
        let mut oracle = Self::new();

        for (block, names) in raw {
            let block = BlockId::new(&block);
            let mut tags = Vec::with_capacity(names.len());
            for name in names {
                match BlockTag::parse(&name) {
                    Some(tag) => tags.push(tag),
                    None => tracing::warn!("Unknown block tag '{}' for {}", name, block),
                }
            }
            oracle.insert(block, tags);
        }

        Ok(oracle)
    }

    /// Load a tag table from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| EquipError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|source| EquipError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl WorldOracle for StaticTagOracle {
    fn is_tagged(&self, block: &BlockId, tag: BlockTag) -> bool {
        self.tags
            .get(block)
            .map(|tags| tags.contains(&tag))
            .unwrap_or(false)
    }
}

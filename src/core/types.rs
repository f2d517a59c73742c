//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Normalize a game identifier to its canonical upper-case form.
///
/// Accepts `minecraft:diamond_pickaxe`, `Diamond Pickaxe` or
/// `DIAMOND_PICKAXE` and yields `DIAMOND_PICKAXE`.
pub fn normalize_identifier(raw: &str) -> String {
    let trimmed = raw.trim();
    let bare = match trimmed.rsplit_once(':') {
        Some((_, name)) => name,
        None => trimmed,
    };
    bare.to_ascii_uppercase().replace(['-', ' '], "_")
}

/// Item identifier (material + sub-kind), e.g. `IRON_PICKAXE`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ItemId(String);

impl ItemId {
    pub fn new(raw: &str) -> Self {
        Self(normalize_identifier(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ItemId {
    fn from(raw: String) -> Self {
        Self::new(&raw)
    }
}

impl From<&str> for ItemId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<ItemId> for String {
    fn from(id: ItemId) -> Self {
        id.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Block identifier, e.g. `DEEPSLATE_DIAMOND_ORE`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct BlockId(String);

impl BlockId {
    pub fn new(raw: &str) -> Self {
        Self(normalize_identifier(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for BlockId {
    fn from(raw: String) -> Self {
        Self::new(&raw)
    }
}

impl From<&str> for BlockId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<BlockId> for String {
    fn from(id: BlockId) -> Self {
        id.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unique identifier for players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub Uuid);

impl PlayerId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PlayerId {
    fn default() -> Self {
        Self::new()
    }
}

/// World name as reported by the server
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorldId(pub String);

impl WorldId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

/// Player game mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameMode {
    #[default]
    Survival,
    Adventure,
    Creative,
    Spectator,
}

impl GameMode {
    /// Creative and spectator players break blocks without tools
    pub fn uses_tools(&self) -> bool {
        matches!(self, GameMode::Survival | GameMode::Adventure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_namespace_and_case() {
        assert_eq!(normalize_identifier("minecraft:diamond_pickaxe"), "DIAMOND_PICKAXE");
        assert_eq!(normalize_identifier("  Iron Axe "), "IRON_AXE");
        assert_eq!(normalize_identifier("glow-lichen"), "GLOW_LICHEN");
    }

    #[test]
    fn test_item_id_serde_normalizes() {
        let id: ItemId = serde_json::from_str("\"netherite_sword\"").unwrap();
        assert_eq!(id.as_str(), "NETHERITE_SWORD");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"NETHERITE_SWORD\"");
    }

    #[test]
    fn test_game_mode_tool_usage() {
        assert!(GameMode::Survival.uses_tools());
        assert!(GameMode::Adventure.uses_tools());
        assert!(!GameMode::Creative.uses_tools());
        assert!(!GameMode::Spectator.uses_tools());
    }
}

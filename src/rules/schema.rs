//! Raw on-disk configuration schema
//!
//! These structs mirror the TOML files one to one. Names stay as strings
//! here; resolution into typed values happens in the loader so a bad entry
//! can be dropped without failing the whole file.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `config.toml`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub enabled_worlds: Vec<String>,
    pub classifier: String,
    pub priority: PrioritySection,
    pub search_locations: SearchSection,
    pub features: FeatureSection,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            enabled_worlds: Vec::new(),
            classifier: "tags".into(),
            priority: PrioritySection::default(),
            search_locations: SearchSection::default(),
            features: FeatureSection::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PrioritySection {
    pub order: Vec<String>,
    pub durability: String,
    pub smart_enchantment: bool,
    pub material: MaterialSection,
}

impl Default for PrioritySection {
    fn default() -> Self {
        Self {
            order: vec!["ENCHANTMENT".into(), "MATERIAL".into(), "DURABILITY".into()],
            durability: "HIGH".into(),
            smart_enchantment: true,
            material: MaterialSection::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialSection {
    pub enabled: bool,
    pub check_harvest_level: bool,
}

impl Default for MaterialSection {
    fn default() -> Self {
        Self {
            enabled: true,
            check_harvest_level: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSection {
    pub hotbar: bool,
    pub inventory: bool,
}

impl Default for SearchSection {
    fn default() -> Self {
        Self {
            hotbar: true,
            inventory: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureSection {
    pub auto_switch_blocks: bool,
    pub auto_switch_entities: bool,
}

impl Default for FeatureSection {
    fn default() -> Self {
        Self {
            auto_switch_blocks: true,
            auto_switch_entities: true,
        }
    }
}

/// `priority.toml` and `tool_blocks.toml`: capability key to a list of names.
/// Keys are kept sorted so dropped-entry warnings come out in a stable order.
pub type ClassTable = BTreeMap<String, Vec<String>>;

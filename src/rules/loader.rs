//! Resolve TOML configuration files into an [`EngineConfig`]
//!
//! A file that cannot be read or parsed is an error. A single bad entry
//! inside a file is not: it is logged and dropped, and the rest of the
//! file still applies.

use crate::classify::{BlockPattern, CapabilityClass, ClassMap, PatternClassifier, TagClassifier};
use crate::core::config::{ClassifierStrategy, DurabilityPolicy, EngineConfig, PriorityCriterion};
use crate::core::error::{EquipError, Result};
use crate::inventory::Enchantment;
use crate::oracle::StaticTagOracle;
use crate::rules::schema::{ClassTable, ConfigFile};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "config.toml";
pub const PRIORITY_FILE: &str = "priority.toml";
pub const TOOL_BLOCKS_FILE: &str = "tool_blocks.toml";
pub const BLOCK_TAGS_FILE: &str = "block_tags.toml";

const DEFAULT_CONFIG: &str = include_str!("../../data/config.toml");
const DEFAULT_PRIORITY: &str = include_str!("../../data/priority.toml");
const DEFAULT_TOOL_BLOCKS: &str = include_str!("../../data/tool_blocks.toml");
const DEFAULT_BLOCK_TAGS: &str = include_str!("../../data/block_tags.toml");

/// Raw contents of the three configuration files
#[derive(Debug, Clone)]
pub struct ConfigSources {
    /// Directory the files were read from; `None` for the built-in set
    pub dir: Option<PathBuf>,
    pub config: String,
    pub priority: String,
    pub tool_blocks: String,
}

impl ConfigSources {
    /// The defaults compiled into the crate
    pub fn builtin() -> Self {
        Self {
            dir: None,
            config: DEFAULT_CONFIG.to_string(),
            priority: DEFAULT_PRIORITY.to_string(),
            tool_blocks: DEFAULT_TOOL_BLOCKS.to_string(),
        }
    }

    /// Read every file from `dir`, substituting the built-in copy for any
    /// file that does not exist
    pub fn read_dir(dir: &Path) -> Result<Self> {
        Ok(Self {
            dir: Some(dir.to_path_buf()),
            config: read_or_default(dir, CONFIG_FILE, DEFAULT_CONFIG)?,
            priority: read_or_default(dir, PRIORITY_FILE, DEFAULT_PRIORITY)?,
            tool_blocks: read_or_default(dir, TOOL_BLOCKS_FILE, DEFAULT_TOOL_BLOCKS)?,
        })
    }

    fn path_of(&self, name: &str) -> PathBuf {
        match &self.dir {
            Some(dir) => dir.join(name),
            None => PathBuf::from(name),
        }
    }
}

fn read_or_default(dir: &Path, name: &str, default: &str) -> Result<String> {
    let path = dir.join(name);
    if !path.exists() {
        tracing::debug!("{} not found, using built-in defaults", path.display());
        return Ok(default.to_string());
    }
    fs::read_to_string(&path).map_err(|source| EquipError::Io { path, source })
}

fn parse_toml<T: DeserializeOwned>(path: PathBuf, content: &str) -> Result<T> {
    toml::from_str(content).map_err(|source| EquipError::Toml { path, source })
}

/// Load and resolve the configuration in `dir`
pub fn load_engine_config(dir: &Path) -> Result<EngineConfig> {
    parse_engine_config(&ConfigSources::read_dir(dir)?)
}

/// Resolve already-read configuration text
pub fn parse_engine_config(sources: &ConfigSources) -> Result<EngineConfig> {
    let file: ConfigFile = parse_toml(sources.path_of(CONFIG_FILE), &sources.config)?;
    let priorities: ClassTable = parse_toml(sources.path_of(PRIORITY_FILE), &sources.priority)?;
    let tool_blocks: ClassTable =
        parse_toml(sources.path_of(TOOL_BLOCKS_FILE), &sources.tool_blocks)?;

    let config = EngineConfig {
        priority_order: resolve_priority_order(&file.priority.order),
        enchantment_priorities: resolve_enchantment_priorities(&priorities),
        durability: resolve_durability(&file.priority.durability),
        material_priority: file.priority.material.enabled,
        check_harvest_tier: file.priority.material.check_harvest_level,
        smart_tiebreak: file.priority.smart_enchantment,
        search_hotbar: file.search_locations.hotbar,
        search_main: file.search_locations.inventory,
        block_switching: file.features.auto_switch_blocks,
        entity_switching: file.features.auto_switch_entities,
        enabled_worlds: file.enabled_worlds,
        classifier: resolve_classifier(&file.classifier, &tool_blocks),
    };

    if !config.search_hotbar && !config.search_main {
        tracing::warn!("Both search locations are disabled, nothing will ever be equipped");
    }

    Ok(config)
}

/// Block tag table for the in-memory oracle: `path` if given, else the built-in table
pub fn load_block_tags(path: Option<&Path>) -> Result<StaticTagOracle> {
    match path {
        Some(path) => StaticTagOracle::load(path),
        None => StaticTagOracle::from_toml_str(DEFAULT_BLOCK_TAGS).map_err(|source| {
            EquipError::Toml {
                path: PathBuf::from(BLOCK_TAGS_FILE),
                source,
            }
        }),
    }
}

/// Criteria in configured order. Unknown names and repeats are dropped; an
/// empty result falls back to ENCHANTMENT, MATERIAL, DURABILITY.
pub fn resolve_priority_order(names: &[String]) -> Vec<PriorityCriterion> {
    let mut order = Vec::with_capacity(PriorityCriterion::DEFAULT_ORDER.len());

    for name in names {
        match PriorityCriterion::parse(name) {
            Some(criterion) if order.contains(&criterion) => {
                tracing::warn!("Duplicate priority criterion '{}' ignored", name)
            }
            Some(criterion) => order.push(criterion),
            None => tracing::warn!("Unknown priority criterion '{}' ignored", name),
        }
    }

    if order.is_empty() {
        tracing::warn!("No usable priority criteria, using the default order");
        order.extend(PriorityCriterion::DEFAULT_ORDER);
    }

    order
}

pub fn resolve_durability(name: &str) -> DurabilityPolicy {
    DurabilityPolicy::parse(name).unwrap_or_else(|| {
        tracing::warn!("Unknown durability preference '{}', ignoring durability", name);
        DurabilityPolicy::Ignore
    })
}

fn resolve_class_key(key: &str, file: &str) -> Option<CapabilityClass> {
    match CapabilityClass::parse(key) {
        Some(CapabilityClass::None) | None => {
            tracing::warn!("Unknown tool class '{}' in {}", key, file);
            None
        }
        Some(class) => Some(class),
    }
}

pub fn resolve_enchantment_priorities(table: &ClassTable) -> ClassMap<Vec<Enchantment>> {
    let mut priorities: ClassMap<Vec<Enchantment>> = ClassMap::default();

    for (key, names) in table {
        let Some(class) = resolve_class_key(key, PRIORITY_FILE) else {
            continue;
        };
        let list = &mut priorities[class];
        for name in names {
            match Enchantment::from_name(name) {
                Some(ench) if list.contains(&ench) => {
                    tracing::warn!("Duplicate enchantment '{}' for {} ignored", name, class.as_str())
                }
                Some(ench) => list.push(ench),
                None => {
                    tracing::warn!("Unknown enchantment '{}' for {} ignored", name, class.as_str())
                }
            }
        }
    }

    priorities
}

pub fn resolve_patterns(table: &ClassTable) -> ClassMap<Vec<BlockPattern>> {
    let mut patterns: ClassMap<Vec<BlockPattern>> = ClassMap::default();

    for (key, raw) in table {
        let Some(class) = resolve_class_key(key, TOOL_BLOCKS_FILE) else {
            continue;
        };
        for entry in raw.iter().filter(|p| !p.trim().is_empty()) {
            let pattern = BlockPattern::parse(entry);
            if pattern.is_wildcard() {
                tracing::warn!(
                    "Wildcard-only pattern '{}' for {} ignored",
                    entry,
                    class.as_str()
                );
                continue;
            }
            patterns[class].push(pattern);
        }
    }

    patterns
}

pub fn resolve_classifier(name: &str, tool_blocks: &ClassTable) -> ClassifierStrategy {
    match name.trim().to_ascii_lowercase().as_str() {
        "tags" | "tag" => ClassifierStrategy::Tags(TagClassifier),
        "patterns" | "pattern" => {
            ClassifierStrategy::Patterns(PatternClassifier::new(resolve_patterns(tool_blocks)))
        }
        other => {
            tracing::warn!("Unknown classifier '{}', using tags", other);
            ClassifierStrategy::Tags(TagClassifier)
        }
    }
}

//! Engine configuration snapshot
//!
//! All ranking and search knobs are collected in [`EngineConfig`]. A
//! snapshot is immutable once built; reloading replaces the whole
//! snapshot through [`ConfigHandle`] so an in-flight decision always sees
//! one consistent configuration.

use crate::classify::{BlockClassifier, CapabilityClass, ClassMap, PatternClassifier, TagClassifier};
use crate::core::error::{EquipError, Result};
use crate::core::types::{BlockId, WorldId};
use crate::inventory::Enchantment;
use crate::oracle::WorldOracle;
use std::sync::{Arc, RwLock};

/// One ranking criterion. The configured order is the comparison precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriorityCriterion {
    Enchantment,
    Material,
    Durability,
}

impl PriorityCriterion {
    pub const DEFAULT_ORDER: [PriorityCriterion; 3] = [
        PriorityCriterion::Enchantment,
        PriorityCriterion::Material,
        PriorityCriterion::Durability,
    ];

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ENCHANTMENT" => Some(PriorityCriterion::Enchantment),
            "MATERIAL" => Some(PriorityCriterion::Material),
            "DURABILITY" => Some(PriorityCriterion::Durability),
            _ => None,
        }
    }
}

/// Which remaining durability to prefer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DurabilityPolicy {
    #[default]
    PreferHigh,
    PreferLow,
    Ignore,
}

impl DurabilityPolicy {
    /// Parse `HIGH` / `LOW` / `NONE` (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "HIGH" => Some(DurabilityPolicy::PreferHigh),
            "LOW" => Some(DurabilityPolicy::PreferLow),
            "NONE" => Some(DurabilityPolicy::Ignore),
            _ => None,
        }
    }
}

/// Switching features that can be turned off globally
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    BlockSwitching,
    EntitySwitching,
}

/// Backing strategy for block classification
#[derive(Debug, Clone)]
pub enum ClassifierStrategy {
    Tags(TagClassifier),
    Patterns(PatternClassifier),
}

impl Default for ClassifierStrategy {
    fn default() -> Self {
        ClassifierStrategy::Tags(TagClassifier)
    }
}

impl BlockClassifier for ClassifierStrategy {
    fn required_class(&self, block: &BlockId, oracle: &dyn WorldOracle) -> CapabilityClass {
        match self {
            ClassifierStrategy::Tags(c) => c.required_class(block, oracle),
            ClassifierStrategy::Patterns(c) => c.required_class(block, oracle),
        }
    }
}

/// Immutable configuration consumed by the decision pipeline
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Comparison precedence; never empty, never contains duplicates
    pub priority_order: Vec<PriorityCriterion>,
    /// Per-class enchantment ranking, most important first
    pub enchantment_priorities: ClassMap<Vec<Enchantment>>,
    pub durability: DurabilityPolicy,
    /// When false the MATERIAL criterion always ties
    pub material_priority: bool,
    /// Reject tools below the block's required tier
    pub check_harvest_tier: bool,
    /// Silk-touch / fortune tiebreak after the enchantment list ties
    pub smart_tiebreak: bool,
    pub search_hotbar: bool,
    pub search_main: bool,
    pub block_switching: bool,
    pub entity_switching: bool,
    /// Worlds where switching runs; empty means every world
    pub enabled_worlds: Vec<String>,
    pub classifier: ClassifierStrategy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            priority_order: PriorityCriterion::DEFAULT_ORDER.to_vec(),
            enchantment_priorities: ClassMap::default(),
            durability: DurabilityPolicy::PreferHigh,
            material_priority: true,
            check_harvest_tier: true,
            smart_tiebreak: true,
            search_hotbar: true,
            search_main: true,
            block_switching: true,
            entity_switching: true,
            enabled_worlds: Vec::new(),
            classifier: ClassifierStrategy::default(),
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enchantment_priority(&self, class: CapabilityClass) -> &[Enchantment] {
        &self.enchantment_priorities[class]
    }

    pub fn is_world_enabled(&self, world: &WorldId) -> bool {
        self.enabled_worlds.is_empty() || self.enabled_worlds.iter().any(|w| *w == world.0)
    }

    pub fn is_feature_enabled(&self, feature: Feature) -> bool {
        match feature {
            Feature::BlockSwitching => self.block_switching,
            Feature::EntitySwitching => self.entity_switching,
        }
    }

    /// Check the snapshot invariants
    pub fn validate(&self) -> Result<()> {
        if self.priority_order.is_empty() {
            return Err(EquipError::InvalidConfig(
                "priority order must not be empty".into(),
            ));
        }
        for (i, criterion) in self.priority_order.iter().enumerate() {
            if self.priority_order[..i].contains(criterion) {
                return Err(EquipError::InvalidConfig(format!(
                    "duplicate priority criterion {:?}",
                    criterion
                )));
            }
        }
        for (class, list) in self.enchantment_priorities.iter() {
            for (i, ench) in list.iter().enumerate() {
                if list[..i].contains(ench) {
                    return Err(EquipError::InvalidConfig(format!(
                        "duplicate enchantment {} for {}",
                        ench.as_str(),
                        class.as_str()
                    )));
                }
            }
        }
        Ok(())
    }

    /// Repair a snapshot so [`validate`](Self::validate) holds: later
    /// duplicates are dropped and an empty order becomes the default
    pub fn normalized(mut self) -> Self {
        let mut order = Vec::with_capacity(self.priority_order.len());
        for criterion in self.priority_order.drain(..) {
            if order.contains(&criterion) {
                tracing::warn!("Duplicate priority criterion {:?} dropped", criterion);
            } else {
                order.push(criterion);
            }
        }
        if order.is_empty() {
            tracing::warn!("Empty priority order, using default");
            order.extend(PriorityCriterion::DEFAULT_ORDER);
        }
        self.priority_order = order;

        for class in CapabilityClass::TOOLS {
            let list = &mut self.enchantment_priorities[class];
            let before = list.len();
            let mut seen = Vec::with_capacity(before);
            list.retain(|ench| {
                if seen.contains(ench) {
                    false
                } else {
                    seen.push(*ench);
                    true
                }
            });
            if list.len() != before {
                tracing::warn!(
                    "Dropped {} duplicate enchantment(s) for {}",
                    before - list.len(),
                    class.as_str()
                );
            }
        }
        self
    }
}

/// Shared holder for the active snapshot
#[derive(Debug)]
pub struct ConfigHandle {
    current: RwLock<Arc<EngineConfig>>,
}

impl ConfigHandle {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            current: RwLock::new(Arc::new(config.normalized())),
        }
    }

    /// The snapshot to use for one decision
    pub fn snapshot(&self) -> Arc<EngineConfig> {
        let guard = self.current.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&guard)
    }

    /// Swap in a new snapshot; decisions already holding the old one finish with it
    pub fn replace(&self, config: EngineConfig) {
        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        *guard = Arc::new(config.normalized());
    }
}

impl Default for ConfigHandle {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.priority_order, PriorityCriterion::DEFAULT_ORDER.to_vec());
        assert_eq!(config.durability, DurabilityPolicy::PreferHigh);
    }

    #[test]
    fn test_duplicates_rejected() {
        let mut config = EngineConfig::default();
        config.priority_order = vec![PriorityCriterion::Material, PriorityCriterion::Material];
        assert!(matches!(config.validate(), Err(EquipError::InvalidConfig(_))));

        let mut config = EngineConfig::default();
        config.priority_order.clear();
        assert!(matches!(config.validate(), Err(EquipError::InvalidConfig(_))));

        let mut config = EngineConfig::default();
        config.enchantment_priorities[CapabilityClass::Pickaxe] =
            vec![Enchantment::Fortune, Enchantment::Fortune];
        assert!(matches!(config.validate(), Err(EquipError::InvalidConfig(_))));
    }

    #[test]
    fn test_normalized_repairs_order_and_lists() {
        let mut config = EngineConfig::default();
        config.priority_order = vec![
            PriorityCriterion::Durability,
            PriorityCriterion::Material,
            PriorityCriterion::Durability,
        ];
        config.enchantment_priorities[CapabilityClass::Pickaxe] =
            vec![Enchantment::Fortune, Enchantment::Efficiency, Enchantment::Fortune];
        let config = config.normalized();

        assert!(config.validate().is_ok());
        assert_eq!(
            config.priority_order,
            vec![PriorityCriterion::Durability, PriorityCriterion::Material]
        );
        assert_eq!(
            config.enchantment_priority(CapabilityClass::Pickaxe),
            &[Enchantment::Fortune, Enchantment::Efficiency]
        );

        let mut empty = EngineConfig::default();
        empty.priority_order.clear();
        assert_eq!(
            empty.normalized().priority_order,
            PriorityCriterion::DEFAULT_ORDER.to_vec()
        );
    }

    #[test]
    fn test_handle_normalizes_installed_snapshots() {
        let mut config = EngineConfig::default();
        config.priority_order.clear();
        let handle = ConfigHandle::new(config);
        assert_eq!(
            handle.snapshot().priority_order,
            PriorityCriterion::DEFAULT_ORDER.to_vec()
        );

        let mut next = EngineConfig::default();
        next.priority_order = vec![PriorityCriterion::Material, PriorityCriterion::Material];
        handle.replace(next);
        assert_eq!(handle.snapshot().priority_order, vec![PriorityCriterion::Material]);
        assert!(handle.snapshot().validate().is_ok());
    }

    #[test]
    fn test_world_gate() {
        let mut config = EngineConfig::default();
        assert!(config.is_world_enabled(&WorldId::new("world_nether")));

        config.enabled_worlds = vec!["world".into()];
        assert!(config.is_world_enabled(&WorldId::new("world")));
        assert!(!config.is_world_enabled(&WorldId::new("world_nether")));
    }

    #[test]
    fn test_parse_policy_and_criteria() {
        assert_eq!(DurabilityPolicy::parse("low"), Some(DurabilityPolicy::PreferLow));
        assert_eq!(DurabilityPolicy::parse("NONE"), Some(DurabilityPolicy::Ignore));
        assert_eq!(DurabilityPolicy::parse("medium"), None);
        assert_eq!(PriorityCriterion::parse("material"), Some(PriorityCriterion::Material));
        assert_eq!(PriorityCriterion::parse("speed"), None);
    }

    #[test]
    fn test_snapshot_survives_replace() {
        let handle = ConfigHandle::default();
        let before = handle.snapshot();

        let mut next = EngineConfig::default();
        next.durability = DurabilityPolicy::PreferLow;
        handle.replace(next);

        assert_eq!(before.durability, DurabilityPolicy::PreferHigh);
        assert_eq!(handle.snapshot().durability, DurabilityPolicy::PreferLow);
    }
}

//! Decision pipeline entry points
//!
//! Each call runs classify, filter, rank and switch to completion against
//! one configuration snapshot taken at the start of the call. A reload
//! swaps the snapshot for later calls only.

use crate::classify::{BlockClassifier, CapabilityClass};
use crate::core::config::{ConfigHandle, EngineConfig, Feature};
use crate::core::error::Result;
use crate::core::types::{BlockId, GameMode, PlayerId, WorldId};
use crate::inventory::{CandidateItem, PlayerInventory};
use crate::oracle::{PlayerToggleStore, PlayerToggles, WorldOracle};
use crate::rules::load_engine_config;
use crate::select::{select_candidates, select_weapons, weapon_class, Ranker, SearchScope};
use crate::switch::{equip, SwitchAction};
use std::path::Path;
use std::sync::Arc;

/// The acting player as seen by one decision
#[derive(Debug, Clone)]
pub struct Player {
    pub id: PlayerId,
    pub world: WorldId,
    pub game_mode: GameMode,
    pub inventory: PlayerInventory,
}

impl Player {
    pub fn new(inventory: PlayerInventory) -> Self {
        Self {
            id: PlayerId::new(),
            world: WorldId::new("world"),
            game_mode: GameMode::Survival,
            inventory,
        }
    }

    pub fn with_world(mut self, world: impl Into<String>) -> Self {
        self.world = WorldId::new(world);
        self
    }

    pub fn with_game_mode(mut self, game_mode: GameMode) -> Self {
        self.game_mode = game_mode;
        self
    }
}

/// Why the pipeline did not run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    PlayerDisabled,
    WorldDisabled,
    FeatureDisabled(Feature),
    GameMode(GameMode),
}

/// Result of one pipeline invocation
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Skipped(SkipReason),
    /// The block needs no particular tool
    NoTarget,
    /// Nothing in scope is eligible
    NoCandidate,
    Equipped {
        winner: CandidateItem,
        action: SwitchAction,
    },
}

impl Outcome {
    /// True when the inventory was changed
    pub fn switched(&self) -> bool {
        matches!(self, Outcome::Equipped { action, .. } if action.mutates())
    }
}

enum Choice {
    NoTarget,
    NoCandidate,
    Winner(CandidateItem),
}

impl Choice {
    fn into_winner(self) -> Option<CandidateItem> {
        match self {
            Choice::Winner(winner) => Some(winner),
            Choice::NoTarget | Choice::NoCandidate => None,
        }
    }
}

/// Auto-equip engine bound to one world oracle and one toggle store
pub struct AutoEquip<O: WorldOracle, S: PlayerToggleStore = PlayerToggles> {
    config: ConfigHandle,
    oracle: O,
    toggles: S,
}

impl<O: WorldOracle> AutoEquip<O, PlayerToggles> {
    pub fn new(config: EngineConfig, oracle: O) -> Self {
        Self::with_toggles(config, oracle, PlayerToggles::new())
    }
}

impl<O: WorldOracle, S: PlayerToggleStore> AutoEquip<O, S> {
    pub fn with_toggles(config: EngineConfig, oracle: O, toggles: S) -> Self {
        Self {
            config: ConfigHandle::new(config),
            oracle,
            toggles,
        }
    }

    pub fn config(&self) -> Arc<EngineConfig> {
        self.config.snapshot()
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    pub fn toggles(&self) -> &S {
        &self.toggles
    }

    /// Re-read configuration from `dir`. On error the active snapshot is kept.
    pub fn reload_configuration(&self, dir: &Path) -> Result<()> {
        let config = load_engine_config(dir)?;
        tracing::info!(
            "Reloaded configuration from {} (order {:?}, durability {:?})",
            dir.display(),
            config.priority_order,
            config.durability
        );
        self.config.replace(config);
        Ok(())
    }

    /// Install an already-resolved snapshot. Duplicate criteria and
    /// enchantments are dropped and an empty order becomes the default.
    pub fn replace_configuration(&self, config: EngineConfig) {
        self.config.replace(config);
    }

    fn gate(&self, player: &Player, config: &EngineConfig, feature: Feature) -> Option<SkipReason> {
        if !self.toggles.is_enabled(player.id) {
            Some(SkipReason::PlayerDisabled)
        } else if !config.is_world_enabled(&player.world) {
            Some(SkipReason::WorldDisabled)
        } else if !config.is_feature_enabled(feature) {
            Some(SkipReason::FeatureDisabled(feature))
        } else {
            None
        }
    }

    fn choose_tool(
        &self,
        config: &EngineConfig,
        inventory: &PlayerInventory,
        block: &BlockId,
    ) -> Choice {
        let class = config.classifier.required_class(block, &self.oracle);
        if class == CapabilityClass::None {
            tracing::debug!("{} needs no particular tool", block);
            return Choice::NoTarget;
        }

        let candidates = select_candidates(
            inventory,
            class,
            Some(block),
            SearchScope::from_config(config),
            config.check_harvest_tier,
            &self.oracle,
        );
        tracing::debug!(
            "{} needs {}: {} eligible candidates",
            block,
            class.as_str(),
            candidates.len()
        );

        match Ranker::new(config, class, Some(block), &self.oracle).best(&candidates) {
            Some(winner) => Choice::Winner(winner.clone()),
            None => Choice::NoCandidate,
        }
    }

    fn choose_weapon(&self, config: &EngineConfig, inventory: &PlayerInventory) -> Choice {
        let candidates = select_weapons(inventory, SearchScope::from_config(config));
        let class = weapon_class(&candidates);
        tracing::debug!("{} weapon candidates, ranked as {}", candidates.len(), class.as_str());

        match Ranker::new(config, class, None, &self.oracle).best(&candidates) {
            Some(winner) => Choice::Winner(winner.clone()),
            None => Choice::NoCandidate,
        }
    }

    /// Best tool for `block` without touching the inventory
    pub fn best_tool_for_block(
        &self,
        inventory: &PlayerInventory,
        block: &BlockId,
    ) -> Option<CandidateItem> {
        let config = self.config.snapshot();
        self.choose_tool(&config, inventory, block).into_winner()
    }

    /// Best weapon without touching the inventory
    pub fn best_weapon(&self, inventory: &PlayerInventory) -> Option<CandidateItem> {
        let config = self.config.snapshot();
        self.choose_weapon(&config, inventory).into_winner()
    }

    /// Equip the best tool before `player` starts breaking `block`
    pub fn decide_and_switch_for_block(
        &self,
        player: &mut Player,
        block: &BlockId,
    ) -> Result<Outcome> {
        let config = self.config.snapshot();

        if let Some(reason) = self.gate(player, &config, Feature::BlockSwitching) {
            return Ok(Outcome::Skipped(reason));
        }
        if !player.game_mode.uses_tools() {
            return Ok(Outcome::Skipped(SkipReason::GameMode(player.game_mode)));
        }

        let choice = self.choose_tool(&config, &player.inventory, block);
        finish(&mut player.inventory, choice)
    }

    /// Equip the best weapon before `player` attacks
    pub fn decide_and_switch_for_entity_attack(&self, player: &mut Player) -> Result<Outcome> {
        let config = self.config.snapshot();

        if let Some(reason) = self.gate(player, &config, Feature::EntitySwitching) {
            return Ok(Outcome::Skipped(reason));
        }

        let choice = self.choose_weapon(&config, &player.inventory);
        finish(&mut player.inventory, choice)
    }
}

fn finish(inventory: &mut PlayerInventory, choice: Choice) -> Result<Outcome> {
    let winner = match choice {
        Choice::NoTarget => return Ok(Outcome::NoTarget),
        Choice::NoCandidate => return Ok(Outcome::NoCandidate),
        Choice::Winner(winner) => winner,
    };

    let action = equip(inventory, &winner)?;
    tracing::debug!("Winner {} in slot {}: {:?}", winner.id(), winner.slot, action);
    Ok(Outcome::Equipped { winner, action })
}

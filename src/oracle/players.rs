//! Per-player enable flags

use crate::core::types::PlayerId;
use ahash::AHashMap;
use std::sync::RwLock;

/// Answers whether auto-equip runs for a player
pub trait PlayerToggleStore: Send + Sync {
    fn is_enabled(&self, player: PlayerId) -> bool;
}

/// In-memory toggle store. Players default to enabled.
#[derive(Debug, Default)]
pub struct PlayerToggles {
    flags: RwLock<AHashMap<PlayerId, bool>>,
}

impl PlayerToggles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_enabled(&self, player: PlayerId, enabled: bool) {
        let mut flags = self.flags.write().unwrap_or_else(|e| e.into_inner());
        flags.insert(player, enabled);
    }

    /// Flip a player's flag, returning the new state
    pub fn toggle(&self, player: PlayerId) -> bool {
        let mut flags = self.flags.write().unwrap_or_else(|e| e.into_inner());
        let entry = flags.entry(player).or_insert(true);
        *entry = !*entry;
        *entry
    }
}

impl PlayerToggleStore for PlayerToggles {
    fn is_enabled(&self, player: PlayerId) -> bool {
        let flags = self.flags.read().unwrap_or_else(|e| e.into_inner());
        flags.get(&player).copied().unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_enabled() {
        let toggles = PlayerToggles::new();
        assert!(toggles.is_enabled(PlayerId::new()));
    }

    #[test]
    fn test_toggle_round_trip() {
        let toggles = PlayerToggles::new();
        let player = PlayerId::new();

        assert!(!toggles.toggle(player));
        assert!(!toggles.is_enabled(player));
        assert!(toggles.toggle(player));
        assert!(toggles.is_enabled(player));

        toggles.set_enabled(player, false);
        assert!(!toggles.is_enabled(player));
    }
}

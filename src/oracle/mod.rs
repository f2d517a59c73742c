//! Read-only collaborators the engine consults but does not own
//!
//! The world-introspection oracle answers block tag questions; the player
//! toggle store answers whether a player has auto-equip switched on.

mod players;
mod tags;

pub use players::{PlayerToggleStore, PlayerToggles};
pub use tags::{BlockTag, StaticTagOracle, WorldOracle};

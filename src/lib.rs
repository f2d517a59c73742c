//! Auto Equip - tool and weapon selection for a block sandbox game
//!
//! Given a player's inventory and the action about to happen (breaking a
//! block or attacking), pick the best eligible item and put it in hand.

pub mod classify;
pub mod core;
pub mod engine;
pub mod inventory;
pub mod oracle;
pub mod rules;
pub mod select;
pub mod switch;
pub mod tier;

pub use engine::{AutoEquip, Outcome, Player, SkipReason};

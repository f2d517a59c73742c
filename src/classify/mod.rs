//! Capability classification for items and target blocks

pub mod block;
pub mod capability;
pub mod pattern;

pub use block::{benefits_from_fortune, prefers_silk_touch, BlockClassifier, TagClassifier};
pub use capability::{classify_tool, classify_weapon, CapabilityClass, ClassMap};
pub use pattern::{BlockPattern, PatternClassifier};

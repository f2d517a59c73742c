//! Declarative block-name pattern classification
//!
//! Patterns come from `tool_blocks.toml`. Matching is done on the
//! upper-cased block name:
//!
//! | pattern   | matches when the name          |
//! |-----------|--------------------------------|
//! | `*ORE*`   | contains `ORE`                 |
//! | `STONE*`  | starts with `STONE`            |
//! | `*_LOG`   | ends with `_LOG`               |
//! | `GRAVEL`  | equals or contains `GRAVEL`    |

use crate::classify::block::BlockClassifier;
use crate::classify::capability::{CapabilityClass, ClassMap};
use crate::core::types::BlockId;
use crate::oracle::WorldOracle;
use ahash::AHashMap;
use std::sync::Mutex;

/// One compiled block-name pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockPattern {
    Contains(String),
    Prefix(String),
    Suffix(String),
    /// Exact match, falling back to a substring match
    Literal(String),
}

impl BlockPattern {
    pub fn parse(raw: &str) -> Self {
        let pattern = raw.trim().to_ascii_uppercase();
        let starts = pattern.starts_with('*');
        let ends = pattern.ends_with('*');

        if starts && ends && pattern.len() >= 2 {
            BlockPattern::Contains(pattern[1..pattern.len() - 1].to_string())
        } else if ends {
            BlockPattern::Prefix(pattern[..pattern.len() - 1].to_string())
        } else if starts {
            BlockPattern::Suffix(pattern[1..].to_string())
        } else {
            BlockPattern::Literal(pattern)
        }
    }

    /// True when the raw pattern held nothing but `*`
    pub fn is_wildcard(&self) -> bool {
        match self {
            BlockPattern::Contains(s)
            | BlockPattern::Prefix(s)
            | BlockPattern::Suffix(s)
            | BlockPattern::Literal(s) => s.chars().all(|c| c == '*'),
        }
    }

    pub fn matches(&self, name: &str) -> bool {
        match self {
            BlockPattern::Contains(s) | BlockPattern::Literal(s) => name.contains(s.as_str()),
            BlockPattern::Prefix(s) => name.starts_with(s.as_str()),
            BlockPattern::Suffix(s) => name.ends_with(s.as_str()),
        }
    }
}

/// Pattern-list backed classification with a per-block memo
#[derive(Debug, Default)]
pub struct PatternClassifier {
    patterns: ClassMap<Vec<BlockPattern>>,
    cache: Mutex<AHashMap<BlockId, CapabilityClass>>,
}

impl Clone for PatternClassifier {
    fn clone(&self) -> Self {
        Self::new(self.patterns.clone())
    }
}

impl PatternClassifier {
    pub fn new(patterns: ClassMap<Vec<BlockPattern>>) -> Self {
        Self {
            patterns,
            cache: Mutex::new(AHashMap::new()),
        }
    }

    fn classify_uncached(&self, name: &str) -> CapabilityClass {
        self.patterns
            .iter()
            .find(|(_, patterns)| patterns.iter().any(|p| p.matches(name)))
            .map(|(class, _)| class)
            .unwrap_or(CapabilityClass::None)
    }
}

impl BlockClassifier for PatternClassifier {
    fn required_class(&self, block: &BlockId, _oracle: &dyn WorldOracle) -> CapabilityClass {
        let mut cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(class) = cache.get(block) {
            return *class;
        }
        let class = self.classify_uncached(block.as_str());
        cache.insert(block.clone(), class);
        class
    }
}

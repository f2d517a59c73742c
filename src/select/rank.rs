//! Ranking engine
//!
//! Candidates are ordered by a composite comparator assembled from the
//! configured criteria. Each criterion yields `Less` (first candidate is
//! better), `Greater` or `Equal`; the first non-`Equal` result decides.
//! Only enchantments on the configured priority list for the capability
//! class influence the ENCHANTMENT criterion.

use crate::classify::{benefits_from_fortune, classify_tool, prefers_silk_touch, CapabilityClass};
use crate::core::config::{DurabilityPolicy, EngineConfig, PriorityCriterion};
use crate::core::types::BlockId;
use crate::inventory::{CandidateItem, Enchantment};
use crate::oracle::WorldOracle;
use crate::tier::tier_rank;
use std::cmp::Ordering;

/// Best-first comparator for one decision
pub struct Ranker<'a> {
    config: &'a EngineConfig,
    class: CapabilityClass,
    block: Option<&'a BlockId>,
    oracle: &'a dyn WorldOracle,
}

impl<'a> Ranker<'a> {
    pub fn new(
        config: &'a EngineConfig,
        class: CapabilityClass,
        block: Option<&'a BlockId>,
        oracle: &'a dyn WorldOracle,
    ) -> Self {
        Self {
            config,
            class,
            block,
            oracle,
        }
    }

    /// `Less` when `a` should be preferred over `b`
    pub fn compare(&self, a: &CandidateItem, b: &CandidateItem) -> Ordering {
        self.config
            .priority_order
            .iter()
            .map(|criterion| self.compare_by(*criterion, a, b))
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    }

    fn compare_by(&self, criterion: PriorityCriterion, a: &CandidateItem, b: &CandidateItem) -> Ordering {
        match criterion {
            PriorityCriterion::Enchantment => self.compare_enchantments(a, b),
            PriorityCriterion::Material => self.compare_material(a, b),
            PriorityCriterion::Durability => self.compare_durability(a, b),
        }
    }

    fn compare_enchantments(&self, a: &CandidateItem, b: &CandidateItem) -> Ordering {
        let primary = self
            .config
            .enchantment_priority(self.class)
            .iter()
            .map(|ench| b.level(*ench).cmp(&a.level(*ench)))
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal);

        if primary.is_ne() || !self.config.smart_tiebreak {
            return primary;
        }
        match self.block {
            Some(block) => self.smart_tiebreak(block, a, b),
            None => Ordering::Equal,
        }
    }

    /// Block-aware last resort: silk touch for glass-like blocks, then
    /// fortune level for ore-like blocks
    fn smart_tiebreak(&self, block: &BlockId, a: &CandidateItem, b: &CandidateItem) -> Ordering {
        if prefers_silk_touch(block) {
            let a_silk = a.level(Enchantment::SilkTouch) > 0;
            let b_silk = b.level(Enchantment::SilkTouch) > 0;
            if a_silk != b_silk {
                return b_silk.cmp(&a_silk);
            }
        }

        if benefits_from_fortune(block, self.oracle) {
            let ord = b.level(Enchantment::Fortune).cmp(&a.level(Enchantment::Fortune));
            if ord.is_ne() {
                return ord;
            }
        }

        Ordering::Equal
    }

    fn compare_material(&self, a: &CandidateItem, b: &CandidateItem) -> Ordering {
        if !self.config.material_priority {
            return Ordering::Equal;
        }
        tier_rank(b.id()).cmp(&tier_rank(a.id()))
    }

    fn compare_durability(&self, a: &CandidateItem, b: &CandidateItem) -> Ordering {
        match self.config.durability {
            DurabilityPolicy::Ignore => Ordering::Equal,
            DurabilityPolicy::PreferHigh => b.durability().cmp(&a.durability()),
            DurabilityPolicy::PreferLow => a.durability().cmp(&b.durability()),
        }
    }

    /// The best candidate; ties keep the earliest in scan order
    pub fn best<'c>(&self, candidates: &'c [CandidateItem]) -> Option<&'c CandidateItem> {
        candidates.iter().min_by(|a, b| self.compare(a, b))
    }
}

/// Pick the best candidate for a tool decision
pub fn rank_best<'c>(
    candidates: &'c [CandidateItem],
    class: CapabilityClass,
    block: Option<&BlockId>,
    config: &EngineConfig,
    oracle: &dyn WorldOracle,
) -> Option<&'c CandidateItem> {
    Ranker::new(config, class, block, oracle).best(candidates)
}

/// Enchantment list used for weapons: the class of the first weapon found
pub fn weapon_class(candidates: &[CandidateItem]) -> CapabilityClass {
    match candidates.first().map(|c| classify_tool(c.id())) {
        Some(CapabilityClass::Sword) => CapabilityClass::Sword,
        Some(_) => CapabilityClass::Axe,
        None => CapabilityClass::None,
    }
}

pub mod config;
pub mod error;
pub mod types;

pub use config::{
    ClassifierStrategy, ConfigHandle, DurabilityPolicy, EngineConfig, Feature, PriorityCriterion,
};
pub use error::{EquipError, Result};

//! Configuration loading from TOML

mod loader;
pub mod schema;

pub use loader::{
    load_block_tags, load_engine_config, parse_engine_config, resolve_classifier,
    resolve_durability, resolve_enchantment_priorities, resolve_patterns, resolve_priority_order,
    ConfigSources, BLOCK_TAGS_FILE, CONFIG_FILE, PRIORITY_FILE, TOOL_BLOCKS_FILE,
};
pub use schema::{ClassTable, ConfigFile};

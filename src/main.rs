//! Auto Equip - command line driver
//!
//! Loads configuration, a block tag table and an inventory snapshot, runs
//! one decision and prints the result as JSON.

use auto_equip::core::error::{EquipError, Result};
use auto_equip::core::types::BlockId;
use auto_equip::inventory::{InventoryFile, PlayerInventory};
use auto_equip::rules::{load_block_tags, load_engine_config, parse_engine_config, ConfigSources};
use auto_equip::tier::{tier_name, tier_rank};
use auto_equip::{AutoEquip, Outcome, Player};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "auto-equip")]
#[command(about = "Pick and equip the best tool or weapon from an inventory snapshot")]
struct Args {
    /// Directory holding config.toml, priority.toml and tool_blocks.toml
    #[arg(long)]
    config_dir: Option<PathBuf>,

    /// Inventory snapshot (JSON)
    #[arg(long)]
    inventory: PathBuf,

    /// Block tag table (TOML); the built-in table is used when omitted
    #[arg(long)]
    tags: Option<PathBuf>,

    /// Write the switched inventory back to the snapshot file
    #[arg(long)]
    save: bool,

    /// Log every decision step
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand, Debug)]
enum Action {
    /// Equip the best tool for breaking a block
    Block { block: String },
    /// Equip the best weapon for an attack
    Attack,
}

/// JSON output structure
#[derive(Serialize)]
struct DecisionReport {
    outcome: String,
    slot: Option<usize>,
    item: Option<String>,
    tier: Option<String>,
    action: Option<String>,
    held_slot: usize,
    inventory: InventoryFile,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.verbose {
        "auto_equip=debug"
    } else {
        "auto_equip=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match &args.config_dir {
        Some(dir) => load_engine_config(dir)?,
        None => parse_engine_config(&ConfigSources::builtin())?,
    };
    let oracle = load_block_tags(args.tags.as_deref())?;
    tracing::info!("Loaded tags for {} blocks", oracle.len());

    let json = fs::read_to_string(&args.inventory).map_err(|source| EquipError::Io {
        path: args.inventory.clone(),
        source,
    })?;
    let mut player = Player::new(PlayerInventory::from_json(&json)?);

    let engine = AutoEquip::new(config, oracle);
    let outcome = match &args.action {
        Action::Block { block } => {
            engine.decide_and_switch_for_block(&mut player, &BlockId::new(block))?
        }
        Action::Attack => engine.decide_and_switch_for_entity_attack(&mut player)?,
    };

    let summary = report(&outcome, &player.inventory);
    println!("{}", serde_json::to_string_pretty(&summary)?);

    if args.save && outcome.switched() {
        fs::write(&args.inventory, player.inventory.to_json()?).map_err(|source| {
            EquipError::Io {
                path: args.inventory.clone(),
                source,
            }
        })?;
        tracing::info!("Saved inventory to {}", args.inventory.display());
    }

    Ok(())
}

fn report(outcome: &Outcome, inventory: &PlayerInventory) -> DecisionReport {
    let (label, slot, item, tier, action) = match outcome {
        Outcome::Skipped(reason) => (format!("skipped: {:?}", reason), None, None, None, None),
        Outcome::NoTarget => ("no_target".to_string(), None, None, None, None),
        Outcome::NoCandidate => ("no_candidate".to_string(), None, None, None, None),
        Outcome::Equipped { winner, action } => (
            "equipped".to_string(),
            Some(winner.slot),
            Some(winner.id().to_string()),
            Some(tier_name(tier_rank(winner.id())).to_string()),
            Some(format!("{:?}", action)),
        ),
    };

    DecisionReport {
        outcome: label,
        slot,
        item,
        tier,
        action,
        held_slot: inventory.held_slot(),
        inventory: InventoryFile::from(inventory),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use auto_equip::inventory::{CandidateItem, ItemStack};
    use auto_equip::switch::SwitchAction;

    #[test]
    fn test_report_names_winner_tier() {
        let inventory = PlayerInventory::new().with_item(3, ItemStack::new("DIAMOND_PICKAXE"));
        let outcome = Outcome::Equipped {
            winner: CandidateItem::new(3, ItemStack::new("DIAMOND_PICKAXE")),
            action: SwitchAction::AlreadyHeld,
        };

        let summary = report(&outcome, &inventory);
        assert_eq!(summary.outcome, "equipped");
        assert_eq!(summary.slot, Some(3));
        assert_eq!(summary.tier.as_deref(), Some("Diamond"));

        let bow = Outcome::Equipped {
            winner: CandidateItem::new(0, ItemStack::new("BOW")),
            action: SwitchAction::AlreadyHeld,
        };
        assert_eq!(report(&bow, &inventory).tier.as_deref(), Some("Unknown"));
        assert_eq!(report(&Outcome::NoTarget, &inventory).tier, None);
    }
}

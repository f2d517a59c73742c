//! Benchmarks for candidate ranking over a full inventory

use auto_equip::classify::CapabilityClass;
use auto_equip::core::types::BlockId;
use auto_equip::inventory::{Enchantment, ItemStack, PlayerInventory, INVENTORY_SIZE};
use auto_equip::rules::{load_block_tags, parse_engine_config, ConfigSources};
use auto_equip::select::{rank_best, select_candidates, SearchScope};
use auto_equip::{AutoEquip, Player};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

const FAMILIES: [&str; 6] = ["WOODEN", "STONE", "GOLDEN", "IRON", "DIAMOND", "NETHERITE"];

fn full_inventory() -> PlayerInventory {
    (0..INVENTORY_SIZE).fold(PlayerInventory::new(), |inventory, slot| {
        let stack = ItemStack::new(&format!("{}_PICKAXE", FAMILIES[slot % FAMILIES.len()]))
            .with_enchantment(Enchantment::Efficiency, (slot % 6) as u32)
            .with_enchantment(Enchantment::Fortune, (slot % 4) as u32)
            .with_enchantment(Enchantment::SilkTouch, (slot % 2) as u32)
            .with_durability(100 + slot as u32 * 37);
        inventory.with_item(slot, stack)
    })
}

fn bench_rank_full_inventory(c: &mut Criterion) {
    let config = parse_engine_config(&ConfigSources::builtin()).unwrap();
    let oracle = load_block_tags(None).unwrap();
    let inventory = full_inventory();
    let block = BlockId::new("DIAMOND_ORE");

    let mut group = c.benchmark_group("ranking");
    group.throughput(Throughput::Elements(INVENTORY_SIZE as u64));

    let candidates = select_candidates(
        &inventory,
        CapabilityClass::Pickaxe,
        Some(&block),
        SearchScope::all(),
        true,
        &oracle,
    );

    group.bench_function("select_candidates", |b| {
        b.iter(|| {
            black_box(select_candidates(
                black_box(&inventory),
                CapabilityClass::Pickaxe,
                Some(&block),
                SearchScope::all(),
                true,
                &oracle,
            ))
        });
    });

    group.bench_function("rank_best", |b| {
        b.iter(|| {
            black_box(rank_best(
                black_box(&candidates),
                CapabilityClass::Pickaxe,
                Some(&block),
                &config,
                &oracle,
            ))
        });
    });

    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let config = parse_engine_config(&ConfigSources::builtin()).unwrap();
    let engine = AutoEquip::new(config, load_block_tags(None).unwrap());
    let block = BlockId::new("DIAMOND_ORE");
    let mut player = Player::new(full_inventory());

    // After the first call the winner is held, so every iteration measures
    // the idempotent path.
    c.bench_function("decide_and_switch_for_block", |b| {
        b.iter(|| black_box(engine.decide_and_switch_for_block(&mut player, &block).unwrap()));
    });
}

criterion_group!(benches, bench_rank_full_inventory, bench_pipeline);
criterion_main!(benches);

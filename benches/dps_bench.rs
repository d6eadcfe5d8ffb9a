//! Calculator throughput benchmarks: attack tables and DPS estimates per second.
//!
//! Run with: `cargo bench`
//! Results show mean time per evaluation and throughput (evaluations/s).

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use warcalc::combat::{build_attack_table, calculate_dps, WarriorStats};
use warcalc::parallel::{sweep_weapon_skill, WorkerPool};

fn benchmark_stats() -> WarriorStats {
    WarriorStats {
        base_damage_mh: 100.0,
        base_speed_mh: 2.8,
        attack_power: 800.0,
        hit: 5.0,
        spellbook_crit: 20.0,
        target_armor: 3000.0,
        ..WarriorStats::default()
    }
}

fn dual_wield_stats() -> WarriorStats {
    WarriorStats {
        base_damage_oh: 60.0,
        base_speed_oh: 1.8,
        dual_wield_spec: 5,
        ..benchmark_stats()
    }
}

fn bench_calculator(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculator");
    group.sample_size(100);
    group.throughput(Throughput::Elements(1));

    let single = benchmark_stats();
    group.bench_function("attack_table", |b| {
        b.iter(|| black_box(build_attack_table(black_box(&single))))
    });

    group.bench_function("dps_single_wield", |b| {
        b.iter(|| black_box(calculate_dps(black_box(&single))))
    });

    let dual = dual_wield_stats();
    group.bench_function("dps_dual_wield", |b| {
        b.iter(|| black_box(calculate_dps(black_box(&dual))))
    });

    group.finish();
}

fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep");
    group.sample_size(50);

    let stats = dual_wield_stats();
    let pool = WorkerPool { workers: 0 };

    // 300..=315 covers the usual weapon-skill gearing range at level 60.
    group.throughput(Throughput::Elements(16));
    group.bench_function("weapon_skill_300_to_315", |b| {
        b.iter(|| black_box(sweep_weapon_skill(black_box(&stats), 300, 315, &pool)))
    });

    group.finish();
}

criterion_group!(benches, bench_calculator, bench_sweep);
criterion_main!(benches);

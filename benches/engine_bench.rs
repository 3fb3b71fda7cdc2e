//! Engine throughput benchmarks: ability applications per second and full
//! scenario runs per second.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};

use barrow::combat::{apply, resolve_by_name, Entity, Target, Variant};
use barrow::data::{load_scenario, run_scenario};

fn bench_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply");
    group.throughput(Throughput::Elements(1));

    group.bench_function("mummy_attack_on_ghost", |b| {
        let mummy = Entity::new(Variant::Mummy, None);
        let ghost = Entity::new(Variant::Ghost, None);
        let template = resolve_by_name(&mummy, "Attack").expect("mummy should have Attack");
        b.iter_batched(
            || (mummy.clone(), ghost.clone()),
            |(mut actor, mut target)| {
                black_box(apply(template, &mut actor, Target::Other(&mut target)))
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("vampire_bite_drain", |b| {
        let vampire = Entity::new(Variant::Vampire, None);
        let zombie = Entity::new(Variant::Zombie, None);
        let template = resolve_by_name(&vampire, "Bite").expect("vampire should have Bite");
        b.iter_batched(
            || (vampire.clone(), zombie.clone()),
            |(mut actor, mut target)| {
                black_box(apply(template, &mut actor, Target::Other(&mut target)))
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_scenario(c: &mut Criterion) {
    let scenario = load_scenario("data/scenarios/kings_crypt.json").expect("fixture should load");

    let mut group = c.benchmark_group("scenario");
    group.throughput(Throughput::Elements(scenario.cases.len() as u64));
    group.bench_function("kings_crypt_full_run", |b| {
        b.iter(|| black_box(run_scenario(&scenario).expect("run should complete")));
    });
    group.finish();
}

criterion_group!(benches, bench_apply, bench_scenario);
criterion_main!(benches);

//! Arbitration benchmark suite using Criterion.
//!
//! Measures the per-cycle hot paths: percept overlap scoring, broadcast
//! selection over a populated global workspace, and scheme activation
//! against a broadcast.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use cognitive_cycle_core::attention::{AttentionCodelet, CodeletDomain};
use cognitive_cycle_core::memory::ProceduralMemory;
use cognitive_cycle_core::similarity::match_pct;
use cognitive_cycle_core::types::{Action, Coalition, CognitiveContent, Percept, Scheme};
use cognitive_cycle_core::GlobalWorkspace;

fn content_pool(size: usize, domain: &str) -> Vec<CognitiveContent> {
    (0..size)
        .map(|i| {
            CognitiveContent::new(Percept::new(domain, format!("item-{i}")))
                .with_current_activation(1.0 + i as f32 * 0.001)
        })
        .collect()
}

fn watcher() -> AttentionCodelet {
    AttentionCodelet::new("bench-watcher", CodeletDomain::Scene, |_: &CognitiveContent| {
        true
    })
}

/// Percept-set overlap at typical context sizes.
fn bench_match_pct(c: &mut Criterion) {
    let mut group = c.benchmark_group("match_pct");

    for size in [8usize, 64, 512] {
        let left = content_pool(size, "cell");
        // half-overlapping right side
        let mut right = content_pool(size / 2, "cell");
        right.extend(content_pool(size / 2, "concept"));

        group.bench_with_input(BenchmarkId::new("overlap", size), &size, |b, _| {
            b.iter(|| {
                black_box(match_pct(
                    Some(black_box(&left)),
                    Some(black_box(&right)),
                ))
            })
        });
    }

    group.finish();
}

/// Winner selection over a populated global workspace.
fn bench_broadcast_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("broadcast_selection");

    for coalitions in [16usize, 128, 1024] {
        let mut global = GlobalWorkspace::new();
        let codelet = watcher();
        global.receive_coalitions(
            (0..coalitions)
                .map(|i| Coalition::new(content_pool(8, &format!("domain-{i}")), codelet.clone()))
                .collect(),
        );

        group.bench_with_input(
            BenchmarkId::new("winner", coalitions),
            &global,
            |b, global| b.iter(|| black_box(global.broadcast())),
        );
    }

    group.finish();
}

/// Scheme activation and candidate collection against one broadcast.
fn bench_scheme_activation(c: &mut Criterion) {
    let mut group = c.benchmark_group("scheme_activation");

    for schemes in [32usize, 256, 2048] {
        let broadcast = Coalition::new(content_pool(16, "cell"), watcher());

        group.bench_with_input(
            BenchmarkId::new("activate_and_collect", schemes),
            &schemes,
            |b, &schemes| {
                b.iter_with_setup(
                    || {
                        let mut memory = ProceduralMemory::new(1.0);
                        for i in 0..schemes {
                            memory.add_scheme(Scheme::template(Action::move_to(i as i64)));
                        }
                        (memory, ChaCha8Rng::seed_from_u64(42))
                    },
                    |(mut memory, mut rng)| {
                        memory.receive_broadcast(Some(black_box(&broadcast)));
                        black_box(memory.candidate_behaviors(&mut rng))
                    },
                )
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_match_pct,
    bench_broadcast_selection,
    bench_scheme_activation
);
criterion_main!(benches);

//! Benchmarks for grouping and expression derivation
//!
//! Maps are drawn from a fixed seed so runs are comparable.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use karnaugh_logic::{
    build_expression_with, find_groups, generate_grid_with_rng, Grid, KarnaughConfig, TermStyle,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const SAMPLE_MAPS: usize = 64;

fn sample_grids(variable_count: usize) -> Vec<Grid> {
    let config = KarnaughConfig::default();
    let mut rng = ChaCha8Rng::seed_from_u64(0x4b4d4150);
    (0..SAMPLE_MAPS)
        .map(|_| {
            generate_grid_with_rng(variable_count, &config, &mut rng)
                .expect("supported variable count")
        })
        .collect()
}

fn bench_find_groups(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_groups");
    for variable_count in [2, 3, 4] {
        let grids = sample_grids(variable_count);
        group.throughput(Throughput::Elements(grids.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(variable_count),
            &grids,
            |b, grids| {
                b.iter(|| {
                    for grid in grids {
                        black_box(find_groups(black_box(grid)));
                    }
                })
            },
        );
    }
    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    let grids = sample_grids(4);
    for (name, term_style) in [
        ("placeholder", TermStyle::Placeholder),
        ("literals", TermStyle::Literals),
    ] {
        let config = KarnaughConfig {
            term_style,
            ..Default::default()
        };
        group.bench_function(name, |b| {
            b.iter(|| {
                for grid in &grids {
                    let groups = find_groups(grid);
                    black_box(build_expression_with(&groups, grid.variable_count(), &config));
                }
            })
        });
    }
    group.finish();
}

fn bench_full_map(c: &mut Criterion) {
    // Worst case for the flood fill: every cell set, every neighbour checked
    let grid = Grid::from_minterms(4, &(0..16).collect::<Vec<_>>()).expect("valid minterms");
    c.bench_function("find_groups/full_4x4", |b| {
        b.iter(|| black_box(find_groups(black_box(&grid))))
    });
}

criterion_group!(benches, bench_find_groups, bench_pipeline, bench_full_map);
criterion_main!(benches);

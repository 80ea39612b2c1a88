//! Benchmarks for the Dishboard ranking store
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dishboard::form::parse_order_count;
use dishboard::ranking::*;

fn create_board(size: usize) -> Leaderboard {
    let seed: Vec<SeedDish> = (0..size)
        .map(|i| {
            SeedDish::new(
                DishName::new(format!("Dish {}", i)).unwrap(),
                OrderCount::new((i % 500) as u32 + 1).unwrap(),
            )
        })
        .collect();
    Leaderboard::from_seed(&seed)
}

fn bench_upsert(c: &mut Criterion) {
    let mut group = c.benchmark_group("upsert");

    for size in [10, 1000, 10000] {
        let board = create_board(size);
        let last = board.dishes()[size - 1].clone();

        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("add", size), &board, |b, board| {
            b.iter(|| {
                let candidate = Candidate::add(
                    DishName::new("Truffle Pasta").unwrap(),
                    OrderCount::new(250).unwrap(),
                );
                board.upsert(black_box(candidate)).unwrap()
            })
        });

        group.bench_with_input(BenchmarkId::new("edit_to_top", size), &board, |b, board| {
            b.iter(|| {
                let candidate = Candidate::edit(
                    last.id,
                    last.name.clone(),
                    OrderCount::new(1_000_000).unwrap(),
                );
                board.upsert(black_box(candidate)).unwrap()
            })
        });
    }

    group.finish();
}

fn bench_standings(c: &mut Criterion) {
    let board = create_board(10000);

    c.bench_function("standings_10000", |b| {
        b.iter(|| black_box(&board).standings().map(|s| s.rank.get()).sum::<usize>())
    });
}

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_order_count", |b| {
        b.iter(|| parse_order_count(black_box(" 4096 ")).unwrap())
    });
}

criterion_group!(benches, bench_upsert, bench_standings, bench_parse);
criterion_main!(benches);

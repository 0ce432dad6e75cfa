#[macro_use]
extern crate criterion;

use criterion::Criterion;
use sudoku_logic::{analyze_seeded, generate_seeded, solve_grid_seeded, Grid};

fn grid(line: &str) -> Grid {
    line.parse().unwrap_or_else(|err| panic!("{:?}", err))
}

fn _1_easy_puzzle_solve(c: &mut Criterion) {
    let puzzle = grid("53.8..6...495.2831.271..5.975.9.1..42.84....64....8....6...341.3...1..2.18.2.4...");
    c.bench_function("_1_easy_puzzle_solve", |b| {
        b.iter(|| solve_grid_seeded(&puzzle, 0))
    });
}

fn _2_master_puzzle_solve(c: &mut Criterion) {
    let puzzle = grid("..3.19..712.7.4..5.......3.....6872..7.......2..19......4..617.......9..8..473.5.");
    c.bench_function("_2_master_puzzle_solve", |b| {
        b.iter(|| solve_grid_seeded(&puzzle, 0))
    });
}

fn _3_inkala_puzzle_solve(c: &mut Criterion) {
    let puzzle = grid("..53.....8......2..7..1.5..4....53...1..7...6..32...8..6.5....9..4....3......97..");
    c.bench_function("_3_inkala_puzzle_solve", |b| {
        b.iter(|| solve_grid_seeded(&puzzle, 0))
    });
}

fn _4_seventeen_clue_grade(c: &mut Criterion) {
    let puzzle = grid("........1.....2....13.....4.......2.....5..6...71........4..7.8.9.......62.3.....");
    c.bench_function("_4_seventeen_clue_grade", |b| {
        b.iter(|| analyze_seeded(&puzzle, 0))
    });
}

fn _5_generate_puzzle(c: &mut Criterion) {
    let mut seed = 0;
    c.bench_function("_5_generate_puzzle", |b| {
        b.iter(|| {
            seed += 1;
            generate_seeded(seed)
        })
    });
}

criterion_group!(
    benches,
    _1_easy_puzzle_solve,
    _2_master_puzzle_solve,
    _3_inkala_puzzle_solve,
    _4_seventeen_clue_grade,
    _5_generate_puzzle
);
criterion_main!(benches);

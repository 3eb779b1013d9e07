use criterion::{black_box, criterion_group, criterion_main, Criterion};

use sudoku_classic::SudokuGrid;
use sudoku_classic::generator::{Generator, Reducer};
use sudoku_classic::solver;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Explanation of benchmark classes:

// scan: candidate elimination only, no search.
// solve: full solving, including puzzles that force guessing, an empty grid
// (maximum search freedom), and an unsolvable grid (exhaustive failure).
// generate: grid generation and reduction with a seeded RNG, so runs are
// comparable.

const EXAMPLE: &str = "\
    .5...1.6.\
    1..5..8.3\
    ....7..5.\
    .7.86...5\
    ..59.73..\
    6...35.2.\
    .4..5....\
    5.3..4..2\
    .9.1...8.";

const GUESSING: &str = "\
    .5.3...7.\
    1...2.8..\
    .2.4.9...\
    ..31..7.6\
    .4..6..5.\
    5.6..34..\
    ...8.2.3.\
    ..7.9...2\
    .6...1.8.";

const UNSOLVABLE: &str = "\
    ......1..\
    ......2..\
    ......3..\
    .........\
    1234567..\
    ......4..\
    312679.8.\
    ......6..\
    ......9..";

fn benchmark_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");
    let example = SudokuGrid::parse(EXAMPLE).unwrap();

    group.bench_function("example", |b| b.iter(|| {
        let mut grid = black_box(&example).clone();
        solver::scan(&mut grid)
    }));

    group.finish();
}

fn benchmark_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");
    let puzzles = [
        ("example", SudokuGrid::parse(EXAMPLE).unwrap()),
        ("guessing", SudokuGrid::parse(GUESSING).unwrap()),
        ("empty", SudokuGrid::empty()),
        ("unsolvable", SudokuGrid::parse(UNSOLVABLE).unwrap())
    ];

    for (name, puzzle) in puzzles.iter() {
        group.bench_function(*name, |b|
            b.iter(|| solver::solve(black_box(puzzle))));
    }

    group.finish();
}

fn benchmark_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    group.sample_size(20);

    group.bench_function("full_grid", |b| b.iter(|| {
        let mut generator = Generator::new(ChaCha8Rng::seed_from_u64(42));
        generator.generate()
    }));

    group.bench_function("reduced_puzzle", |b| b.iter(|| {
        let mut generator = Generator::new(ChaCha8Rng::seed_from_u64(42));
        let mut grid = generator.generate().unwrap();
        let mut reducer = Reducer::new(ChaCha8Rng::seed_from_u64(43));
        reducer.reduce(&mut grid);
        grid
    }));

    group.finish();
}

criterion_group!(benches, benchmark_scan, benchmark_solve,
    benchmark_generate);
criterion_main!(benches);

use criterion::{criterion_group, criterion_main, Criterion};

use sudoku_mini::Puzzle;
use sudoku_mini::rules::StandardRules;
use sudoku_mini::solver::{BacktrackingSolver, Solver};

// Explanation of benchmark classes:
//
// example puzzle: The canned puzzle with 10 clues and a unique solution, a
//                 representative human-authored instance.
// sparse puzzle: Only 5 clues, leaving the search maximal freedom.
// empty grid: No clues at all, the worst case for the number of cells the
//             search has to fill.

const EXAMPLE_PUZZLE: &str = "\
     , ,4, , , ,\
     ,3, ,5, , ,\
    4, , , ,3, ,\
    2, , , ,5, ,\
     ,1, ,4, , ,\
     , ,2, , , ";

const SPARSE_PUZZLE: &str = "\
     , , , , ,5,\
     ,3, , , , ,\
     , , ,1, , ,\
     , , , , , ,\
     ,6, , ,2, ,\
     , , , , , ";

const EMPTY_GRID: &str = "\
     , , , , , ,\
     , , , , , ,\
     , , , , , ,\
     , , , , , ,\
     , , , , , ,\
     , , , , , ";

fn benchmark_puzzle(c: &mut Criterion, id: &str, code: &str) {
    let puzzle = Puzzle::parse(code, StandardRules).unwrap();
    assert!(puzzle.is_valid());

    c.bench_function(id, |b| b.iter(|| {
        let mut puzzle = puzzle.clone();
        assert!(BacktrackingSolver.solve(&mut puzzle));
        puzzle
    }));
}

fn benchmark_example_puzzle(c: &mut Criterion) {
    benchmark_puzzle(c, "example puzzle", EXAMPLE_PUZZLE)
}

fn benchmark_sparse_puzzle(c: &mut Criterion) {
    benchmark_puzzle(c, "sparse puzzle", SPARSE_PUZZLE)
}

fn benchmark_empty_grid(c: &mut Criterion) {
    benchmark_puzzle(c, "empty grid", EMPTY_GRID)
}

criterion_group!(backtracking,
    benchmark_example_puzzle,
    benchmark_sparse_puzzle,
    benchmark_empty_grid
);

criterion_main!(backtracking);

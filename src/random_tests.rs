use crate::{Grid, Puzzle, SIZE};
use crate::rules::StandardRules;
use crate::solver::{BacktrackingSolver, Solver};

use rand::{Rng, SeedableRng};
use rand::seq::SliceRandom;

use rand_chacha::ChaCha8Rng;

const RUNS: usize = 30;

fn random_solved_grid(rng: &mut ChaCha8Rng) -> Grid {
    // a random permutation in the top row merely relabels the digits of an
    // unconstrained completion, so solving always succeeds
    let mut digits: Vec<usize> = (1..=SIZE).collect();
    digits.shuffle(rng);

    let mut puzzle = Puzzle::new_empty(StandardRules);

    for (column, &number) in digits.iter().enumerate() {
        puzzle.grid_mut().set_cell(column, 0, number).unwrap();
    }

    assert!(BacktrackingSolver.solve(&mut puzzle));
    puzzle.grid().clone()
}

fn random_puzzle(rng: &mut ChaCha8Rng) -> Puzzle<StandardRules> {
    let mut grid = random_solved_grid(rng);
    let removals = rng.gen_range(10..30);

    for _ in 0..removals {
        let column = rng.gen_range(0..SIZE);
        let row = rng.gen_range(0..SIZE);
        grid.clear_cell(column, row).unwrap();
    }

    Puzzle::new_with_grid(grid, StandardRules)
}

#[test]
fn reduced_grids_remain_consistent_and_solvable() {
    let mut rng = ChaCha8Rng::seed_from_u64(23);

    for _ in 0..RUNS {
        let puzzle = random_puzzle(&mut rng);
        let mut solved = puzzle.clone();

        assert!(puzzle.is_valid());
        assert!(BacktrackingSolver.solve(&mut solved));
        assert!(puzzle.is_valid_solution(solved.grid()));
    }
}

#[test]
fn solving_reduced_grids_is_deterministic() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for _ in 0..RUNS {
        let puzzle = random_puzzle(&mut rng);
        let mut first = puzzle.clone();
        let mut second = puzzle.clone();

        assert!(BacktrackingSolver.solve(&mut first));
        assert!(BacktrackingSolver.solve(&mut second));
        assert_eq!(first.grid(), second.grid());
    }
}

#[test]
fn solved_random_grids_pass_validation() {
    let mut rng = ChaCha8Rng::seed_from_u64(17);

    for _ in 0..RUNS {
        let grid = random_solved_grid(&mut rng);
        let puzzle = Puzzle::new_with_grid(grid, StandardRules);

        assert!(puzzle.is_valid());
        assert!(puzzle.grid().is_full());
    }
}

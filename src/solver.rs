//! This module contains the logic for solving puzzles.
//!
//! Most importantly, this module contains the definition of the [Solver]
//! trait and the [BacktrackingSolver] as a generally usable implementation.

use crate::{Puzzle, SIZE};
use crate::rules::Rule;

/// A trait for structs which have the ability to solve puzzles in place.
pub trait Solver {

    /// Solves, or attempts to solve, the provided puzzle. On success, `true`
    /// is returned and every empty cell of the puzzle's grid has been filled
    /// such that the whole grid matches the puzzle's rules; cells that
    /// already contained a digit are never altered. If no solution exists,
    /// `false` is returned and the grid is left exactly as it was before the
    /// call.
    ///
    /// The puzzle is expected to satisfy [Puzzle::is_valid](crate::Puzzle::is_valid)
    /// when this method is called; solvers do not re-derive that themselves.
    /// For a puzzle whose clues already conflict, the result is unspecified.
    fn solve(&self, puzzle: &mut Puzzle<impl Rule + Clone>) -> bool;
}

/// A [Solver] which solves puzzles by recursively testing all valid digits
/// for each empty cell, undoing a placement whenever it leads to a dead end.
/// Its worst-case runtime is exponential in the number of empty cells, but
/// on a 6x6 board any puzzle resolves in negligible time.
///
/// Empty cells are visited in row-major order (the top row left-to-right,
/// then the second row, and so on) and candidate digits are tried in
/// ascending order. The first solution found this way is kept, so the
/// result is deterministic: of multiple possible completions, the search
/// always yields the same one.
pub struct BacktrackingSolver;

impl BacktrackingSolver {
    fn solve_rec(puzzle: &mut Puzzle<impl Rule + Clone>, column: usize,
            row: usize) -> bool {
        if row == SIZE {
            return true;
        }

        let next_column = (column + 1) % SIZE;
        let next_row = if next_column == 0 { row + 1 } else { row };

        if let Some(_) = puzzle.grid().get_cell(column, row).unwrap() {
            BacktrackingSolver::solve_rec(puzzle, next_column, next_row)
        }
        else {
            for number in 1..=SIZE {
                if puzzle.is_valid_number(column, row, number).unwrap() {
                    puzzle.grid_mut().set_cell(column, row, number).unwrap();

                    if BacktrackingSolver::solve_rec(puzzle, next_column,
                            next_row) {
                        return true;
                    }

                    puzzle.grid_mut().clear_cell(column, row).unwrap();
                }
            }

            false
        }
    }
}

impl Solver for BacktrackingSolver {
    fn solve(&self, puzzle: &mut Puzzle<impl Rule + Clone>) -> bool {
        BacktrackingSolver::solve_rec(puzzle, 0, 0)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use crate::Grid;
    use crate::rules::StandardRules;
    use crate::util::DigitSet;

    const EXAMPLE_PUZZLE: &str = "\
         , ,4, , , ,\
         ,3, ,5, , ,\
        4, , , ,3, ,\
        2, , , ,5, ,\
         ,1, ,4, , ,\
         , ,2, , , ";

    const EXAMPLE_SOLUTION: &str = "\
        5,2,4,3,6,1,\
        1,3,6,5,4,2,\
        4,5,1,2,3,6,\
        2,6,3,1,5,4,\
        6,1,5,4,2,3,\
        3,4,2,6,1,5";

    // The three cells right of the 3 can only hold 1 and 2: 4 and 3 are
    // taken by their row, 5 and 6 by their region. No digits conflict
    // directly, so the puzzle is individually valid nonetheless.
    const INFEASIBLE_PUZZLE: &str = "\
         , , , ,5,6,\
         ,4,3, , , ,\
         , , , , , ,\
         , , , , , ,\
         , , , , , ,\
         , , , , , ";

    fn example_puzzle() -> Puzzle<StandardRules> {
        Puzzle::parse(EXAMPLE_PUZZLE, StandardRules).unwrap()
    }

    #[test]
    fn backtracking_solves_example_puzzle() {
        let mut puzzle = example_puzzle();

        assert!(puzzle.is_valid());
        assert!(BacktrackingSolver.solve(&mut puzzle));

        let expected = Grid::parse(EXAMPLE_SOLUTION).unwrap();
        assert_eq!(&expected, puzzle.grid(), "Solver gave wrong grid.");
    }

    #[test]
    fn solving_preserves_clues() {
        let mut puzzle = example_puzzle();
        let clues = puzzle.grid().clone();

        assert!(BacktrackingSolver.solve(&mut puzzle));
        assert!(puzzle.grid().is_superset(&clues));
    }

    #[test]
    fn full_valid_grid_is_fixed_point() {
        let grid = Grid::parse(EXAMPLE_SOLUTION).unwrap();
        let mut puzzle = Puzzle::new_with_grid(grid.clone(), StandardRules);

        assert!(puzzle.is_valid());
        assert!(BacktrackingSolver.solve(&mut puzzle));
        assert_eq!(&grid, puzzle.grid());
    }

    #[test]
    fn solving_twice_is_a_no_op() {
        let mut puzzle = example_puzzle();

        assert!(BacktrackingSolver.solve(&mut puzzle));

        let first_solution = puzzle.grid().clone();

        assert!(BacktrackingSolver.solve(&mut puzzle));
        assert_eq!(&first_solution, puzzle.grid());
    }

    #[test]
    fn solving_is_deterministic() {
        // a single clue leaves many possible completions
        let mut first = Puzzle::new_empty(StandardRules);
        first.grid_mut().set_cell(0, 0, 2).unwrap();
        let mut second = first.clone();

        assert!(BacktrackingSolver.solve(&mut first));
        assert!(BacktrackingSolver.solve(&mut second));
        assert_eq!(first.grid(), second.grid());
    }

    #[test]
    fn infeasible_puzzle_is_left_unchanged() {
        let mut puzzle =
            Puzzle::parse(INFEASIBLE_PUZZLE, StandardRules).unwrap();

        assert!(puzzle.is_valid());
        assert!(!BacktrackingSolver.solve(&mut puzzle));

        let original = Grid::parse(INFEASIBLE_PUZZLE).unwrap();
        assert_eq!(&original, puzzle.grid());
    }

    #[test]
    fn empty_grid_solves_to_canonical_completion() {
        let mut puzzle = Puzzle::new_empty(StandardRules);

        assert!(puzzle.is_valid());
        assert!(BacktrackingSolver.solve(&mut puzzle));

        // the lexicographically smallest grid in row-major enumeration order
        let expected = Grid::parse("\
            1,2,3,4,5,6,\
            4,5,6,1,2,3,\
            2,1,4,3,6,5,\
            3,6,5,2,1,4,\
            5,3,1,6,4,2,\
            6,4,2,5,3,1").unwrap();
        assert_eq!(&expected, puzzle.grid());
    }

    #[test]
    fn solved_grid_fills_every_group() {
        let mut puzzle = example_puzzle();

        assert!(BacktrackingSolver.solve(&mut puzzle));

        for group in puzzle.rules().get_groups() {
            let mut digits = DigitSet::new();

            for (column, row) in group {
                if let Some(number) =
                        puzzle.grid().get_cell(column, row).unwrap() {
                    digits.insert(number);
                }
            }

            assert_eq!(DigitSet::full(), digits);
        }
    }

    #[test]
    fn solved_grid_is_accepted_as_solution() {
        let puzzle = example_puzzle();
        let mut solved = puzzle.clone();

        assert!(BacktrackingSolver.solve(&mut solved));
        assert!(puzzle.is_valid_solution(solved.grid()));
    }
}

// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(missing_docs)]

//! This crate implements an easy-to-understand engine for 6x6 mini Sudoku,
//! the smaller Sudoku variant found in many newspapers and puzzle apps. The
//! board has six rows, six columns, and six 2x3 regions, each of which must
//! contain the digits 1 to 6 exactly once. The crate supports the following
//! key features:
//!
//! * Parsing and printing grids
//! * Checking validity of grids, individual cells, and potential placements
//! * Solving puzzles using a backtracking algorithm that either completes
//! the grid in place or proves that no solution exists
//!
//! # Parsing and printing grids
//!
//! See [Grid::parse] for the exact format of a grid code.
//!
//! Codes can be used to exchange grids, while pretty prints can be used to
//! display a grid in a clearer manner. An example of how to parse and
//! display a grid is provided below.
//!
//! ```
//! use sudoku_mini::Grid;
//!
//! let grid = Grid::parse("\
//!     2, , , , ,5,\
//!      , ,1, ,6, ,\
//!      ,4, , , , ,\
//!      , , , ,3, ,\
//!      ,5, ,2, , ,\
//!     6, , , , ,4").unwrap();
//! println!("{}", grid);
//! ```
//!
//! # Checking validity
//!
//! To check validity, an instance of [Puzzle] not only contains the digits
//! (stored in a [Grid]), but also the rule set which specifies when a
//! placement is legal. For ordinary mini Sudoku,
//! [StandardRules](rules::StandardRules) is used.
//!
//! It is possible to check an entire grid, individual cells, or potential
//! placements that do not require changing the puzzle's state. An example of
//! the former is provided below.
//!
//! ```
//! use sudoku_mini::Puzzle;
//! use sudoku_mini::rules::StandardRules;
//!
//! // Two 5's in the top row make this puzzle inconsistent.
//! let puzzle = Puzzle::parse("\
//!     5,5, , , , ,\
//!      , , , , , ,\
//!      , , , , , ,\
//!      , , , , , ,\
//!      , , , , , ,\
//!      , , , , , ", StandardRules).unwrap();
//!
//! assert!(!puzzle.is_valid());
//! ```
//!
//! If you are developing an app that gives feedback to the user, it may be
//! desirable to check a potential placement before applying it. Note that
//! two cells in the same region conflict even if they share neither a row
//! nor a column.
//!
//! ```
//! use sudoku_mini::Puzzle;
//! use sudoku_mini::rules::StandardRules;
//!
//! let mut puzzle = Puzzle::new_empty(StandardRules);
//! puzzle.grid_mut().set_cell(0, 0, 3).unwrap();
//!
//! // (2, 1) lies in the top-left region, just like (0, 0)
//! assert!(!puzzle.is_valid_number(2, 1, 3).unwrap());
//! assert!(puzzle.is_valid_number(3, 1, 3).unwrap());
//! ```
//!
//! # Solving puzzles
//!
//! This crate offers a [Solver](solver::Solver) trait for structs that can
//! solve puzzles. As the default implementation,
//! [BacktrackingSolver](solver::BacktrackingSolver) is provided, which fills
//! the grid in place with the first solution it finds, or leaves the grid
//! untouched and reports failure if there is none. Callers are expected to
//! check [Puzzle::is_valid] first and treat a negative result as terminal.
//!
//! ```
//! use sudoku_mini::{Grid, Puzzle};
//! use sudoku_mini::rules::StandardRules;
//! use sudoku_mini::solver::{BacktrackingSolver, Solver};
//!
//! let mut puzzle = Puzzle::parse("\
//!      , ,4, , , ,\
//!      ,3, ,5, , ,\
//!     4, , , ,3, ,\
//!     2, , , ,5, ,\
//!      ,1, ,4, , ,\
//!      , ,2, , , ", StandardRules).unwrap();
//!
//! assert!(puzzle.is_valid());
//! assert!(BacktrackingSolver.solve(&mut puzzle));
//!
//! let expected = Grid::parse("\
//!     5,2,4,3,6,1,\
//!     1,3,6,5,4,2,\
//!     4,5,1,2,3,6,\
//!     2,6,3,1,5,4,\
//!     6,1,5,4,2,3,\
//!     3,4,2,6,1,5").unwrap();
//!
//! assert_eq!(&expected, puzzle.grid());
//! ```
//!
//! Because empty cells are visited in row-major order and candidate digits
//! in ascending order, solving is fully deterministic: if a puzzle has more
//! than one solution, the same one is found every time.

pub mod error;
pub mod rules;
pub mod solver;
pub mod util;

#[cfg(test)]
mod random_tests;

use error::{GridError, GridParseError, GridParseResult, GridResult};
use rules::Rule;

use serde::{Deserialize, Serialize};

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};

/// The number of columns and rows of a [Grid], as well as the highest digit.
pub const SIZE: usize = 6;

/// The number of columns of one region of a [Grid].
pub const REGION_WIDTH: usize = 3;

/// The number of rows of one region of a [Grid].
pub const REGION_HEIGHT: usize = 2;

/// A 6x6 mini Sudoku grid. Cells are organized into six 2x3 regions (two
/// rows tall, three columns wide) which tile the board:
///
/// ```text
/// ╔═══╤═══╤═══╦═══╤═══╤═══╗
/// ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║
/// ╠═══╪═══╪═══╬═══╪═══╪═══╣
/// ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║
/// ╠═══╪═══╪═══╬═══╪═══╪═══╣
/// ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║
/// ╚═══╧═══╧═══╩═══╧═══╧═══╝
/// ```
///
/// Each cell may or may not be occupied by a digit from 1 to 6. A grid is
/// plain data: it enforces that stored digits are in range, but not that
/// they are consistent with each other. Consistency is the concern of the
/// [rules](crate::rules) module, accessed through a [Puzzle].
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(into = "String")]
#[serde(try_from = "String")]
pub struct Grid {
    cells: [Option<usize>; SIZE * SIZE]
}

fn to_char(cell: Option<usize>) -> char {
    if let Some(n) = cell {
        ('0' as u8 + n as u8) as char
    }
    else {
        ' '
    }
}

fn line(start: char, thick_sep: char, thin_sep: char,
        segment: impl Fn(usize) -> char, pad: char, end: char,
        newline: bool) -> String {
    let mut result = String::new();

    for x in 0..SIZE {
        if x == 0 {
            result.push(start);
        }
        else if x % REGION_WIDTH == 0 {
            result.push(thick_sep);
        }
        else {
            result.push(thin_sep);
        }

        result.push(pad);
        result.push(segment(x));
        result.push(pad);
    }

    result.push(end);

    if newline {
        result.push('\n');
    }

    result
}

fn top_row() -> String {
    line('╔', '╦', '╤', |_| '═', '═', '╗', true)
}

fn thin_separator_line() -> String {
    line('╟', '╫', '┼', |_| '─', '─', '╢', true)
}

fn thick_separator_line() -> String {
    line('╠', '╬', '╪', |_| '═', '═', '╣', true)
}

fn bottom_row() -> String {
    line('╚', '╩', '╧', |_| '═', '═', '╝', false)
}

fn content_row(grid: &Grid, y: usize) -> String {
    line('║', '║', '│', |x| to_char(grid.get_cell(x, y).unwrap()), ' ', '║',
        true)
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let thin_separator_line = thin_separator_line();
        let thick_separator_line = thick_separator_line();

        for y in 0..SIZE {
            if y == 0 {
                f.write_str(top_row().as_str())?;
            }
            else if y % REGION_HEIGHT == 0 {
                f.write_str(thick_separator_line.as_str())?;
            }
            else {
                f.write_str(thin_separator_line.as_str())?;
            }

            f.write_str(content_row(self, y).as_str())?;
        }

        f.write_str(bottom_row().as_str())?;
        Ok(())
    }
}

pub(crate) fn index(column: usize, row: usize) -> usize {
    row * SIZE + column
}

impl Grid {

    /// Creates a new, empty grid.
    pub fn new() -> Grid {
        Grid {
            cells: [None; SIZE * SIZE]
        }
    }

    /// Parses a code encoding a grid. The code is a comma-separated list of
    /// 36 entries, which are either empty or a digit from 1 to 6. The
    /// entries are assigned left-to-right, top-to-bottom, where each row is
    /// completed before the next one is started. Whitespace in the entries
    /// is ignored to allow for more intuitive formatting.
    ///
    /// As an example, the code `1, ,2, , ,6, ...` (continued for 36 entries)
    /// puts a 1 in the top-left cell, a 2 in the third cell of the top row,
    /// and a 6 in its last cell.
    ///
    /// # Errors
    ///
    /// Any variant of [GridParseError] (see that documentation).
    pub fn parse(code: &str) -> GridParseResult<Grid> {
        let mut grid = Grid::new();
        let entries: Vec<&str> = code.split(',').collect();

        if entries.len() != SIZE * SIZE {
            return Err(GridParseError::WrongNumberOfCells);
        }

        for (i, entry) in entries.iter().enumerate() {
            let entry = entry.trim();

            if entry.is_empty() {
                continue;
            }

            let number = entry.parse::<usize>()?;

            if number == 0 || number > SIZE {
                return Err(GridParseError::InvalidNumber);
            }

            grid.cells[i] = Some(number);
        }

        Ok(grid)
    }

    /// Converts the grid into a `String` in a way that is consistent with
    /// [Grid::parse]. That is, a grid that is converted to a string and
    /// parsed again will not change, as is illustrated below.
    ///
    /// ```
    /// use sudoku_mini::Grid;
    ///
    /// let mut grid = Grid::new();
    ///
    /// // Just some arbitrary changes to create some content.
    /// grid.set_cell(1, 1, 4).unwrap();
    /// grid.set_cell(1, 2, 5).unwrap();
    ///
    /// let grid_str = grid.to_parseable_string();
    /// let grid_parsed = Grid::parse(grid_str.as_str()).unwrap();
    /// assert_eq!(grid, grid_parsed);
    /// ```
    pub fn to_parseable_string(&self) -> String {
        self.cells.iter()
            .map(|cell| match cell {
                Some(number) => number.to_string(),
                None => String::new()
            })
            .collect::<Vec<String>>()
            .join(",")
    }

    /// Gets the content of the cell at the specified position.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, SIZE[`.
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, SIZE[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `GridError::OutOfBounds` is returned.
    pub fn get_cell(&self, column: usize, row: usize)
            -> GridResult<Option<usize>> {
        if column >= SIZE || row >= SIZE {
            Err(GridError::OutOfBounds)
        }
        else {
            Ok(self.cells[index(column, row)])
        }
    }

    /// Indicates whether the cell at the specified position has the given
    /// number. This will return `false` if there is a different number in
    /// that cell or it is empty.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the checked cell. Must be in
    /// the range `[0, SIZE[`.
    /// * `row`: The row (y-coordinate) of the checked cell. Must be in the
    /// range `[0, SIZE[`.
    /// * `number`: The number to check whether it is in the specified cell.
    /// If it is *not* in the range `[1, SIZE]`, `false` will always be
    /// returned.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `GridError::OutOfBounds` is returned.
    pub fn has_number(&self, column: usize, row: usize, number: usize)
            -> GridResult<bool> {
        if let Some(content) = self.get_cell(column, row)? {
            Ok(number == content)
        }
        else {
            Ok(false)
        }
    }

    /// Sets the content of the cell at the specified position to the given
    /// number. If the cell was not empty, the old number will be
    /// overwritten.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the assigned cell. Must be
    /// in the range `[0, SIZE[`.
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in the
    /// range `[0, SIZE[`.
    /// * `number`: The number to assign to the specified cell. Must be in
    /// the range `[1, SIZE]`.
    ///
    /// # Errors
    ///
    /// * `GridError::OutOfBounds` If either `column` or `row` are not in the
    /// specified range.
    /// * `GridError::InvalidNumber` If `number` is not in the specified
    /// range.
    pub fn set_cell(&mut self, column: usize, row: usize, number: usize)
            -> GridResult<()> {
        if column >= SIZE || row >= SIZE {
            return Err(GridError::OutOfBounds);
        }

        if number == 0 || number > SIZE {
            return Err(GridError::InvalidNumber);
        }

        self.cells[index(column, row)] = Some(number);
        Ok(())
    }

    /// Clears the content of the cell at the specified position, that is, if
    /// it contains a number, that number is removed. If the cell is already
    /// empty, it will be left that way.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the cleared cell. Must be in
    /// the range `[0, SIZE[`.
    /// * `row`: The row (y-coordinate) of the cleared cell. Must be in the
    /// range `[0, SIZE[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `GridError::OutOfBounds` is returned.
    pub fn clear_cell(&mut self, column: usize, row: usize) -> GridResult<()> {
        if column >= SIZE || row >= SIZE {
            return Err(GridError::OutOfBounds);
        }

        self.cells[index(column, row)] = None;
        Ok(())
    }

    /// Counts the number of clues given by this grid. This is the number of
    /// non-empty cells.
    pub fn count_clues(&self) -> usize {
        self.cells.iter()
            .filter(|cell| cell.is_some())
            .count()
    }

    /// Indicates whether this grid is full, i.e. every cell is filled with a
    /// number. In this case, [Grid::count_clues] returns 36.
    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|c| c == &None)
    }

    /// Indicates whether this grid is empty, i.e. no cell is filled with a
    /// number. In this case, [Grid::count_clues] returns 0.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c == &None)
    }

    /// Indicates whether this grid configuration is a subset of another one.
    /// That is, all cells filled in this grid with some number must be
    /// filled in `other` with the same number. If this condition is met,
    /// `true` is returned, and `false` otherwise.
    pub fn is_subset(&self, other: &Grid) -> bool {
        self.cells.iter()
            .zip(other.cells.iter())
            .all(|(self_cell, other_cell)| {
                match self_cell {
                    Some(self_number) =>
                        match other_cell {
                            Some(other_number) => self_number == other_number,
                            None => false
                        },
                    None => true
                }
            })
    }

    /// Indicates whether this grid configuration is a superset of another
    /// one. That is, all cells filled in the `other` grid with some number
    /// must be filled in this one with the same number. If this condition is
    /// met, `true` is returned, and `false` otherwise.
    pub fn is_superset(&self, other: &Grid) -> bool {
        other.is_subset(self)
    }

    /// Gets the slice which holds the cells. They are in left-to-right,
    /// top-to-bottom order, where rows are together.
    pub fn cells(&self) -> &[Option<usize>] {
        &self.cells
    }
}

impl Default for Grid {
    fn default() -> Grid {
        Grid::new()
    }
}

impl From<Grid> for String {
    fn from(grid: Grid) -> String {
        grid.to_parseable_string()
    }
}

impl TryFrom<String> for Grid {
    type Error = GridParseError;

    fn try_from(code: String) -> GridParseResult<Grid> {
        Grid::parse(&code)
    }
}

/// A puzzle represents a grid of digits with an associated rule set. The
/// digits may or may not fulfill the rules, but there is a method to check
/// that.
///
/// There is no guarantee that the puzzle is solvable, however the
/// [solver](crate::solver) module provides a way to check that.
#[derive(Clone)]
pub struct Puzzle<R: Rule + Clone> {
    grid: Grid,
    rules: R
}

impl<R: Rule + Clone> Puzzle<R> {

    /// Creates a new puzzle with the provided rule set and an empty grid.
    ///
    /// # Arguments
    ///
    /// * `rules`: The rule set which is checked by this puzzle. Grid
    /// configurations which violate it will be seen as invalid by
    /// [Puzzle::is_valid].
    pub fn new_empty(rules: R) -> Puzzle<R> {
        Puzzle {
            grid: Grid::new(),
            rules
        }
    }

    /// Creates a new puzzle with the provided rule set and a given grid,
    /// which may already contain some digits. Note that it is *not* checked
    /// whether the given grid fulfills the rules - it is perfectly legal to
    /// create an invalid puzzle here.
    ///
    /// # Arguments
    ///
    /// * `grid`: The initial [Grid] which contains the digits with which the
    /// puzzle is filled.
    /// * `rules`: The rule set which is checked by this puzzle. Grid
    /// configurations which violate it will be seen as invalid by
    /// [Puzzle::is_valid].
    pub fn new_with_grid(grid: Grid, rules: R) -> Puzzle<R> {
        Puzzle {
            grid,
            rules
        }
    }

    /// Parses the code into a [Grid] using [Grid::parse] and wraps the
    /// result in a puzzle with the given rule set. Note that it is not
    /// required that the code matches the rules. It is perfectly legal to
    /// parse an invalid puzzle.
    ///
    /// # Errors
    ///
    /// If the parsing fails. See [Grid::parse] for further information.
    pub fn parse(code: &str, rules: R) -> GridParseResult<Puzzle<R>> {
        Ok(Puzzle::new_with_grid(Grid::parse(code)?, rules))
    }

    /// Gets a reference to the [Grid] of this puzzle.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Gets a mutable reference to the [Grid] of this puzzle.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Gets a reference to the rule set of this puzzle.
    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// Indicates whether the entire grid matches the rules, that is, every
    /// placed digit is consistent with all other cells. Empty cells do not
    /// make a grid invalid, so this is the consistency pre-check to run
    /// before attempting to solve. It completes in one pass over the grid's
    /// groups.
    pub fn is_valid(&self) -> bool {
        self.rules.check(&self.grid)
    }

    /// Indicates whether the cell at the given location matches the rules.
    /// That is, if the specified cell violates the rules, `false` is
    /// returned, and `true` otherwise. Empty cells are always valid.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the checked cell. Must be in
    /// the range `[0, SIZE[`.
    /// * `row`: The row (y-coordinate) of the checked cell. Must be in the
    /// range `[0, SIZE[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `GridError::OutOfBounds` is returned.
    pub fn is_valid_cell(&self, column: usize, row: usize)
            -> GridResult<bool> {
        if column >= SIZE || row >= SIZE {
            Err(GridError::OutOfBounds)
        }
        else {
            Ok(self.rules.check_cell(&self.grid, column, row))
        }
    }

    /// Indicates whether the given number would be valid in the cell at the
    /// given location. That is, if the number violated the rules, `false` is
    /// returned, and `true` otherwise. The content of the checked cell
    /// itself is ignored, so its current number never causes a false
    /// conflict.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the checked cell. Must be in
    /// the range `[0, SIZE[`.
    /// * `row`: The row (y-coordinate) of the checked cell. Must be in the
    /// range `[0, SIZE[`.
    /// * `number`: The number to check whether it is valid in the given
    /// cell. Must be in the range `[1, SIZE]`.
    ///
    /// # Errors
    ///
    /// * `GridError::OutOfBounds` If either `column` or `row` are not in the
    /// specified range.
    /// * `GridError::InvalidNumber` If `number` is not in the specified
    /// range.
    pub fn is_valid_number(&self, column: usize, row: usize, number: usize)
            -> GridResult<bool> {
        if column >= SIZE || row >= SIZE {
            Err(GridError::OutOfBounds)
        }
        else if number == 0 || number > SIZE {
            Err(GridError::InvalidNumber)
        }
        else {
            Ok(self.rules.check_number(&self.grid, column, row, number))
        }
    }

    /// Indicates whether the given [Grid] is a valid solution to this
    /// puzzle. That is the case if all digits from this puzzle can be found
    /// in the `solution`, it matches the rules of this puzzle, and it is
    /// full.
    pub fn is_valid_solution(&self, solution: &Grid) -> bool {
        self.grid.is_subset(solution) &&
            self.rules.check(solution) &&
            solution.is_full()
    }
}

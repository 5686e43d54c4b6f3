//! This module defines the rules which are applied to grids, thus specifying
//! when a placement is legal.
//!
//! The standard mini Sudoku rules are the conjunction of three independent
//! constraints: no duplicate digits in a row ([RowRule]), in a column
//! ([ColumnRule]), and in a 2x3 region ([RegionRule]). [StandardRules]
//! enforces all three and is the rule set intended for ordinary use; the
//! individual rules are exposed so that a caller can attribute a conflict to
//! a specific constraint.
//!
//! All rules answer three kinds of questions, in increasing granularity:
//! whether an entire grid is consistent ([Rule::check]), whether one placed
//! cell is consistent with the rest of the grid ([Rule::check_cell]), and
//! whether a hypothetical placement would be consistent
//! ([Rule::check_number]). The checked cell itself is excluded from every
//! comparison, so checking a cell that already contains the queried number
//! never reports a conflict with itself. A consequence worth spelling out:
//! `check` applied to a partially filled grid asks for each placed digit
//! whether it could be re-placed if its cell were empty, which is exactly
//! the consistency pre-check a solver needs before searching.

use crate::{Grid, REGION_HEIGHT, REGION_WIDTH, SIZE};
use crate::util::DigitSet;

use serde::{Deserialize, Serialize};

/// A group of cells which may not contain repeated digits, represented by a
/// vector of their coordinates in the form `(column, row)`.
pub type Group = Vec<(usize, usize)>;

#[inline]
pub(crate) fn default_check<R>(this: &R, grid: &Grid) -> bool
where
    R: Rule + ?Sized
{
    for row in 0..SIZE {
        for column in 0..SIZE {
            if !this.check_cell(grid, column, row) {
                return false;
            }
        }
    }

    true
}

#[inline]
pub(crate) fn default_check_cell<R>(this: &R, grid: &Grid, column: usize,
    row: usize) -> bool
where
    R: Rule + ?Sized
{
    if let Some(number) = grid.get_cell(column, row).unwrap() {
        this.check_number(grid, column, row, number)
    }
    else {
        true
    }
}

/// A rule defines some property on a grid that all placed digits must
/// satisfy. Implementors only need to provide [Rule::check_number], which
/// verifies a proposed number for a specified cell; `check_cell` and `check`
/// are implemented by default based on it. `check` in particular may be
/// inefficient compared to a specialized implementation, since it checks
/// every cell using `check_number`.
pub trait Rule {

    /// Checks whether the given [Grid] matches this rule, that is, every
    /// placed digit satisfies it with respect to all other cells. Empty
    /// cells never violate a rule. By default, this runs [Rule::check_cell]
    /// on every cell of the grid.
    fn check(&self, grid: &Grid) -> bool {
        default_check(self, grid)
    }

    /// Checks whether the cell at the given position in the [Grid] fulfills
    /// this rule. This is the same as calling [Rule::check_number] with the
    /// same coordinates and the number which is actually filled in that
    /// cell. If the cell is empty, this function always returns `true`.
    fn check_cell(&self, grid: &Grid, column: usize, row: usize) -> bool {
        default_check_cell(self, grid, column, row)
    }

    /// Checks whether the given `number` would fit into the cell specified
    /// by `column` and `row` into the `grid` without violating this rule.
    /// The content of the checked cell itself is ignored, so a cell never
    /// conflicts with its own current number. This function does *not* have
    /// to check whether `number` is actually in the range `[1, SIZE]`; use
    /// [Puzzle::is_valid_number](crate::Puzzle::is_valid_number) for that
    /// guarantee.
    fn check_number(&self, grid: &Grid, column: usize, row: usize,
        number: usize) -> bool;

    /// Gets a vector of all groups that are defined by this rule. A group is
    /// a set of cells which may not contain repeated digits, such as one row
    /// or one region. Since the board geometry is fixed, the groups are as
    /// well.
    fn get_groups(&self) -> Vec<Group>;
}

/// A [Rule] that there are no duplicate digits in each row.
#[derive(Clone, Deserialize, Serialize)]
pub struct RowRule;

impl Rule for RowRule {
    fn check(&self, grid: &Grid) -> bool {
        let mut set = DigitSet::new();

        for row in 0..SIZE {
            set.clear();

            for column in 0..SIZE {
                if let Some(number) = grid.get_cell(column, row).unwrap() {
                    if !set.insert(number) {
                        return false;
                    }
                }
            }
        }

        true
    }

    fn check_number(&self, grid: &Grid, column: usize, row: usize,
            number: usize) -> bool {
        for other_column in 0..SIZE {
            if other_column != column &&
                    grid.has_number(other_column, row, number).unwrap() {
                return false;
            }
        }

        true
    }

    fn get_groups(&self) -> Vec<Group> {
        (0..SIZE)
            .map(|row| (0..SIZE)
                .map(|column| (column, row))
                .collect())
            .collect()
    }
}

/// A [Rule] that there are no duplicate digits in each column.
#[derive(Clone, Deserialize, Serialize)]
pub struct ColumnRule;

impl Rule for ColumnRule {
    fn check(&self, grid: &Grid) -> bool {
        let mut set = DigitSet::new();

        for column in 0..SIZE {
            set.clear();

            for row in 0..SIZE {
                if let Some(number) = grid.get_cell(column, row).unwrap() {
                    if !set.insert(number) {
                        return false;
                    }
                }
            }
        }

        true
    }

    fn check_number(&self, grid: &Grid, column: usize, row: usize,
            number: usize) -> bool {
        for other_row in 0..SIZE {
            if other_row != row &&
                    grid.has_number(column, other_row, number).unwrap() {
                return false;
            }
        }

        true
    }

    fn get_groups(&self) -> Vec<Group> {
        (0..SIZE)
            .map(|column| (0..SIZE)
                .map(|row| (column, row))
                .collect())
            .collect()
    }
}

fn check_number_region(grid: &Grid, column: usize, row: usize, number: usize,
        bop: impl Fn(bool, bool) -> bool) -> bool {
    let region_column = (column / REGION_WIDTH) * REGION_WIDTH;
    let region_row = (row / REGION_HEIGHT) * REGION_HEIGHT;

    for other_row in region_row..(region_row + REGION_HEIGHT) {
        for other_column in region_column..(region_column + REGION_WIDTH) {
            if bop(other_row != row, other_column != column) &&
                    grid.has_number(other_column, other_row, number).unwrap() {
                return false;
            }
        }
    }

    true
}

fn get_groups_region() -> Vec<Group> {
    let mut groups = Vec::new();

    for region_row in 0..(SIZE / REGION_HEIGHT) {
        let base_row = region_row * REGION_HEIGHT;

        for region_column in 0..(SIZE / REGION_WIDTH) {
            let base_column = region_column * REGION_WIDTH;
            let mut group = Group::new();

            for sub_row in 0..REGION_HEIGHT {
                for sub_column in 0..REGION_WIDTH {
                    group.push((base_column + sub_column, base_row + sub_row));
                }
            }

            groups.push(group);
        }
    }

    groups
}

/// A [Rule] that there are no duplicate digits in each 2x3 region. The six
/// regions tile the board: rows 0-1, 2-3, and 4-5 crossed with columns 0-2
/// and 3-5.
#[derive(Clone, Deserialize, Serialize)]
pub struct RegionRule;

impl Rule for RegionRule {
    fn check(&self, grid: &Grid) -> bool {
        let mut set = DigitSet::new();

        for group in get_groups_region() {
            set.clear();

            for (column, row) in group {
                if let Some(number) = grid.get_cell(column, row).unwrap() {
                    if !set.insert(number) {
                        return false;
                    }
                }
            }
        }

        true
    }

    fn check_number(&self, grid: &Grid, column: usize, row: usize,
            number: usize) -> bool {
        check_number_region(grid, column, row, number, |a, b| a || b)
    }

    fn get_groups(&self) -> Vec<Group> {
        get_groups_region()
    }
}

/// Similar to [RegionRule], but does not check cells in the same row and
/// column to save some time. For use in [StandardRules], whose row and
/// column rules already cover those cells.
#[derive(Clone, Deserialize, Serialize)]
struct RegionRuleNoRowColumn;

impl Rule for RegionRuleNoRowColumn {
    fn check(&self, grid: &Grid) -> bool {
        RegionRule.check(grid)
    }

    fn check_number(&self, grid: &Grid, column: usize, row: usize,
            number: usize) -> bool {
        check_number_region(grid, column, row, number, |a, b| a && b)
    }

    fn get_groups(&self) -> Vec<Group> {
        get_groups_region()
    }
}

/// The standard mini Sudoku [Rule] which is a logical conjunction of
/// [RowRule], [ColumnRule], and [RegionRule].
#[derive(Clone, Deserialize, Serialize)]
pub struct StandardRules;

impl Rule for StandardRules {
    fn check(&self, grid: &Grid) -> bool {
        RowRule.check(grid) &&
        ColumnRule.check(grid) &&
        RegionRuleNoRowColumn.check(grid)
    }

    fn check_cell(&self, grid: &Grid, column: usize, row: usize) -> bool {
        RowRule.check_cell(grid, column, row) &&
        ColumnRule.check_cell(grid, column, row) &&
        RegionRuleNoRowColumn.check_cell(grid, column, row)
    }

    fn check_number(&self, grid: &Grid, column: usize, row: usize,
            number: usize) -> bool {
        RowRule.check_number(grid, column, row, number) &&
        ColumnRule.check_number(grid, column, row, number) &&
        RegionRuleNoRowColumn.check_number(grid, column, row, number)
    }

    fn get_groups(&self) -> Vec<Group> {
        let mut groups = RowRule.get_groups();
        groups.append(&mut ColumnRule.get_groups());
        groups.append(&mut RegionRule.get_groups());
        groups
    }
}

//! This module contains the logic for solving Sudoku puzzles.
//!
//! Solving is split into two cooperating pieces: [scan] deterministically
//! fills every cell whose value is logically forced, and [solve] wraps it in
//! a depth-first backtracking search that guesses values for the
//! most-constrained remaining cell whenever pure deduction gets stuck.

use crate::SudokuGrid;
use crate::error::{Impossible, SolverResult};
use crate::util::DigitSet;

/// The report for a grid that deduction alone could not complete: the
/// position of the most-constrained unknown cell and its candidate digits.
/// This is where a search should branch next, since fewer candidates mean
/// fewer subtrees to explore.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Branch {

    /// The row of the cell to branch on.
    pub row: usize,

    /// The column of the cell to branch on.
    pub col: usize,

    /// The candidate digits for that cell. Contains at least two digits,
    /// since cells with a single candidate are filled by [scan] and cells
    /// with none make it fail.
    pub candidates: DigitSet
}

/// Fills every cell of the grid whose value is logically forced, mutating
/// the grid in place.
///
/// The scan repeatedly passes over all currently-unknown cells. Any cell
/// with exactly one candidate digit is filled immediately, so the new digit
/// constrains the cells examined later in the same pass. The scan stops
/// after the first pass that fills nothing.
///
/// If the scan completes the grid, `Ok(None)` is returned. Otherwise it
/// returns `Ok(Some(branch))` describing the cell with the smallest
/// candidate set encountered during the final pass (ties broken by
/// row-major order), as a hint for where a search should guess next. The
/// hint is a heuristic: within a pass it is only tracked until the first
/// cell gets filled, and only the final pass, which by definition fills
/// nothing, determines the reported cell.
///
/// If the grid held no duplicates before the call, it holds none
/// afterwards, since only sole candidates are ever written.
///
/// # Errors
///
/// [Impossible] as soon as any unknown cell has an empty candidate set, in
/// which case the grid admits no solution in its current state. The scan
/// stops at that cell; cells filled earlier remain in the grid.
pub fn scan(grid: &mut SudokuGrid) -> SolverResult<Option<Branch>> {
    loop {
        let mut changed = false;
        let mut branch: Option<Branch> = None;
        let unknown: Vec<(usize, usize, usize)> =
            grid.unknown_cells().collect();

        for (row, col, box_id) in unknown {
            let candidates = grid.candidates(row, col, box_id);

            match candidates.len() {
                0 => return Err(Impossible),
                1 => {
                    let digit = candidates.iter().next().unwrap();
                    grid.set_cell(row, col, digit).unwrap();
                    changed = true;
                },
                len => {
                    if changed {
                        continue;
                    }

                    let smaller_than_tracked = branch.as_ref()
                        .map(|b| len < b.candidates.len())
                        .unwrap_or(true);

                    if smaller_than_tracked {
                        branch = Some(Branch {
                            row,
                            col,
                            candidates
                        });
                    }
                }
            }
        }

        if !changed {
            return Ok(branch);
        }
    }
}

/// Produces a fully determined grid that is consistent with all digits given
/// in the input, or fails if none exists. The input grid is never mutated;
/// the search operates on its own clone.
///
/// The search first applies [scan] to fill everything that is forced. If
/// unknown cells remain, it guesses each candidate of the reported branch
/// cell in ascending numeric order and recurses; the first guess that leads
/// to a solution wins and no further candidates are tried. A puzzle with
/// several valid solutions is not detected as such, the search simply
/// returns the first solution its deterministic order reaches.
///
/// ```
/// use sudoku_classic::SudokuGrid;
/// use sudoku_classic::solver;
///
/// let puzzle = SudokuGrid::parse("\
///     .5.3...7.\
///     1...2.8..\
///     .2.4.9...\
///     ..31..7.6\
///     .4..6..5.\
///     5.6..34..\
///     ...8.2.3.\
///     ..7.9...2\
///     .6...1.8.").unwrap();
/// let solution = solver::solve(&puzzle).unwrap();
///
/// assert_eq!(SudokuGrid::parse("\
///     654318279\
///     139726845\
///     728459163\
///     893145726\
///     241967358\
///     576283491\
///     915872634\
///     387694512\
///     462531987").unwrap(), solution);
/// ```
///
/// # Errors
///
/// [Impossible] if no assignment of the unknown cells satisfies the Sudoku
/// rules, i.e. the puzzle has no solution.
pub fn solve(grid: &SudokuGrid) -> SolverResult<SudokuGrid> {
    let mut grid = grid.clone();
    let branch = match scan(&mut grid)? {
        None => return Ok(grid),
        Some(branch) => branch
    };

    for guess in branch.candidates {
        grid.set_cell(branch.row, branch.col, guess).unwrap();

        match solve(&grid) {
            Ok(solution) => return Ok(solution),
            Err(Impossible) => { }
        }
    }

    Err(Impossible)
}

#[cfg(test)]
mod tests {

    use super::*;

    use crate::digits;

    // Solvable by candidate elimination alone.
    const FORCED: &str = "\
        ..1..736.\
        72..8.5.9\
        .8..31...\
        ...67..35\
        9.58...7.\
        26..1...4\
        3..15..46\
        .74..3.52\
        51.7.48..";

    const FORCED_SOLUTION: &str = "\
        451297368\
        723486519\
        689531427\
        148679235\
        935842671\
        267315984\
        392158746\
        874963152\
        516724893";

    // Candidate elimination gets stuck on this one; guessing is required.
    const STUCK: &str = "\
        .5.3...7.\
        1...2.8..\
        .2.4.9...\
        ..31..7.6\
        .4..6..5.\
        5.6..34..\
        ...8.2.3.\
        ..7.9...2\
        .6...1.8.";

    const STUCK_SOLUTION: &str = "\
        654318279\
        139726845\
        728459163\
        893145726\
        241967358\
        576283491\
        915872634\
        387694512\
        462531987";

    // Contains no duplicates, yet admits no solution.
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

    #[test]
    fn scan_fills_all_forced_cells() {
        let mut grid = SudokuGrid::parse(FORCED).unwrap();
        let branch = scan(&mut grid).unwrap();

        assert_eq!(None, branch);
        assert_eq!(SudokuGrid::parse(FORCED_SOLUTION).unwrap(), grid);
    }

    #[test]
    fn scan_reports_most_constrained_cell() {
        let mut grid = SudokuGrid::parse(STUCK).unwrap();
        let branch = scan(&mut grid).unwrap().unwrap();

        assert_eq!(0, branch.row);
        assert_eq!(2, branch.col);
        assert_eq!(digits!(4, 9), branch.candidates);
        assert!(!grid.is_full());
    }

    #[test]
    fn scan_keeps_given_clues_and_validity() {
        let given = SudokuGrid::parse(STUCK).unwrap();
        let mut grid = given.clone();
        scan(&mut grid).unwrap();

        assert!(!grid.has_duplicates());

        for row in 0..9 {
            for col in 0..9 {
                let clue = given.get_cell(row, col);

                if clue != 0 {
                    assert_eq!(clue, grid.get_cell(row, col));
                }
            }
        }
    }

    #[test]
    fn scan_detects_impossibility() {
        let mut grid = SudokuGrid::parse(UNSOLVABLE).unwrap();

        assert_eq!(Err(Impossible), scan(&mut grid));
    }

    #[test]
    fn scan_on_full_grid_reports_solved() {
        let mut grid = SudokuGrid::parse(FORCED_SOLUTION).unwrap();

        assert_eq!(Ok(None), scan(&mut grid));
        assert_eq!(SudokuGrid::parse(FORCED_SOLUTION).unwrap(), grid);
    }

    #[test]
    fn solve_requires_no_backtracking_for_forced_puzzle() {
        let grid = SudokuGrid::parse(FORCED).unwrap();
        let solution = solve(&grid).unwrap();

        assert_eq!(SudokuGrid::parse(FORCED_SOLUTION).unwrap(), solution);
    }

    #[test]
    fn solve_backtracks_when_deduction_gets_stuck() {
        let grid = SudokuGrid::parse(STUCK).unwrap();
        let solution = solve(&grid).unwrap();

        assert_eq!(SudokuGrid::parse(STUCK_SOLUTION).unwrap(), solution);
    }

    #[test]
    fn solve_does_not_mutate_input() {
        let grid = SudokuGrid::parse(STUCK).unwrap();
        let before = grid.clone();
        solve(&grid).unwrap();

        assert_eq!(before, grid);
    }

    #[test]
    fn solve_detects_impossibility() {
        let grid = SudokuGrid::parse(UNSOLVABLE).unwrap();

        assert_eq!(Err(Impossible), solve(&grid));
    }

    #[test]
    fn solve_returns_full_grid_unchanged() {
        let grid = SudokuGrid::parse(FORCED_SOLUTION).unwrap();

        assert_eq!(Ok(grid.clone()), solve(&grid));
    }

    #[test]
    fn solve_is_deterministic() {
        let grid = SudokuGrid::parse(STUCK).unwrap();

        assert_eq!(solve(&grid), solve(&grid));
    }
}

//! This module contains logic for generating random Sudoku puzzles.
//!
//! Generation is done in two steps: a [Generator] fills a grid completely
//! with random digits, and a [Reducer] then removes as many givens as it can
//! while the puzzle remains solvable by candidate elimination alone. Since a
//! puzzle that pure deduction can complete has exactly one solution, every
//! reduced puzzle is guaranteed to be uniquely solvable.

use crate::{SudokuGrid, box_of};
use crate::error::{Impossible, SolverResult};
use crate::solver;

use rand::Rng;
use rand::rngs::ThreadRng;

/// A generator randomly completes a [SudokuGrid], that is, fills every
/// unknown cell with a digit such that no row, column, or box contains a
/// duplicate. It uses a random number generator to decide the content. For
/// most cases, sensible defaults are provided by [Generator::new_default].
pub struct Generator<R: Rng> {
    rng: R
}

impl Generator<ThreadRng> {

    /// Creates a new generator that uses a [ThreadRng] to generate the
    /// random digits.
    pub fn new_default() -> Generator<ThreadRng> {
        Generator::new(rand::thread_rng())
    }
}

pub(crate) fn shuffle<T>(rng: &mut impl Rng, values: impl Iterator<Item = T>)
        -> Vec<T> {
    let mut vec: Vec<T> = values.collect();
    let len = vec.len();

    if len < 2 {
        return vec;
    }

    for i in 0..(len - 1) {
        let j = rng.gen_range(i..len);
        vec.swap(i, j);
    }

    vec
}

impl<R: Rng> Generator<R> {

    /// Creates a new generator that uses the given random number generator
    /// to generate random digits.
    pub fn new(rng: R) -> Generator<R> {
        Generator {
            rng
        }
    }

    fn fill_rec(&mut self, grid: &mut SudokuGrid, row: usize, col: usize)
            -> bool {
        if row == crate::SIZE {
            return true;
        }

        let next_col = (col + 1) % crate::SIZE;
        let next_row = if next_col == 0 { row + 1 } else { row };

        if grid.get_cell(row, col) != 0 {
            return self.fill_rec(grid, next_row, next_col);
        }

        let candidates = grid.candidates(row, col, box_of(row, col));

        for digit in shuffle(&mut self.rng, candidates.iter()) {
            grid.set_cell(row, col, digit).unwrap();

            if self.fill_rec(grid, next_row, next_col) {
                return true;
            }

            grid.set_cell(row, col, 0).unwrap();
        }

        false
    }

    /// Fills the given grid with random digits that do not duplicate any
    /// digit within a row, column, or box and leave all already present
    /// digits untouched.
    ///
    /// If no error is returned, [SudokuGrid::is_full] on `grid` returns
    /// `true` and [SudokuGrid::has_duplicates] returns `false` afterwards
    /// (given the input held no duplicates). Otherwise, the grid remains
    /// unchanged.
    ///
    /// # Errors
    ///
    /// [Impossible] if the digits already present admit no completion.
    pub fn fill(&mut self, grid: &mut SudokuGrid) -> SolverResult<()> {
        if self.fill_rec(grid, 0, 0) {
            Ok(())
        }
        else {
            Err(Impossible)
        }
    }

    /// Generates a new grid in which every cell is filled with a random
    /// digit and no row, column, or box contains a duplicate.
    ///
    /// # Errors
    ///
    /// [Impossible] is never actually produced here, since an empty grid
    /// always has completions; the result type is shared with
    /// [Generator::fill].
    pub fn generate(&mut self) -> SolverResult<SudokuGrid> {
        let mut grid = SudokuGrid::empty();
        self.fill(&mut grid)?;
        Ok(grid)
    }
}

/// A reducer can be applied to the output of a [Generator] to remove digits
/// from the grid as long as the puzzle remains solvable by
/// [scan](solver::scan) alone. A random number generator decides the order
/// in which removals are attempted.
///
/// Because a puzzle that candidate elimination can complete has exactly one
/// solution, reducing never introduces ambiguity: solving the reduced
/// puzzle reproduces the original grid.
pub struct Reducer<R: Rng> {
    rng: R
}

impl Reducer<ThreadRng> {

    /// Creates a new reducer that uses a [ThreadRng] to decide which digits
    /// are removed.
    pub fn new_default() -> Reducer<ThreadRng> {
        Reducer::new(rand::thread_rng())
    }
}

fn solvable_by_scan(grid: &SudokuGrid) -> bool {
    let mut clone = grid.clone();

    match solver::scan(&mut clone) {
        Ok(None) => true,
        _ => false
    }
}

impl<R: Rng> Reducer<R> {

    /// Creates a new reducer that uses the given random number generator to
    /// decide which digits are removed.
    pub fn new(rng: R) -> Reducer<R> {
        Reducer {
            rng
        }
    }

    /// Removes digits from the given grid, in random order, as long as the
    /// remaining puzzle can still be completed by candidate elimination
    /// alone. Each removal that breaks this property is reverted, so the
    /// grid is left with a puzzle whose unique solution is the input grid.
    pub fn reduce(&mut self, grid: &mut SudokuGrid) {
        let filled: Vec<(usize, usize)> = (0..crate::SIZE)
            .flat_map(|row| (0..crate::SIZE).map(move |col| (row, col)))
            .filter(|&(row, col)| grid.get_cell(row, col) != 0)
            .collect();

        for (row, col) in shuffle(&mut self.rng, filled.into_iter()) {
            let digit = grid.get_cell(row, col);
            grid.set_cell(row, col, 0).unwrap();

            if !solvable_by_scan(grid) {
                grid.set_cell(row, col, digit).unwrap();
            }
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng(seed: u64) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(seed)
    }

    #[test]
    fn generated_grid_is_full_and_valid() {
        let mut generator = Generator::new_default();
        let grid = generator.generate().unwrap();

        assert!(grid.is_full());
        assert!(!grid.has_duplicates());
    }

    #[test]
    fn fill_honors_given_digits() {
        let mut grid = SudokuGrid::empty();
        grid.set_cell(0, 0, 7).unwrap();
        grid.set_cell(8, 8, 3).unwrap();

        let mut generator = Generator::new(rng(1));
        generator.fill(&mut grid).unwrap();

        assert!(grid.is_full());
        assert!(!grid.has_duplicates());
        assert_eq!(7, grid.get_cell(0, 0));
        assert_eq!(3, grid.get_cell(8, 8));
    }

    #[test]
    fn fill_fails_on_overconstrained_grid() {
        // The last cell of the first row has no candidates: its row already
        // contains 1 to 8 and its box contains 9.
        let code = format!("12345678.{}9{}", ".".repeat(7), ".".repeat(64));
        let grid = SudokuGrid::parse(&code).unwrap();
        let mut filled = grid.clone();
        let mut generator = Generator::new(rng(2));

        assert_eq!(Err(Impossible), generator.fill(&mut filled));
        assert_eq!(grid, filled);
    }

    #[test]
    fn fill_is_reproducible_with_same_seed() {
        let first = Generator::new(rng(42)).generate().unwrap();
        let second = Generator::new(rng(42)).generate().unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn reduce_leaves_scan_solvable_puzzle() {
        let mut generator = Generator::new(rng(3));
        let solution = generator.generate().unwrap();
        let mut puzzle = solution.clone();
        let mut reducer = Reducer::new(rng(4));
        reducer.reduce(&mut puzzle);

        assert!(!puzzle.is_full());
        assert!(solvable_by_scan(&puzzle));

        let mut scanned = puzzle.clone();
        solver::scan(&mut scanned).unwrap();

        assert_eq!(solution, scanned);
    }

    #[test]
    fn shuffle_keeps_all_elements() {
        let shuffled = shuffle(&mut rng(5), 0..100);
        let mut sorted = shuffled.clone();
        sorted.sort();

        assert_eq!((0..100).collect::<Vec<i32>>(), sorted);
    }

    #[test]
    fn shuffle_of_empty_iterator() {
        let shuffled: Vec<i32> = shuffle(&mut rng(6), std::iter::empty());

        assert!(shuffled.is_empty());
    }
}

// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(missing_docs)]

//! This crate implements an easy-to-understand engine for classic 9x9
//! Sudoku. It supports the following key features:
//!
//! * Parsing and printing puzzles
//! * Checking puzzles for rule violations (duplicate digits in a row,
//! column, or box)
//! * Filling in every logically forced cell by repeated candidate
//! elimination ([scan](solver::scan))
//! * Solving any puzzle with a backtracking search that uses that logic to
//! prune its search tree ([solve](solver::solve))
//! * Generating random puzzles with a guaranteed unique solution
//!
//! # Parsing and printing puzzles
//!
//! See [SudokuGrid::parse] for the exact input format: the digits `1` to `9`
//! for given cells, `.` for unknown cells, and whitespace wherever it helps
//! readability. [SudokuGrid::to_text] emits the same format, nine lines of
//! nine characters, while the [Display](std::fmt::Display) implementation
//! pretty-prints the grid for humans.
//!
//! ```
//! use sudoku_classic::SudokuGrid;
//!
//! let grid = SudokuGrid::parse("\
//!     .5...1.6.\
//!     1..5..8.3\
//!     ....7..5.\
//!     .7.86...5\
//!     ..59.73..\
//!     6...35.2.\
//!     .4..5....\
//!     5.3..4..2\
//!     .9.1...8.").unwrap();
//!
//! assert_eq!(30, grid.count_clues());
//! println!("{}", grid);
//! ```
//!
//! # Solving puzzles
//!
//! [solve](solver::solve) takes a grid and either returns a fully
//! determined, duplicate-free grid that agrees with every given cell, or
//! reports that the puzzle is [Impossible](error::Impossible). The caller's
//! grid is never modified; the search operates on its own copies.
//!
//! ```
//! use sudoku_classic::SudokuGrid;
//! use sudoku_classic::solver;
//!
//! let puzzle = SudokuGrid::parse("\
//!     .5...1.6.\
//!     1..5..8.3\
//!     ....7..5.\
//!     .7.86...5\
//!     ..59.73..\
//!     6...35.2.\
//!     .4..5....\
//!     5.3..4..2\
//!     .9.1...8.").unwrap();
//! let solution = solver::solve(&puzzle).unwrap();
//!
//! assert!(solution.is_full());
//! assert!(!solution.has_duplicates());
//! print!("{}", solution.to_text());
//! ```
//!
//! A puzzle whose givens admit more than one completion is not detected as
//! such; the search simply returns the first solution it reaches.
//!
//! # Generating puzzles
//!
//! A [Generator](generator::Generator) fills an empty grid with random
//! digits, and a [Reducer](generator::Reducer) removes as many givens as it
//! can while the puzzle stays solvable by candidate elimination alone,
//! which also guarantees a unique solution.
//!
//! ```
//! use sudoku_classic::generator::{Generator, Reducer};
//! use sudoku_classic::solver;
//!
//! let mut generator = Generator::new_default();
//! let mut reducer = Reducer::new_default();
//!
//! let solution = generator.generate().unwrap();
//! let mut puzzle = solution.clone();
//! reducer.reduce(&mut puzzle);
//!
//! assert!(!puzzle.is_full());
//! assert_eq!(Ok(solution), solver::solve(&puzzle));
//! ```

pub mod error;
pub mod generator;
pub mod solver;
pub mod util;

use error::{GridResult, InvalidInput};
use util::DigitSet;

use serde::{Deserialize, Serialize};

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};

/// The number of rows and columns of a grid, which is also the number of
/// boxes and the highest digit.
pub const SIZE: usize = 9;

/// The number of cells of a grid.
const CELL_COUNT: usize = SIZE * SIZE;

/// The width and height of one box, i.e. one of the nine 3x3 sub-grids.
const BLOCK: usize = 3;

/// Maps the linear index of a cell (`row * 9 + col`) to the id of the box
/// that contains it. Boxes are numbered 0 to 8, left-to-right,
/// top-to-bottom, so the top-left box is 0, the top-right box is 2, the
/// center box is 4, and the bottom-right box is 8.
pub const BOX_OF_INDEX: [usize; 81] = [
    0, 0, 0, 1, 1, 1, 2, 2, 2, 0, 0, 0, 1, 1, 1, 2, 2, 2, 0, 0, 0, 1, 1, 1, 2, 2, 2,
    3, 3, 3, 4, 4, 4, 5, 5, 5, 3, 3, 3, 4, 4, 4, 5, 5, 5, 3, 3, 3, 4, 4, 4, 5, 5, 5,
    6, 6, 6, 7, 7, 7, 8, 8, 8, 6, 6, 6, 7, 7, 7, 8, 8, 8, 6, 6, 6, 7, 7, 7, 8, 8, 8
];

/// Maps a box id to the linear index of the top-left cell of that box.
pub const BOX_TOP_LEFT: [usize; 9] = [0, 3, 6, 27, 30, 33, 54, 57, 60];

fn index(row: usize, col: usize) -> usize {
    assert!(row < SIZE && col < SIZE,
        "cell coordinates out of range: ({}, {})", row, col);
    row * SIZE + col
}

/// Returns the id of the box that contains the cell at the given position.
/// This is a lookup into [BOX_OF_INDEX].
///
/// # Panics
///
/// If `row` or `col` is not in the range `0..9`.
pub fn box_of(row: usize, col: usize) -> usize {
    BOX_OF_INDEX[index(row, col)]
}

/// A classic 9x9 Sudoku grid. Each of the 81 cells either holds a digit from
/// 1 to 9 or is unknown, represented by 0. Rows and columns are numbered 0
/// to 8, where (0, 0) is the top-left cell, and the nine 3x3 boxes are
/// numbered 0 to 8 left-to-right, top-to-bottom.
///
/// A grid has no identity beyond its cell contents: equality is value-based
/// and [Clone] yields an independent copy that shares no storage with the
/// original.
///
/// Every grid obtained from [SudokuGrid::parse] satisfies the Sudoku
/// invariant that no row, column, or box contains the same digit twice.
/// [SudokuGrid::set_cell] intentionally does not re-check this invariant,
/// so code that writes cells directly is responsible for maintaining it.
///
/// Grids serialize through their text code (see [SudokuGrid::to_text]), so
/// a serialized grid is a single 90-character string.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(into = "String", try_from = "String")]
pub struct SudokuGrid {
    cells: [u8; CELL_COUNT]
}

fn to_char(cell: u8) -> char {
    if cell == 0 {
        ' '
    }
    else {
        (b'0' + cell) as char
    }
}

fn line(start: char, thick_sep: char, thin_sep: char,
        segment: impl Fn(usize) -> char, pad: char, end: char,
        newline: bool) -> String {
    let mut result = String::new();

    for col in 0..SIZE {
        if col == 0 {
            result.push(start);
        }
        else if col % BLOCK == 0 {
            result.push(thick_sep);
        }
        else {
            result.push(thin_sep);
        }

        result.push(pad);
        result.push(segment(col));
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

fn content_row(grid: &SudokuGrid, row: usize) -> String {
    line('║', '║', '│', |col| to_char(grid.get_cell(row, col)), ' ', '║',
        true)
}

impl Display for SudokuGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let top_row = top_row();
        let thin_separator_line = thin_separator_line();
        let thick_separator_line = thick_separator_line();
        let bottom_row = bottom_row();

        for row in 0..SIZE {
            if row == 0 {
                f.write_str(top_row.as_str())?;
            }
            else if row % BLOCK == 0 {
                f.write_str(thick_separator_line.as_str())?;
            }
            else {
                f.write_str(thin_separator_line.as_str())?;
            }

            f.write_str(content_row(self, row).as_str())?;
        }

        f.write_str(bottom_row.as_str())?;
        Ok(())
    }
}

impl SudokuGrid {

    /// Creates a new grid in which every cell is unknown.
    pub fn empty() -> SudokuGrid {
        SudokuGrid {
            cells: [0; CELL_COUNT]
        }
    }

    /// Parses the text representation of a puzzle. The input must contain
    /// exactly 81 puzzle characters: the digits `'1'` to `'9'` for given
    /// cells and `'.'` for unknown cells, assigned left-to-right,
    /// top-to-bottom. All whitespace, including line breaks, is stripped
    /// before parsing, so the input may be laid out freely.
    ///
    /// # Errors
    ///
    /// * [InvalidInput::WrongSize] if the input does not contain exactly 81
    /// characters once whitespace is stripped.
    /// * [InvalidInput::InvalidCharacter] if the input contains a character
    /// other than `'1'` to `'9'`, `'.'`, and whitespace. The error names the
    /// first offending character.
    /// * [InvalidInput::DuplicateDigits] if the parsed grid repeats a digit
    /// within some row, column, or box.
    pub fn parse(code: &str) -> GridResult<SudokuGrid> {
        let stripped: String =
            code.chars().filter(|c| !c.is_whitespace()).collect();
        let len = stripped.chars().count();

        if len != CELL_COUNT {
            return Err(InvalidInput::WrongSize(len));
        }

        let mut cells = [0u8; CELL_COUNT];

        for (i, c) in stripped.chars().enumerate() {
            cells[i] = match c {
                '.' => 0,
                '1'..='9' => c as u8 - b'0',
                _ => return Err(InvalidInput::InvalidCharacter(c))
            };
        }

        let grid = SudokuGrid { cells };

        if grid.has_duplicates() {
            return Err(InvalidInput::DuplicateDigits);
        }

        Ok(grid)
    }

    /// Parses a puzzle given as an ordered sequence of lines, usually nine
    /// strings of nine characters each. The lines are concatenated and
    /// handed to [SudokuGrid::parse], so the same format rules and errors
    /// apply.
    ///
    /// ```
    /// use sudoku_classic::SudokuGrid;
    ///
    /// let grid = SudokuGrid::from_lines(&[
    ///     ".5...1.6.", "1..5..8.3", "....7..5.",
    ///     ".7.86...5", "..59.73..", "6...35.2.",
    ///     ".4..5....", "5.3..4..2", ".9.1...8."
    /// ]).unwrap();
    ///
    /// assert_eq!(5, grid.get_cell(0, 1));
    /// ```
    pub fn from_lines<I>(lines: I) -> GridResult<SudokuGrid>
    where
        I: IntoIterator,
        I::Item: AsRef<str>
    {
        let mut code = String::new();

        for line in lines {
            code.push_str(line.as_ref());
            code.push('\n');
        }

        SudokuGrid::parse(&code)
    }

    /// Gets the content of the cell at the specified position: a digit from
    /// 1 to 9, or 0 if the cell is unknown.
    ///
    /// # Panics
    ///
    /// If `row` or `col` is not in the range `0..9`.
    pub fn get_cell(&self, row: usize, col: usize) -> u8 {
        self.cells[index(row, col)]
    }

    /// Sets the content of the cell at the specified position to the given
    /// value, where 0 marks the cell as unknown. All other cells are left
    /// untouched.
    ///
    /// No duplicate check is performed here; keeping the grid free of
    /// duplicates is the caller's responsibility.
    ///
    /// # Errors
    ///
    /// [InvalidInput::InvalidCellValue] if `value` is greater than 9.
    ///
    /// # Panics
    ///
    /// If `row` or `col` is not in the range `0..9`.
    pub fn set_cell(&mut self, row: usize, col: usize, value: u8)
            -> GridResult<()> {
        if value > 9 {
            return Err(InvalidInput::InvalidCellValue(value));
        }

        self.cells[index(row, col)] = value;
        Ok(())
    }

    /// Converts the grid into its text representation: nine lines of nine
    /// characters in row-major order, each terminated by a newline, with
    /// digits for known cells and `'.'` for unknown ones. For any input
    /// without embedded whitespace this is the exact inverse of
    /// [SudokuGrid::parse].
    ///
    /// ```
    /// use sudoku_classic::SudokuGrid;
    ///
    /// let code = "123456789\
    ///             .........\
    ///             .........\
    ///             .........\
    ///             .........\
    ///             .........\
    ///             .........\
    ///             .........\
    ///             .........";
    /// let grid = SudokuGrid::parse(code).unwrap();
    ///
    /// assert_eq!(grid, SudokuGrid::parse(&grid.to_text()).unwrap());
    /// assert!(grid.to_text().starts_with("123456789\n"));
    /// ```
    pub fn to_text(&self) -> String {
        let mut result = String::with_capacity(CELL_COUNT + SIZE);

        for row in 0..SIZE {
            for col in 0..SIZE {
                let value = self.cells[index(row, col)];

                if value == 0 {
                    result.push('.');
                }
                else {
                    result.push((b'0' + value) as char);
                }
            }

            result.push('\n');
        }

        result
    }

    /// Returns an iterator over all cells whose value is currently unknown,
    /// in row-major order (row ascending, then column ascending). Each item
    /// is a `(row, col, box)` triple, so callers get the box id of every
    /// unknown cell for free.
    ///
    /// The iterator is lazy over the grid's current state: obtaining a fresh
    /// iterator after cells have been filled reflects those changes rather
    /// than a snapshot.
    pub fn unknown_cells(&self) -> UnknownCells<'_> {
        UnknownCells {
            grid: self,
            index: 0
        }
    }

    /// Indicates whether any row, column, or box contains the same digit
    /// more than once, in which case the grid is not a valid Sudoku
    /// configuration. Rows are checked first, then columns, then boxes,
    /// stopping at the first duplicate found.
    pub fn has_duplicates(&self) -> bool {
        for row in 0..SIZE {
            if self.group_has_duplicates((0..SIZE).map(|col| index(row, col))) {
                return true;
            }
        }

        for col in 0..SIZE {
            if self.group_has_duplicates((0..SIZE).map(|row| index(row, col))) {
                return true;
            }
        }

        for box_id in 0..SIZE {
            if self.group_has_duplicates(box_indices(box_id)) {
                return true;
            }
        }

        false
    }

    /// Returns the set of digits that can be placed in the cell at the
    /// given position without duplicating a digit in its row, column, or
    /// box, i.e. all digits minus the row's digits minus the column's
    /// digits minus the box's digits. The box id must be the one of the
    /// cell, as obtained from [box_of] or [SudokuGrid::unknown_cells].
    ///
    /// An empty result for an unknown cell means the grid admits no
    /// solution in its current state.
    ///
    /// ```
    /// use sudoku_classic::{box_of, SudokuGrid};
    /// use sudoku_classic::digits;
    ///
    /// let grid = SudokuGrid::parse("\
    ///     .5...1.6.\
    ///     1..5..8.3\
    ///     ....7..5.\
    ///     .7.86...5\
    ///     ..59.73..\
    ///     6...35.2.\
    ///     .4..5....\
    ///     5.3..4..2\
    ///     .9.1...8.").unwrap();
    ///
    /// assert_eq!(digits!(2, 3, 4, 7, 8, 9),
    ///     grid.candidates(0, 0, box_of(0, 0)));
    /// ```
    pub fn candidates(&self, row: usize, col: usize, box_id: usize)
            -> DigitSet {
        DigitSet::all()
            - (self.row_digits(row) | self.col_digits(col)
                | self.box_digits(box_id))
    }

    /// Counts the number of clues given by this grid, i.e. the number of
    /// known cells.
    pub fn count_clues(&self) -> usize {
        self.cells.iter().filter(|&&c| c != 0).count()
    }

    /// Indicates whether this grid is full, i.e. every cell holds a digit.
    /// In this case, [SudokuGrid::count_clues] returns 81.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != 0)
    }

    /// Indicates whether this grid is empty, i.e. every cell is unknown. In
    /// this case, [SudokuGrid::count_clues] returns 0.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&c| c == 0)
    }

    /// Gets a read-only view of the cell values in row-major order, where
    /// rows are together. Unknown cells are 0.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    fn group_has_duplicates(&self, indices: impl Iterator<Item = usize>)
            -> bool {
        let mut seen = DigitSet::new();

        for i in indices {
            let value = self.cells[i];

            if value != 0 && !seen.insert(value) {
                return true;
            }
        }

        false
    }

    fn row_digits(&self, row: usize) -> DigitSet {
        self.group_digits((0..SIZE).map(|col| index(row, col)))
    }

    fn col_digits(&self, col: usize) -> DigitSet {
        self.group_digits((0..SIZE).map(|row| index(row, col)))
    }

    fn box_digits(&self, box_id: usize) -> DigitSet {
        self.group_digits(box_indices(box_id))
    }

    fn group_digits(&self, indices: impl Iterator<Item = usize>) -> DigitSet {
        let mut digits = DigitSet::new();

        for i in indices {
            let value = self.cells[i];

            if value != 0 {
                digits.insert(value);
            }
        }

        digits
    }
}

fn box_indices(box_id: usize) -> impl Iterator<Item = usize> {
    let top_left = BOX_TOP_LEFT[box_id];
    (0..BLOCK).flat_map(move |row_offset|
        (0..BLOCK).map(move |col_offset|
            top_left + row_offset * SIZE + col_offset))
}

impl From<SudokuGrid> for String {
    fn from(grid: SudokuGrid) -> String {
        grid.to_text()
    }
}

impl TryFrom<String> for SudokuGrid {
    type Error = InvalidInput;

    fn try_from(code: String) -> GridResult<SudokuGrid> {
        SudokuGrid::parse(&code)
    }
}

/// An iterator over the currently-unknown cells of a [SudokuGrid] in
/// row-major order, yielding `(row, col, box)` triples. See
/// [SudokuGrid::unknown_cells].
pub struct UnknownCells<'a> {
    grid: &'a SudokuGrid,
    index: usize
}

impl<'a> Iterator for UnknownCells<'a> {
    type Item = (usize, usize, usize);

    fn next(&mut self) -> Option<(usize, usize, usize)> {
        while self.index < CELL_COUNT {
            let index = self.index;
            self.index += 1;

            if self.grid.cells[index] == 0 {
                return Some((index / SIZE, index % SIZE, BOX_OF_INDEX[index]));
            }
        }

        None
    }
}

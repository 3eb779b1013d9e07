//! This module contains the error and result definitions used in this crate.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// An enumeration of the ways in which puzzle input can be rejected. This
/// covers malformed or self-contradictory puzzle text given to
/// [SudokuGrid::parse](crate::SudokuGrid::parse) as well as out-of-range
/// writes through [SudokuGrid::set_cell](crate::SudokuGrid::set_cell). All
/// variants are raised synchronously at the point of detection and are never
/// retried internally.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum InvalidInput {

    /// Indicates that the puzzle text, after all whitespace has been
    /// stripped, does not consist of exactly 81 characters. The actual number
    /// of remaining characters is wrapped in this instance.
    WrongSize(usize),

    /// Indicates that the puzzle text contains a character other than the
    /// digits `'1'` to `'9'`, `'.'`, and whitespace. The first offending
    /// character is wrapped in this instance.
    InvalidCharacter(char),

    /// Indicates that the puzzle already contains the same digit twice in
    /// some row, column, or box, i.e. it violates the rules before any cell
    /// has been deduced.
    DuplicateDigits,

    /// Indicates that a value outside the range `0..=9` was written to a
    /// cell. The rejected value is wrapped in this instance.
    InvalidCellValue(u8)
}

impl Display for InvalidInput {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            InvalidInput::WrongSize(count) =>
                write!(f, "puzzle has wrong size: {} cells instead of 81",
                    count),
            InvalidInput::InvalidCharacter(c) =>
                write!(f, "invalid character {:?} in puzzle", c),
            InvalidInput::DuplicateDigits =>
                write!(f, "initial puzzle contains duplicate digits"),
            InvalidInput::InvalidCellValue(value) =>
                write!(f, "invalid cell value {}", value)
        }
    }
}

impl Error for InvalidInput { }

/// The error raised whenever a grid, as currently constrained, admits no
/// valid assignment for some cell. It is produced by
/// [scan](crate::solver::scan) and consumed by [solve](crate::solver::solve),
/// which treats it as the signal to try the next candidate. It reaches the
/// caller of `solve` only once every candidate at every level has been
/// exhausted, meaning the puzzle has no solution at all.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Impossible;

impl Display for Impossible {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "puzzle has no solution")
    }
}

impl Error for Impossible { }

/// Syntactic sugar for `Result<V, InvalidInput>`.
pub type GridResult<V> = Result<V, InvalidInput>;

/// Syntactic sugar for `Result<V, Impossible>`.
pub type SolverResult<V> = Result<V, Impossible>;

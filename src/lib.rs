//! Magic Hexagon Solver Library
//!
//! Provides the puzzle definition and brute-force search for the order-3
//! magic hexagon: the numbers 1..=19 arranged in a hexagon with rows of
//! 3, 4, 5, 4 and 3 cells so that all 15 rows and diagonals sum to 38.

pub mod board;
pub mod puzzle;
pub mod solver;

pub use puzzle::{Puzzle, MAGIC_HEXAGON};
pub use solver::{SearchOutcome, SearchReport, DEFAULT_MAX_ATTEMPTS};

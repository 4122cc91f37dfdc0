//! Magic hexagon puzzle definition and solution checking.
//!
//! The board is a hexagon of 19 cells in rows of 3, 4, 5, 4 and 3,
//! indexed in raster order:
//!
//! ```text
//!         0   1   2
//!       3   4   5   6
//!     7   8   9  10  11
//!      12  13  14  15
//!        16  17  18
//! ```
//!
//! Every row and every diagonal in the two slanted directions must sum to
//! the same constant; with the values 1..=19 that constant is 38.

/// A straight line of cell indices whose values must reach the required sum.
pub type Line = &'static [usize];

/// Number of cells in the standard magic hexagon.
pub const HEX_CELLS: usize = 19;

/// The line sum shared by every row and diagonal of the standard hexagon.
pub const HEX_SUM: u32 = 38;

/// Row lengths of the standard hexagon, top to bottom.
const HEX_ROWS: &[usize] = &[3, 4, 5, 4, 3];

/// The 15 lines of the standard hexagon: the 5 rows, the 5 diagonals
/// running down-left and the 5 running down-right. Every cell lies on
/// exactly three of them.
const HEX_LINES: &[Line] = &[
    // rows
    &[0, 1, 2],
    &[3, 4, 5, 6],
    &[7, 8, 9, 10, 11],
    &[12, 13, 14, 15],
    &[16, 17, 18],
    // diagonals running down-left
    &[0, 3, 7],
    &[1, 4, 8, 12],
    &[2, 5, 9, 13, 16],
    &[6, 10, 14, 17],
    &[11, 15, 18],
    // diagonals running down-right
    &[2, 6, 11],
    &[1, 5, 10, 15],
    &[0, 4, 9, 14, 18],
    &[3, 8, 13, 17],
    &[7, 12, 16],
];

/// A puzzle layout: row lengths, the lines to check, and the sum every
/// line must reach.
///
/// A completed board assigns each value in `1..=cell_count()` to exactly
/// one cell, in raster order.
#[derive(Debug)]
pub struct Puzzle {
    rows: &'static [usize],
    lines: &'static [Line],
    required_sum: u32,
}

impl Puzzle {
    /// Creates a puzzle definition with compile-time validation.
    pub const fn new(rows: &'static [usize], lines: &'static [Line], required_sum: u32) -> Self {
        let cells = sum_of(rows);
        assert!(cells > 0, "puzzle must have at least one cell");
        assert!(cells <= u8::MAX as usize, "cell values must fit in u8");
        let mut i = 0;
        while i < lines.len() {
            let line = lines[i];
            assert!(line.len() >= 2, "line must span at least two cells");
            let mut j = 0;
            while j < line.len() {
                assert!(line[j] < cells, "line index out of range");
                j += 1;
            }
            i += 1;
        }
        Self {
            rows,
            lines,
            required_sum,
        }
    }

    /// Row lengths, top to bottom.
    pub const fn rows(&self) -> &'static [usize] {
        self.rows
    }

    /// The lines checked by [`Puzzle::is_solution`].
    pub const fn lines(&self) -> &'static [Line] {
        self.lines
    }

    /// The sum every line must reach.
    pub const fn required_sum(&self) -> u32 {
        self.required_sum
    }

    /// Total number of cells.
    pub const fn cell_count(&self) -> usize {
        sum_of(self.rows)
    }

    /// Checks whether a completely filled board satisfies every line sum.
    ///
    /// `board` holds one value per cell in raster order. The check
    /// short-circuits on the first line with the wrong sum.
    ///
    /// # Panics
    ///
    /// Panics if `board` does not have exactly one value per cell; only
    /// completely filled boards may be checked.
    pub fn is_solution(&self, board: &[u8]) -> bool {
        assert_eq!(
            board.len(),
            self.cell_count(),
            "board is not completely filled"
        );
        self.lines
            .iter()
            .all(|line| line.iter().map(|&idx| board[idx] as u32).sum::<u32>() == self.required_sum)
    }
}

const fn sum_of(values: &[usize]) -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < values.len() {
        total += values[i];
        i += 1;
    }
    total
}

/// The standard order-3 magic hexagon: place 1..=19 so that all 15 lines
/// sum to 38.
pub const MAGIC_HEXAGON: Puzzle = Puzzle::new(HEX_ROWS, HEX_LINES, HEX_SUM);

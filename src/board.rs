//! Formatting of completed boards.
//!
//! A completed board is a flat sequence of cell values in raster order.
//! Both formatters panic on a board that is not completely filled rather
//! than print a misleading partial arrangement.

use itertools::Itertools;

use crate::puzzle::Puzzle;

/// Formats a solution as a single line: `HEX: n0 n1 ... n18`.
pub fn format_flat(puzzle: &Puzzle, board: &[u8]) -> String {
    assert_complete(puzzle, board);
    format!("HEX: {}", board.iter().join(" "))
}

/// Formats a solution as an indented hexagon, one row per line.
///
/// Values are right-aligned to two columns and each row is offset by half
/// a cell relative to the widest row.
pub fn format_hexagon(puzzle: &Puzzle, board: &[u8]) -> String {
    assert_complete(puzzle, board);
    let widest = puzzle.rows().iter().copied().max().unwrap_or(0);

    let mut output = String::new();
    let mut start = 0;
    for &len in puzzle.rows() {
        let row = &board[start..start + len];
        start += len;
        for _ in 0..widest - len {
            output.push_str("  ");
        }
        output.push_str(&row.iter().map(|value| format!("{value:>2}")).join("  "));
        output.push('\n');
    }
    output
}

fn assert_complete(puzzle: &Puzzle, board: &[u8]) {
    assert_eq!(
        board.len(),
        puzzle.cell_count(),
        "board is not completely filled"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::{HEX_CELLS, MAGIC_HEXAGON};

    /// The classic solution, in raster order.
    const CANONICAL: [u8; HEX_CELLS] = [
        3, 17, 18, 19, 7, 1, 11, 16, 2, 5, 6, 9, 12, 4, 8, 14, 10, 13, 15,
    ];

    #[test]
    fn flat_format_lists_cells_in_raster_order() {
        assert_eq!(
            format_flat(&MAGIC_HEXAGON, &CANONICAL),
            "HEX: 3 17 18 19 7 1 11 16 2 5 6 9 12 4 8 14 10 13 15"
        );
    }

    #[test]
    fn hexagon_format_indents_each_row() {
        insta::assert_snapshot!(format_hexagon(&MAGIC_HEXAGON, &CANONICAL), @r"
     3  17  18
  19   7   1  11
16   2   5   6   9
  12   4   8  14
    10  13  15
");
    }

    #[test]
    #[should_panic(expected = "not completely filled")]
    fn formatting_a_partial_board_panics() {
        format_flat(&MAGIC_HEXAGON, &[1, 2, 3]);
    }
}

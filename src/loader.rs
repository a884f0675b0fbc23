//! Plain text boards: one row per line, `0` for dead and `1` for alive.

use crate::{
    board::{Board, CellState},
    error::{Malformed, Result},
};

const ROW_BREAK: char = '\n';
const DEAD: char = '0';
const ALIVE: char = '1';

/// Infers `(width, height)` of a textual board without parsing its cells
///
/// The height is one more than the number of line breaks, and the width is the
/// remaining (non break) characters divided evenly across those rows.
pub fn dimensions(text: &str) -> Result<(usize, usize)> {
    let breaks = text.matches(ROW_BREAK).count();
    let rows = breaks + 1;
    let cells = text.chars().count() - breaks;

    if cells == 0 {
        return Err(Malformed::Empty.into());
    }
    if cells % rows != 0 {
        return Err(Malformed::NotRectangular { cells, rows }.into());
    }
    Ok((cells / rows, rows))
}

/// Parses a textual board
///
/// No surrounding whitespace is tolerated; a trailing line break counts as an
/// extra (empty) row and is rejected.
pub fn load(text: &str) -> Result<Board> {
    let (width, height) = dimensions(text)?;

    let mut rows = Vec::with_capacity(height);
    for (row, line) in text.split(ROW_BREAK).enumerate() {
        let len = line.chars().count();
        if len != width {
            return Err(Malformed::RaggedRow {
                row,
                len,
                expected: width,
            }
            .into());
        }

        let cells = line
            .chars()
            .enumerate()
            .map(|(col, c)| match c {
                DEAD => Ok(CellState::Dead),
                ALIVE => Ok(CellState::Alive),
                found => Err(Malformed::InvalidCell { row, col, found }),
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;
        rows.push(cells);
    }
    Board::from_cells(rows)
}

/// Writes a board back out in the format accepted by [`load`]
pub fn encode(board: &Board) -> String {
    let mut text = String::with_capacity(board.height() * (board.width() + 1));
    for (i, row) in board.rows().enumerate() {
        if i > 0 {
            text.push(ROW_BREAK);
        }
        text.extend(row.iter().map(|cell| match cell {
            CellState::Dead => DEAD,
            CellState::Alive => ALIVE,
        }));
    }
    text
}

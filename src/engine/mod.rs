mod index;

use self::index::Transition;
use crate::board::Board;

/// Computes the next generation of `board`
///
/// Only interior cells (not on the outermost row or column) are evaluated;
/// the border ring is copied through untouched, so boards narrower or shorter
/// than 3 cells never change, while a 3x3 board has just its center. Neighbors
/// are always read from `board`, which is left as is, and the result owns its
/// own cells.
pub fn step(board: &Board) -> Board {
    let mut next = board.clone();
    let (width, height) = (board.width(), board.height());

    for row in 1..height.saturating_sub(1) {
        for col in 1..width.saturating_sub(1) {
            *next.cell_mut(row, col) = rule(board, row, col).next_state();
        }
    }
    next
}

// caller guarantees (row, col) is an interior cell
fn rule(board: &Board, row: usize, col: usize) -> Transition {
    let state = board.cell(row, col);
    let neighbors = board.count_neighbors(row, col);
    index::get_rule_index()[index::rule_slot(state, neighbors)]
}

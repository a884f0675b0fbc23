//! Initial board construction.

use crate::{
    board::{Board, CellState},
    error::{BoardError, Result},
};

/// Chance that a soup cell starts alive when nothing else is requested
///
/// A draw of 0.6 or more leaves the cell dead.
pub const DEFAULT_LIVE_PROBABILITY: f64 = 0.6;

/// A source of successive uniform draws in `[0, 1)`
///
/// Every [`rand::Rng`] is a source, so a thread rng, a seeded `StdRng` or a
/// hand written sequence can all seed a soup.
pub trait UnitSource {
    fn next_unit(&mut self) -> f64;
}
impl<R: rand::Rng + ?Sized> UnitSource for R {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// A board with every cell [`CellState::Dead`]
pub fn dead(width: usize, height: usize) -> Result<Board> {
    Board::new(width, height, CellState::Dead)
}

/// A randomly seeded board, also called a soup
///
/// Cells are visited row-major and each takes one draw from `source`: the cell
/// is [`CellState::Alive`] when the draw is below `live_probability`.
pub fn random<S: UnitSource + ?Sized>(
    width: usize,
    height: usize,
    live_probability: f64,
    source: &mut S,
) -> Result<Board> {
    if !(0.0..=1.0).contains(&live_probability) {
        return Err(BoardError::InvalidProbability(live_probability));
    }

    let mut board = dead(width, height)?;
    for row in 0..height {
        for col in 0..width {
            *board.cell_mut(row, col) = CellState::from(source.next_unit() < live_probability);
        }
    }
    Ok(board)
}

use crate::board::{Board, CellState};
use std::fmt;

const BORDER: char = '|';
const DEAD: char = ' ';
const ALIVE: char = '#';

/// Display adapter drawing a board as a bordered text frame
///
/// Each row is wrapped in `|` with dead cells as spaces and alive cells as `#`,
/// followed by a closing line of `width + 2` underscores. There is no trailing
/// line break.
pub struct Rendered<'a>(pub &'a Board);

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.0.rows() {
            write!(f, "{BORDER}")?;
            for cell in row {
                let c = match cell {
                    CellState::Dead => DEAD,
                    CellState::Alive => ALIVE,
                };
                write!(f, "{c}")?;
            }
            writeln!(f, "{BORDER}")?;
        }
        // floor spans the two border columns too
        write!(f, "{0:_<1$}", "", self.0.width() + 2)
    }
}

/// Renders `board` into a new frame string
pub fn render(board: &Board) -> String {
    Rendered(board).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{factory, loader};

    #[test]
    fn dead_three_by_three() {
        let board = factory::dead(3, 3).unwrap();

        assert_eq!(render(&board), "|   |\n|   |\n|   |\n_____");
    }

    #[test]
    fn alive_cells_are_hashes() {
        let board = loader::load("1000\n0110").unwrap();

        assert_eq!(render(&board), "|#   |\n| ## |\n______");
    }

    #[test]
    fn single_cell() {
        let board = loader::load("1").unwrap();

        assert_eq!(render(&board), "|#|\n___");
    }
}

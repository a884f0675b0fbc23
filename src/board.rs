use crate::error::{BoardError, Malformed, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}
impl CellState {
    #[inline]
    pub fn is_alive(self) -> bool {
        self == Self::Alive
    }
}
impl From<bool> for CellState {
    #[inline]
    fn from(alive: bool) -> Self {
        if alive { Self::Alive } else { Self::Dead }
    }
}

/// A fixed size grid of cells stored row-major
///
/// A [`Board`] owns its cells outright. Cloning produces a fully independent
/// board, which is what lets [`crate::engine::step`] read one generation while
/// writing the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<CellState>,
}

impl Board {
    /// Creates a `width` x `height` board with every cell set to `fill`
    pub fn new(width: usize, height: usize, fill: CellState) -> Result<Self> {
        let len = cell_count(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![fill; len],
        })
    }

    /// Creates a board from already separated rows
    ///
    /// Every row must have the same, non-zero length.
    pub fn from_cells(rows: Vec<Vec<CellState>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map(Vec::len).unwrap_or_default();

        let mut cells = Vec::with_capacity(cell_count(width, height)?);
        for (row, cols) in rows.into_iter().enumerate() {
            if cols.len() != width {
                return Err(Malformed::RaggedRow {
                    row,
                    len: cols.len(),
                    expected: width,
                }
                .into());
            }
            cells.extend(cols);
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, row: usize, col: usize) -> Result<CellState> {
        let idx = self.index(row, col)?;
        Ok(self.cells[idx])
    }
    pub fn set(&mut self, row: usize, col: usize, state: CellState) -> Result<()> {
        let idx = self.index(row, col)?;
        self.cells[idx] = state;
        Ok(())
    }

    #[inline]
    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Iterates over the rows of the board, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks_exact(self.width)
    }

    /// Whether `(row, col)` lies on the outermost ring of the board
    #[inline]
    pub fn is_border(&self, row: usize, col: usize) -> bool {
        row == 0 || col == 0 || row + 1 == self.height || col + 1 == self.width
    }

    fn index(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.height || col >= self.width {
            return Err(BoardError::OutOfBounds {
                row,
                col,
                width: self.width,
                height: self.height,
            });
        }
        Ok(row * self.width + col)
    }

    /// Number of alive cells among the (up to) 8 cells surrounding `(row, col)`
    ///
    /// Positions past the edge of the board are skipped rather than wrapped.
    /// The caller guarantees `(row, col)` is in bounds.
    pub(crate) fn count_neighbors(&self, row: usize, col: usize) -> u8 {
        let rows = row.saturating_sub(1)..(row + 2).min(self.height);
        let cols = col.saturating_sub(1)..(col + 2).min(self.width);

        let mut count = 0;
        for r in rows {
            for c in cols.clone() {
                if (r, c) != (row, col) && self.cells[r * self.width + c].is_alive() {
                    count += 1;
                }
            }
        }
        count
    }

    #[inline]
    pub(crate) fn cell(&self, row: usize, col: usize) -> CellState {
        self.cells[row * self.width + col]
    }
    #[inline]
    pub(crate) fn cell_mut(&mut self, row: usize, col: usize) -> &mut CellState {
        &mut self.cells[row * self.width + col]
    }
}

/// Cell storage needed for a `width` x `height` board
fn cell_count(width: usize, height: usize) -> Result<usize> {
    match width.checked_mul(height) {
        Some(len) if len > 0 && len <= isize::MAX as usize => Ok(len),
        _ => Err(BoardError::InvalidDimensions { width, height }),
    }
}

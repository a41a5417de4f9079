use std::fmt;
use std::ops::{Deref, DerefMut, Range};

use serde::{Deserialize, Serialize};

use super::types::{CellIndex, Mark, Player};

pub const BOARD_SIDE: usize = 3;
pub const BOARD_CELLS: usize = BOARD_SIDE * BOARD_SIDE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidMove {
    #[error("cell {0} is outside the board")]
    OutOfRange(CellIndex),
    #[error("cell {0} is already marked")]
    Occupied(CellIndex),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Mark; BOARD_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; BOARD_CELLS]) -> Self {
        Self { cells }
    }

    /// Parses nine cells, `X`/`O` for marks and anything else for empty.
    #[cfg(test)]
    pub(crate) fn from_pattern(pattern: &str) -> Self {
        let mut cells = [Mark::Empty; BOARD_CELLS];
        for (cell, c) in cells.iter_mut().zip(pattern.chars().filter(|c| !c.is_whitespace())) {
            *cell = match c {
                'X' => Mark::X,
                'O' => Mark::O,
                _ => Mark::Empty,
            };
        }
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; BOARD_CELLS] {
        &self.cells
    }

    pub fn get(&self, index: CellIndex) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn indices(&self) -> Range<CellIndex> {
        0..self.cells.len()
    }

    pub fn row_col(index: CellIndex) -> (usize, usize) {
        (index / BOARD_SIDE, index % BOARD_SIDE)
    }

    pub fn index_of(row: usize, col: usize) -> Option<CellIndex> {
        (row < BOARD_SIDE && col < BOARD_SIDE).then_some(row * BOARD_SIDE + col)
    }

    pub fn is_empty_at(&self, index: CellIndex) -> bool {
        self.get(index) == Some(Mark::Empty)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn empty_cells(&self) -> impl Iterator<Item = CellIndex> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
    }

    pub fn count(&self, player: Player) -> usize {
        let mark = Mark::from(player);
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    pub fn place(&mut self, index: CellIndex, player: Player) -> Result<(), InvalidMove> {
        let cell = self.cells.get_mut(index).ok_or(InvalidMove::OutOfRange(index))?;
        if !cell.is_empty() {
            return Err(InvalidMove::Occupied(index));
        }
        *cell = Mark::from(player);
        Ok(())
    }

    /// Empties a cell. Only search backtracking calls this, via [`Trial`].
    pub fn clear(&mut self, index: CellIndex) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = Mark::Empty;
        }
    }

    pub fn snapshot(&self) -> Board {
        *self
    }

    pub fn restore(&mut self, snapshot: Board) {
        *self = snapshot;
    }

    /// Places `player` at `index` for as long as the returned guard lives.
    ///
    /// Returns `None` when the cell cannot be played. The cell is emptied again
    /// when the guard is dropped, whichever way the caller leaves its scope.
    pub fn trial(&mut self, index: CellIndex, player: Player) -> Option<Trial<'_>> {
        self.place(index, player).ok()?;
        Some(Trial { board: self, index })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.chunks(BOARD_SIDE).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = cells.iter().map(|cell| cell.symbol().to_string()).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

pub struct Trial<'a> {
    board: &'a mut Board,
    index: CellIndex,
}

impl Trial<'_> {
    pub fn index(&self) -> CellIndex {
        self.index
    }
}

impl Deref for Trial<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Trial<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Trial<'_> {
    fn drop(&mut self) {
        self.board.clear(self.index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_rejects_out_of_range_and_occupied() {
        let mut board = Board::new();

        assert_eq!(board.place(9, Player::X), Err(InvalidMove::OutOfRange(9)));
        assert_eq!(board.place(4, Player::X), Ok(()));
        assert_eq!(board.place(4, Player::O), Err(InvalidMove::Occupied(4)));
        assert_eq!(board.get(4), Some(Mark::X));
    }

    #[test]
    fn test_is_full_only_when_no_empty_cell() {
        let mut board = Board::from_pattern("XOX OXO OX_");
        assert!(!board.is_full());

        board.place(8, Player::X).unwrap();
        assert!(board.is_full());
        assert_eq!(board.empty_cells().count(), 0);
    }

    #[test]
    fn test_trial_restores_cell_on_drop() {
        let mut board = Board::from_pattern("X__ _O_ ___");
        let before = board.snapshot();

        {
            let trial = board.trial(2, Player::X).unwrap();
            assert_eq!(trial.get(2), Some(Mark::X));
        }

        assert_eq!(board, before);
    }

    #[test]
    fn test_trial_restores_nested_placements_on_early_return() {
        fn first_win_cell(board: &mut Board) -> Option<usize> {
            for outer in board.indices() {
                let Some(mut trial) = board.trial(outer, Player::X) else {
                    continue;
                };
                for inner in trial.indices() {
                    if trial.trial(inner, Player::X).is_some() {
                        return Some(inner);
                    }
                }
            }
            None
        }

        let mut board = Board::from_pattern("OO_ ___ ___");
        let before = board.snapshot();

        assert_eq!(first_win_cell(&mut board), Some(3));
        assert_eq!(board, before);
    }

    #[test]
    fn test_trial_refuses_occupied_cell() {
        let mut board = Board::from_pattern("X__ ___ ___");

        assert!(board.trial(0, Player::O).is_none());
        assert_eq!(board.get(0), Some(Mark::X));
    }

    #[test]
    fn test_snapshot_and_restore() {
        let mut board = Board::new();
        board.place(0, Player::X).unwrap();
        let snapshot = board.snapshot();

        board.place(1, Player::O).unwrap();
        board.restore(snapshot);

        assert_eq!(board.count(Player::O), 0);
        assert_eq!(board.count(Player::X), 1);
    }

    #[test]
    fn test_row_col_mapping() {
        assert_eq!(Board::row_col(5), (1, 2));
        assert_eq!(Board::index_of(2, 1), Some(7));
        assert_eq!(Board::index_of(3, 0), None);
    }

    #[test]
    fn test_display_renders_rows() {
        let board = Board::from_pattern("XO_ _X_ __O");

        assert_eq!(board.to_string(), "X O .\n. X .\n. . O");
    }
}

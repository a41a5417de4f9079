use serde::{Deserialize, Serialize};

use super::board::Board;
use super::types::{CellIndex, GameOutcome, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineKind {
    Row,
    Column,
    Diagonal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine {
    pub kind: LineKind,
    /// Ordinal within `kind`: row/column number, or 0 for the main diagonal.
    pub ordinal: usize,
    pub cells: [CellIndex; 3],
}

impl WinLine {
    const fn new(kind: LineKind, ordinal: usize, cells: [CellIndex; 3]) -> Self {
        Self { kind, ordinal, cells }
    }

    pub fn start(&self) -> CellIndex {
        self.cells[0]
    }

    pub fn end(&self) -> CellIndex {
        self.cells[self.cells.len() - 1]
    }

    fn owner(&self, board: &Board) -> Option<Player> {
        let [first, rest @ ..] = self.cells;
        let player = board.get(first)?.player()?;
        rest.iter()
            .all(|&index| board.get(index).and_then(|mark| mark.player()) == Some(player))
            .then_some(player)
    }
}

pub const WIN_LINES: [WinLine; 8] = [
    WinLine::new(LineKind::Row, 0, [0, 1, 2]),
    WinLine::new(LineKind::Row, 1, [3, 4, 5]),
    WinLine::new(LineKind::Row, 2, [6, 7, 8]),
    WinLine::new(LineKind::Column, 0, [0, 3, 6]),
    WinLine::new(LineKind::Column, 1, [1, 4, 7]),
    WinLine::new(LineKind::Column, 2, [2, 5, 8]),
    WinLine::new(LineKind::Diagonal, 0, [0, 4, 8]),
    WinLine::new(LineKind::Diagonal, 1, [2, 4, 6]),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinningLine {
    pub player: Player,
    pub line: WinLine,
}

/// First completed line in [`WIN_LINES`] order. Boards with two completed
/// lines cannot be reached by legal play; for those the earlier line wins.
pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    WIN_LINES.iter().find_map(|line| {
        line.owner(board).map(|player| WinningLine { player, line: *line })
    })
}

pub fn check_win(board: &Board) -> Option<Player> {
    check_win_with_line(board).map(|winning| winning.player)
}

pub fn evaluate(board: &Board) -> GameOutcome {
    if let Some(player) = check_win(board) {
        return GameOutcome::Win(player);
    }
    if board.is_full() {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}

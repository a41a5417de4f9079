use super::board::{Board, InvalidMove};
use super::types::{CellIndex, GameOutcome, Player};
use super::win_detector::{WinningLine, check_win_with_line, evaluate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("game is already over")]
    GameOver,
    #[error("not your turn, {expected} is to move")]
    NotYourTurn { expected: Player },
    #[error("bot is deliberating")]
    BotDeliberating,
    #[error(transparent)]
    InvalidMove(#[from] InvalidMove),
    #[error("no bot move is pending")]
    NotDeliberating,
    #[error("bot found no move to play")]
    NoMoveAvailable,
}

#[derive(Debug, Clone, Default)]
pub struct GameState {
    board: Board,
    current_turn: Player,
    last_move: Option<CellIndex>,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_turn(&self) -> Player {
        self.current_turn
    }

    pub fn last_move(&self) -> Option<CellIndex> {
        self.last_move
    }

    pub fn outcome(&self) -> GameOutcome {
        evaluate(&self.board)
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.board)
    }

    /// Places the mark of `player` and returns the resulting outcome. The turn
    /// passes to the opponent unless the move ended the game.
    pub fn place_mark(&mut self, player: Player, index: CellIndex) -> Result<GameOutcome, SessionError> {
        if self.outcome().is_terminal() {
            return Err(SessionError::GameOver);
        }

        if player != self.current_turn {
            return Err(SessionError::NotYourTurn {
                expected: self.current_turn,
            });
        }

        self.board.place(index, player)?;
        self.last_move = Some(index);

        let outcome = self.outcome();
        if !outcome.is_terminal() {
            self.current_turn = player.opponent();
        }

        Ok(outcome)
    }
}

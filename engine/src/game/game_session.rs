use serde::{Deserialize, Serialize};

use crate::log_debug;

use super::board::Board;
use super::bot_controller::{SearchSettings, best_move_with};
use super::game_state::{GameState, SessionError};
use super::score::ScoreTally;
use super::types::{CellIndex, GameMode, GameOutcome, Player};
use super::win_detector::WinningLine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    Active,
    /// The bot has been handed the turn and no interactive move is accepted
    /// until [`GameSession::apply_computed_move`] runs.
    Deliberating,
    Ended(GameOutcome),
}

/// What the caller has to do next after a move was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    AwaitingMove(Player),
    BeginDeliberation,
    Ended(GameOutcome),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    CellUpdated { index: CellIndex, player: Player },
    TurnChanged(Player),
    DeliberationStarted,
    DeliberationFinished,
    GameEnded {
        outcome: GameOutcome,
        line: Option<WinningLine>,
    },
    ScoreChanged(ScoreTally),
    BoardReset,
    ModeChanged(GameMode),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub board: Board,
    pub current_turn: Player,
    pub status: SessionStatus,
    pub mode: GameMode,
    pub outcome: GameOutcome,
    pub winning_line: Option<WinningLine>,
    pub last_move: Option<CellIndex>,
    pub scores: ScoreTally,
}

pub struct GameSession {
    state: GameState,
    status: SessionStatus,
    mode: GameMode,
    scores: ScoreTally,
    search: SearchSettings,
    events: Vec<SessionEvent>,
}

impl GameSession {
    pub fn new(mode: GameMode, search: SearchSettings) -> Self {
        Self {
            state: GameState::new(),
            status: SessionStatus::Active,
            mode,
            scores: ScoreTally::default(),
            search,
            events: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        self.state.board()
    }

    pub fn current_turn(&self) -> Player {
        self.state.current_turn()
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        !matches!(self.status, SessionStatus::Ended(_))
    }

    pub fn is_deliberating(&self) -> bool {
        self.status == SessionStatus::Deliberating
    }

    pub fn outcome(&self) -> GameOutcome {
        self.state.outcome()
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.state.winning_line()
    }

    pub fn last_move(&self) -> Option<CellIndex> {
        self.state.last_move()
    }

    pub fn scores(&self) -> ScoreTally {
        self.scores
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            board: *self.board(),
            current_turn: self.current_turn(),
            status: self.status,
            mode: self.mode,
            outcome: self.outcome(),
            winning_line: self.winning_line(),
            last_move: self.last_move(),
            scores: self.scores,
        }
    }

    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    /// Interactive move. Rejections leave the session untouched.
    pub fn request_move(&mut self, index: CellIndex, player: Player) -> Result<Transition, SessionError> {
        match self.status {
            SessionStatus::Ended(_) => return Err(SessionError::GameOver),
            SessionStatus::Deliberating => return Err(SessionError::BotDeliberating),
            SessionStatus::Active => {}
        }
        self.apply_move(index, player)
    }

    /// Second half of the bot's turn: search the current board and play the result.
    pub fn apply_computed_move(&mut self) -> Result<Transition, SessionError> {
        if !self.is_deliberating() {
            return Err(SessionError::NotDeliberating);
        }

        let bot = self.current_turn();
        let mut board = *self.board();
        let Some(index) = best_move_with(&mut board, bot, self.search) else {
            return Err(SessionError::NoMoveAvailable);
        };
        log_debug!("Bot {} plays cell {}", bot, index);

        self.status = SessionStatus::Active;
        self.events.push(SessionEvent::DeliberationFinished);
        self.apply_move(index, bot)
    }

    pub fn new_game(&mut self) {
        self.state = GameState::new();
        self.status = SessionStatus::Active;
        self.events.push(SessionEvent::BoardReset);
        self.events.push(SessionEvent::TurnChanged(self.current_turn()));
    }

    pub fn reset_score(&mut self) {
        self.scores.reset();
        self.events.push(SessionEvent::ScoreChanged(self.scores));
    }

    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.events.push(SessionEvent::ModeChanged(mode));
        self.new_game();
    }

    fn apply_move(&mut self, index: CellIndex, player: Player) -> Result<Transition, SessionError> {
        let outcome = self.state.place_mark(player, index)?;
        self.events.push(SessionEvent::CellUpdated { index, player });

        if outcome.is_terminal() {
            self.finish(outcome);
            return Ok(Transition::Ended(outcome));
        }

        let next = self.current_turn();
        if self.mode.bot_player() == Some(next) {
            self.status = SessionStatus::Deliberating;
            self.events.push(SessionEvent::DeliberationStarted);
            Ok(Transition::BeginDeliberation)
        } else {
            self.events.push(SessionEvent::TurnChanged(next));
            Ok(Transition::AwaitingMove(next))
        }
    }

    fn finish(&mut self, outcome: GameOutcome) {
        self.status = SessionStatus::Ended(outcome);
        self.scores.record(outcome);
        self.events.push(SessionEvent::GameEnded {
            outcome,
            line: self.winning_line(),
        });
        self.events.push(SessionEvent::ScoreChanged(self.scores));
    }
}

mod board;
mod bot_controller;
mod broadcaster;
mod game_session;
mod game_state;
mod score;
mod session;
mod settings;
mod types;
mod win_detector;

pub use board::{BOARD_CELLS, BOARD_SIDE, Board, InvalidMove, Trial};
pub use bot_controller::{BotInput, SearchSettings, best_move, best_move_with, calculate_move};
pub use broadcaster::GameBroadcaster;
pub use game_session::{GameSession, SessionEvent, SessionSnapshot, SessionStatus, Transition};
pub use game_state::{GameState, SessionError};
pub use score::ScoreTally;
pub use session::{SessionCommand, TicTacToeSession};
pub use settings::SessionSettings;
pub use types::{BOT_PLAYER, CellIndex, GameMode, GameOutcome, Mark, Player};
pub use win_detector::{LineKind, WIN_LINES, WinLine, WinningLine, check_win, check_win_with_line, evaluate};

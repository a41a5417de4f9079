use crate::log_warn;

use super::board::Board;
use super::game_state::GameState;
use super::types::{CellIndex, GameOutcome, Player};
use super::win_detector::{check_win, evaluate};

const WIN_SCORE: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchSettings {
    /// Prune with alpha-beta. Selects the same cell as the exhaustive search.
    pub alpha_beta: bool,
}

pub struct BotInput {
    pub board: Board,
    pub bot: Player,
}

impl BotInput {
    pub fn from_game_state(state: &GameState) -> Self {
        Self {
            board: *state.board(),
            bot: state.current_turn(),
        }
    }
}

/// Searches a private copy of the input board.
pub fn calculate_move(input: &BotInput, settings: SearchSettings) -> Option<CellIndex> {
    let mut board = input.board;
    best_move_with(&mut board, input.bot, settings)
}

pub fn best_move(board: &mut Board, bot: Player) -> Option<CellIndex> {
    best_move_with(board, bot, SearchSettings::default())
}

/// Picks the cell `bot` should play: an immediate win, else a block of the
/// opponent's immediate win, else the minimax optimum (lowest index on ties).
///
/// Every speculative placement is undone before returning, so `board` is
/// unchanged afterwards. Returns `None` for a full board.
pub fn best_move_with(board: &mut Board, bot: Player, settings: SearchSettings) -> Option<CellIndex> {
    if board.is_full() {
        log_warn!("Search requested on a full board:\n{}", board);
        return None;
    }

    if let Some(index) = find_winning_move(board, bot) {
        return Some(index);
    }

    if let Some(index) = find_winning_move(board, bot.opponent()) {
        return Some(index);
    }

    let mut best_move = None;
    let mut best_score = i32::MIN;

    for index in board.indices() {
        let Some(mut trial) = board.trial(index, bot) else {
            continue;
        };

        let score = minimax(
            &mut trial,
            bot,
            0,
            false,
            best_score,
            i32::MAX,
            settings.alpha_beta,
        );

        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move
}

fn find_winning_move(board: &mut Board, player: Player) -> Option<CellIndex> {
    board.indices().find(|&index| {
        board
            .trial(index, player)
            .is_some_and(|trial| check_win(&trial) == Some(player))
    })
}

fn minimax(
    board: &mut Board,
    bot: Player,
    depth: i32,
    is_maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
    prune: bool,
) -> i32 {
    match evaluate(board) {
        GameOutcome::Win(winner) if winner == bot => return WIN_SCORE - depth,
        GameOutcome::Win(_) => return depth - WIN_SCORE,
        GameOutcome::Draw => return 0,
        GameOutcome::InProgress => {}
    }

    let mover = if is_maximizing { bot } else { bot.opponent() };
    let mut best = if is_maximizing { i32::MIN } else { i32::MAX };

    for index in board.indices() {
        let Some(mut trial) = board.trial(index, mover) else {
            continue;
        };
        let score = minimax(&mut trial, bot, depth + 1, !is_maximizing, alpha, beta, prune);
        drop(trial);

        if is_maximizing {
            best = best.max(score);
            alpha = alpha.max(best);
        } else {
            best = best.min(score);
            beta = beta.min(best);
        }

        if prune && beta <= alpha {
            break;
        }
    }

    best
}

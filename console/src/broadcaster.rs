use std::sync::{Arc, Mutex, PoisonError};

use tictactoe_engine::{
    BOARD_SIDE, GameBroadcaster, GameMode, Player, ScoreTally, SessionEvent, SessionSnapshot,
    SessionStatus,
};

#[derive(Clone, Default)]
pub struct ConsoleBroadcaster {
    latest: Arc<Mutex<Option<SessionSnapshot>>>,
}

impl ConsoleBroadcaster {
    pub fn new() -> Self {
        Self::default()
    }

    /// The side a typed cell number is played for.
    pub fn current_turn(&self) -> Player {
        self.latest
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map_or(Player::X, |state| state.current_turn)
    }

    fn mode(&self) -> GameMode {
        self.latest
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map_or_else(GameMode::default, |state| state.mode)
    }
}

impl GameBroadcaster for ConsoleBroadcaster {
    async fn broadcast_event(&self, event: SessionEvent) {
        if let Some(message) = describe_event(&event, self.mode()) {
            println!("{}", message);
        }
    }

    async fn broadcast_state(&self, state: SessionSnapshot) {
        println!("{}", render(&state));
        *self.latest.lock().unwrap_or_else(PoisonError::into_inner) = Some(state);
    }
}

fn describe_event(event: &SessionEvent, mode: GameMode) -> Option<String> {
    match event {
        SessionEvent::GameEnded { outcome, .. } => Some(format!(
            "{} Type 'new' to play again.",
            outcome.headline(mode)
        )),
        SessionEvent::ScoreChanged(scores) => Some(format_scores(scores)),
        SessionEvent::ModeChanged(GameMode::PlayerVsPlayer) => Some("Mode: player vs player".to_string()),
        SessionEvent::ModeChanged(GameMode::VsBot) => Some("Mode: you (X) vs bot (O)".to_string()),
        SessionEvent::DeliberationStarted => Some("Bot is thinking...".to_string()),
        SessionEvent::CellUpdated { .. }
        | SessionEvent::TurnChanged(_)
        | SessionEvent::DeliberationFinished
        | SessionEvent::BoardReset => None,
    }
}

fn format_scores(scores: &ScoreTally) -> String {
    format!(
        "Score  X: {}  O: {}  Draws: {}",
        scores.x_wins, scores.o_wins, scores.draws
    )
}

/// Empty cells show their index; winning cells are bracketed.
fn render(state: &SessionSnapshot) -> String {
    let winning_cells = state.winning_line.map(|w| w.line.cells).unwrap_or_default();
    let highlight = state.winning_line.is_some();

    let rows: Vec<String> = state
        .board
        .cells()
        .chunks(BOARD_SIDE)
        .enumerate()
        .map(|(row, cells)| {
            let cells: Vec<String> = cells
                .iter()
                .enumerate()
                .map(|(col, mark)| {
                    let index = row * BOARD_SIDE + col;
                    match mark.player() {
                        Some(player) if highlight && winning_cells.contains(&index) => {
                            format!("[{}]", player)
                        }
                        Some(player) => format!(" {} ", player),
                        None => format!(" {} ", index),
                    }
                })
                .collect();
            cells.join("|")
        })
        .collect();

    let status = match state.status {
        SessionStatus::Active => format!("Player {} to move", state.current_turn),
        SessionStatus::Deliberating => "Bot is thinking...".to_string(),
        SessionStatus::Ended(outcome) => outcome.headline(state.mode),
    };

    format!("\n{}\n{}", rows.join("\n---+---+---\n"), status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::{GameOutcome, GameSession, SearchSettings};

    #[test]
    fn test_render_shows_indices_and_marks() {
        let mut session = GameSession::new(GameMode::PlayerVsPlayer, SearchSettings::default());
        session.request_move(4, Player::X).unwrap();

        let text = render(&session.snapshot());

        assert!(text.contains(" 0 | 1 | 2 "));
        assert!(text.contains(" 3 | X | 5 "));
        assert!(text.ends_with("Player O to move"));
    }

    #[test]
    fn test_render_brackets_winning_line() {
        let mut session = GameSession::new(GameMode::PlayerVsPlayer, SearchSettings::default());
        for (index, player) in [(0, Player::X), (3, Player::O), (1, Player::X), (4, Player::O), (2, Player::X)] {
            session.request_move(index, player).unwrap();
        }

        let text = render(&session.snapshot());

        assert!(text.contains("[X]|[X]|[X]"));
        assert!(text.ends_with("Congrats! Player X Won!"));
    }

    #[test]
    fn test_game_end_message_uses_mode() {
        let event = SessionEvent::GameEnded {
            outcome: GameOutcome::Win(Player::O),
            line: None,
        };

        assert_eq!(
            describe_event(&event, GameMode::VsBot).as_deref(),
            Some("Bot Won! Type 'new' to play again.")
        );
    }

    #[test]
    fn test_current_turn_defaults_to_x() {
        assert_eq!(ConsoleBroadcaster::new().current_turn(), Player::X);
    }
}

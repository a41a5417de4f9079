use tokio::sync::mpsc;
use tokio::time::{Instant, sleep_until};

use crate::{log_debug, log_warn};

use super::broadcaster::GameBroadcaster;
use super::game_session::GameSession;
use super::settings::SessionSettings;
use super::types::{CellIndex, GameMode, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    PlaceMark { index: CellIndex, player: Player },
    NewGame,
    ResetScore,
    SetMode(GameMode),
}

pub struct TicTacToeSession;

impl TicTacToeSession {
    /// Drives `session` until the command channel closes, then returns it.
    ///
    /// A bot turn is applied once `deliberation_delay` has elapsed. Commands
    /// keep being processed meanwhile: moves are rejected by the session, and
    /// a new game or mode change drops the pending bot move.
    pub async fn run(
        mut session: GameSession,
        settings: SessionSettings,
        mut commands: mpsc::UnboundedReceiver<SessionCommand>,
        broadcaster: impl GameBroadcaster,
    ) -> GameSession {
        broadcaster.broadcast_state(session.snapshot()).await;

        let mut deadline: Option<Instant> = None;

        loop {
            tokio::select! {
                command = commands.recv() => {
                    let Some(command) = command else {
                        break;
                    };
                    handle_command(&mut session, command);
                }
                () = wait_for(deadline) => {
                    deadline = None;
                    if let Err(e) = session.apply_computed_move() {
                        log_warn!("Bot move failed: {}", e);
                    }
                }
            }

            deadline = match (session.is_deliberating(), deadline) {
                (true, None) => Some(Instant::now() + settings.deliberation_delay),
                (true, armed) => armed,
                (false, _) => None,
            };

            publish(&mut session, &broadcaster).await;
        }

        log_debug!("Session command channel closed");
        session
    }
}

fn handle_command(session: &mut GameSession, command: SessionCommand) {
    match command {
        SessionCommand::PlaceMark { index, player } => {
            if let Err(e) = session.request_move(index, player) {
                log_debug!("Player {} failed to place mark at {}: {}", player, index, e);
            }
        }
        SessionCommand::NewGame => session.new_game(),
        SessionCommand::ResetScore => session.reset_score(),
        SessionCommand::SetMode(mode) => session.set_mode(mode),
    }
}

async fn wait_for(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

async fn publish(session: &mut GameSession, broadcaster: &impl GameBroadcaster) {
    let events = session.drain_events();
    if events.is_empty() {
        return;
    }
    for event in events {
        broadcaster.broadcast_event(event).await;
    }
    broadcaster.broadcast_state(session.snapshot()).await;
}

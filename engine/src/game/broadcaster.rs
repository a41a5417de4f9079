use std::future::Future;

use super::game_session::{SessionEvent, SessionSnapshot};

/// Receiver of everything a front-end needs to render a session.
pub trait GameBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_event(&self, event: SessionEvent) -> impl Future<Output = ()> + Send;

    fn broadcast_state(&self, state: SessionSnapshot) -> impl Future<Output = ()> + Send;
}

use std::future::Future;

use super::snake::{GameOverSummary, GameSnapshot};

/// Outbound side of a session: renderer and score display live behind it.
pub trait GameBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_state(&self, snapshot: GameSnapshot) -> impl Future<Output = ()> + Send;

    fn broadcast_score(&self, score: u32) -> impl Future<Output = ()> + Send;

    fn broadcast_game_over(&self, summary: GameOverSummary) -> impl Future<Output = ()> + Send;
}

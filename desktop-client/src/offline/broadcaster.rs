use common::games::GameBroadcaster;
use common::games::snake::{GameOverSummary, GameSnapshot};
use crate::state::SharedState;

#[derive(Clone)]
pub struct LocalBroadcaster {
    shared_state: SharedState,
}

impl LocalBroadcaster {
    pub fn new(shared_state: SharedState) -> Self {
        Self { shared_state }
    }
}

impl GameBroadcaster for LocalBroadcaster {
    async fn broadcast_state(&self, snapshot: GameSnapshot) {
        self.shared_state.set_snapshot(snapshot);
    }

    async fn broadcast_score(&self, score: u32) {
        self.shared_state.set_score(score);
    }

    async fn broadcast_game_over(&self, summary: GameOverSummary) {
        self.shared_state.set_game_over(summary);
    }
}

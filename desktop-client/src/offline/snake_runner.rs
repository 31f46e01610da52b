use common::games::{IntervalClock, SessionRng};
use common::games::snake::{SessionCommand, SnakeGameState, SnakeSession, SnakeSessionSettings};
use common::log;
use tokio::sync::mpsc;

use crate::state::SharedState;
use super::LocalBroadcaster;

pub async fn run_snake_game(
    shared_state: SharedState,
    command_rx: mpsc::UnboundedReceiver<SessionCommand>,
    settings: SnakeSessionSettings,
    seed: Option<u64>,
) {
    let rng = match seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Offline session seed: {}", rng.seed());
    shared_state.add_event(format!("Seed {}. Press Enter to start", rng.seed()));

    let game_state = SnakeGameState::new(settings);
    shared_state.set_snapshot(game_state.snapshot());

    let broadcaster = LocalBroadcaster::new(shared_state);
    let last = SnakeSession::run(game_state, rng, IntervalClock::new(), command_rx, broadcaster).await;

    log!("Session finished at tick {} with score {}", last.tick, last.score);
}

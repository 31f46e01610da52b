use tokio::sync::mpsc;

use crate::games::{GameBroadcaster, SessionRng, TickClock};
use crate::log;

use super::game_state::SnakeGameState;
use super::snapshot::GameSnapshot;
use super::types::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    /// Start a new game, or restart the current one.
    Start,
    Turn(Direction),
    Quit,
}

enum SessionEvent {
    Command(Option<SessionCommand>),
    Tick,
}

pub struct SnakeSession;

impl SnakeSession {
    /// Drives one player's games until `Quit` arrives or the command channel
    /// closes. Returns the last snapshot.
    pub async fn run(
        mut game_state: SnakeGameState,
        mut rng: SessionRng,
        mut clock: impl TickClock,
        mut commands: mpsc::UnboundedReceiver<SessionCommand>,
        broadcaster: impl GameBroadcaster,
    ) -> GameSnapshot {
        loop {
            let event = tokio::select! {
                biased;
                command = commands.recv() => SessionEvent::Command(command),
                _ = clock.next_tick(), if clock.is_running() => SessionEvent::Tick,
            };

            match event {
                SessionEvent::Command(None) => {
                    log!("Command channel closed, stopping session");
                    break;
                }
                SessionEvent::Command(Some(SessionCommand::Quit)) => {
                    log!("Quit requested at tick {}", game_state.tick_count());
                    break;
                }
                SessionEvent::Command(Some(SessionCommand::Start)) => {
                    game_state.reset(&mut rng);
                    clock.start(game_state.settings().tick_interval);
                    broadcaster.broadcast_state(game_state.snapshot()).await;
                    broadcaster.broadcast_score(game_state.score()).await;
                }
                SessionEvent::Command(Some(SessionCommand::Turn(direction))) => {
                    game_state.set_direction(direction);
                }
                SessionEvent::Tick => {
                    Self::handle_tick(&mut game_state, &mut rng, &mut clock, &broadcaster).await;
                }
            }
        }

        clock.stop();
        game_state.snapshot()
    }

    async fn handle_tick(
        game_state: &mut SnakeGameState,
        rng: &mut SessionRng,
        clock: &mut impl TickClock,
        broadcaster: &impl GameBroadcaster,
    ) {
        let score_before = game_state.score();
        game_state.tick(rng);

        broadcaster.broadcast_state(game_state.snapshot()).await;

        if game_state.score() != score_before {
            broadcaster.broadcast_score(game_state.score()).await;
        }

        if !game_state.is_running() {
            clock.stop();
            broadcaster.broadcast_game_over(game_state.summary()).await;
        }
    }
}

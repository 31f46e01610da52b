use std::sync::{Arc, Mutex};

use chrono::Local;
use common::games::snake::{GameOverSummary, GameSnapshot};
use eframe::egui;
use ringbuffer::{AllocRingBuffer, RingBuffer};

use crate::constants::EVENT_LOG_SIZE;

#[derive(Debug, Clone)]
pub struct ClientView {
    pub snapshot: Option<GameSnapshot>,
    pub score: u32,
    pub game_over: Option<GameOverSummary>,
    pub event_log: Vec<String>,
}

struct ClientState {
    snapshot: Option<GameSnapshot>,
    score: u32,
    game_over: Option<GameOverSummary>,
    event_log: AllocRingBuffer<String>,
}

/// State written by the session thread and read by the UI every frame.
#[derive(Clone)]
pub struct SharedState {
    state: Arc<Mutex<ClientState>>,
    context: Arc<Mutex<Option<egui::Context>>>,
}

impl SharedState {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(ClientState {
                snapshot: None,
                score: 0,
                game_over: None,
                event_log: AllocRingBuffer::new(EVENT_LOG_SIZE),
            })),
            context: Arc::new(Mutex::new(None)),
        }
    }

    pub fn has_context(&self) -> bool {
        self.context.lock().unwrap().is_some()
    }

    pub fn set_context(&self, ctx: egui::Context) {
        *self.context.lock().unwrap() = Some(ctx);
    }

    fn request_repaint(&self) {
        if let Some(ctx) = self.context.lock().unwrap().as_ref() {
            ctx.request_repaint();
        }
    }

    pub fn set_snapshot(&self, snapshot: GameSnapshot) {
        {
            let mut state = self.state.lock().unwrap();
            if snapshot.tick == 0 {
                state.game_over = None;
            }
            state.snapshot = Some(snapshot);
        }
        self.request_repaint();
    }

    pub fn set_score(&self, score: u32) {
        self.state.lock().unwrap().score = score;
        self.request_repaint();
    }

    pub fn set_game_over(&self, summary: GameOverSummary) {
        let reason = summary
            .reason
            .map(|r| r.to_string())
            .unwrap_or_else(|| "stopped".to_string());
        {
            let mut state = self.state.lock().unwrap();
            state.game_over = Some(summary.clone());
            push_event(
                &mut state.event_log,
                format!("Game over: {}. Score {}, length {}", reason, summary.score, summary.snake_length),
            );
        }
        self.request_repaint();
    }

    pub fn add_event(&self, event: String) {
        push_event(&mut self.state.lock().unwrap().event_log, event);
        self.request_repaint();
    }

    pub fn view(&self) -> ClientView {
        let state = self.state.lock().unwrap();
        ClientView {
            snapshot: state.snapshot.clone(),
            score: state.score,
            game_over: state.game_over.clone(),
            event_log: state.event_log.iter().cloned().collect(),
        }
    }
}

fn push_event(log: &mut AllocRingBuffer<String>, event: String) {
    let _ = log.enqueue(format!("[{}] {}", Local::now().format("%H:%M:%S"), event));
}

use common::games::snake::SessionCommand;
use eframe::egui;

use crate::CommandSender;
use crate::state::SharedState;
use super::game::SnakeGameUi;

pub struct SnakeApp {
    shared_state: SharedState,
    command_sender: CommandSender,
    game_ui: SnakeGameUi,
    quit_sent: bool,
}

impl SnakeApp {
    pub fn new(shared_state: SharedState, command_sender: CommandSender, cell_size: f32) -> Self {
        Self {
            shared_state,
            command_sender,
            game_ui: SnakeGameUi::new(cell_size),
            quit_sent: false,
        }
    }
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.shared_state.has_context() {
            self.shared_state.set_context(ctx.clone());
        }

        if ctx.input(|i| i.viewport().close_requested()) && !self.quit_sent {
            self.command_sender.send(SessionCommand::Quit);
            self.quit_sent = true;
        }

        let view = self.shared_state.view();
        egui::CentralPanel::default().show(ctx, |ui| {
            self.game_ui.render(ui, ctx, &view, &self.command_sender);
        });
    }
}

use common::games::snake::{Direction, GameSnapshot, GameStatus, Point, SessionCommand};
use eframe::egui;

use crate::CommandSender;
use crate::state::ClientView;
use crate::ui::colors;

pub struct SnakeGameUi {
    cell_size: f32,
}

impl SnakeGameUi {
    pub fn new(cell_size: f32) -> Self {
        Self { cell_size }
    }

    pub fn render(
        &mut self,
        ui: &mut egui::Ui,
        ctx: &egui::Context,
        view: &ClientView,
        command_sender: &CommandSender,
    ) {
        let Some(snapshot) = &view.snapshot else {
            ui.centered_and_justified(|ui| {
                ui.label("Waiting for game state...");
            });
            return;
        };

        self.handle_input(ctx, command_sender, snapshot);

        ui.vertical_centered(|ui| {
            ui.heading(format!("Score: {}", view.score));
            ui.add_space(6.0);

            self.render_board(ui, snapshot);

            ui.add_space(10.0);
            self.render_controls(ui, ctx, snapshot, command_sender);
            if let Some(summary) = &view.game_over {
                ui.label(
                    egui::RichText::new(format!(
                        "Length {}, survived {} ticks",
                        summary.snake_length, summary.ticks
                    ))
                    .color(colors::MUTED_TEXT),
                );
            }
            self.render_event_log(ui, view);
        });
    }

    fn handle_input(&self, ctx: &egui::Context, command_sender: &CommandSender, snapshot: &GameSnapshot) {
        if snapshot.status != GameStatus::Running {
            return;
        }

        // Every turn pressed this frame is sent in order; the session buffers them.
        let directions = ctx.input(|i| pressed_directions(&i.events));
        for direction in directions {
            command_sender.send(SessionCommand::Turn(direction));
        }
    }

    fn render_board(&self, ui: &mut egui::Ui, snapshot: &GameSnapshot) {
        let field = &snapshot.field_size;
        let size = egui::vec2(
            field.width as f32 * self.cell_size,
            field.height as f32 * self.cell_size,
        );
        let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
        let origin = response.rect.min;

        painter.rect_filled(response.rect, 0.0, colors::BOARD_BACKGROUND);

        let draw_cell = |cell: Point, color: egui::Color32| {
            painter.rect(
                cell_rect(origin, cell, self.cell_size),
                0.0,
                color,
                egui::Stroke::new(1.0, colors::CELL_BORDER),
                egui::StrokeKind::Inside,
            );
        };

        if let Some(food) = snapshot.food {
            draw_cell(food, colors::FOOD);
        }
        if let Some(shrink_food) = snapshot.shrink_food {
            draw_cell(shrink_food, colors::SHRINK_FOOD);
        }
        for enemy in &snapshot.enemies {
            draw_cell(*enemy, colors::ENEMY);
        }
        // Tail first so the head stays on top after a self collision.
        for (index, segment) in snapshot.snake.iter().enumerate().rev() {
            let color = if index == 0 { colors::SNAKE_HEAD } else { colors::SNAKE_BODY };
            draw_cell(*segment, color);
        }

        if snapshot.status == GameStatus::Over {
            let center = response.rect.center();
            painter.text(
                center - egui::vec2(0.0, 15.0),
                egui::Align2::CENTER_CENTER,
                "Game Over!",
                egui::FontId::proportional(30.0),
                colors::OVERLAY_TEXT,
            );
            painter.text(
                center + egui::vec2(0.0, 25.0),
                egui::Align2::CENTER_CENTER,
                format!("Score: {}", snapshot.score),
                egui::FontId::proportional(20.0),
                colors::OVERLAY_TEXT,
            );
        }
    }

    fn render_controls(
        &self,
        ui: &mut egui::Ui,
        ctx: &egui::Context,
        snapshot: &GameSnapshot,
        command_sender: &CommandSender,
    ) {
        let Some(label) = start_button_label(snapshot.status) else {
            ui.label("Use Arrow Keys or WASD to steer");
            return;
        };

        if ui.button(format!("{} (Enter)", label)).clicked()
            || ctx.input(|i| i.key_pressed(egui::Key::Enter))
        {
            command_sender.send(SessionCommand::Start);
        }

        if let Some(reason) = snapshot.death_reason {
            ui.label(
                egui::RichText::new(format!("The snake {}", reason)).color(colors::MUTED_TEXT),
            );
        }
    }

    fn render_event_log(&self, ui: &mut egui::Ui, view: &ClientView) {
        if view.event_log.is_empty() {
            return;
        }
        ui.add_space(6.0);
        egui::CollapsingHeader::new("Events")
            .default_open(false)
            .show(ui, |ui| {
                for entry in &view.event_log {
                    ui.label(egui::RichText::new(entry).small().color(colors::MUTED_TEXT));
                }
            });
    }
}

/// `None` while a game is running: the button is hidden then.
fn start_button_label(status: GameStatus) -> Option<&'static str> {
    match status {
        GameStatus::Idle => Some("Start"),
        GameStatus::Running => None,
        GameStatus::Over => Some("Play Again"),
    }
}

fn direction_for_key(key: egui::Key) -> Option<Direction> {
    match key {
        egui::Key::ArrowUp | egui::Key::W => Some(Direction::Up),
        egui::Key::ArrowDown | egui::Key::S => Some(Direction::Down),
        egui::Key::ArrowLeft | egui::Key::A => Some(Direction::Left),
        egui::Key::ArrowRight | egui::Key::D => Some(Direction::Right),
        _ => None,
    }
}

fn pressed_directions(events: &[egui::Event]) -> Vec<Direction> {
    events
        .iter()
        .filter_map(|event| match event {
            egui::Event::Key { key, pressed: true, .. } => direction_for_key(*key),
            _ => None,
        })
        .collect()
}

fn cell_rect(origin: egui::Pos2, cell: Point, cell_size: f32) -> egui::Rect {
    egui::Rect::from_min_size(
        origin + egui::vec2(cell.x as f32 * cell_size, cell.y as f32 * cell_size),
        egui::vec2(cell_size, cell_size),
    )
}

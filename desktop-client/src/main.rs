mod command_sender;
mod config;
mod constants;
mod offline;
mod state;
mod ui;

use std::path::PathBuf;

use clap::Parser;
use common::{log, logger};
use eframe::egui;
use tokio::sync::mpsc;

use command_sender::CommandSender;
use config::get_config_manager;
use constants::{HUD_HEIGHT, WINDOW_PADDING};
use offline::run_snake_game;
use state::SharedState;
use ui::SnakeApp;

#[derive(Parser)]
#[command(name = "snake_chase")]
struct Args {
    /// Config file; defaults to snake_chase_config.yaml next to the executable.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Fixed seed for a reproducible session.
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    verbose: bool,
    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = get_config_manager(args.config.as_deref());
    let loaded_config = config_manager.get_config();
    let config = loaded_config.clone().unwrap_or_default();

    let prefix = if args.use_log_prefix || config.logging.use_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose || config.logging.verbose);

    // A broken file is left alone so the user can fix it.
    match loaded_config {
        Ok(_) => {
            if let Err(e) = config_manager.set_config(&config) {
                log!("Failed to save config: {}", e);
            }
        }
        Err(e) => log!("Failed to load config: {}. Using defaults", e),
    }

    let settings = config.game.to_session_settings();
    let cell_size = config.window.cell_size_px as f32;
    let board_width = settings.field_width as f32 * cell_size;
    let board_height = settings.field_height as f32 * cell_size;

    let shared_state = SharedState::new();
    let (command_tx, command_rx) = mpsc::unbounded_channel();

    let shared_state_clone = shared_state.clone();
    let seed = args.seed;
    let session_thread = std::thread::spawn(move || {
        let rt = match tokio::runtime::Runtime::new() {
            Ok(rt) => rt,
            Err(e) => {
                log!("Failed to start tokio runtime: {}", e);
                return;
            }
        };
        rt.block_on(run_snake_game(shared_state_clone, command_rx, settings, seed));
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([
                (board_width + WINDOW_PADDING).max(320.0),
                board_height + HUD_HEIGHT,
            ])
            .with_title("Snake Chase"),
        ..Default::default()
    };

    eframe::run_native(
        "Snake Chase",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(SnakeApp::new(
                shared_state,
                CommandSender::new(command_tx),
                cell_size,
            )))
        }),
    )?;

    if session_thread.join().is_err() {
        log!("Session thread panicked");
    }

    Ok(())
}

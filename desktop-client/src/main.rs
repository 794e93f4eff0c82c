mod command_sender;
mod config;
mod offline;
mod state;
mod ui;

use std::path::PathBuf;

use clap::Parser;
use common::games::SessionRng;
use common::games::puzzle2048::{BoardEngine, GameController};
use common::version::VERSION;
use common::{log, logger};
use eframe::egui;
use tokio::sync::mpsc;

use command_sender::CommandSender;
use config::{DEFAULT_CONFIG_FILE, get_config_manager};
use offline::{LocalRenderSink, local_game_task};
use state::SharedState;
use ui::Puzzle2048App;

#[derive(Parser)]
#[command(name = "puzzle2048", version)]
struct Args {
    /// YAML config file; defaults are used when it does not exist.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Seed for tile spawning. Overrides the config file.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = get_config_manager(&args.config).get_config()?;
    log!("2048 v{} using config {}", VERSION, args.config.display());

    let rng = match args.seed.or(config.seed) {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    let engine = BoardEngine::new(config.game, rng);

    let shared_state = SharedState::new();
    let controller = GameController::new(engine, LocalRenderSink::new(shared_state.clone()));
    let (command_tx, command_rx) = mpsc::unbounded_channel();

    let coalesce_bursts = config.input.coalesce_bursts;
    let shared_state_for_task = shared_state.clone();
    let game_thread = std::thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(e) => {
                log!("Failed to start game runtime: {}", e);
                shared_state_for_task.set_error(format!("Failed to start game: {}", e));
                return;
            }
        };
        runtime.block_on(local_game_task(controller, command_rx, coalesce_bursts));
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_title("2048"),
        ..Default::default()
    };

    let command_sender = CommandSender::new(command_tx);
    eframe::run_native(
        "2048",
        options,
        Box::new(|_cc| Ok(Box::new(Puzzle2048App::new(shared_state, command_sender)))),
    )?;

    if game_thread.join().is_err() {
        log!("Game task panicked");
    }
    log!("Bye");

    Ok(())
}

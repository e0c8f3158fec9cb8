//! Yeri Countdown - play the three-turn countdown in the terminal
//!
//! This is the main entry point for the yeri-countdown binary.

use tokio::sync::mpsc;
use tracing::info;

use yeri_countdown::{
    clock::TokioClock,
    config::Config,
    game::TurnController,
    tasks::{display_task, format_report, stdin_commands_task, turn_driver_task},
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr so stdout carries only the countdown
    tracing_subscriber::fmt()
        .with_env_filter(format!("yeri_countdown={}", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting yeri-countdown v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration: mode={}, changes={}, tick={}ms, turn_gap={}ms",
        config.mode, config.changes, config.tick_ms, config.turn_gap_ms
    );

    let controller = TurnController::new(
        TokioClock::new(),
        config.mode,
        config.changes,
        config.tick_interval(),
    )?;

    let (command_tx, command_rx) = mpsc::channel(32);
    tokio::spawn(stdin_commands_task(command_tx));
    tokio::spawn(display_task(controller.subscribe(), config.json));

    info!("Commands:");
    info!("  o    - a change was found");
    info!("  x    - wrong answer");
    info!("  hint - open the hint (turn 2, pauses the countdown)");
    info!("  done - close the hint");
    info!("  quit - leave the game");

    tokio::select! {
        result = turn_driver_task(controller, command_rx, config.turn_gap()) => {
            let report = result?;
            println!("{}", format_report(&report, config.json));
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    info!("Game shutdown complete");
    Ok(())
}

//! Turn driver background task

use std::time::Duration;
use tokio::{
    sync::mpsc,
    time::{sleep_until, Instant},
};
use tracing::{debug, info, warn};

use crate::{
    clock::TokioClock,
    game::{PlayerCommand, TurnController, TURN_COUNT},
    state::{GameReport, TurnPhase},
    timer::GameError,
};

/// Task that delivers scheduled ticks to the controller and applies player
/// commands until the last turn is over or the player quits.
///
/// A finished turn is followed by `turn_gap` before the next countdown
/// starts; the last turn ends the game at once. A closed command channel
/// only stops command intake, the countdown keeps running.
pub async fn turn_driver_task(
    mut controller: TurnController<TokioClock>,
    mut commands: mpsc::Receiver<PlayerCommand>,
    turn_gap: Duration,
) -> Result<GameReport, GameError> {
    info!("Starting turn driver task");
    controller.begin()?;

    let mut commands_open = true;
    let mut next_turn_at: Option<Instant> = None;

    loop {
        match controller.phase() {
            TurnPhase::GameOver => break,
            TurnPhase::Finished(_) if controller.turn() >= TURN_COUNT => {
                controller.advance()?;
                continue;
            }
            TurnPhase::Finished(_) if next_turn_at.is_none() => {
                debug!("Next turn in {:?}", turn_gap);
                next_turn_at = Some(Instant::now() + turn_gap);
            }
            _ => {}
        }

        let tick_at = controller.clock().next_deadline();

        tokio::select! {
            _ = sleep_until(next_turn_at.unwrap_or_else(Instant::now)), if next_turn_at.is_some() => {
                next_turn_at = None;
                controller.advance()?;
            }

            _ = sleep_until(tick_at.unwrap_or_else(Instant::now)), if tick_at.is_some() => {
                while let Some(handle) = controller.clock().pop_due() {
                    controller.on_tick(handle);
                }
            }

            command = commands.recv(), if commands_open => {
                match command {
                    Some(PlayerCommand::Quit) => {
                        info!("Player quit during turn {}", controller.turn());
                        break;
                    }
                    Some(command) => apply_command(&mut controller, command),
                    None => {
                        debug!("Command channel closed, countdown continues");
                        commands_open = false;
                    }
                }
            }

            else => {
                warn!("Turn {} cannot progress without input, ending game", controller.turn());
                break;
            }
        }
    }

    Ok(controller.report())
}

fn apply_command(controller: &mut TurnController<TokioClock>, command: PlayerCommand) {
    debug!("Applying {:?}", command);
    let result = match command {
        PlayerCommand::Hint => controller.open_hint(),
        PlayerCommand::HintDone => {
            controller.close_hint();
            Ok(())
        }
        PlayerCommand::Answer { correct } => controller.record_answer(correct).map(|_| ()),
        PlayerCommand::Quit => Ok(()),
    };
    if let Err(e) = result {
        warn!("Command {:?} rejected: {}", command, e);
    }
}

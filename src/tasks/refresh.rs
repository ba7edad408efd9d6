//! Refresh loop: the one task that owns the simulator

use tokio::{
    sync::{mpsc, watch},
    time::{interval, Interval, MissedTickBehavior},
};
use tracing::{debug, info, warn};

use crate::{
    commands::{handle_command, Command},
    config::Cadences,
    presentation::{Reply, Snapshot},
    state::SimulatorState,
};

fn cadence(period: std::time::Duration) -> Interval {
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    ticker
}

/// Drive every panel on its cadence and apply user commands.
///
/// Runs until a `quit` command arrives or every command sender is dropped,
/// then hands the simulator back.
pub async fn refresh_task(
    mut state: SimulatorState,
    cadences: Cadences,
    mut commands: mpsc::Receiver<Command>,
    replies: mpsc::Sender<Reply>,
    frames: watch::Sender<Snapshot>,
) -> SimulatorState {
    info!("Starting refresh task");

    let mut stopwatch_ticker = cadence(cadences.stopwatch);
    let mut countdown_ticker = cadence(cadences.countdown);
    let mut clock_ticker = cadence(cadences.clock);
    let mut environment_ticker = cadence(cadences.environment);
    let mut sound_ticker = cadence(cadences.sound);

    loop {
        tokio::select! {
            // Stopwatch and wall clock are read from the clock when the frame is built.
            _ = stopwatch_ticker.tick() => {}
            _ = countdown_ticker.tick() => {
                let tick = state.tick_timer();
                if tick.just_completed {
                    info!("Countdown finished");
                }
            }
            _ = clock_ticker.tick() => {}
            _ = environment_ticker.tick() => {
                let reading = state.refresh_environment();
                debug!("Environment reading: {:?}", reading);
            }
            _ = sound_ticker.tick() => {
                let reading = state.refresh_sound();
                debug!("Sound reading: {:.1} dB", reading.decibels);
            }
            command = commands.recv() => {
                let Some(command) = command else {
                    info!("Command channel closed");
                    break;
                };
                let reply = handle_command(&mut state, command);
                if let Err(e) = replies.send(reply).await {
                    warn!("Failed to deliver reply: {}", e);
                }
                if command == Command::Quit {
                    info!("Quit requested");
                    publish(&frames, state.snapshot());
                    break;
                }
            }
        }

        publish(&frames, state.snapshot());
    }

    state
}

/// Publish a frame, waking watchers only when something visible changed
fn publish(frames: &watch::Sender<Snapshot>, snapshot: Snapshot) {
    frames.send_if_modified(|current| {
        if *current == snapshot {
            false
        } else {
            *current = snapshot;
            true
        }
    });
}

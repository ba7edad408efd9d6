//! Command handlers

use tracing::{info, warn};

use super::parser::{ChronoCommand, Command, TimerCommand, HELP};
use crate::{
    presentation::Reply,
    state::{SimulatorState, TimerPhase},
    utils::format_countdown,
};

/// Apply a command to the simulator and describe the result
pub fn handle_command(state: &mut SimulatorState, command: Command) -> Reply {
    match command {
        Command::Chrono(action) => chrono_handler(state, action),
        Command::Timer(action) => timer_handler(state, action),
        Command::ToggleClockFormat => {
            state.record_action("clock-toggle");
            let format = state.toggle_clock_format();
            Reply::ok(format!("Clock format: {:?}", format))
        }
        Command::Status => status_handler(state),
        Command::Help => Reply::ok(HELP),
        Command::Quit => Reply::ok("Bye"),
    }
}

fn chrono_handler(state: &mut SimulatorState, action: ChronoCommand) -> Reply {
    match action {
        ChronoCommand::Start => {
            state.record_action("chrono-start");
            state.chrono.start();
            info!("Stopwatch running");
            Reply::ok(format!("Stopwatch running at {}", state.chrono.display()))
        }
        ChronoCommand::Stop => {
            state.record_action("chrono-stop");
            state.chrono.stop();
            Reply::ok(format!("Stopwatch stopped at {}", state.chrono.display()))
        }
        ChronoCommand::Reset => {
            state.record_action("chrono-reset");
            state.chrono.reset();
            Reply::ok("Stopwatch reset")
        }
    }
}

fn timer_handler(state: &mut SimulatorState, action: TimerCommand) -> Reply {
    match action {
        TimerCommand::Set { minutes, seconds } => {
            state.record_action("timer-set");
            if state.timer.is_running() || state.timer.phase() == TimerPhase::Paused {
                return Reply::error("Reset the countdown before setting a new duration");
            }
            match state.timer.configure_parts(minutes, seconds) {
                Ok(()) => Reply::ok(format!(
                    "Countdown set to {}",
                    format_countdown(state.timer.duration_sec())
                )),
                Err(e) => {
                    warn!("Failed to configure countdown: {}", e);
                    Reply::error(e.to_string())
                }
            }
        }
        TimerCommand::Start => {
            state.record_action("timer-start");
            if state.timer.duration_sec() == 0 {
                return Reply::error("Set a duration first: timer set <min> <sec>");
            }
            state.timer.start();
            if state.timer.is_running() {
                Reply::ok(format!("Countdown running from {}", state.timer.display()))
            } else {
                Reply::error(format!("Countdown is {}", state.timer.status().label()))
            }
        }
        TimerCommand::Stop => {
            state.record_action("timer-stop");
            state.timer.stop();
            Reply::ok(format!("Countdown {} at {}", state.timer.status().label(), state.timer.display()))
        }
        TimerCommand::Reset => {
            state.record_action("timer-reset");
            state.timer.reset();
            Reply::ok("Countdown reset")
        }
    }
}

fn status_handler(state: &SimulatorState) -> Reply {
    let snapshot = state.snapshot();
    let mut message = format!(
        "clock {} | stopwatch {} | countdown {} ({})",
        snapshot.clock.time,
        snapshot.stopwatch.display,
        snapshot.countdown.display,
        snapshot.countdown.status_text
    );
    if let Some(env) = snapshot.environment {
        message.push_str(&format!(" | {}°C {}%", env.temperature_c, env.humidity_pct));
    }
    if let Some(sound) = snapshot.sound {
        message.push_str(&format!(" | {:.0} dB {}", sound.decibels, sound.level.label()));
    }
    if let Some(action) = state.last_action() {
        message.push_str(&format!(" | last: {}", action));
    }
    Reply::ok(message)
}

//! Text command grammar

use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}', try 'help'")]
    Unknown(String),
    #[error("'{command}' expects {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
    #[error("'{0}' is not a whole number")]
    BadNumber(String),
    #[error("unexpected trailing input '{0}'")]
    Trailing(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChronoCommand {
    Start,
    Stop,
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    Set { minutes: i64, seconds: i64 },
    Start,
    Stop,
    Reset,
}

/// A parsed user command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Chrono(ChronoCommand),
    Timer(TimerCommand),
    ToggleClockFormat,
    Status,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  chrono start|stop|reset    stopwatch controls (alias: sw)
  timer set <min> <sec>      configure the countdown (fields clamp to 0-59)
  timer start|stop|reset     countdown controls
  clock toggle               switch between 24h and 12h
  status                     print every panel
  help                       this text
  quit                       exit (alias: exit)";

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let lowered = line.trim().to_lowercase();
        let mut words = lowered.split_whitespace();
        let head = words.next().ok_or(CommandError::Empty)?;

        let command = match head {
            "chrono" | "sw" => {
                let action = words.next().ok_or(CommandError::MissingArgument {
                    command: "chrono",
                    expected: "start, stop or reset",
                })?;
                Command::Chrono(match action {
                    "start" => ChronoCommand::Start,
                    "stop" => ChronoCommand::Stop,
                    "reset" => ChronoCommand::Reset,
                    other => return Err(CommandError::Unknown(format!("chrono {}", other))),
                })
            }
            "timer" => {
                let action = words.next().ok_or(CommandError::MissingArgument {
                    command: "timer",
                    expected: "set, start, stop or reset",
                })?;
                Command::Timer(match action {
                    "set" => {
                        let minutes = number(words.next(), "<min> <sec>")?;
                        let seconds = number(words.next(), "<min> <sec>")?;
                        TimerCommand::Set { minutes, seconds }
                    }
                    "start" => TimerCommand::Start,
                    "stop" => TimerCommand::Stop,
                    "reset" => TimerCommand::Reset,
                    other => return Err(CommandError::Unknown(format!("timer {}", other))),
                })
            }
            "clock" => match words.next() {
                Some("toggle") => Command::ToggleClockFormat,
                Some(other) => return Err(CommandError::Unknown(format!("clock {}", other))),
                None => {
                    return Err(CommandError::MissingArgument {
                        command: "clock",
                        expected: "toggle",
                    })
                }
            },
            "status" => Command::Status,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        let rest: Vec<&str> = words.collect();
        if !rest.is_empty() {
            return Err(CommandError::Trailing(rest.join(" ")));
        }
        Ok(command)
    }
}

fn number(word: Option<&str>, expected: &'static str) -> Result<i64, CommandError> {
    let word = word.ok_or(CommandError::MissingArgument {
        command: "timer set",
        expected,
    })?;
    word.parse()
        .map_err(|_| CommandError::BadNumber(word.to_string()))
}

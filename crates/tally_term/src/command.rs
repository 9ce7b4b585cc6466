//! Line commands read from stdin.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Pause,
    Stop,
    Reset,
    /// Raw text for the target field, validated by the session.
    Target(String),
    /// Raw text for the speed field, validated by the session.
    Fps(String),
    Status,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),
    #[error("'{0}' needs a value")]
    MissingArg(&'static str),
    #[error("'{0}' takes a single value")]
    ExtraArgs(&'static str),
}

pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        return Err(CommandError::Empty);
    };
    let rest: Vec<&str> = parts.collect();
    let arg = |name: &'static str| -> Result<String, CommandError> {
        match rest.as_slice() {
            [] => Err(CommandError::MissingArg(name)),
            [value] => Ok(value.to_string()),
            _ => Err(CommandError::ExtraArgs(name)),
        }
    };

    match head.to_ascii_lowercase().as_str() {
        "go" | "start" | "s" => Ok(Command::Start),
        "pause" | "wait" | "p" => Ok(Command::Pause),
        "stop" => Ok(Command::Stop),
        "reset" | "again" | "r" => Ok(Command::Reset),
        "target" | "to" | "t" => Ok(Command::Target(arg("target")?)),
        "fps" | "speed" | "f" => Ok(Command::Fps(arg("fps")?)),
        "status" | "?" => Ok(Command::Status),
        "help" | "h" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

pub const HELP: &str = "\
Commands:
  go | start            Start counting (resumes after pause)
  pause | wait          Pause, keeping the count
  stop                  Stop; next start begins at 0
  reset | again         Back to 0
  target <N>            Set the number to count to (commas ok)
  fps <1-120>           Set counting speed
  status                Show current state
  quit                  Exit";

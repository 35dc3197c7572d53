//! Argument dispatcher for the `tnote` binary.
//!
//! # Invariants
//! - A first argument starting with `-` is always a flag; unknown flags are
//!   errors and never become note text.
//! - Parsing has no side effects.

use std::error::Error;
use std::ffi::OsString;
use std::fmt::{Display, Formatter};

pub const USAGE: &str = "tnote - Simple Terminal Note Taking App

Usage:
  tnote <text>               Create new note with given text
  tnote -n<lines> <text>     Create note with terminal context (not implemented)
  tnote -v                   View all notes
  tnote -d <id>              Delete note with specified ID
  tnote -help                Show this help message

Examples:
  tnote Remember to fix the bug
  tnote -n5 Capture last 5 commands (not implemented)
  tnote -v
  tnote -d 2";

/// One parsed invocation.
///
/// Note bodies are raw argument bytes so non-UTF-8 text is stored unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Create { message: Vec<u8> },
    Capture { lines: u64, message: Vec<u8> },
    View,
    Delete { id: String },
    Help,
}

impl Command {
    /// Whether the command writes notes and therefore needs the storage
    /// directory to exist first.
    pub fn needs_storage(&self) -> bool {
        matches!(self, Self::Create { .. } | Self::Capture { .. })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Create { .. } => "create",
            Self::Capture { .. } => "capture",
            Self::View => "view",
            Self::Delete { .. } => "delete",
            Self::Help => "help",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    InvalidCommand(String),
    MissingNoteId,
    MissingCaptureText,
    InvalidLineCount(String),
}

impl CommandError {
    /// The argument that was rejected, when there is one.
    pub fn offending_arg(&self) -> Option<&str> {
        match self {
            Self::InvalidCommand(arg) | Self::InvalidLineCount(arg) => Some(arg.as_str()),
            Self::MissingNoteId | Self::MissingCaptureText => None,
        }
    }
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCommand(_) => write!(f, "Invalid command. Use 'tnote -help' for usage"),
            Self::MissingNoteId => write!(f, "Please specify note ID to delete"),
            Self::MissingCaptureText => write!(f, "Please specify line count and text"),
            Self::InvalidLineCount(_) => {
                write!(f, "Invalid line count. Use -n<number> where number >= 1")
            }
        }
    }
}

impl Error for CommandError {}

/// Parses process arguments, excluding the program name.
///
/// Flags are matched on UTF-8 text; a first argument that is not valid
/// UTF-8 is a flag only when it starts with `-`.
pub fn parse_args(args: &[OsString]) -> Result<Command, CommandError> {
    let Some(first) = args.first() else {
        return Ok(Command::Help);
    };
    let flag = first.to_string_lossy();

    match flag.as_ref() {
        "-v" | "-view" => Ok(Command::View),
        "-d" | "-delete" => args
            .get(1)
            .map(|id| Command::Delete {
                id: id.to_string_lossy().into_owned(),
            })
            .ok_or(CommandError::MissingNoteId),
        "-help" | "-h" => Ok(Command::Help),
        flag if flag.starts_with("-n") => parse_capture(flag, &args[1..]),
        flag if flag.starts_with('-') => Err(CommandError::InvalidCommand(flag.to_string())),
        _ => Ok(Command::Create {
            message: join_bytes(args),
        }),
    }
}

fn parse_capture(flag: &str, rest: &[OsString]) -> Result<Command, CommandError> {
    if rest.is_empty() {
        return Err(CommandError::MissingCaptureText);
    }

    let raw = &flag["-n".len()..];
    let lines = match raw.parse::<u64>() {
        Ok(lines) if lines >= 1 => lines,
        _ => return Err(CommandError::InvalidLineCount(raw.to_string())),
    };

    Ok(Command::Capture {
        lines,
        message: join_bytes(rest),
    })
}

/// Space-joins arguments without any encoding conversion.
fn join_bytes(args: &[OsString]) -> Vec<u8> {
    args.iter()
        .map(|arg| arg.as_encoded_bytes())
        .collect::<Vec<_>>()
        .join(&b' ')
}

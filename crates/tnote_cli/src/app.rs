//! Command execution against a notebook.
//!
//! # Responsibility
//! - Run one parsed command and print its user-facing result.
//! - Map core error kinds to process outcomes.
//!
//! # Invariants
//! - Storage setup failure stops execution before any command runs.
//! - A missing storage directory is informational, not a failure.

use crate::command::{Command, USAGE};
use log::{error, info};
use std::io::{self, Write};
use std::process::ExitCode;
use tnote_core::{
    capture_body, render_listing, unsupported_notice, Clock, ErrorKind, Notebook, NotebookError,
    CAPTURE_PREFIX,
};

/// Result of one invocation, mapped to the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// Bad flag, id, or line count.
    UsageError,
    /// Storage setup or note I/O failed.
    Failed,
}

impl Outcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Self::Success => ExitCode::SUCCESS,
            Self::Failed => ExitCode::from(1),
            Self::UsageError => ExitCode::from(2),
        }
    }

    fn from_error(err: &NotebookError) -> Self {
        match err.kind() {
            ErrorKind::NotFound => Self::Success,
            ErrorKind::InvalidArgument => Self::UsageError,
            ErrorKind::SetupFailed | ErrorKind::IoFailure => Self::Failed,
        }
    }
}

/// Executes `command`, writing results to `out` and failures to `err`.
pub fn execute<C: Clock>(
    command: &Command,
    book: &Notebook<C>,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<Outcome> {
    if command.needs_storage() {
        if let Err(setup_err) = book.ensure_storage() {
            error!(
                "event=storage_setup module=cli status=error error_code={} error={}",
                setup_err.kind().as_str(),
                setup_err
            );
            writeln!(err, "{setup_err}")?;
            return Ok(Outcome::Failed);
        }
    }

    info!("event=command module=cli status=start command={}", command.name());
    let result = match command {
        Command::Help => {
            writeln!(out, "{USAGE}")?;
            return Ok(Outcome::Success);
        }
        Command::Create { message } => book
            .write_note(message, "")
            .map(|path| format!("Note saved: {}", path.display())),
        Command::Capture { lines, message } => {
            writeln!(out, "{}", unsupported_notice(*lines))?;
            book.write_note(&capture_body(message, *lines), CAPTURE_PREFIX)
                .map(|path| format!("Note saved: {}", path.display()))
        }
        Command::View => book.list_notes().map(|notes| {
            let rendered = render_listing(&notes);
            rendered.trim_end_matches('\n').to_string()
        }),
        Command::Delete { id } => book
            .delete_note(id)
            .map(|name| format!("Deleted note: {name}")),
    };

    match result {
        Ok(message) => {
            writeln!(out, "{message}")?;
            Ok(Outcome::Success)
        }
        Err(note_err) => {
            let outcome = Outcome::from_error(&note_err);
            if outcome == Outcome::Success {
                writeln!(out, "{note_err}")?;
            } else {
                writeln!(err, "{note_err}")?;
            }
            info!(
                "event=command module=cli status=error command={} error_code={}",
                command.name(),
                note_err.kind().as_str()
            );
            Ok(outcome)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{execute, Outcome};
    use crate::command::{Command, USAGE};
    use chrono::NaiveDate;
    use std::path::Path;
    use tnote_core::{FixedClock, Notebook, NotebookConfig};

    struct Run {
        outcome: Outcome,
        out: String,
        err: String,
    }

    fn run(command: Command, base: &Path, clock: &FixedClock) -> Run {
        let book = Notebook::with_clock(NotebookConfig::in_dir(base), clock);
        let mut out = Vec::new();
        let mut err = Vec::new();
        let outcome = execute(&command, &book, &mut out, &mut err).unwrap();
        Run {
            outcome,
            out: String::from_utf8(out).unwrap(),
            err: String::from_utf8(err).unwrap(),
        }
    }

    fn clock() -> FixedClock {
        FixedClock::new(
            NaiveDate::from_ymd_opt(2025, 11, 2)
                .and_then(|d| d.and_hms_opt(18, 4, 5))
                .unwrap(),
        )
    }

    #[test]
    fn create_then_view_prints_note() {
        let tmp = tempfile::tempdir().unwrap();
        let clock = clock();

        let created = run(
            Command::Create {
                message: b"hello".to_vec(),
            },
            tmp.path(),
            &clock,
        );
        assert_eq!(created.outcome, Outcome::Success);
        assert!(created.out.starts_with("Note saved: "));
        assert!(created.out.trim_end().ends_with("2025-11-02_18-04-05"));

        let viewed = run(Command::View, tmp.path(), &clock);
        assert_eq!(viewed.outcome, Outcome::Success);
        assert!(viewed.out.starts_with("Your tnotes:\n"));
        assert!(viewed.out.contains("[1] 2025-11-02_18-04-05\nhello\n"));
    }

    #[test]
    fn view_without_storage_reports_no_notes_and_creates_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let viewed = run(Command::View, tmp.path(), &clock());

        assert_eq!(viewed.outcome, Outcome::Success);
        assert!(viewed.out.starts_with("No notes found (dir: "));
        assert!(!tmp.path().join(".tnotes").exists());
    }

    #[test]
    fn view_of_empty_storage_reports_no_notes() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::create_dir(tmp.path().join(".tnotes")).unwrap();
        let viewed = run(Command::View, tmp.path(), &clock());
        assert_eq!(viewed.out, "No notes found\n");
    }

    #[test]
    fn invalid_delete_id_is_usage_error() {
        let tmp = tempfile::tempdir().unwrap();
        let clock = clock();
        run(
            Command::Create {
                message: b"keep".to_vec(),
            },
            tmp.path(),
            &clock,
        );

        let deleted = run(
            Command::Delete {
                id: "7".to_string(),
            },
            tmp.path(),
            &clock,
        );
        assert_eq!(deleted.outcome, Outcome::UsageError);
        assert_eq!(deleted.err, "Invalid note ID\n");
        assert_eq!(std::fs::read_dir(tmp.path().join(".tnotes")).unwrap().count(), 1);
    }

    #[test]
    fn delete_reports_removed_name() {
        let tmp = tempfile::tempdir().unwrap();
        let clock = clock();
        run(
            Command::Create {
                message: b"gone".to_vec(),
            },
            tmp.path(),
            &clock,
        );

        let deleted = run(
            Command::Delete {
                id: "1".to_string(),
            },
            tmp.path(),
            &clock,
        );
        assert_eq!(deleted.outcome, Outcome::Success);
        assert_eq!(deleted.out, "Deleted note: 2025-11-02_18-04-05\n");
    }

    #[test]
    fn capture_prints_notice_and_stores_placeholder() {
        let tmp = tempfile::tempdir().unwrap();
        let clock = clock();
        let captured = run(
            Command::Capture {
                lines: 3,
                message: b"hello".to_vec(),
            },
            tmp.path(),
            &clock,
        );
        assert_eq!(captured.outcome, Outcome::Success);
        assert!(captured
            .out
            .starts_with("terminal history capture not implemented yet, couldn't get 3 lines\n"));

        let stored = std::fs::read_to_string(
            tmp.path()
                .join(".tnotes")
                .join("term_2025-11-02_18-04-05"),
        )
        .unwrap();
        assert!(stored.starts_with("hello\n\nTerminal context:\n[Terminal history capture"));
    }

    #[test]
    fn setup_failure_is_fatal_for_write_commands() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join(".tnotes"), "blocking file").unwrap();
        let created = run(
            Command::Create {
                message: b"lost".to_vec(),
            },
            tmp.path(),
            &clock(),
        );
        assert_eq!(created.outcome, Outcome::Failed);
        assert!(created.err.starts_with("Error creating notes dir:"));
        assert!(created.out.is_empty());
    }

    #[test]
    fn help_prints_usage() {
        let tmp = tempfile::tempdir().unwrap();
        let help = run(Command::Help, tmp.path(), &clock());
        assert_eq!(help.outcome, Outcome::Success);
        assert_eq!(help.out, format!("{USAGE}\n"));
    }
}

//! `tnote` command-line entry point.
//!
//! # Responsibility
//! - Initialize logging from the environment.
//! - Parse arguments, run one command against `./.tnotes`, and exit.
//!
//! # Environment
//! - `TNOTE_LOG`: log level (`trace|debug|info|warn|error`).
//! - `TNOTE_LOG_DIR`: absolute directory for rotating log files; stderr
//!   is used when unset.

mod app;
mod command;

use command::parse_args;
use std::io;
use std::process::ExitCode;
use tnote_core::{default_log_level, init_logging, Notebook, NotebookConfig};

const LOG_LEVEL_ENV: &str = "TNOTE_LOG";
const LOG_DIR_ENV: &str = "TNOTE_LOG_DIR";
const STDERR_LOG_LEVEL: &str = "warn";

fn main() -> ExitCode {
    setup_logging();

    let args = std::env::args_os().skip(1).collect::<Vec<_>>();
    let command = match parse_args(&args) {
        Ok(command) => command,
        Err(err) => {
            log::debug!(
                "event=parse_args module=cli status=error arg={}",
                err.offending_arg().unwrap_or("-")
            );
            eprintln!("{err}");
            return app::Outcome::UsageError.exit_code();
        }
    };

    let book = Notebook::new(NotebookConfig::working_dir());
    match app::execute(&command, &book, &mut io::stdout().lock(), &mut io::stderr()) {
        Ok(outcome) => outcome.exit_code(),
        Err(err) => {
            eprintln!("failed to write output: {err}");
            app::Outcome::Failed.exit_code()
        }
    }
}

fn setup_logging() {
    let (level, log_dir) = resolve_log_settings(
        std::env::var(LOG_LEVEL_ENV).ok(),
        std::env::var(LOG_DIR_ENV).ok(),
    );
    if let Err(err) = init_logging(&level, log_dir.as_deref()) {
        eprintln!("tnote: logging disabled: {err}");
    }
}

/// Picks the log level and optional log directory from environment values.
///
/// Stderr shares the terminal with note output, so it defaults to `warn`;
/// file logging defaults to the build-mode level.
fn resolve_log_settings(
    level: Option<String>,
    log_dir: Option<String>,
) -> (String, Option<String>) {
    let log_dir = log_dir.filter(|dir| !dir.trim().is_empty());
    let fallback_level = if log_dir.is_some() {
        default_log_level()
    } else {
        STDERR_LOG_LEVEL
    };
    let level = level
        .filter(|level| !level.trim().is_empty())
        .unwrap_or_else(|| fallback_level.to_string());
    (level, log_dir)
}

#[cfg(test)]
mod tests {
    use super::resolve_log_settings;
    use tnote_core::default_log_level;

    #[test]
    fn stderr_logging_defaults_to_warn() {
        assert_eq!(resolve_log_settings(None, None), ("warn".to_string(), None));
        assert_eq!(
            resolve_log_settings(None, Some("  ".to_string())),
            ("warn".to_string(), None)
        );
    }

    #[test]
    fn file_logging_defaults_to_build_mode_level() {
        let (level, dir) = resolve_log_settings(None, Some("/var/log/tnote".to_string()));
        assert_eq!(level, default_log_level());
        assert_eq!(dir.as_deref(), Some("/var/log/tnote"));
    }

    #[test]
    fn explicit_level_wins() {
        let (level, _) = resolve_log_settings(Some("trace".to_string()), None);
        assert_eq!(level, "trace");
    }
}

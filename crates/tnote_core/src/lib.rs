//! Core note storage for tnote.
//! This crate is the single source of truth for storage invariants.

pub mod capture;
pub mod clock;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod notebook;
pub mod platform;
pub mod render;

pub use capture::{capture_body, history_placeholder, unsupported_notice, CAPTURE_PREFIX};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{CollisionPolicy, NotebookConfig, NOTES_DIR_NAME};
pub use error::{ErrorKind, NoteOp, NotebookError, NotebookResult};
pub use logging::{default_log_level, init_logging, logging_status, LogTarget};
pub use model::note::{Note, NoteName, TIMESTAMP_FORMAT};
pub use notebook::{parse_note_id, Notebook};
pub use platform::{default_hider, AttribHider, DirectoryHider, NoopHider};
pub use render::{render_listing, render_note};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}

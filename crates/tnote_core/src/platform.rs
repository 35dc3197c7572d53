//! Platform capability for hiding the storage directory.
//!
//! # Responsibility
//! - Mark the storage directory hidden where a leading dot is not enough.
//! - Keep platform branching out of notebook logic.
//!
//! # Invariants
//! - The hider is chosen once per process by `default_hider`.
//! - Hiding failures are reported to the caller, never panicked on.

use std::io;
use std::path::Path;
use std::sync::Arc;

/// Marks a directory hidden on platforms that need an explicit flag.
pub trait DirectoryHider: Send + Sync {
    /// Short identifier used in log events.
    fn name(&self) -> &'static str;
    fn hide(&self, dir: &Path) -> io::Result<()>;
}

/// Dot-prefixed directories are already hidden (Unix-like systems).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHider;

impl DirectoryHider for NoopHider {
    fn name(&self) -> &'static str {
        "noop"
    }

    fn hide(&self, _dir: &Path) -> io::Result<()> {
        Ok(())
    }
}

/// Sets the Windows hidden attribute through `attrib +h`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AttribHider;

impl DirectoryHider for AttribHider {
    fn name(&self) -> &'static str {
        "attrib"
    }

    fn hide(&self, dir: &Path) -> io::Result<()> {
        let status = std::process::Command::new("attrib")
            .arg("+h")
            .arg(dir)
            .status()?;
        if status.success() {
            Ok(())
        } else {
            Err(io::Error::new(
                io::ErrorKind::Other,
                format!("attrib exited with {status}"),
            ))
        }
    }
}

/// Returns the hider for the host platform.
pub fn default_hider() -> Arc<dyn DirectoryHider> {
    if cfg!(windows) {
        Arc::new(AttribHider)
    } else {
        Arc::new(NoopHider)
    }
}

#[cfg(test)]
mod tests {
    use super::{default_hider, DirectoryHider, NoopHider};
    use std::path::Path;

    #[test]
    fn noop_hider_always_succeeds() {
        NoopHider
            .hide(Path::new("does-not-exist"))
            .expect("noop hide should succeed");
    }

    #[cfg(not(windows))]
    #[test]
    fn default_hider_is_noop_outside_windows() {
        assert_eq!(default_hider().name(), "noop");
    }
}

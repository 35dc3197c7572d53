//! Notebook configuration resolved once per process.
//!
//! # Responsibility
//! - Carry the storage location and write policy into `Notebook::new`.
//!
//! # Invariants
//! - Core code never reads the working directory on its own; the root is
//!   always passed in through this value.

use crate::platform::{default_hider, DirectoryHider};
use std::fmt::{Debug, Formatter};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Name of the hidden storage directory.
pub const NOTES_DIR_NAME: &str = ".tnotes";

/// Behavior when a new note name already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionPolicy {
    /// Replace the existing file; the earlier note is lost.
    Overwrite,
    /// Append `_02`, `_03`, ... and create the file exclusively.
    #[default]
    Suffix,
}

#[derive(Clone)]
pub struct NotebookConfig {
    /// Directory holding one file per note.
    pub notes_dir: PathBuf,
    pub collision: CollisionPolicy,
    pub hider: Arc<dyn DirectoryHider>,
}

impl NotebookConfig {
    /// Stores notes in `<base>/.tnotes` with platform defaults.
    pub fn in_dir(base: impl AsRef<Path>) -> Self {
        Self {
            notes_dir: base.as_ref().join(NOTES_DIR_NAME),
            collision: CollisionPolicy::default(),
            hider: default_hider(),
        }
    }

    /// Relative `.tnotes`, resolved against the process working directory.
    pub fn working_dir() -> Self {
        Self {
            notes_dir: PathBuf::from(NOTES_DIR_NAME),
            collision: CollisionPolicy::default(),
            hider: default_hider(),
        }
    }

    pub fn with_collision(mut self, collision: CollisionPolicy) -> Self {
        self.collision = collision;
        self
    }

    pub fn with_hider(mut self, hider: Arc<dyn DirectoryHider>) -> Self {
        self.hider = hider;
        self
    }
}

impl Debug for NotebookConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotebookConfig")
            .field("notes_dir", &self.notes_dir)
            .field("collision", &self.collision)
            .field("hider", &self.hider.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{CollisionPolicy, NotebookConfig, NOTES_DIR_NAME};
    use std::path::Path;

    #[test]
    fn working_dir_config_uses_relative_hidden_dir() {
        let config = NotebookConfig::working_dir();
        assert_eq!(config.notes_dir, Path::new(NOTES_DIR_NAME));
        assert_eq!(config.collision, CollisionPolicy::Suffix);
    }

    #[test]
    fn in_dir_joins_hidden_dir_under_base() {
        let config = NotebookConfig::in_dir("/tmp/base").with_collision(CollisionPolicy::Overwrite);
        assert_eq!(config.notes_dir, Path::new("/tmp/base/.tnotes"));
        assert_eq!(config.collision, CollisionPolicy::Overwrite);
    }
}

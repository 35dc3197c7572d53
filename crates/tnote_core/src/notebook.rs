//! Notebook use-cases over the storage directory.
//!
//! # Responsibility
//! - Create the storage directory and mark it hidden.
//! - Write, list and delete note files.
//!
//! # Invariants
//! - Listing order is byte-wise ascending by file name. With timestamp names
//!   this is creation order.
//! - Listing and deleting never create the storage directory.
//! - Positions are recomputed from a fresh listing on every call. A change to
//!   the directory between a listing and a delete shifts positions, so the
//!   same position may then name a different note.
//! - Log events carry names and sizes only, never note content.

use crate::clock::{Clock, SystemClock};
use crate::config::{CollisionPolicy, NotebookConfig};
use crate::error::{NoteOp, NotebookError, NotebookResult};
use crate::model::note::{Note, NoteName, FIRST_SEQUENCE, MAX_SEQUENCE};
use log::{debug, info, warn};
use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Note storage bound to one directory and one clock.
pub struct Notebook<C: Clock = SystemClock> {
    config: NotebookConfig,
    clock: C,
}

impl Notebook<SystemClock> {
    pub fn new(config: NotebookConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> Notebook<C> {
    pub fn with_clock(config: NotebookConfig, clock: C) -> Self {
        Self { config, clock }
    }

    pub fn notes_dir(&self) -> &Path {
        &self.config.notes_dir
    }

    /// Creates the storage directory (and parents) if absent.
    ///
    /// Calling this on an existing directory changes nothing.
    ///
    /// # Errors
    /// - `SetupFailed` when the directory cannot be created. Callers should
    ///   treat this as fatal.
    ///
    /// A failure to mark the directory hidden is logged and ignored.
    pub fn ensure_storage(&self) -> NotebookResult<()> {
        let dir = self.notes_dir();
        fs::create_dir_all(dir).map_err(|source| NotebookError::SetupFailed {
            path: dir.to_path_buf(),
            source,
        })?;

        if let Err(err) = self.config.hider.hide(dir) {
            warn!(
                "event=storage_hide module=notebook status=error hider={} error={}",
                self.config.hider.name(),
                err
            );
        }
        debug!(
            "event=storage_ready module=notebook status=ok dir={}",
            dir.display()
        );
        Ok(())
    }

    /// Stores the `message` bytes verbatim in a new file named `prefix` +
    /// timestamp. No encoding conversion or trailing newline is applied.
    ///
    /// Returns the path of the stored note. The storage directory must
    /// already exist (see `ensure_storage`).
    ///
    /// # Errors
    /// - `Io { op: Create }` when the file cannot be created, including when
    ///   every suffix for the current second is taken.
    /// - `Io { op: Write }` when writing the content fails.
    pub fn write_note(
        &self,
        message: impl AsRef<[u8]>,
        prefix: &str,
    ) -> NotebookResult<PathBuf> {
        let message = message.as_ref();
        let base = NoteName::new(prefix, self.clock.now());
        let (path, mut file) = match self.config.collision {
            CollisionPolicy::Overwrite => {
                let path = self.notes_dir().join(base.to_string());
                let file = File::create(&path).map_err(|source| NotebookError::Io {
                    op: NoteOp::Create,
                    path: path.clone(),
                    source,
                })?;
                (path, file)
            }
            CollisionPolicy::Suffix => self.create_unique(&base)?,
        };

        file.write_all(message)
            .and_then(|()| file.flush())
            .map_err(|source| NotebookError::Io {
                op: NoteOp::Write,
                path: path.clone(),
                source,
            })?;

        info!(
            "event=note_write module=notebook status=ok path={} bytes={}",
            path.display(),
            message.len()
        );
        Ok(path)
    }

    /// Reads every entry of the storage directory in listing order.
    ///
    /// A file whose content cannot be read is listed with empty content.
    ///
    /// # Errors
    /// - `NotFound` when the directory is missing or unreadable.
    pub fn list_notes(&self) -> NotebookResult<Vec<Note>> {
        let names = self.entry_names()?;
        let notes = names
            .into_iter()
            .enumerate()
            .map(|(index, name)| {
                let path = self.notes_dir().join(&name);
                let content = match fs::read(&path) {
                    Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
                    Err(err) => {
                        debug!(
                            "event=note_read module=notebook status=error path={} error={}",
                            path.display(),
                            err
                        );
                        String::new()
                    }
                };
                let name = name.to_string_lossy().into_owned();
                Note {
                    position: index + 1,
                    parsed: NoteName::parse(&name),
                    name,
                    content,
                }
            })
            .collect::<Vec<_>>();

        debug!(
            "event=note_list module=notebook status=ok count={}",
            notes.len()
        );
        Ok(notes)
    }

    /// Deletes the note at 1-based position `id` of a fresh listing.
    ///
    /// Returns the deleted file name.
    ///
    /// # Errors
    /// - `NotFound` when the directory is missing or unreadable.
    /// - `InvalidArgument` when `id` is not an integer in `1..=count`.
    /// - `Io { op: Delete }` when removal fails.
    pub fn delete_note(&self, id: &str) -> NotebookResult<String> {
        let names = self.entry_names()?;
        let position = parse_note_id(id, names.len())?;
        let name = &names[position - 1];
        self.remove_entry(name)?;
        Ok(name.to_string_lossy().into_owned())
    }

    /// Deletes a note by its file name.
    ///
    /// # Errors
    /// - `InvalidArgument` when `name` is not a plain file name.
    /// - `Io { op: Delete }` when removal fails, including a missing note.
    pub fn delete_by_name(&self, name: &str) -> NotebookResult<()> {
        let is_plain = !name.is_empty()
            && name != "."
            && name != ".."
            && !name.contains(['/', '\\']);
        if !is_plain {
            return Err(NotebookError::InvalidArgument(format!(
                "invalid note name: `{name}`"
            )));
        }
        self.remove_entry(&OsString::from(name))
    }

    fn entry_names(&self) -> NotebookResult<Vec<OsString>> {
        let dir = self.notes_dir();
        let not_found = |err: io::Error| {
            debug!(
                "event=storage_read module=notebook status=error dir={} error={}",
                dir.display(),
                err
            );
            NotebookError::NotFound {
                path: dir.to_path_buf(),
            }
        };

        let mut names = fs::read_dir(dir)
            .map_err(not_found)?
            .map(|entry| entry.map(|entry| entry.file_name()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(not_found)?;
        names.sort();
        Ok(names)
    }

    fn remove_entry(&self, name: &OsString) -> NotebookResult<()> {
        let path = self.notes_dir().join(name);
        fs::remove_file(&path).map_err(|source| NotebookError::Io {
            op: NoteOp::Delete,
            path: path.clone(),
            source,
        })?;
        info!(
            "event=note_delete module=notebook status=ok path={}",
            path.display()
        );
        Ok(())
    }

    fn create_unique(&self, base: &NoteName) -> NotebookResult<(PathBuf, File)> {
        let candidates = std::iter::once(base.clone())
            .chain((FIRST_SEQUENCE..=MAX_SEQUENCE).map(|seq| base.with_sequence(seq)));

        for candidate in candidates {
            let path = self.notes_dir().join(candidate.to_string());
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => return Ok((path, file)),
                Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
                    debug!(
                        "event=note_name_taken module=notebook status=retry path={}",
                        path.display()
                    );
                }
                Err(source) => {
                    return Err(NotebookError::Io {
                        op: NoteOp::Create,
                        path,
                        source,
                    })
                }
            }
        }

        Err(NotebookError::Io {
            op: NoteOp::Create,
            path: self.notes_dir().join(base.to_string()),
            source: io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("more than {MAX_SEQUENCE} notes in one second"),
            ),
        })
    }
}

/// Parses a 1-based note position and checks it against `count`.
///
/// Surrounding whitespace is ignored; anything else that is not a plain
/// integer is rejected.
pub fn parse_note_id(id: &str, count: usize) -> NotebookResult<usize> {
    match id.trim().parse::<usize>() {
        Ok(position) if (1..=count).contains(&position) => Ok(position),
        _ => Err(NotebookError::InvalidArgument("Invalid note ID".to_string())),
    }
}

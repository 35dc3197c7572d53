//! Domain model for stored notes.
//!
//! # Invariants
//! - A note is identified by its file name, not by its listing position.

pub mod note;

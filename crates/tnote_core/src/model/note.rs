//! Note domain model.
//!
//! # Responsibility
//! - Define the listing record (`Note`) shown to users.
//! - Build and parse timestamp-derived file names (`NoteName`).
//!
//! # Invariants
//! - The file name is the persisted key of a note; `position` is derived
//!   from a fresh listing and never stored.
//! - Formatting a `NoteName` and parsing it back yields the same parts.
//! - Names that do not follow the pattern are still valid notes, just
//!   without parsed metadata.

use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::{Display, Formatter};

/// Second-resolution timestamp layout used in note file names.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Smallest sequence number written as a disambiguation suffix.
pub const FIRST_SEQUENCE: u8 = 2;
/// Largest sequence number; a second with more notes is rejected.
pub const MAX_SEQUENCE: u8 = 99;

static NOTE_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<prefix>.*?)(?P<ts>\d{4}-\d{2}-\d{2}_\d{2}-\d{2}-\d{2})(?:_(?P<seq>\d{2}))?$")
        .expect("valid note name regex")
});

/// Structured form of a note file name: `<prefix><timestamp>[_NN]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteName {
    pub prefix: String,
    pub timestamp: NaiveDateTime,
    /// `None` for the first note of a second.
    pub sequence: Option<u8>,
}

impl NoteName {
    pub fn new(prefix: impl Into<String>, timestamp: NaiveDateTime) -> Self {
        Self {
            prefix: prefix.into(),
            timestamp,
            sequence: None,
        }
    }

    /// Returns the same name with a disambiguation suffix.
    pub fn with_sequence(&self, sequence: u8) -> Self {
        Self {
            sequence: Some(sequence),
            ..self.clone()
        }
    }

    /// Parses a file name. Returns `None` when it does not follow the
    /// timestamp pattern.
    pub fn parse(file_name: &str) -> Option<Self> {
        let caps = NOTE_NAME_RE.captures(file_name)?;
        let timestamp =
            NaiveDateTime::parse_from_str(caps.name("ts")?.as_str(), TIMESTAMP_FORMAT).ok()?;
        let sequence = match caps.name("seq") {
            Some(m) => Some(m.as_str().parse::<u8>().ok()?),
            None => None,
        };
        Some(Self {
            prefix: caps.name("prefix")?.as_str().to_string(),
            timestamp,
            sequence,
        })
    }
}

impl Display for NoteName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}",
            self.prefix,
            self.timestamp.format(TIMESTAMP_FORMAT)
        )?;
        if let Some(sequence) = self.sequence {
            write!(f, "_{sequence:02}")?;
        }
        Ok(())
    }
}

/// One entry of a freshly computed listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    /// 1-based position in sorted-name order.
    pub position: usize,
    /// File name inside the storage directory.
    pub name: String,
    /// Parsed name parts when the file name follows the pattern.
    pub parsed: Option<NoteName>,
    /// Raw file content; empty when the file could not be read.
    pub content: String,
}

impl Note {
    pub fn prefix(&self) -> Option<&str> {
        self.parsed.as_ref().map(|name| name.prefix.as_str())
    }

    pub fn created_at(&self) -> Option<NaiveDateTime> {
        self.parsed.as_ref().map(|name| name.timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::NoteName;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 5)
            .and_then(|d| d.and_hms_opt(h, m, s))
            .expect("valid datetime")
    }

    #[test]
    fn formats_prefix_and_timestamp() {
        let name = NoteName::new("term_", at(7, 8, 9));
        assert_eq!(name.to_string(), "term_2024-01-05_07-08-09");
        assert_eq!(name.with_sequence(3).to_string(), "term_2024-01-05_07-08-09_03");
    }

    #[test]
    fn parses_plain_and_prefixed_names() {
        let plain = NoteName::parse("2024-01-05_07-08-09").expect("plain name parses");
        assert_eq!(plain.prefix, "");
        assert_eq!(plain.timestamp, at(7, 8, 9));
        assert_eq!(plain.sequence, None);

        let prefixed = NoteName::parse("term_2024-01-05_07-08-09_12").expect("prefixed parses");
        assert_eq!(prefixed.prefix, "term_");
        assert_eq!(prefixed.sequence, Some(12));
    }

    #[test]
    fn rejects_names_without_valid_timestamp() {
        assert!(NoteName::parse("notes.txt").is_none());
        assert!(NoteName::parse("2024-13-45_99-00-00").is_none());
    }
}

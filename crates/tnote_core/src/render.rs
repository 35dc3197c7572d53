//! Plain-text rendering for note listings.

use crate::model::note::Note;

const RULE_WIDTH: usize = 50;

/// Renders the full listing shown by the view command.
///
/// An empty slice renders the empty-directory message.
pub fn render_listing(notes: &[Note]) -> String {
    if notes.is_empty() {
        return "No notes found\n".to_string();
    }

    let mut out = String::from("Your tnotes:\n");
    out.push_str(&"=".repeat(RULE_WIDTH));
    out.push('\n');
    for note in notes {
        out.push_str(&render_note(note));
    }
    out
}

/// Renders one entry: `[N] name`, the raw content, then a separator.
pub fn render_note(note: &Note) -> String {
    format!(
        "[{}] {}\n{}\n{}\n",
        note.position,
        note.name,
        note.content,
        "-".repeat(RULE_WIDTH)
    )
}

#[cfg(test)]
mod tests {
    use super::{render_listing, render_note};
    use crate::model::note::Note;

    fn note(position: usize, name: &str, content: &str) -> Note {
        Note {
            position,
            name: name.to_string(),
            parsed: None,
            content: content.to_string(),
        }
    }

    #[test]
    fn empty_listing_reports_no_notes() {
        assert_eq!(render_listing(&[]), "No notes found\n");
    }

    #[test]
    fn listing_has_header_and_one_block_per_note() {
        let rendered = render_listing(&[
            note(1, "2024-01-01_10-00-00", "first"),
            note(2, "2024-01-01_10-00-05", "second"),
        ]);
        let lines = rendered.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], "Your tnotes:");
        assert_eq!(lines[1], "=".repeat(50));
        assert_eq!(lines[2], "[1] 2024-01-01_10-00-00");
        assert_eq!(lines[3], "first");
        assert_eq!(lines[4], "-".repeat(50));
        assert_eq!(lines[5], "[2] 2024-01-01_10-00-05");
    }

    #[test]
    fn content_is_rendered_verbatim() {
        let rendered = render_note(&note(3, "n", "a\n  b\t*c*"));
        assert!(rendered.contains("\na\n  b\t*c*\n"));
    }
}

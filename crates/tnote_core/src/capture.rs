//! Terminal-context capture placeholder.
//!
//! History capture is not supported on any platform. These helpers build the
//! note body the `-n<N>` command stores instead.

/// File name prefix for notes created with terminal context.
pub const CAPTURE_PREFIX: &str = "term_";

/// Placeholder recorded in place of real terminal history.
pub fn history_placeholder(_lines: u64) -> String {
    format!(
        "[Terminal history capture not implemented for {}]",
        std::env::consts::OS
    )
}

/// Notice shown to the user before a capture note is saved.
pub fn unsupported_notice(lines: u64) -> String {
    format!("terminal history capture not implemented yet, couldn't get {lines} lines")
}

/// Builds the stored body: the message bytes followed by a terminal-context
/// block.
pub fn capture_body(message: &[u8], lines: u64) -> Vec<u8> {
    let placeholder = history_placeholder(lines);
    let mut body = Vec::with_capacity(message.len() + placeholder.len() + 20);
    body.extend_from_slice(message);
    body.extend_from_slice(b"\n\nTerminal context:\n");
    body.extend_from_slice(placeholder.as_bytes());
    body
}

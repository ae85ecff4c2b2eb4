//! Shell execution results and the link side-channel.
//!
//! A command can ask the UI to render a hyperlink by embedding a
//! sentinel-delimited `href|text` marker in its textual output. After
//! the pipeline completes the final output is scanned for the marker
//! and the result is reinterpreted as a structured link. The sentinels
//! are non-printable control characters so they cannot collide with
//! ordinary command output.

/// Opens a link marker; followed by `href|text`.
pub const LINK_OPEN: &str = "\u{1}";

/// Closes a link marker.
pub const LINK_CLOSE: &str = "\u{2}";

/// A hyperlink extracted from command output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// Target URL.
    pub href: String,
    /// Display text.
    pub text: String,
}

/// Result of executing one input line; the only type surfaced to the
/// terminal UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecOutcome {
    /// The trimmed input line (empty for a no-op).
    pub command: String,
    /// Final pipeline output.
    pub output: String,
    /// Whether execution failed.
    pub error: bool,
    /// Present when the output carried a link marker.
    pub link: Option<Link>,
}

impl ExecOutcome {
    /// No-op outcome for empty input.
    pub fn empty() -> Self {
        Self {
            command: String::new(),
            output: String::new(),
            error: false,
            link: None,
        }
    }
}

/// Wrap a link in the marker sentinels for embedding in command output.
pub fn format_link(href: &str, text: &str) -> String {
    format!("{LINK_OPEN}{href}|{text}{LINK_CLOSE}")
}

/// Scan output for a link marker and decode it.
///
/// # Returns
/// The first well-formed `href|text` marker, or None.
pub fn extract_link(output: &str) -> Option<Link> {
    let start: usize = output.find(LINK_OPEN)?;
    let rest: &str = &output[start + LINK_OPEN.len()..];
    let end: usize = rest.find(LINK_CLOSE)?;
    let (href, text) = rest[..end].split_once('|')?;
    Some(Link {
        href: href.to_string(),
        text: text.to_string(),
    })
}

//! Line splitting for email bodies

/// A single line of an email body, terminator included.
///
/// Identity is positional: a `Line` carries no index of its own, the
/// sequence it came from does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    raw: &'a str,
    blank: bool,
}

impl<'a> Line<'a> {
    #[must_use]
    pub fn new(raw: &'a str) -> Self {
        Self {
            raw,
            blank: raw.trim().is_empty(),
        }
    }

    /// Original text, trailing terminator included
    #[must_use]
    pub const fn raw(&self) -> &'a str {
        self.raw
    }

    /// Text with surrounding whitespace and the terminator removed
    #[must_use]
    pub fn trimmed(&self) -> &'a str {
        self.raw.trim()
    }

    /// Whether the line holds no visible content
    #[must_use]
    pub const fn is_blank(&self) -> bool {
        self.blank
    }

    /// Number of whitespace-separated words
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.raw.split_whitespace().count()
    }
}

/// Split a normalized body into lines, keeping terminators attached to the
/// line they end.
///
/// Concatenating [`Line::raw`] over the result reproduces `body`
/// byte-for-byte, blank lines included.
#[must_use]
pub fn split_lines(body: &str) -> Vec<Line<'_>> {
    let mut lines = Vec::new();
    let mut start = 0;

    while start < body.len() {
        let end = body[start..]
            .find('\n')
            .map_or(body.len(), |offset| start + offset + 1);
        lines.push(Line::new(&body[start..end]));
        start = end;
    }

    lines
}

//! Line classification.

use super::event::ListKind;

/// Deepest heading level, `######`.
pub const MAX_HEADING_LEVEL: usize = 6;

/// Classification of a single input line, with its content extracted.
///
/// Content has its marker removed and surrounding whitespace trimmed, but
/// inline substitution has not been applied yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `#` to `######`, one space, then content.
    Heading { level: u8, content: &'a str },
    /// `- ` or `* ` followed by content.
    ListItem { kind: ListKind, content: &'a str },
    /// Empty or whitespace-only line.
    Blank,
    /// Anything else; paragraph text.
    Text(&'a str),
}

/// Classify a line. Checks run in priority order: heading, unordered item,
/// ordered item, blank, then paragraph text.
///
/// # Example
/// ```
/// use markdown2html::block::{classify, LineKind, ListKind};
///
/// assert_eq!(classify("## Title"), LineKind::Heading { level: 2, content: "Title" });
/// assert_eq!(
///     classify("- item"),
///     LineKind::ListItem { kind: ListKind::Unordered, content: "item" }
/// );
/// assert_eq!(classify("   "), LineKind::Blank);
/// ```
pub fn classify(line: &str) -> LineKind<'_> {
    if let Some((level, content)) = try_heading(line) {
        return LineKind::Heading { level, content };
    }

    for kind in [ListKind::Unordered, ListKind::Ordered] {
        if let Some(rest) = line.strip_prefix(kind.marker()) {
            return LineKind::ListItem {
                kind,
                content: rest.trim(),
            };
        }
    }

    let trimmed = line.trim();
    if trimmed.is_empty() {
        LineKind::Blank
    } else {
        LineKind::Text(trimmed)
    }
}

/// Try to read an ATX-style heading marker.
fn try_heading(line: &str) -> Option<(u8, &str)> {
    let bytes = line.as_bytes();
    let level = bytes.iter().take_while(|&&b| b == b'#').count();
    if level == 0 || level > MAX_HEADING_LEVEL {
        return None;
    }
    if bytes.get(level) != Some(&b' ') {
        return None;
    }
    Some((level as u8, line[level + 1..].trim()))
}

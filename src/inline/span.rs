//! Delimited span scanning.
//!
//! Every inline rule is a pair of fixed two-byte delimiters. Spans are found
//! in one left-to-right pass: leftmost opener, then the nearest closer that
//! leaves at least one byte of content. Matches never overlap and scanning
//! resumes after the closer, so no backtracking is needed.

use std::borrow::Cow;

use memchr::memmem::Finder;
use smallvec::SmallVec;

/// Opening and closing delimiter of one inline rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiters {
    pub open: &'static str,
    pub close: &'static str,
}

impl Delimiters {
    /// Create a delimiter pair.
    pub const fn new(open: &'static str, close: &'static str) -> Self {
        Self { open, close }
    }
}

/// A matched span, as byte offsets into the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Offset of the opening delimiter.
    pub start: usize,
    /// Offset one past the closing delimiter.
    pub end: usize,
    /// Offset of the first content byte.
    pub inner_start: usize,
    /// Offset of the closing delimiter.
    pub inner_end: usize,
}

impl Span {
    /// Content between the delimiters.
    #[inline]
    pub fn inner<'a>(&self, text: &'a str) -> &'a str {
        &text[self.inner_start..self.inner_end]
    }
}

/// Spans found on a single line. Lines rarely carry more than a few.
pub type Spans = SmallVec<[Span; 4]>;

/// Find all leftmost-shortest, non-overlapping spans of `delims` in `text`.
///
/// # Example
/// ```
/// use markdown2html::inline::span::{find_spans, Delimiters};
///
/// let spans = find_spans("a **b** **c**", Delimiters::new("**", "**"));
/// assert_eq!(spans.len(), 2);
/// assert_eq!(spans[0].inner("a **b** **c**"), "b");
/// ```
pub fn find_spans(text: &str, delims: Delimiters) -> Spans {
    let bytes = text.as_bytes();
    let opener = Finder::new(delims.open);
    let closer = Finder::new(delims.close);
    let mut spans = Spans::new();
    let mut pos = 0;

    while let Some(found) = opener.find(&bytes[pos..]) {
        let start = pos + found;
        let inner_start = start + delims.open.len();
        // Content must be non-empty, so the closer can start one byte in at the earliest.
        let search_from = inner_start + 1;
        if search_from >= bytes.len() {
            break;
        }
        // A later opener would search a suffix of this window, so a miss here ends the scan.
        let Some(found_close) = closer.find(&bytes[search_from..]) else {
            break;
        };
        let inner_end = search_from + found_close;
        let end = inner_end + delims.close.len();
        spans.push(Span {
            start,
            end,
            inner_start,
            inner_end,
        });
        pos = end;
    }

    spans
}

/// Rewrite every span of `delims` in `text`.
///
/// `replace` receives the span content and appends its replacement to the
/// output buffer. Text outside spans is copied through unchanged. Returns a
/// borrowed value when nothing matched.
pub fn replace_spans<'a, F>(text: &'a str, delims: Delimiters, mut replace: F) -> Cow<'a, str>
where
    F: FnMut(&str, &mut String),
{
    let spans = find_spans(text, delims);
    if spans.is_empty() {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + spans.len() * 8);
    let mut last = 0;
    for span in &spans {
        out.push_str(&text[last..span.start]);
        replace(span.inner(text), &mut out);
        last = span.end;
    }
    out.push_str(&text[last..]);

    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const STARS: Delimiters = Delimiters::new("**", "**");
    const BRACKETS: Delimiters = Delimiters::new("[[", "]]");

    fn inners(text: &str, delims: Delimiters) -> Vec<&str> {
        find_spans(text, delims).iter().map(|s| s.inner(text)).collect()
    }

    #[test]
    fn test_no_delimiters() {
        assert!(find_spans("plain text", STARS).is_empty());
    }

    #[test]
    fn test_shortest_match() {
        assert_eq!(inners("**a** b**", STARS), vec!["a"]);
    }

    #[test]
    fn test_multiple_spans() {
        assert_eq!(inners("**a** and **b**", STARS), vec!["a", "b"]);
    }

    #[test]
    fn test_empty_content_not_matched() {
        // `****` has no content between the pairs
        assert!(find_spans("****", STARS).is_empty());
    }

    #[test]
    fn test_content_may_start_with_delimiter_byte() {
        // Opener at 0; the nearest closer leaving content is at 5
        assert_eq!(inners("****x**", STARS), vec!["**x"]);
    }

    #[test]
    fn test_unterminated_opener() {
        assert!(find_spans("**open only", STARS).is_empty());
        assert_eq!(inners("**a** **b", STARS), vec!["a"]);
    }

    #[test]
    fn test_distinct_delimiters() {
        assert_eq!(inners("x [[a]] ]] [[b]]", BRACKETS), vec!["a", "b"]);
        assert_eq!(inners("[[]]]", BRACKETS), vec!["]"]);
    }

    #[test]
    fn test_span_offsets() {
        let spans = find_spans("ab[[cd]]ef", BRACKETS);
        assert_eq!(
            spans[0],
            Span {
                start: 2,
                end: 8,
                inner_start: 4,
                inner_end: 6,
            }
        );
    }

    #[test]
    fn test_multibyte_content() {
        assert_eq!(inners("**é**", STARS), vec!["é"]);
        assert_eq!(inners("→**日本**←", STARS), vec!["日本"]);
    }

    #[test]
    fn test_replace_borrows_when_unmatched() {
        let out = replace_spans("nothing here", STARS, |_, _| unreachable!());
        assert!(matches!(out, Cow::Borrowed(_)));
    }

    #[test]
    fn test_replace_keeps_surrounding_text() {
        let out = replace_spans("a **b** c", STARS, |inner, out| {
            out.push('<');
            out.push_str(inner);
            out.push('>');
        });
        assert_eq!(out, "a <b> c");
    }
}

//! Character-strip substitution (`((text))`).

use std::borrow::Cow;

use super::span::{replace_spans, Delimiters};

/// Delimiters of a character-strip span.
pub const STRIP: Delimiters = Delimiters::new("((", "))");

/// Replace every `((text))` span with `text` minus all `c` and `C`.
pub fn strip_spans(text: &str) -> Cow<'_, str> {
    replace_spans(text, STRIP, |inner, out| {
        out.extend(inner.chars().filter(|&ch| !is_stripped(ch)));
    })
}

#[inline]
fn is_stripped(ch: char) -> bool {
    matches!(ch, 'c' | 'C')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_both_cases() {
        assert_eq!(strip_spans("((Cacao))"), "aao");
    }

    #[test]
    fn test_keeps_other_characters() {
        assert_eq!(strip_spans("((Chicago ccc!))"), "hiago !");
    }

    #[test]
    fn test_outside_span_untouched() {
        assert_eq!(strip_spans("cat ((cat)) cat"), "cat at cat");
    }

    #[test]
    fn test_span_of_only_stripped_chars() {
        assert_eq!(strip_spans("x((cC))y"), "xy");
    }

    #[test]
    fn test_unterminated_left_alone() {
        assert_eq!(strip_spans("((cat"), "((cat");
    }
}

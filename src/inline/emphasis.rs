//! Bold (`**text**`) and emphasis (`__text__`) substitution.
//!
//! Each rule wraps span content in a tag pair. A rule makes one pass and its
//! matches never nest: `**a **b** c**` becomes `<b>a </b>b<b> c</b>`.

use std::borrow::Cow;

use super::span::{replace_spans, Delimiters};

/// Delimiters of a bold span.
pub const BOLD: Delimiters = Delimiters::new("**", "**");

/// Delimiters of an emphasis span.
pub const EMPHASIS: Delimiters = Delimiters::new("__", "__");

/// Replace every `**text**` span with `<b>text</b>`.
pub fn replace_bold(text: &str) -> Cow<'_, str> {
    wrap_spans(text, BOLD, "<b>", "</b>")
}

/// Replace every `__text__` span with `<em>text</em>`.
pub fn replace_emphasis(text: &str) -> Cow<'_, str> {
    wrap_spans(text, EMPHASIS, "<em>", "</em>")
}

fn wrap_spans<'a>(
    text: &'a str,
    delims: Delimiters,
    open_tag: &'static str,
    close_tag: &'static str,
) -> Cow<'a, str> {
    replace_spans(text, delims, |inner, out| {
        out.push_str(open_tag);
        out.push_str(inner);
        out.push_str(close_tag);
    })
}

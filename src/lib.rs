//! markdown2html: line-oriented converter for a small Markdown dialect.
//!
//! Supported syntax:
//! - Headings: `#` to `######` followed by a space
//! - Unordered lists: lines starting with `- `
//! - Ordered lists: lines starting with `* `
//! - Paragraphs: consecutive text lines, joined by `<br/>`
//! - Inline: `**bold**`, `__emphasis__`, `[[md5 hash]]`, `((strip c/C))`
//!
//! # Design Principles
//! - No AST: lines are classified and turned into block events directly
//! - No regex: inline rules are fixed-delimiter scans
//! - No escaping: text is passed through as-is
//! - Conversion is total: every input produces output, nothing is rejected

pub mod block;
pub mod error;
pub mod file;
pub mod inline;
pub mod render;

// Re-export primary types
pub use block::{BlockAssembler, BlockEvent, ListKind};
pub use error::{Error, Result};
pub use file::convert_file;
pub use inline::transform;
pub use render::HtmlWriter;

use log::debug;

/// Conversion options.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Close an open list on a blank line, not just an open paragraph.
    pub blank_line_closes_lists: bool,
    /// End joined output with a newline.
    pub trailing_newline: bool,
}

/// Convert Markdown lines to HTML lines.
///
/// This is the primary API for callers that already hold lines.
///
/// # Example
/// ```
/// let html = markdown2html::convert(&["- a", "- b"]);
/// assert_eq!(html, ["<ul>", "<li>a</li>", "<li>b</li>", "</ul>"]);
/// ```
pub fn convert<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    convert_with_options(lines, &Options::default())
}

/// Convert Markdown lines to HTML lines with options.
pub fn convert_with_options<S: AsRef<str>>(lines: &[S], options: &Options) -> Vec<String> {
    let mut assembler = BlockAssembler::with_options(options);
    let mut events = Vec::with_capacity(lines.len() + lines.len() / 4);
    assembler.assemble(lines, &mut events);

    let mut writer = HtmlWriter::with_capacity(events.len());
    for event in events {
        writer.write_event(event);
    }
    debug!("converted {} lines into {} html lines", lines.len(), writer.len());

    writer.into_lines()
}

/// Convert Markdown text to HTML text.
///
/// Input is split on `\n` (a trailing `\r` is dropped from each line) and
/// the output lines are joined with `\n`.
///
/// # Example
/// ```
/// let html = markdown2html::to_html("# Hello\n\nWorld");
/// assert_eq!(html, "<h1>Hello</h1>\n<p>\nWorld\n</p>");
/// ```
pub fn to_html(input: &str) -> String {
    to_html_with_options(input, &Options::default())
}

/// Convert Markdown text to HTML text with options.
pub fn to_html_with_options(input: &str, options: &Options) -> String {
    let lines: Vec<&str> = input.lines().collect();
    let html = convert_with_options(&lines, options);
    render::join_lines(&html, options.trailing_newline)
}

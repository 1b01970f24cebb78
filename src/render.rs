//! HTML output writer.
//!
//! Output is a sequence of lines: every tag and every content line is its
//! own entry. Lines are only appended, then joined once at the end.

use crate::block::{BlockEvent, ListKind};

/// Line-oriented HTML writer.
///
/// # Example
/// ```
/// use markdown2html::HtmlWriter;
///
/// let mut writer = HtmlWriter::new();
/// writer.heading(1, "Hi");
/// writer.paragraph_start();
/// writer.text("line");
/// writer.paragraph_end();
///
/// assert_eq!(writer.into_string(false), "<h1>Hi</h1>\n<p>\nline\n</p>");
/// ```
#[derive(Debug, Default)]
pub struct HtmlWriter {
    lines: Vec<String>,
}

impl HtmlWriter {
    /// Create an empty writer.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with room for `capacity` output lines.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            lines: Vec::with_capacity(capacity),
        }
    }

    /// Append a raw output line.
    #[inline]
    pub fn write_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Write `<hN>content</hN>`.
    pub fn heading(&mut self, level: u8, content: &str) {
        self.write_line(format!("<h{level}>{content}</h{level}>"));
    }

    /// Write `<ul>` or `<ol>`.
    pub fn list_start(&mut self, kind: ListKind) {
        self.write_line(format!("<{}>", kind.tag()));
    }

    /// Write `<li>content</li>`.
    pub fn list_item(&mut self, content: &str) {
        self.write_line(format!("<li>{content}</li>"));
    }

    /// Write `</ul>` or `</ol>`.
    pub fn list_end(&mut self, kind: ListKind) {
        self.write_line(format!("</{}>", kind.tag()));
    }

    #[inline]
    pub fn paragraph_start(&mut self) {
        self.write_line("<p>");
    }

    /// Write one paragraph content line.
    #[inline]
    pub fn text(&mut self, content: impl Into<String>) {
        self.write_line(content);
    }

    #[inline]
    pub fn line_break(&mut self) {
        self.write_line("<br/>");
    }

    #[inline]
    pub fn paragraph_end(&mut self) {
        self.write_line("</p>");
    }

    /// Render one block event.
    pub fn write_event(&mut self, event: BlockEvent) {
        match event {
            BlockEvent::Heading { level, content } => self.heading(level, &content),
            BlockEvent::ListStart(kind) => self.list_start(kind),
            BlockEvent::ListItem(content) => self.list_item(&content),
            BlockEvent::ListEnd(kind) => self.list_end(kind),
            BlockEvent::ParagraphStart => self.paragraph_start(),
            BlockEvent::Text(content) => self.text(content),
            BlockEvent::LineBreak => self.line_break(),
            BlockEvent::ParagraphEnd => self.paragraph_end(),
        }
    }

    /// Lines written so far.
    #[inline]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines written.
    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Consume the writer and return its lines.
    #[inline]
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Consume the writer and join its lines.
    pub fn into_string(self, trailing_newline: bool) -> String {
        join_lines(&self.lines, trailing_newline)
    }
}

/// Join output lines with `\n`, optionally ending with one.
///
/// An empty line list always yields an empty string.
pub fn join_lines<S: AsRef<str>>(lines: &[S], trailing_newline: bool) -> String {
    let len: usize = lines.iter().map(|l| l.as_ref().len() + 1).sum();
    let mut out = String::with_capacity(len);
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(line.as_ref());
    }
    if trailing_newline && !lines.is_empty() {
        out.push('\n');
    }
    out
}

//! Block-level event types.

/// Events emitted by the block assembler.
///
/// Content carried by events has already been through inline substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockEvent {
    /// A complete heading. Headings never span more than one line.
    Heading {
        /// Heading level (1-6).
        level: u8,
        /// Transformed heading text.
        content: String,
    },

    /// Start of a list.
    ListStart(ListKind),
    /// One list item with its transformed text.
    ListItem(String),
    /// End of a list.
    ListEnd(ListKind),

    /// Start of a paragraph.
    ParagraphStart,
    /// One transformed paragraph line.
    Text(String),
    /// Separator between two consecutive paragraph lines.
    LineBreak,
    /// End of a paragraph.
    ParagraphEnd,
}

/// Type of list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// Unordered list, items marked with `- `.
    Unordered,
    /// Ordered list, items marked with `* `.
    Ordered,
}

impl ListKind {
    /// HTML container tag name.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Unordered => "ul",
            Self::Ordered => "ol",
        }
    }

    /// Line prefix marking an item of this kind.
    pub fn marker(self) -> &'static str {
        match self {
            Self::Unordered => "- ",
            Self::Ordered => "* ",
        }
    }
}

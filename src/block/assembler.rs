//! Block assembler implementation.

use log::trace;

use crate::inline::transform;
use crate::Options;

use super::event::{BlockEvent, ListKind};
use super::line::{classify, LineKind};

/// Currently open block.
///
/// `Heading` is transient: a heading is emitted whole, so closing it emits
/// nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockState {
    #[default]
    None,
    Heading,
    UnorderedList,
    OrderedList,
    Paragraph,
}

impl BlockState {
    fn for_list(kind: ListKind) -> Self {
        match kind {
            ListKind::Unordered => Self::UnorderedList,
            ListKind::Ordered => Self::OrderedList,
        }
    }

    fn is_list(self) -> bool {
        matches!(self, Self::UnorderedList | Self::OrderedList)
    }
}

/// Line-by-line block assembler.
///
/// Classifies each line, groups runs of compatible lines into blocks and
/// emits [`BlockEvent`]s. Every opened list or paragraph gets exactly one
/// matching end event, at the latest from [`finish`](Self::finish).
#[derive(Debug, Default)]
pub struct BlockAssembler {
    state: BlockState,
    blank_line_closes_lists: bool,
}

impl BlockAssembler {
    /// Create an assembler with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an assembler with the given options.
    pub fn with_options(options: &Options) -> Self {
        Self {
            state: BlockState::None,
            blank_line_closes_lists: options.blank_line_closes_lists,
        }
    }

    /// The currently open block.
    pub fn state(&self) -> BlockState {
        self.state
    }

    /// Assemble all lines and close whatever is left open.
    pub fn assemble<S: AsRef<str>>(&mut self, lines: &[S], events: &mut Vec<BlockEvent>) {
        for line in lines {
            self.push_line(line.as_ref(), events);
        }
        self.finish(events);
    }

    /// Process a single line.
    pub fn push_line(&mut self, line: &str, events: &mut Vec<BlockEvent>) {
        match classify(line) {
            LineKind::Heading { level, content } => {
                self.close(events);
                events.push(BlockEvent::Heading {
                    level,
                    content: transform(content),
                });
                self.state = BlockState::Heading;
            }
            LineKind::ListItem { kind, content } => {
                let state = BlockState::for_list(kind);
                if self.state != state {
                    self.close(events);
                    trace!("open {} list", kind.tag());
                    events.push(BlockEvent::ListStart(kind));
                    self.state = state;
                }
                events.push(BlockEvent::ListItem(transform(content)));
            }
            LineKind::Blank => {
                if self.state == BlockState::Paragraph
                    || (self.blank_line_closes_lists && self.state.is_list())
                {
                    self.close(events);
                }
            }
            LineKind::Text(content) => {
                if self.state == BlockState::Paragraph {
                    events.push(BlockEvent::LineBreak);
                } else {
                    self.close(events);
                    trace!("open paragraph");
                    events.push(BlockEvent::ParagraphStart);
                    self.state = BlockState::Paragraph;
                }
                events.push(BlockEvent::Text(transform(content)));
            }
        }
    }

    /// Close any block still open at end of input.
    pub fn finish(&mut self, events: &mut Vec<BlockEvent>) {
        self.close(events);
    }

    /// Emit the end event for the open block, if any.
    fn close(&mut self, events: &mut Vec<BlockEvent>) {
        match std::mem::take(&mut self.state) {
            BlockState::None | BlockState::Heading => {}
            BlockState::UnorderedList => {
                trace!("close ul list");
                events.push(BlockEvent::ListEnd(ListKind::Unordered));
            }
            BlockState::OrderedList => {
                trace!("close ol list");
                events.push(BlockEvent::ListEnd(ListKind::Ordered));
            }
            BlockState::Paragraph => {
                trace!("close paragraph");
                events.push(BlockEvent::ParagraphEnd);
            }
        }
    }
}

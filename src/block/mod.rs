//! Block-level assembly.
//!
//! The assembler is line-oriented and recognizes:
//! - Headings (`#` to `######`)
//! - Unordered lists (`- `)
//! - Ordered lists (`* `)
//! - Paragraphs, with consecutive lines joined by line breaks
//!
//! Blank lines end paragraphs. Whether they also end lists is controlled by
//! [`Options::blank_line_closes_lists`](crate::Options).

mod assembler;
mod event;
mod line;

pub use assembler::{BlockAssembler, BlockState};
pub use event::{BlockEvent, ListKind};
pub use line::{classify, LineKind, MAX_HEADING_LEVEL};

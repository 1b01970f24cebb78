//! Inline substitution engine.
//!
//! Four rules run in a fixed order, each one pass over the previous result:
//! 1. Content hash: `[[text]]` becomes the MD5 hex digest of `text`
//! 2. Character strip: `((text))` becomes `text` without `c`/`C`
//! 3. Bold: `**text**` becomes `<b>text</b>`
//! 4. Emphasis: `__text__` becomes `<em>text</em>`
//!
//! Hash and strip run first so that `**` or `__` inside their spans is
//! consumed as literal content. Unmatched markers pass through verbatim.
//! Input is a single line; spans never cross line boundaries.

mod digest;
mod emphasis;
pub mod span;
mod strip;

pub use digest::{md5_hex, replace_hashes, HASH};
pub use emphasis::{replace_bold, replace_emphasis, BOLD, EMPHASIS};
pub use strip::{strip_spans, STRIP};

/// Apply all inline substitutions to one line of text.
///
/// # Example
/// ```
/// use markdown2html::inline::transform;
///
/// assert_eq!(transform("**bold** and __em__"), "<b>bold</b> and <em>em</em>");
/// assert_eq!(transform("((Cacao))"), "aao");
/// ```
pub fn transform(text: &str) -> String {
    let hashed = replace_hashes(text);
    let stripped = strip_spans(&hashed);
    let bold = replace_bold(&stripped);
    let emphasized = replace_emphasis(&bold);
    emphasized.into_owned()
}

//! Content-hash substitution (`[[text]]`).
//!
//! The span is replaced by the lowercase hex MD5 digest of its content.

use std::borrow::Cow;

use md5::{Digest, Md5};

use super::span::{replace_spans, Delimiters};

/// Delimiters of a content-hash span.
pub const HASH: Delimiters = Delimiters::new("[[", "]]");

const HEX: &[u8; 16] = b"0123456789abcdef";

/// Replace every `[[text]]` span with the MD5 digest of `text`.
pub fn replace_hashes(text: &str) -> Cow<'_, str> {
    replace_spans(text, HASH, push_md5_hex)
}

/// Lowercase hex MD5 digest of the UTF-8 bytes of `input`.
///
/// # Example
/// ```
/// assert_eq!(
///     markdown2html::inline::md5_hex("abc"),
///     "900150983cd24fb0d6963f7d28e17f72"
/// );
/// ```
pub fn md5_hex(input: &str) -> String {
    let mut out = String::with_capacity(32);
    push_md5_hex(input, &mut out);
    out
}

fn push_md5_hex(input: &str, out: &mut String) {
    let digest = Md5::digest(input.as_bytes());
    for byte in digest {
        out.push(HEX[(byte >> 4) as usize] as char);
        out.push(HEX[(byte & 0x0f) as usize] as char);
    }
}

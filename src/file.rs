//! File-to-file conversion.

use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::error::{Error, Result};
use crate::{to_html_with_options, Options};

/// Convert the Markdown file at `input` and write the HTML to `output`.
///
/// `output` is created or overwritten. Nothing is written when `input` is
/// missing or unreadable. Returns the number of bytes written.
pub fn convert_file(input: &Path, output: &Path, options: &Options) -> Result<usize> {
    if !input.is_file() {
        return Err(Error::MissingInput(input.to_path_buf()));
    }

    let source = fs::read_to_string(input).map_err(|source| Error::Read {
        path: input.to_path_buf(),
        source,
    })?;
    debug!("read {} bytes from {}", source.len(), input.display());

    let html = to_html_with_options(&source, options);

    fs::write(output, &html).map_err(|source| Error::Write {
        path: output.to_path_buf(),
        source,
    })?;
    info!("wrote {} bytes to {}", html.len(), output.display());

    Ok(html.len())
}

//! Show command - load a single encrypted file and print every field.

use std::path::Path;

use crate::cli::output;
use crate::core::decrypt::Decryptor;
use crate::core::format::Format;
use crate::core::loader::Loader;
use crate::core::summary::full_summary;
use crate::error::{Error, Result};

/// Load `path` and print its full summary with secrets masked.
///
/// # Errors
///
/// Returns `Error::UnknownFormat` when no format is given and the extension
/// is not recognised, otherwise any load error.
pub fn execute<D: Decryptor>(loader: &Loader<D>, path: &Path, format: Option<Format>) -> Result<()> {
    let format = format
        .or_else(|| Format::detect(path))
        .ok_or_else(|| Error::UnknownFormat {
            path: path.to_path_buf(),
        })?;

    let config = loader.load(path, format)?;

    output::header(&path.display().to_string());
    for field in full_summary(&config) {
        output::field(field.label, &field.value);
    }
    Ok(())
}

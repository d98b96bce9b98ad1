//! Encrypted config loading.
//!
//! A load is three steps, each with its own failure:
//! existence check (`NotFound`), decrypt (`Decrypt`), deserialize (`Parse`).
//! A failed load never yields a partial `Config`.

use std::path::Path;

use tracing::debug;

use crate::core::config::Config;
use crate::core::decrypt::Decryptor;
use crate::core::format::Format;
use crate::error::{Error, Result};

/// Loads encrypted configuration files through a decrypt backend.
pub struct Loader<D> {
    decryptor: D,
}

impl<D: Decryptor> Loader<D> {
    pub fn new(decryptor: D) -> Self {
        Self { decryptor }
    }

    pub fn decryptor(&self) -> &D {
        &self.decryptor
    }

    /// Decrypt and deserialize the file at `path`.
    ///
    /// # Errors
    ///
    /// - `Error::NotFound` if the file does not exist
    /// - `Error::Decrypt` if the backend fails
    /// - `Error::Parse` if the plaintext does not match the schema
    /// - `Error::Io` if the file's existence cannot be determined
    pub fn load(&self, path: &Path, format: Format) -> Result<Config> {
        debug!(path = %path.display(), format = format.as_str(), "loading config");

        let exists = path.try_exists().map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if !exists {
            return Err(Error::NotFound {
                path: path.to_path_buf(),
            });
        }

        let plaintext =
            self.decryptor
                .decrypt(path, format)
                .map_err(|source| Error::Decrypt {
                    path: path.to_path_buf(),
                    source,
                })?;

        let config = format
            .parse::<Config>(plaintext.as_slice())
            .map_err(|source| Error::Parse { format, source })?;

        debug!(
            backend = self.decryptor.name(),
            application = %config.application.name,
            "config loaded"
        );
        Ok(config)
    }
}

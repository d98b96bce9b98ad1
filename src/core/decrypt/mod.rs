//! Decryption backends.
//!
//! Decryption is delegated to an external collaborator. The loader only
//! needs the `Decryptor` contract: a path and a format tag in, plaintext
//! bytes out.
//!
//! ## Backends
//!
//! - **sops**: Default. Runs the `sops` CLI, which owns the envelope format,
//!   key management (age, PGP, cloud KMS) and MAC verification.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `Decryptor` trait in a new file
//! 2. Map backend failures onto `DecryptError`
//! 3. Re-export from this module

use std::path::Path;

use zeroize::Zeroizing;

use crate::core::format::Format;
use crate::error::DecryptError;

mod sops;

pub use sops::Sops;

/// Decryption collaborator.
pub trait Decryptor {
    /// Decrypt the file at `path`, interpreting its envelope as `format`.
    ///
    /// The plaintext is wiped when the returned buffer is dropped.
    ///
    /// # Errors
    ///
    /// Returns `DecryptError` if the backend is unavailable or rejects the
    /// file (missing key, access denied, corrupt ciphertext, MAC mismatch).
    fn decrypt(&self, path: &Path, format: Format) -> Result<Zeroizing<Vec<u8>>, DecryptError>;

    /// Backend name for logs.
    fn name(&self) -> &'static str;
}

impl<D: Decryptor + ?Sized> Decryptor for &D {
    fn decrypt(&self, path: &Path, format: Format) -> Result<Zeroizing<Vec<u8>>, DecryptError> {
        (**self).decrypt(path, format)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

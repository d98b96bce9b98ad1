//! sops decryption backend.
//!
//! Decrypts files using the sops CLI.
//!
//! ## Requirements
//!
//! - `sops` must be installed (or pointed to with `--sops` / `SOPS_BIN`)
//! - The key material sops needs (age key file, PGP keyring, cloud KMS
//!   credentials) must be available in the environment

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, trace};
use zeroize::Zeroizing;

use super::Decryptor;
use crate::core::constants;
use crate::core::format::Format;
use crate::error::DecryptError;

/// sops backend using the sops CLI
#[derive(Debug, Clone)]
pub struct Sops {
    binary: String,
}

impl Sops {
    /// Create a backend invoking `binary`, either a name looked up on PATH
    /// or a path to an executable.
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }

    /// Resolve the binary to an executable path.
    fn resolve(&self) -> Result<PathBuf, DecryptError> {
        which::which(&self.binary).map_err(|_| DecryptError::BinaryNotFound(self.binary.clone()))
    }

    /// Build the decrypt invocation for `path`.
    fn command(program: impl AsRef<OsStr>, path: &Path, format: Format) -> Command {
        let mut cmd = Command::new(program);
        cmd.args([
            "--decrypt",
            "--input-type",
            format.as_str(),
            "--output-type",
            format.as_str(),
        ])
        .arg(path)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
        cmd
    }
}

impl Default for Sops {
    fn default() -> Self {
        Self::new(constants::SOPS_BIN)
    }
}

impl Decryptor for Sops {
    fn name(&self) -> &'static str {
        "sops"
    }

    fn decrypt(&self, path: &Path, format: Format) -> Result<Zeroizing<Vec<u8>>, DecryptError> {
        let program = self.resolve()?;
        debug!(
            program = %program.display(),
            path = %path.display(),
            format = format.as_str(),
            "decrypting with sops"
        );

        let mut output = Self::command(&program, path, format)
            .output()
            .map_err(|source| DecryptError::Spawn {
                binary: self.binary.clone(),
                source,
            })?;

        if !output.status.success() {
            let code = output.status.code();
            return Err(DecryptError::Failed {
                code,
                reason: code.and_then(exit_reason),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        let plaintext = Zeroizing::new(std::mem::take(&mut output.stdout));
        trace!(plaintext_len = plaintext.len(), "decrypted with sops");
        Ok(plaintext)
    }
}

/// Meaning of well-known sops exit codes.
pub(crate) fn exit_reason(code: i32) -> Option<&'static str> {
    match code {
        2 => Some("could not read input file"),
        5 => Some("error reading sops config"),
        24 => Some("error decrypting MAC"),
        25 => Some("error decrypting tree"),
        51 => Some("MAC mismatch, file may have been tampered with"),
        52 => Some("MAC not found"),
        100 => Some("no file specified"),
        128 => Some("could not retrieve data key, check key access"),
        _ => None,
    }
}

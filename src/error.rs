//! Error types.
//!
//! Every failure of a load is attributable to one cause: the file is missing,
//! the decrypt collaborator refused it, or the plaintext did not match the
//! configuration schema.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::constants::SETUP_SCRIPT;
use crate::core::format::Format;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error("config file {} not found - run {} first", .path.display(), SETUP_SCRIPT)]
    NotFound { path: PathBuf },

    #[error("failed to decrypt {}: {source}", .path.display())]
    Decrypt {
        path: PathBuf,
        #[source]
        source: DecryptError,
    },

    #[error("failed to parse {} config: {source}", .format.as_str().to_uppercase())]
    Parse {
        format: Format,
        #[source]
        source: ParseError,
    },

    #[error("cannot infer format of {} (use --format json|yaml)", .path.display())]
    UnknownFormat { path: PathBuf },

    #[error("{failed} of {total} examples failed")]
    ExamplesFailed { failed: usize, total: usize },

    #[error("cannot access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failures reported by a decrypt backend.
#[derive(Error, Debug)]
pub enum DecryptError {
    #[error("{0} not found on PATH (install sops from https://github.com/getsops/sops)")]
    BinaryNotFound(String),

    #[error("failed to spawn {binary}: {source}")]
    Spawn {
        binary: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{}", describe_failure(.code, .reason, .stderr))]
    Failed {
        /// Exit code, `None` when the process was killed by a signal.
        code: Option<i32>,
        /// Known meaning of the exit code, if any.
        reason: Option<&'static str>,
        stderr: String,
    },
}

/// Deserialization failures, one variant per format.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

fn describe_failure(code: &Option<i32>, reason: &Option<&'static str>, stderr: &str) -> String {
    let status = match code {
        Some(code) => format!("exit code {}", code),
        None => "terminated by signal".to_string(),
    };
    let mut msg = match reason {
        Some(reason) => format!("{} ({})", reason, status),
        None => format!("sops failed ({})", status),
    };
    let stderr = stderr.trim();
    if !stderr.is_empty() {
        msg.push_str(": ");
        msg.push_str(stderr);
    }
    msg
}

pub type Result<T> = std::result::Result<T, Error>;

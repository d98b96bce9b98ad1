//! Command-line interface.

pub mod completions;
pub mod demo;
pub mod output;
pub mod show;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::core::constants;
use crate::core::decrypt::Sops;
use crate::core::format::Format;
use crate::core::loader::Loader;
use crate::error::{DecryptError, Error, Result};

/// Unseal - load sops-encrypted configuration into typed structs.
///
/// Without a subcommand, loads `config.enc.json` and `config.enc.yaml`
/// and prints their non-sensitive fields with secrets masked.
#[derive(Parser)]
#[command(name = "unseal", version, about, long_about = None)]
pub struct Cli {
    /// Directory containing the encrypted config files
    #[arg(long, global = true, env = constants::DIR_ENV, default_value = ".")]
    pub dir: PathBuf,

    /// sops binary to invoke (name on PATH or path)
    #[arg(long, global = true, env = constants::SOPS_BIN_ENV, default_value = constants::SOPS_BIN)]
    pub sops: String,

    /// Exit with status 1 if any example fails
    #[arg(long)]
    pub strict: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Load one encrypted file and print every field, secrets masked
    Show {
        /// Path to the encrypted file (relative to --dir)
        path: PathBuf,
        /// File format, detected from the extension when omitted
        #[arg(short, long, value_enum)]
        format: Option<Format>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute the parsed command line.
pub fn execute(cli: Cli) -> Result<()> {
    let loader = Loader::new(Sops::new(cli.sops));

    match cli.command {
        None => demo::execute(&loader, &cli.dir, cli.strict),
        Some(Command::Show { path, format }) => show::execute(&loader, &resolve(&cli.dir, &path), format),
        Some(Command::Completions { shell }) => completions::execute(shell),
    }
}

/// Resolve `file` against the config directory.
///
/// The default directory is left out so messages name the file as given.
pub fn resolve(dir: &Path, file: &Path) -> PathBuf {
    if dir == Path::new(".") {
        file.to_path_buf()
    } else {
        dir.join(file)
    }
}

/// Follow-up suggestion for an error, if one applies.
pub fn suggestion(err: &Error) -> Option<String> {
    match err {
        Error::NotFound { .. } => Some(format!(
            "run {} to generate the encrypted files",
            constants::SETUP_SCRIPT
        )),
        Error::Decrypt {
            source: DecryptError::BinaryNotFound(_),
            ..
        } => Some(format!(
            "install sops or point --sops / {} at the binary",
            constants::SOPS_BIN_ENV
        )),
        Error::Decrypt {
            source: DecryptError::Failed {
                code: Some(128), ..
            },
            ..
        } => Some("make sure sops can reach your age key file or KMS credentials".to_string()),
        _ => None,
    }
}

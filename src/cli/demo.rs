//! Built-in examples: load the sample JSON and YAML configs in sequence.
//!
//! Each example is independent. A failure is reported as a warning and the
//! next example still runs.

use std::path::Path;

use tracing::debug;

use crate::cli::{output, resolve, suggestion};
use crate::core::constants::{JSON_CONFIG_FILE, YAML_CONFIG_FILE};
use crate::core::decrypt::Decryptor;
use crate::core::format::Format;
use crate::core::loader::Loader;
use crate::core::summary::{summary, ApiKey};
use crate::error::{Error, Result};

/// One built-in example.
#[derive(Debug, Clone, Copy)]
pub struct Example {
    pub title: &'static str,
    pub file: &'static str,
    pub format: Format,
    /// Credential shown alongside the common fields.
    pub key: ApiKey,
}

/// The examples run when no subcommand is given, in order.
pub const EXAMPLES: [Example; 2] = [
    Example {
        title: "Example 1: Loading JSON Configuration",
        file: JSON_CONFIG_FILE,
        format: Format::Json,
        key: ApiKey::Stripe,
    },
    Example {
        title: "Example 2: Loading YAML Configuration",
        file: YAML_CONFIG_FILE,
        format: Format::Yaml,
        key: ApiKey::Aws,
    },
];

/// Run one example: load, then print the summary.
pub fn run<D: Decryptor>(loader: &Loader<D>, dir: &Path, example: &Example) -> Result<()> {
    output::header(example.title);

    let config = loader.load(&resolve(dir, Path::new(example.file)), example.format)?;

    for field in summary(&config, example.key) {
        output::field(field.label, &field.value);
    }
    Ok(())
}

/// Run every example, warning on failures.
///
/// # Errors
///
/// Only in strict mode: `Error::ExamplesFailed` when any example failed.
pub fn execute<D: Decryptor>(loader: &Loader<D>, dir: &Path, strict: bool) -> Result<()> {
    output::header("SOPS Integration Example");
    output::blank();

    let mut failed = 0;
    for (i, example) in EXAMPLES.iter().enumerate() {
        if i > 0 {
            output::blank();
        }
        if let Err(e) = run(loader, dir, example) {
            debug!(file = example.file, error = ?e, "example failed");
            failed += 1;
            output::warn(&format!(
                "Warning: {} config example failed: {}",
                example.format.as_str().to_uppercase(),
                e
            ));
            if let Some(hint) = suggestion(&e) {
                output::hint(&hint);
            }
        }
    }

    output::blank();
    if failed == 0 {
        output::success("Integration examples completed successfully!");
        return Ok(());
    }

    let total = EXAMPLES.len();
    if strict {
        return Err(Error::ExamplesFailed { failed, total });
    }
    output::dimmed(&format!(
        "Integration examples completed ({} of {} failed)",
        failed, total
    ));
    Ok(())
}

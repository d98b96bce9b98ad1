//! Test support utilities for unseal integration tests.
//!
//! Provides an isolated project directory and stand-in sops binaries.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;

use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// Each test gets its own project dir (holding the config files) and bin dir
/// (holding fake sops scripts). Child processes use `.current_dir()`, so
/// tests can run in parallel.
pub struct Test {
    /// Temporary directory for the config files
    pub dir: TempDir,
    /// Temporary directory for fake binaries
    pub bin: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let bin = TempDir::new().expect("failed to create temp bin dir");

        Self { dir, bin }
    }

    /// Create a test environment with both sample files present.
    ///
    /// The files hold plaintext; pair with `fake_sops()` which passes them
    /// through unchanged.
    pub fn with_samples() -> Self {
        let t = Self::new();
        t.write("config.enc.json", SAMPLE_JSON);
        t.write("config.enc.yaml", SAMPLE_YAML);
        t
    }

    /// Write a file into the project directory.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).expect("failed to write fixture");
        path
    }

    /// Install an executable script in the bin directory.
    #[cfg(unix)]
    pub fn script(&self, name: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.bin.path().join(name);
        std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).expect("failed to write script");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("failed to chmod script");
        path
    }

    /// A sops stand-in that prints its last argument's contents and records
    /// its arguments in `sops.args`.
    #[cfg(unix)]
    pub fn fake_sops(&self) -> PathBuf {
        let log = self.bin.path().join("sops.args");
        self.script(
            "sops",
            &format!(
                "echo \"$@\" >> '{}'\nfor last; do :; done\ncat \"$last\"",
                log.display()
            ),
        )
    }

    /// A sops stand-in that always fails with `code` and `stderr`.
    #[cfg(unix)]
    pub fn failing_sops(&self, code: i32, stderr: &str) -> PathBuf {
        self.script(
            "sops-failing",
            &format!("echo '{}' >&2\nexit {}", stderr, code),
        )
    }

    /// Arguments recorded by `fake_sops`, one invocation per line.
    pub fn sops_invocations(&self) -> Vec<String> {
        std::fs::read_to_string(self.bin.path().join("sops.args"))
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

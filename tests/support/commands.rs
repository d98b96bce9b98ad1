//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::path::Path;
use std::process::Output;

impl Test {
    /// Create an unseal command isolated from the caller's environment.
    ///
    /// Returns a Command configured with:
    /// - Current directory set to the test project directory
    /// - `UNSEAL_DIR`, `SOPS_BIN` and `UNSEAL_LOG` cleared
    /// - `NO_COLOR` set so output is plain
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("unseal").expect("failed to find unseal binary");
        cmd.current_dir(self.dir.path());
        cmd.env_remove("UNSEAL_DIR");
        cmd.env_remove("SOPS_BIN");
        cmd.env_remove("UNSEAL_LOG");
        cmd.env("NO_COLOR", "1");
        cmd
    }

    /// Run with no arguments using the given sops binary.
    pub fn run_examples(&self, sops: &Path) -> Output {
        self.cmd()
            .arg("--sops")
            .arg(sops)
            .output()
            .expect("failed to run unseal")
    }

    /// Run `unseal show` with the given sops binary.
    pub fn show(&self, sops: &Path, args: &[&str]) -> Output {
        self.cmd()
            .arg("--sops")
            .arg(sops)
            .arg("show")
            .args(args)
            .output()
            .expect("failed to run unseal show")
    }
}

//! Constants used throughout unseal.
//!
//! Centralizes file names, placeholders and environment variable names.

/// Encrypted JSON configuration loaded by the first example.
pub const JSON_CONFIG_FILE: &str = "config.enc.json";

/// Encrypted YAML configuration loaded by the second example.
pub const YAML_CONFIG_FILE: &str = "config.enc.yaml";

/// Setup script that produces the encrypted sample files.
pub const SETUP_SCRIPT: &str = "create-sample-configs.sh";

/// Default sops binary name, resolved on PATH.
pub const SOPS_BIN: &str = "sops";

/// Environment variable overriding the sops binary.
pub const SOPS_BIN_ENV: &str = "SOPS_BIN";

/// Environment variable overriding the config directory.
pub const DIR_ENV: &str = "UNSEAL_DIR";

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "UNSEAL_LOG";

/// Mask infix, also the whole output for short secrets.
pub const MASK: &str = "****";

/// Placeholder shown for an empty secret.
pub const EMPTY_PLACEHOLDER: &str = "[empty]";

/// Secrets up to this many characters are masked entirely.
pub const SHORT_SECRET_CHARS: usize = 4;

/// Number of characters kept visible at each end of a long secret.
pub const VISIBLE_CHARS: usize = 2;

//! Typed configuration record.
//!
//! Mirrors the decrypted document:
//!
//! ```yaml
//! application: { name, environment, port }
//! database:    { host, port, username, password, database }
//! api_keys:    { stripe_key, sendgrid_key, aws_access_key }
//! ```
//!
//! Every field is required, so a document either yields a fully populated
//! `Config` or fails to deserialize. JSON and YAML share the field names.

use std::fmt;

use serde::Deserialize;
use zeroize::Zeroize;

use crate::core::mask::mask_secret;

/// Application configuration loaded from an encrypted file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    pub application: ApplicationConfig,
    pub database: DatabaseConfig,
    pub api_keys: ApiKeys,
}

/// Application identity.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApplicationConfig {
    pub name: String,
    pub environment: String,
    pub port: u16,
}

/// Persistence target.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: Secret,
    pub database: String,
}

/// Third-party credentials.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiKeys {
    pub stripe_key: Secret,
    pub sendgrid_key: Secret,
    pub aws_access_key: Secret,
}

/// A secret string.
///
/// The buffer is zeroized on drop and `Debug` prints the masked form, so
/// logging a `Config` never leaks a credential. Use [`Secret::expose`] for
/// the raw value.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The raw secret value.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Display-safe form, see [`mask_secret`].
    pub fn masked(&self) -> String {
        mask_secret(&self.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secret({})", self.masked())
    }
}

impl Drop for Secret {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

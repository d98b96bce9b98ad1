//! Unseal - load sops-encrypted configuration into typed structs.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── demo          # Built-in JSON and YAML examples
//! │   ├── show          # Load and summarize a single file
//! │   ├── output        # Terminal output helpers
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── config        # Typed configuration record
//!     ├── decrypt/      # Decryption backends
//!     │   ├── mod       # Decryptor trait
//!     │   └── sops      # sops CLI implementation
//!     ├── format        # JSON / YAML format tags
//!     ├── loader        # Existence check, decrypt, deserialize
//!     ├── mask          # Secret masking
//!     └── summary       # Display model with masked secrets
//! ```
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use unseal::core::decrypt::Sops;
//! use unseal::core::format::Format;
//! use unseal::core::loader::Loader;
//!
//! let config = Loader::new(Sops::default()).load(Path::new("config.enc.yaml"), Format::Yaml)?;
//! println!("{} listens on {}", config.application.name, config.application.port);
//! # Ok::<(), unseal::error::Error>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;

//! Core library components.
//!
//! This module contains the reusable logic for loading encrypted
//! configuration: format handling, the decrypt backends, the typed record
//! and secret masking.

pub mod config;
pub mod constants;
pub mod decrypt;
pub mod format;
pub mod loader;
pub mod mask;
pub mod summary;

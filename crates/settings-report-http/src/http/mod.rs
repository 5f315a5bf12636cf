//! HTTP components for the settings reporter.
//!
//! This module contains:
//! - The `reqwest` transport behind `SettingsTransport`
//! - Mapping of `reqwest` failures onto report errors
//! - The command-line interface and its Go-style flag handling

pub mod args;
pub mod cli;
pub mod client;
pub mod error;

pub use cli::{Cli, handle_cli};
pub use client::{ClientConfig, HttpTransport, TlsVerification};

//! HTTP transport and command-line front end for the settings reporter.

pub mod http;

pub use http::*;

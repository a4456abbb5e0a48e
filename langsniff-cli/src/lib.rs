//! langsniff CLI library
//!
//! This library provides the command-line host for the langsniff
//! classification engine: it reads files, bounds the text windows, counts
//! words and reports verdicts.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod profile_source;
pub mod progress;
pub mod report;
pub mod window;

pub use error::{CliError, CliResult};

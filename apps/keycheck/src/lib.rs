// Deny unused code to catch dead code early
#![deny(unused)]
// Warn on unused dependencies
#![warn(unused_crate_dependencies)]
// Warn on redundant path prefixes (e.g., std::path::Path when Path is imported)
#![warn(unused_qualifications)]
// Library code writes through the `Write` handles it is given, never straight to the terminal
#![deny(clippy::print_stdout, clippy::print_stderr)]

//noinspection RsUnusedImport
// clap and env_logger are only used by the binary target
use clap as _;
use env_logger as _;
//noinspection RsUnusedImport
// Silence false positives for dev dependencies used only in tests/
#[cfg(test)]
use assert_cmd as _;
#[cfg(test)]
use predicates as _;

pub mod config;
pub mod licensing;
pub mod prompt;
pub mod report;

pub use config::ClientConfig;
pub use licensing::{License, Outcome, ValidationClient, ValidationError, ValidationResponse};

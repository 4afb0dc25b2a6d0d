//! Shared pieces of the `skycast` binaries.
//!
//! This crate focuses on:
//! - Human-friendly report formatting
//! - Terminal prompts backed by `inquire`
//! - Logging setup and mapping errors to exit codes

pub mod exit;
pub mod logging;
pub mod prompter;
pub mod report;

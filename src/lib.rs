//! Matrixsort - deterministic execution order for build matrices
//!
//! This library orders the configurations of a multi-axis build matrix with
//! a pluggable sorter. Every sorter yields a strict total order: whenever its
//! own rule reports no preference, configurations fall back to the canonical
//! order of their combinations.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Matrix model, sorters and manifest handling
//! - [`config`] - Configuration and constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;

#[cfg(test)]
pub mod test_utils;

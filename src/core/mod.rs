//! Core business logic module
//!
//! This module contains the matrix model and the ordering logic.
//! It performs no I/O besides reading the manifest file.
//!
//! # Submodules
//!
//! - [`axis`] - Axes and combination enumeration
//! - [`combination`] - Combinations and their canonical order
//! - [`configuration`] - Build configurations
//! - [`project`] - Matrix projects
//! - [`sorter`] - Configuration sorters
//! - [`ordered`] - Strictly ordered configuration sets
//! - [`manifest`] - Manifest (matrix.toml) parsing
//! - [`check`] - Manifest validation logic

pub mod axis;
pub mod check;
pub mod combination;
pub mod configuration;
pub mod manifest;
pub mod ordered;
pub mod project;
pub mod sorter;

//! Common utilities and shared functionality.
//!
//! This module contains helper functions and data structures used across
//! all other modules in the tracker and peer codebase.
//!
//! # Utilities
//!
//! - Logging setup
//! - File kind classification for log output
//!
//! # Data Structures
//!
//! - `CustomError` - Custom error type for bootstrap call sites

/// Common data structures (errors).
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;

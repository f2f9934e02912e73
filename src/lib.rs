// file: src/lib.rs
// version: 1.0.0
// guid: 7d2f5c1a-84e3-4b9f-a6c0-93d1e8f4b7a2

//! # pros-sketchy
//!
//! A build system wrapper for PROS robotics projects. The binary resolves
//! the PROS CLI on the execution path, hands it the received arguments
//! untouched, streams its output through, and exits with the delegate's
//! exit code.

pub mod cli;
pub mod config;
pub mod error;
pub mod executor;
pub mod logging;

pub use error::{Result, WrapperError};

/// Version information for the wrapper
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// file: src/logging/mod.rs
// version: 1.0.0
// guid: 1e8b4c7a-3d95-42f6-8a1c-5b9e2d7f4a0c

//! Logging system for the PROS wrapper

pub mod logger;

pub use logger::init_logger;

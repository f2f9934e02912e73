// file: src/cli/mod.rs
// version: 1.0.0
// guid: 8c3e1b6f-4a92-47d0-b8e5-2f9a6c1d4e7b

//! Command line interface for the PROS wrapper

pub mod args;

pub use args::Cli;

// file: src/cli/args.rs
// version: 1.0.0
// guid: 5a9d3f7c-8e24-4b61-a0d9-7c3f1e8b5a2d

//! Command line argument definitions

use clap::Parser;
use std::ffi::OsString;

/// The wrapper defines no flags of its own. Help and version flags are
/// disabled so that `--help` and friends reach the delegate instead of
/// being swallowed here. Arguments stay as `OsString` so non-UTF-8 argv
/// survives the trip.
#[derive(Parser, Debug)]
#[command(name = "sketchy-pros-compiler")]
#[command(about = "A build system wrapper for PROS robotics projects")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Arguments forwarded to the PROS CLI untouched, in the order given
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "ARGS")]
    pub args: Vec<OsString>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arguments_keep_their_order() {
        let cli = Cli::parse_from(["sketchy-pros-compiler", "build", "--target", "A1"]);
        assert_eq!(cli.args, vec!["build", "--target", "A1"]);
    }

    #[test]
    fn test_empty_argument_list_is_valid() {
        let cli = Cli::parse_from(["sketchy-pros-compiler"]);
        assert!(cli.args.is_empty());
    }

    #[test]
    fn test_flag_like_arguments_are_not_intercepted() {
        let cli = Cli::parse_from(["sketchy-pros-compiler", "--help"]);
        assert_eq!(cli.args, vec!["--help"]);

        let cli = Cli::parse_from(["sketchy-pros-compiler", "-v", "--version", "upload"]);
        assert_eq!(cli.args, vec!["-v", "--version", "upload"]);
    }
}

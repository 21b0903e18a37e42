//! variant-resolve CLI entry point
//!
//! Parses command-line arguments, runs the selected command and renders
//! failures as user-friendly errors.
//!
//! - `artifacts` - list a variant's artifacts
//! - `lookup` - find one artifact by name
//! - `resolve` - resolve a variant's artifact set
//! - `variants` - show the candidate variants offered to selection

use anyhow::Result;
use clap::Parser;
use variant_resolve::cli;
use variant_resolve::core::user_friendly_error;

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = cli::Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    match cli.execute() {
        Ok(()) => Ok(()),
        Err(e) => {
            // Convert to user-friendly error with context and suggestions
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}

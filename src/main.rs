//! bunsen-tree CLI entry point
//!
//! Parses arguments, runs the selected inspection command and prints
//! failures as user-friendly errors.

use anyhow::Result;
use bunsen_tree::cli;
use bunsen_tree::core::error::user_friendly_error;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    match cli.execute() {
        Ok(()) => Ok(()),
        Err(e) => {
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}

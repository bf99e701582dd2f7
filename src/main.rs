//! Arkitect UI CLI entry point
//!
//! Parses arguments, runs the selected command and prints failures with
//! a suggestion before exiting non-zero.
//!
//! - `init` - Create components.json
//! - `add` - Install components from the registry
//! - `list` - Show the components the registry offers

use anyhow::Result;
use arkitect_cli::cli;
use arkitect_cli::core::error::user_friendly_error;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    match cli.execute().await {
        Ok(()) => Ok(()),
        Err(e) => {
            user_friendly_error(e).display();
            std::process::exit(1);
        }
    }
}

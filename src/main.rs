//! macfact: primary-interface MAC address fact.
//!
//! Entry point for the macfact binary.

use std::process::ExitCode;

use clap::Parser;
use macfact::mac::MacAddress;
use macfact::resolver::platform_resolver;

mod app;

use app::{exit_code, setup_tracing};

/// Resolves and prints the MAC address of the host's primary network
/// interface.
#[derive(Debug, Parser)]
#[command(name = "macfact")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Print the result as a JSON object
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    match platform_resolver().macaddress() {
        Ok(Some(mac)) => {
            print_result(&mac, cli.json);
            exit_code::SUCCESS
        }
        Ok(None) => {
            // Absence is a legitimate, silent outcome.
            tracing::debug!("no MAC address found");
            exit_code::NOT_FOUND
        }
        Err(e) => {
            tracing::error!("Resolution error: {e}");
            exit_code::accessor_error()
        }
    }
}

/// Prints the resolved address, plain or as a JSON object.
fn print_result(mac: &MacAddress, json: bool) {
    if json {
        println!("{}", serde_json::json!({ "macaddress": mac }));
    } else {
        println!("{mac}");
    }
}

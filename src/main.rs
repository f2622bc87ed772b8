//! fieldschema CLI entry point
//!
//! Parses arguments and dispatches through `cli::run`; errors go to
//! stderr and exit with status 1.

use fieldschema::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

//! Account Manager CLI
//!
//! Runs the interactive account menu on stdin/stdout.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity (written to stderr)

use account_manager::{Result, Session};
use std::io;
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut session = Session::new(stdin.lock(), stdout.lock());
    session.run()
}

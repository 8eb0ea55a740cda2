//! gspaces line server
//!
//! Reads one JSON request per line from stdin and writes one JSON response
//! per line to stdout. Logs go to stderr.
//!
//! Ops:
//! - arange, linspace, logspace, geomspace: a window of sequence values
//! - describe: documentation for one op
//! - list: documentation for every op
//!
//! Environment:
//! - RUST_LOG: log filter (default: info)
//! - GSPACES_MAX_ELEMENTS: most values one response may carry

mod catalog;
mod config;
mod protocol;

use config::Config;
use std::io::{self, BufRead, IsTerminal, Write};
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    init_logging();

    let config = Config::from_env();

    info!("gspaces v{} started", SERVER_VERSION);
    info!(max_elements = config.max_elements, "configuration");
    debug!(
        stdin_is_terminal = io::stdin().is_terminal(),
        stdout_is_terminal = io::stdout().is_terminal(),
        "streams"
    );

    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin.lock());

    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => {
                info!("end of input");
                break;
            }
            Ok(_) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                debug!(bytes = line.len(), "received");

                let response = protocol::handle_line(line, &config);
                if let Some(ref e) = response.error {
                    warn!(code = %e.code, "{}", e.message);
                }

                let response_json = match serde_json::to_string(&response) {
                    Ok(s) => s,
                    Err(e) => {
                        error!("Error encoding response: {}", e);
                        continue;
                    }
                };

                let mut stdout = io::stdout().lock();
                if let Err(e) = writeln!(stdout, "{}", response_json) {
                    error!("Error writing response: {}", e);
                    break;
                }
                if let Err(e) = stdout.flush() {
                    error!("Error flushing stdout: {}", e);
                    break;
                }
            }
            Err(e) => {
                error!("Error reading input: {}", e);
                break;
            }
        }
    }

    info!("shutting down");
}

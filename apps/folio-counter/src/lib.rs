//! # Folio Counter
//!
//! Console front end for the Folio POS store ledger.
//!
//! ## Module Organization
//! ```text
//! folio_counter/
//! ├── lib.rs          ◄─── You are here (logging setup & run)
//! ├── args.rs         ◄─── Command-line flags
//! ├── config.rs       ◄─── Environment configuration
//! ├── session.rs      ◄─── Interactive menu loop
//! ├── render.rs       ◄─── Text and JSON reports
//! └── error.rs        ◄─── CLI error type
//! ```

pub mod args;
pub mod config;
pub mod error;
pub mod render;
pub mod session;

use std::io;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub use args::Args;
pub use config::{AppConfig, ConfigError, OutputFormat};
pub use error::CliError;
pub use session::Session;

/// Runs the counter against the process's stdin and stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Parse flags ──────────────────────────────────────────────────────► │
/// │  2. Initialize Logging (stderr, RUST_LOG overrides the default) ──────► │
/// │  3. Load FOLIO_* environment, apply flag overrides ───────────────────► │
/// │  4. Open ledger and register, run the menu until exit ────────────────► │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> Result<(), CliError> {
    let args = Args::parse();
    init_tracing();

    let mut config = AppConfig::load()?;
    config.apply_args(&args);
    info!(
        opening_cash = %config.ledger.opening_cash,
        discount_bps = config.ledger.loyalty_discount_bps,
        policy = ?config.ledger.intake_policy,
        "Configuration loaded"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(config, stdin.lock(), stdout.lock());
    session.run()
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every menu choice and cash movement
/// - `RUST_LOG=folio_core=trace` - Trace the ledger only
/// - Default: warnings, plus info from the folio crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,folio_core=info,folio_counter=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

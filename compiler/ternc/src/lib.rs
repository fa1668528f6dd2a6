//! Tern command-line driver.
//!
//! The binary in `main.rs` only dispatches on the subcommand; everything it
//! calls lives here so it can be tested without spawning a process.

pub mod commands;
mod options;


pub use options::{parse_run_options, RunOptions};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a stderr subscriber driven by `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set, so normal runs keep stderr clean.
/// Safe to call more than once. Try `RUST_LOG=tern_eval=debug`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

//! Theatre Script driver.
//!
//! Turns line-oriented script text into VM commands and runs them:
//! [`run_script`] for whole programs, [`Repl`] for interactive sessions.
//! The `theatre` binary wraps both behind a small CLI.

pub mod commands;
mod repl;
mod script;

pub use repl::Repl;
pub use script::{
    parse_line, parse_script, run_script, run_script_with, ParseError, ScriptError,
    SCRIPT_VM_NAME,
};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber.
///
/// Only takes effect when `RUST_LOG` is set, e.g. `RUST_LOG=theatre_vm=debug`
/// or `RUST_LOG=theatre_lexer=trace`. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
    });
}

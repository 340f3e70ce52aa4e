//! Binary entry point for greeter

use std::io::{self, Write};

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use greeter::write_greeting;

fn main() -> Result<()> {
    // Logging goes to stderr so stdout carries only the three greeting lines.
    // Silent unless RUST_LOG is set.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_greeting(&mut out)?;
    out.flush()?;

    Ok(())
}

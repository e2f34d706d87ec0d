// src/system/signals.rs

use anyhow::{Context, Result};
use std::io::Write;

/// Installs the interrupt/termination handler.
///
/// Both SIGINT and SIGTERM terminate immediately: a newline goes to stderr
/// so the shell prompt lands cleanly, nothing further is written to stdout,
/// and the process exits with status 1.
pub fn install() -> Result<()> {
    ctrlc::set_handler(|| {
        let mut stderr = std::io::stderr();
        let _ = writeln!(stderr);
        std::process::exit(1);
    })
    .context("failed to install the signal handler")
}

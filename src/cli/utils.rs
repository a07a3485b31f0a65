//! Convenience helpers shared across command handlers.

use std::io::{self, Write};

use anyhow::{Context, Result};
use comphy::CommandOutput;

/// Copy a finished child's streams to ours byte for byte.
pub fn relay(output: &CommandOutput) -> Result<()> {
    if !output.stderr.is_empty() {
        io::stderr()
            .write_all(&output.stderr)
            .context("failed to relay stderr")?;
    }
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(&output.stdout)
        .context("failed to relay stdout")?;
    stdout.flush().context("failed to flush stdout")
}

/// Clap-friendly aspect ratio parser accepting `1.5` or `16:9`.
pub fn parse_ratio(input: &str) -> Result<f64, String> {
    let input = input.trim();
    if let Some((w, h)) = input.split_once(':') {
        let w: f64 = w
            .trim()
            .parse()
            .map_err(|_| format!("'{}' is not a number", w.trim()))?;
        let h: f64 = h
            .trim()
            .parse()
            .map_err(|_| format!("'{}' is not a number", h.trim()))?;
        if h == 0.0 {
            return Err("ratio height cannot be zero".to_string());
        }
        return Ok(w / h);
    }
    input
        .parse()
        .map_err(|_| format!("'{input}' is not a ratio (use 1.5 or 16:9)"))
}

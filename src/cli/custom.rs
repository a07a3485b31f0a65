//! Arbitrary command pass-through (`run-custom`).

use anyhow::Result;
use clap::Args;
use comphy::Invocation;

use crate::cli::common::Session;

/// Arguments for `comphy run-custom`.
#[derive(Args, Debug)]
pub struct RunCustomArgs {
    /// Program and arguments; a single quoted string is split on whitespace.
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

pub fn run(session: &Session, args: RunCustomArgs) -> Result<()> {
    let invocation = Invocation::from_tokens(args.command)?;
    session.forward_raw(&invocation)
}

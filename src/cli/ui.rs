//! UI lifecycle commands (`start-ui`, `stop-ui`, `status-ui`).

use anyhow::Result;
use clap::Args;
use comphy::UiCommand;

use crate::cli::common::Session;

/// Arguments for `comphy start-ui`.
#[derive(Args, Debug)]
pub struct StartUiArgs {
    /// Use the GPU if available (the default).
    #[arg(long, conflicts_with = "cpu")]
    pub gpu: bool,
    /// Run on the CPU instead (slow).
    #[arg(long)]
    pub cpu: bool,
}

pub fn start(session: &Session, args: StartUiArgs) -> Result<()> {
    session.forward(UiCommand::Start { gpu: !args.cpu })
}

pub fn stop(session: &Session) -> Result<()> {
    session.forward(UiCommand::Stop)
}

pub fn status(session: &Session) -> Result<()> {
    session.forward(UiCommand::Status)
}

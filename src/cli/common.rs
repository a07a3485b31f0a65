//! State shared by every command handler.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Args};
use comphy::{
    CommandRunner, DryRunRunner, Invocation, Settings, SystemRunner, UiCommand, dispatch,
};
use tracing::debug;

use crate::cli::utils::relay;

/// Flags accepted before or after any subcommand.
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Print the external command instead of running it.
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Program used for UI commands.
    #[arg(long, global = true, env = "COMPHY_UI_BIN", value_name = "PROGRAM")]
    pub ui_bin: Option<String>,

    /// Program used for `generate-image`.
    #[arg(long, global = true, env = "COMPHY_GENERATOR_BIN", value_name = "PROGRAM")]
    pub generator_bin: Option<String>,

    /// JSON settings file naming the programs to invoke.
    #[arg(long, global = true, env = "COMPHY_SETTINGS", value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Resolved settings plus the runner chosen by `--dry-run`.
pub struct Session {
    pub settings: Settings,
    runner: Box<dyn CommandRunner>,
}

impl Session {
    pub fn from_globals(globals: &GlobalArgs) -> Result<Self> {
        let base = match &globals.settings {
            Some(path) => Settings::load(path)
                .with_context(|| format!("failed to load settings from {}", path.display()))?,
            None => Settings::default(),
        };
        let settings = base.with_overrides(globals.ui_bin.clone(), globals.generator_bin.clone());
        debug!(?settings, dry_run = globals.dry_run, "session ready");

        let runner: Box<dyn CommandRunner> = if globals.dry_run {
            Box::new(DryRunRunner)
        } else {
            Box::new(SystemRunner)
        };
        Ok(Self { settings, runner })
    }

    /// Run a UI command and relay what it printed.
    pub fn forward(&self, command: UiCommand) -> Result<()> {
        let output = dispatch(self.runner.as_ref(), &self.settings, &command)?;
        relay(&output)
    }

    /// Run an already-built invocation and relay what it printed.
    pub fn forward_raw(&self, invocation: &Invocation) -> Result<()> {
        let output = self.runner.run(invocation)?;
        relay(&output)
    }
}

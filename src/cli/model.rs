//! Model and configuration commands.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use comphy::UiCommand;

use crate::cli::common::Session;

/// Arguments for `comphy load-model`.
#[derive(Args, Debug)]
pub struct LoadModelArgs {
    /// Checkpoint, safetensors file or diffusers directory.
    pub model_path: PathBuf,
}

/// Arguments for `comphy refresh-component`.
#[derive(Args, Debug)]
pub struct RefreshComponentArgs {
    /// Component name as known to the UI.
    pub component: String,
}

/// Arguments for `comphy set-config`.
#[derive(Args, Debug)]
pub struct SetConfigArgs {
    /// Config file listing model search paths.
    pub config_file: PathBuf,
}

pub fn load_model(session: &Session, args: LoadModelArgs) -> Result<()> {
    session.forward(UiCommand::LoadModel(args.model_path))
}

pub fn refresh(session: &Session, args: RefreshComponentArgs) -> Result<()> {
    session.forward(UiCommand::Refresh(args.component))
}

pub fn set_config(session: &Session, args: SetConfigArgs) -> Result<()> {
    session.forward(UiCommand::SetConfig(args.config_file))
}

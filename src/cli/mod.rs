//! Command-line interface wiring for the `comphy` binary.
//!
//! This module owns the clap definitions and delegates execution to
//! submodules grouped by what the command touches.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod common;
pub mod custom;
pub mod media;
pub mod model;
pub mod ui;
pub mod utils;
pub mod workflow;

use common::{GlobalArgs, Session};

/// Parsed CLI entrypoint for the `comphy` binary.
#[derive(Parser, Debug)]
#[command(name = "comphy", version, about = "CLI for automating Comphy UI commands")]
pub struct Cli {
    #[command(flatten)]
    pub globals: GlobalArgs,

    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Every operation exposed to end users.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the Comphy UI.
    StartUi(ui::StartUiArgs),
    /// Stop the Comphy UI.
    StopUi,
    /// Check the status of the Comphy UI.
    StatusUi,
    /// Load a model (ckpt, safetensors, diffusers).
    LoadModel(model::LoadModelArgs),
    /// Load a workflow from a JSON file.
    LoadWorkflow(workflow::WorkflowFileArgs),
    /// Refresh a specific component in the Comphy UI.
    RefreshComponent(model::RefreshComponentArgs),
    /// Load a full workflow from a generated image file (PNG, WebP, FLAC).
    LoadFromImage(workflow::LoadFromImageArgs),
    /// Save the current workflow to a JSON file.
    SaveWorkflow(workflow::WorkflowFileArgs),
    /// Set the config file for model search paths.
    SetConfig(model::SetConfigArgs),
    /// Run a custom command without going through a shell.
    RunCustom(custom::RunCustomArgs),
    /// Stretch an image to a target aspect ratio.
    ResizeImage(media::ResizeImageArgs),
    /// Ask the generator to render an image from a prompt.
    GenerateImage(media::GenerateImageArgs),
}

/// Execute the requested command.
///
/// Settings are only resolved for commands that spawn something, so a broken
/// settings file cannot get in the way of `resize-image`.
pub fn run(cli: Cli) -> Result<()> {
    let Cli { globals, command } = cli;
    match command {
        Command::ResizeImage(args) => media::resize(args),
        command => forward(&Session::from_globals(&globals)?, command),
    }
}

fn forward(session: &Session, command: Command) -> Result<()> {
    match command {
        Command::StartUi(args) => ui::start(session, args),
        Command::StopUi => ui::stop(session),
        Command::StatusUi => ui::status(session),
        Command::LoadModel(args) => model::load_model(session, args),
        Command::LoadWorkflow(args) => workflow::load(session, args),
        Command::RefreshComponent(args) => model::refresh(session, args),
        Command::LoadFromImage(args) => workflow::load_from_image(session, args),
        Command::SaveWorkflow(args) => workflow::save(session, args),
        Command::SetConfig(args) => model::set_config(session, args),
        Command::RunCustom(args) => custom::run(session, args),
        Command::ResizeImage(args) => media::resize(args),
        Command::GenerateImage(args) => media::generate(session, args),
    }
}

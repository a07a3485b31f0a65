//! Workflow commands (`load-workflow`, `save-workflow`, `load-from-image`).

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use comphy::UiCommand;

use crate::cli::common::Session;

/// Arguments shared by `load-workflow` and `save-workflow`.
#[derive(Args, Debug)]
pub struct WorkflowFileArgs {
    /// Workflow JSON file.
    pub workflow_file: PathBuf,
}

/// Arguments for `comphy load-from-image`.
#[derive(Args, Debug)]
pub struct LoadFromImageArgs {
    /// Generated file with an embedded workflow (PNG, WebP, FLAC).
    pub image_file: PathBuf,
}

pub fn load(session: &Session, args: WorkflowFileArgs) -> Result<()> {
    session.forward(UiCommand::LoadWorkflow(args.workflow_file))
}

pub fn save(session: &Session, args: WorkflowFileArgs) -> Result<()> {
    session.forward(UiCommand::SaveWorkflow(args.workflow_file))
}

pub fn load_from_image(session: &Session, args: LoadFromImageArgs) -> Result<()> {
    session.forward(UiCommand::LoadFromImage(args.image_file))
}

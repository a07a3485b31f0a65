//! Image commands (`resize-image`, `generate-image`).

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use comphy::{Resolution, UiCommand, resize_to_aspect};

use crate::cli::common::Session;
use crate::cli::utils::parse_ratio;

/// Arguments for `comphy resize-image`.
#[derive(Args, Debug)]
pub struct ResizeImageArgs {
    /// Source image.
    pub input: PathBuf,
    /// Target width/height ratio, e.g. `1.5` or `16:9`.
    #[arg(value_parser = parse_ratio, allow_negative_numbers = true)]
    pub ratio: f64,
    /// Destination; the extension picks the output format.
    pub output: PathBuf,
}

/// Arguments for `comphy generate-image`.
#[derive(Args, Debug)]
pub struct GenerateImageArgs {
    /// Text prompt.
    pub prompt: String,
    /// Output size as WIDTHxHEIGHT.
    pub resolution: Resolution,
    /// Where the generator should write the image.
    pub output: PathBuf,
}

pub fn resize(args: ResizeImageArgs) -> Result<()> {
    let (width, height) = resize_to_aspect(&args.input, args.ratio, &args.output)?;
    println!(
        "Resized {} to {}x{} -> {}",
        args.input.display(),
        width,
        height,
        args.output.display()
    );
    Ok(())
}

pub fn generate(session: &Session, args: GenerateImageArgs) -> Result<()> {
    session.forward(UiCommand::Generate {
        prompt: args.prompt,
        resolution: args.resolution,
        output: args.output,
    })
}

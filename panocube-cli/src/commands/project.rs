//! Project command - reproject an equirectangular image into a skybox.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use panocube::pixel::RasterImage;
use panocube::projection;
use panocube::skybox::SkyboxWriter;

use crate::error::CliError;

/// Arguments for the project command.
#[derive(Args)]
pub struct ProjectArgs {
    /// Equirectangular source image (width must be exactly 2 × height).
    pub input: PathBuf,

    /// Directory the six face images are written to.
    #[arg(long, short, default_value = "skybox")]
    pub output: PathBuf,
}

pub fn run(args: ProjectArgs) -> Result<(), CliError> {
    let bytes = fs::read(&args.input).map_err(|source| CliError::Read {
        path: args.input.clone(),
        source,
    })?;
    let source = RasterImage::from_bytes(&bytes).map_err(|source| CliError::Decode {
        path: args.input.clone(),
        source,
    })?;

    let cubemap = projection::project(&source)?;
    let faces = SkyboxWriter::new(&args.output).write(&cubemap)?;

    println!(
        "{} faces of {}px written to {}",
        faces.len(),
        cubemap.face_size(),
        args.output.display()
    );
    Ok(())
}

//! CLI error type.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced to the user by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Config(String),

    #[error("reading {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Provider(#[from] panocube::provider::ProviderError),

    #[error(transparent)]
    Fetch(#[from] panocube::fetch::FetchError),

    #[error(transparent)]
    Pipeline(#[from] panocube::pipeline::PipelineError),

    #[error(transparent)]
    Projection(#[from] panocube::projection::ProjectionError),

    #[error(transparent)]
    Skybox(#[from] panocube::skybox::SkyboxError),

    #[error("decoding {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

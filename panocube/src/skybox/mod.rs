//! Skybox output: encode cube faces to disk.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use image::codecs::jpeg::JpegEncoder;
use thiserror::Error;
use tracing::info;

use crate::projection::{CubeFace, Cubemap};

/// JPEG quality used for face output.
const DEFAULT_QUALITY: u8 = 85;

/// Errors raised while writing skybox faces.
#[derive(Debug, Error)]
pub enum SkyboxError {
    #[error("I/O at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("encoding {face} face: {source}")]
    Encode {
        face: &'static str,
        #[source]
        source: image::ImageError,
    },
}

/// Writes the six faces of a cube map as `{face}.jpg` files.
#[derive(Debug, Clone)]
pub struct SkyboxWriter {
    out_dir: PathBuf,
    quality: u8,
}

impl SkyboxWriter {
    /// Creates a writer targeting `out_dir`, JPEG quality 85.
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            quality: DEFAULT_QUALITY,
        }
    }

    /// Overrides the JPEG quality (1-100).
    pub fn with_quality(mut self, quality: u8) -> Self {
        self.quality = quality.clamp(1, 100);
        self
    }

    /// The target directory.
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Writes all six faces, creating the directory if needed.
    ///
    /// Returns the written paths in canonical face order.
    pub fn write(&self, cubemap: &Cubemap) -> Result<Vec<PathBuf>, SkyboxError> {
        fs::create_dir_all(&self.out_dir).map_err(|source| SkyboxError::Io {
            path: self.out_dir.clone(),
            source,
        })?;

        let mut paths = Vec::with_capacity(6);
        for (face, image) in cubemap.iter() {
            paths.push(self.write_face(face, image.as_rgb())?);
        }

        info!(
            dir = %self.out_dir.display(),
            face_size = cubemap.face_size(),
            "skybox written"
        );
        Ok(paths)
    }

    fn write_face(&self, face: CubeFace, image: &image::RgbImage) -> Result<PathBuf, SkyboxError> {
        let path = self.out_dir.join(format!("{}.jpg", face.name()));
        let file = File::create(&path).map_err(|source| SkyboxError::Io {
            path: path.clone(),
            source,
        })?;

        let encoder = JpegEncoder::new_with_quality(BufWriter::new(file), self.quality);
        image
            .write_with_encoder(encoder)
            .map_err(|source| SkyboxError::Encode {
                face: face.name(),
                source,
            })?;
        Ok(path)
    }
}

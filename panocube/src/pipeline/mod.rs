//! End-to-end pipeline: fetch → assemble → project → write.
//!
//! The stages are strictly sequential; each hands one value to the next.
//! Tile fetch failures are isolated upstream, but an aspect-ratio error
//! from the projector aborts the run before any face is written.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use crate::assemble::{AssembleError, GridAssembler, GridTile};
use crate::fetch::{FetchError, FetchReport, TileFetcher, TileStore};
use crate::pixel::RasterImage;
use crate::projection::{self, ProjectionError};
use crate::provider::TileProvider;
use crate::skybox::{SkyboxError, SkyboxWriter};

/// File name of the assembled panorama written next to the faces.
const PANORAMA_FILE: &str = "pano_image.jpg";

/// Errors that abort a pipeline run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Assemble(#[from] AssembleError),

    #[error(transparent)]
    Projection(#[from] ProjectionError),

    #[error(transparent)]
    Skybox(#[from] SkyboxError),

    #[error("writing panorama to {path}: {source}")]
    PanoramaWrite {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// What a completed pipeline run produced.
#[derive(Debug)]
pub struct PipelineSummary {
    /// Tile download counters.
    pub fetch: FetchReport,
    /// Path of the assembled equirectangular panorama.
    pub panorama: PathBuf,
    /// Derived cube face edge length.
    pub face_size: u32,
    /// Paths of the six face images, in canonical order.
    pub faces: Vec<PathBuf>,
}

/// Runs the full panorama pipeline for one provider.
///
/// Tiles land in `store`; the assembled panorama and the six skybox
/// faces land in `out_dir`. Tiles that fail to download or decode are
/// skipped with a warning, leaving their canvas region black; only an
/// empty tile set or a malformed assembly aborts the run.
pub fn run<P: TileProvider>(
    provider: &P,
    store: &TileStore,
    out_dir: &Path,
    parallelism: usize,
) -> Result<PipelineSummary, PipelineError> {
    let grid = provider.grid();
    let outcome = TileFetcher::new(provider)
        .with_parallelism(parallelism)
        .fetch_grid(store)?;

    let mut tiles = Vec::with_capacity(outcome.tiles.len());
    for fetched in &outcome.tiles {
        let bytes = store.read(&fetched.coord.file_name())?;
        match RasterImage::from_bytes(&bytes) {
            Ok(image) => tiles.push(GridTile {
                coord: fetched.coord,
                image,
            }),
            Err(e) => warn!(tile = %fetched.coord, error = %e, "undecodable tile skipped"),
        }
    }

    let panorama = GridAssembler::new(grid.rows, grid.cols).assemble(&tiles)?;

    let panorama_path = out_dir.join(PANORAMA_FILE);
    std::fs::create_dir_all(out_dir).map_err(|source| {
        PipelineError::Fetch(FetchError::Io {
            path: out_dir.to_path_buf(),
            source,
        })
    })?;
    panorama
        .as_rgb()
        .save(&panorama_path)
        .map_err(|source| PipelineError::PanoramaWrite {
            path: panorama_path.clone(),
            source,
        })?;
    info!(path = %panorama_path.display(), "panorama saved");

    let cubemap = projection::project(&panorama)?;
    let faces = SkyboxWriter::new(out_dir).write(&cubemap)?;

    Ok(PipelineSummary {
        fetch: outcome.report,
        panorama: panorama_path,
        face_size: cubemap.face_size(),
        faces,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::ProviderError;
    use crate::tile::{GridShape, TileCoord};
    use tempfile::TempDir;

    /// Serves JPEG-encoded uniform tiles for a 2×2 grid of 8×8 tiles,
    /// producing a 16×8 panorama and face size 4.
    struct JpegTileProvider {
        missing: Option<TileCoord>,
    }

    impl JpegTileProvider {
        fn encode_tile(color: [u8; 3]) -> Vec<u8> {
            let tile = RasterImage::filled(8, 8, color);
            let mut bytes = Vec::new();
            tile.as_rgb()
                .write_to(
                    &mut std::io::Cursor::new(&mut bytes),
                    image::ImageFormat::Jpeg,
                )
                .unwrap();
            bytes
        }
    }

    impl TileProvider for JpegTileProvider {
        fn fetch_tile(&self, coord: TileCoord) -> Result<Vec<u8>, ProviderError> {
            if self.missing == Some(coord) {
                return Err(ProviderError::Http("unavailable".to_string()));
            }
            Ok(Self::encode_tile([100, 100, 100]))
        }

        fn grid(&self) -> GridShape {
            GridShape::new(2, 2)
        }

        fn zoom(&self) -> u8 {
            4
        }

        fn name(&self) -> &str {
            "jpeg-mock"
        }
    }

    #[test]
    fn test_full_run_produces_panorama_and_faces() {
        let tiles_dir = TempDir::new().unwrap();
        let out_dir = TempDir::new().unwrap();
        let store = TileStore::new(tiles_dir.path());
        let provider = JpegTileProvider { missing: None };

        let summary = run(&provider, &store, out_dir.path(), 2).unwrap();

        assert_eq!(summary.fetch.fetched, 4);
        assert_eq!(summary.face_size, 4);
        assert_eq!(summary.faces.len(), 6);
        assert!(summary.panorama.exists());
        for face in &summary.faces {
            assert!(face.exists());
        }

        let panorama = image::open(&summary.panorama).unwrap();
        assert_eq!((panorama.width(), panorama.height()), (16, 8));
    }

    #[test]
    fn test_run_survives_a_missing_tile() {
        let tiles_dir = TempDir::new().unwrap();
        let out_dir = TempDir::new().unwrap();
        let store = TileStore::new(tiles_dir.path());
        let provider = JpegTileProvider {
            missing: Some(TileCoord::new(0, 1, 4)),
        };

        let summary = run(&provider, &store, out_dir.path(), 2).unwrap();
        assert_eq!(summary.fetch.failed, 1);
        assert_eq!(summary.faces.len(), 6);
    }

    #[test]
    fn test_run_with_no_tiles_is_empty_source_set() {
        struct EmptyProvider;
        impl TileProvider for EmptyProvider {
            fn fetch_tile(&self, _coord: TileCoord) -> Result<Vec<u8>, ProviderError> {
                Err(ProviderError::Http("always down".to_string()))
            }
            fn grid(&self) -> GridShape {
                GridShape::new(1, 1)
            }
            fn zoom(&self) -> u8 {
                4
            }
            fn name(&self) -> &str {
                "empty"
            }
        }

        let tiles_dir = TempDir::new().unwrap();
        let out_dir = TempDir::new().unwrap();
        let store = TileStore::new(tiles_dir.path());

        let err = run(&EmptyProvider, &store, out_dir.path(), 1).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Assemble(AssembleError::EmptySourceSet)
        ));
    }
}

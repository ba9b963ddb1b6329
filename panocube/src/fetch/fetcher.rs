//! Bounded-parallelism tile fetcher.

use std::path::PathBuf;

use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::store::TileStore;
use super::DEFAULT_PARALLELISM;
use crate::provider::TileProvider;
use crate::tile::TileCoord;

/// Errors that abort a fetch run as a whole.
///
/// Per-tile download failures are not in here: they are isolated,
/// logged, and counted in [`FetchReport::failed`].
#[derive(Debug, Error)]
pub enum FetchError {
    /// Tile store I/O failure.
    #[error("tile store I/O at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The download worker pool could not be built.
    #[error("failed to build worker pool: {0}")]
    WorkerPool(String),
}

/// A tile materialized in the local store, either freshly downloaded or
/// found there from an earlier run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedTile {
    pub coord: TileCoord,
    pub path: PathBuf,
}

/// Counters for one fetch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchReport {
    /// Tiles in the grid.
    pub total: usize,
    /// Tiles downloaded during this run.
    pub fetched: usize,
    /// Tiles already present and skipped.
    pub skipped: usize,
    /// Tiles whose download failed.
    pub failed: usize,
}

/// Result of a completed fetch run: the materialized tiles plus counters.
#[derive(Debug)]
pub struct FetchOutcome {
    /// Tiles available in the store, in grid row-major order.
    pub tiles: Vec<FetchedTile>,
    pub report: FetchReport,
}

enum TileStatus {
    Fetched(FetchedTile),
    Skipped(FetchedTile),
    Failed,
}

/// Downloads a panorama tile grid into a [`TileStore`].
pub struct TileFetcher<P> {
    provider: P,
    parallelism: usize,
}

impl<P: TileProvider> TileFetcher<P> {
    /// Creates a fetcher with the default worker count.
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            parallelism: DEFAULT_PARALLELISM,
        }
    }

    /// Sets the number of concurrent download workers (minimum 1).
    pub fn with_parallelism(mut self, parallelism: usize) -> Self {
        self.parallelism = parallelism.max(1);
        self
    }

    /// Fetches every tile of the provider's grid into `store`.
    ///
    /// Tiles already present are skipped. A failed tile is logged and
    /// counted but does not abort the run; the returned tile list holds
    /// only the tiles that are actually on disk. The call blocks until
    /// all workers have settled.
    pub fn fetch_grid(&self, store: &TileStore) -> Result<FetchOutcome, FetchError> {
        let grid = self.provider.grid();
        let zoom = self.provider.zoom();
        let coords: Vec<TileCoord> = grid.coords(zoom).collect();

        info!(
            provider = self.provider.name(),
            tiles = coords.len(),
            workers = self.parallelism,
            "fetching tile grid"
        );

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.parallelism)
            .build()
            .map_err(|e| FetchError::WorkerPool(e.to_string()))?;

        // collect() is the completion barrier: every spawned tile task
        // settles before the run proceeds to assembly.
        let statuses: Vec<TileStatus> = pool.install(|| {
            coords
                .par_iter()
                .map(|&coord| self.fetch_one(store, coord))
                .collect()
        });

        let mut outcome = FetchOutcome {
            tiles: Vec::with_capacity(statuses.len()),
            report: FetchReport {
                total: coords.len(),
                ..FetchReport::default()
            },
        };
        for status in statuses {
            match status {
                TileStatus::Fetched(tile) => {
                    outcome.report.fetched += 1;
                    outcome.tiles.push(tile);
                }
                TileStatus::Skipped(tile) => {
                    outcome.report.skipped += 1;
                    outcome.tiles.push(tile);
                }
                TileStatus::Failed => outcome.report.failed += 1,
            }
        }

        info!(
            fetched = outcome.report.fetched,
            skipped = outcome.report.skipped,
            failed = outcome.report.failed,
            "tile grid fetch complete"
        );
        Ok(outcome)
    }

    fn fetch_one(&self, store: &TileStore, coord: TileCoord) -> TileStatus {
        let name = coord.file_name();
        if store.contains(&name) {
            debug!(tile = %coord, "already present, skipping");
            return TileStatus::Skipped(FetchedTile {
                coord,
                path: store.path(&name),
            });
        }

        let bytes = match self.provider.fetch_tile(coord) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(tile = %coord, error = %e, "tile download failed");
                return TileStatus::Failed;
            }
        };

        match store.write(&name, &bytes) {
            Ok(path) => {
                debug!(tile = %coord, size = bytes.len(), "tile downloaded");
                TileStatus::Fetched(FetchedTile { coord, path })
            }
            Err(e) => {
                warn!(tile = %coord, error = %e, "tile write failed");
                TileStatus::Failed
            }
        }
    }
}

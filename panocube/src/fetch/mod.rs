//! Tile download stage.
//!
//! [`TileFetcher`] pulls every tile of a panorama grid through a
//! [`crate::provider::TileProvider`] with bounded parallelism, storing
//! results in a [`TileStore`]. Guarantees:
//!
//! - tiles already present in the store are skipped, not re-downloaded
//! - one tile's failure never aborts its siblings
//! - the call returns only after every submitted tile settled
//!
//! [`Manifest`] covers the second ingest path: a text manifest listing
//! relative file paths to mirror from a base URL.

mod fetcher;
mod manifest;
mod store;

pub use fetcher::{FetchError, FetchOutcome, FetchReport, FetchedTile, TileFetcher};
pub use manifest::{fetch_manifest, Manifest, ManifestEntry};
pub use store::TileStore;

/// Default number of concurrent download workers.
pub const DEFAULT_PARALLELISM: usize = 10;

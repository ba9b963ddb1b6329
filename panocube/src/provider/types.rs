//! Provider trait and errors.

use thiserror::Error;

use crate::tile::{GridShape, TileCoord};

/// Errors raised while retrieving a tile from a provider.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProviderError {
    /// Transport-level failure (connect, timeout, read).
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Server answered with a non-success status code.
    #[error("HTTP status {status} from {url}")]
    Status { status: u16, url: String },
}

/// Source of tiles for a single panorama.
///
/// Implementations must be thread-safe; the fetcher calls
/// [`TileProvider::fetch_tile`] from multiple workers concurrently.
pub trait TileProvider: Send + Sync {
    /// Downloads the raw encoded bytes of one tile.
    fn fetch_tile(&self, coord: TileCoord) -> Result<Vec<u8>, ProviderError>;

    /// The tile grid this provider serves.
    fn grid(&self) -> GridShape;

    /// Zoom level tiles are requested at.
    fn zoom(&self) -> u8;

    /// Human-readable provider name, for logs.
    fn name(&self) -> &str;
}

impl<P: TileProvider + ?Sized> TileProvider for &P {
    fn fetch_tile(&self, coord: TileCoord) -> Result<Vec<u8>, ProviderError> {
        (**self).fetch_tile(coord)
    }

    fn grid(&self) -> GridShape {
        (**self).grid()
    }

    fn zoom(&self) -> u8 {
        (**self).zoom()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

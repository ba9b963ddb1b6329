//! Street-view panorama tile provider.
//!
//! Panoramas are addressed by a scene id (`sid`) and served as a fixed
//! 8×8 grid of JPEG tiles at zoom level 4. The tile endpoint takes the
//! grid position as a `pos={row}_{col}` query parameter:
//!
//! `{base}/?qt=pdata&sid={sid}&pos={row}_{col}&z={zoom}`

use super::{HttpClient, ProviderError, TileProvider};
use crate::tile::{GridShape, TileCoord};

/// Default tile endpoint.
pub const DEFAULT_BASE_URL: &str = "https://mapsv1.bdimg.com";

/// Grid served at zoom 4: 8 rows by 8 columns.
const GRID: GridShape = GridShape { rows: 8, cols: 8 };

/// Zoom level the 8×8 grid is published at.
const ZOOM: u8 = 4;

/// Tile provider for sid-addressed street-view panoramas.
pub struct StreetViewProvider<C: HttpClient> {
    http: C,
    base_url: String,
    sid: String,
}

impl<C: HttpClient> StreetViewProvider<C> {
    /// Creates a provider for one panorama scene id.
    pub fn new(http: C, sid: impl Into<String>) -> Self {
        Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
            sid: sid.into(),
        }
    }

    /// Overrides the tile endpoint, e.g. for a mirror or a test server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// The scene id this provider serves.
    pub fn sid(&self) -> &str {
        &self.sid
    }

    fn tile_url(&self, coord: TileCoord) -> String {
        format!(
            "{}/?qt=pdata&sid={}&pos={}_{}&z={}",
            self.base_url, self.sid, coord.row, coord.col, coord.zoom
        )
    }
}

impl<C: HttpClient> TileProvider for StreetViewProvider<C> {
    fn fetch_tile(&self, coord: TileCoord) -> Result<Vec<u8>, ProviderError> {
        self.http.get(&self.tile_url(coord))
    }

    fn grid(&self) -> GridShape {
        GRID
    }

    fn zoom(&self) -> u8 {
        ZOOM
    }

    fn name(&self) -> &str {
        "street-view"
    }
}

//! Panorama tile grid coordinates.
//!
//! A panorama is served as a grid of equally sized tiles addressed by
//! `(row, col)` at a fixed provider zoom level. This module defines the
//! coordinate types shared by the fetcher and the assembler, plus the
//! on-disk tile naming scheme (`{row}_{col}_z{zoom}.jpg`) from which
//! coordinates are recoverable.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

/// Position of one tile within a panorama grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileCoord {
    /// Grid row, 0 at the top.
    pub row: u32,
    /// Grid column, 0 at the left.
    pub col: u32,
    /// Provider zoom level the tile was served at.
    pub zoom: u8,
}

impl TileCoord {
    /// Creates a tile coordinate.
    pub fn new(row: u32, col: u32, zoom: u8) -> Self {
        Self { row, col, zoom }
    }

    /// On-disk file name for this tile: `{row}_{col}_z{zoom}.jpg`.
    pub fn file_name(&self) -> String {
        format!("{}_{}_z{}.jpg", self.row, self.col, self.zoom)
    }

    /// Recovers a tile coordinate from a file name produced by
    /// [`TileCoord::file_name`]. Returns `None` for anything else.
    pub fn from_file_name(name: &str) -> Option<Self> {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        let pattern = PATTERN
            .get_or_init(|| Regex::new(r"^(\d+)_(\d+)_z(\d+)\.jpg$").expect("valid tile pattern"));

        let captures = pattern.captures(name)?;
        let row = captures[1].parse().ok()?;
        let col = captures[2].parse().ok()?;
        let zoom = captures[3].parse().ok()?;
        Some(Self { row, col, zoom })
    }
}

impl fmt::Display for TileCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}) z{}", self.row, self.col, self.zoom)
    }
}

/// Dimensions of a panorama tile grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridShape {
    /// Number of tile rows.
    pub rows: u32,
    /// Number of tile columns.
    pub cols: u32,
}

impl GridShape {
    /// Creates a grid shape.
    pub fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }

    /// Total number of tiles in the grid.
    pub fn tile_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Iterates all tile coordinates in row-major order at the given zoom.
    pub fn coords(&self, zoom: u8) -> impl Iterator<Item = TileCoord> + '_ {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| TileCoord::new(row, col, zoom)))
    }
}

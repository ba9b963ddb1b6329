//! Grid assembly: tiles to one equirectangular canvas.
//!
//! Tiles are pasted at `(col × tileW, row × tileH)` onto a canvas of
//! `cols × tileW` by `rows × tileH / 2` pixels. The halved height matches
//! the published tile grids, whose lower half duplicates padding rather
//! than image content; pastes extending past the canvas are clipped.

use std::fmt;

use image::imageops;
use tracing::{debug, info};

use crate::pixel::RasterImage;
use crate::tile::TileCoord;

/// Errors raised while assembling a tile grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssembleError {
    /// No tiles were available to assemble.
    EmptySourceSet,
    /// A tile's dimensions differ from the first tile's.
    TileSizeMismatch {
        coord: TileCoord,
        expected: (u32, u32),
        actual: (u32, u32),
    },
}

impl fmt::Display for AssembleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssembleError::EmptySourceSet => write!(f, "no tiles to assemble"),
            AssembleError::TileSizeMismatch {
                coord,
                expected,
                actual,
            } => write!(
                f,
                "tile {} is {}×{}, expected {}×{}",
                coord, actual.0, actual.1, expected.0, expected.1
            ),
        }
    }
}

impl std::error::Error for AssembleError {}

/// A decoded tile tagged with its grid position.
#[derive(Debug, Clone)]
pub struct GridTile {
    pub coord: TileCoord,
    pub image: RasterImage,
}

/// Composes coordinate-tagged tiles into one panorama canvas.
#[derive(Debug, Clone, Copy)]
pub struct GridAssembler {
    rows: u32,
    cols: u32,
}

impl GridAssembler {
    /// Creates an assembler for a `rows` × `cols` tile grid.
    pub fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }

    /// Assembles `tiles` into a single canvas.
    ///
    /// All tiles must share the dimensions of the first tile. Missing
    /// tiles leave their region black; tiles whose paste region lies
    /// below the halved canvas are clipped away entirely.
    pub fn assemble(&self, tiles: &[GridTile]) -> Result<RasterImage, AssembleError> {
        let first = tiles.first().ok_or(AssembleError::EmptySourceSet)?;
        let (tile_w, tile_h) = (first.image.as_rgb().width(), first.image.as_rgb().height());

        for tile in tiles {
            let (w, h) = (tile.image.as_rgb().width(), tile.image.as_rgb().height());
            if (w, h) != (tile_w, tile_h) {
                return Err(AssembleError::TileSizeMismatch {
                    coord: tile.coord,
                    expected: (tile_w, tile_h),
                    actual: (w, h),
                });
            }
        }

        let canvas_w = self.cols * tile_w;
        let canvas_h = self.rows * tile_h / 2;
        debug!(
            width = canvas_w,
            height = canvas_h,
            tiles = tiles.len(),
            "assembling panorama canvas"
        );

        let mut canvas = image::RgbImage::new(canvas_w, canvas_h);
        for tile in tiles {
            let x = i64::from(tile.coord.col) * i64::from(tile_w);
            let y = i64::from(tile.coord.row) * i64::from(tile_h);
            // replace() clips pastes that extend past the canvas.
            imageops::replace(&mut canvas, tile.image.as_rgb(), x, y);
        }

        info!(width = canvas_w, height = canvas_h, "panorama assembled");
        Ok(RasterImage::from_rgb(canvas))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::PixelBuffer;

    fn tile(row: u32, col: u32, w: u32, h: u32, color: [u8; 3]) -> GridTile {
        GridTile {
            coord: TileCoord::new(row, col, 4),
            image: RasterImage::filled(w, h, color),
        }
    }

    #[test]
    fn test_empty_source_set() {
        let assembler = GridAssembler::new(2, 2);
        assert_eq!(
            assembler.assemble(&[]).unwrap_err(),
            AssembleError::EmptySourceSet
        );
    }

    #[test]
    fn test_canvas_dimensions_halve_grid_height() {
        let assembler = GridAssembler::new(8, 8);
        let tiles: Vec<_> = (0..8)
            .flat_map(|r| (0..8).map(move |c| tile(r, c, 4, 4, [1, 1, 1])))
            .collect();

        let canvas = assembler.assemble(&tiles).unwrap();
        assert_eq!(canvas.width(), 32);
        assert_eq!(canvas.height(), 16);
    }

    #[test]
    fn test_tiles_pasted_at_grid_positions() {
        let assembler = GridAssembler::new(2, 2);
        let tiles = vec![
            tile(0, 0, 4, 4, [10, 0, 0]),
            tile(0, 1, 4, 4, [0, 20, 0]),
            tile(1, 0, 4, 4, [0, 0, 30]),
            tile(1, 1, 4, 4, [40, 40, 40]),
        ];

        // Canvas is 8×4: only row 0 survives the halved height.
        let canvas = assembler.assemble(&tiles).unwrap();
        assert_eq!(canvas.width(), 8);
        assert_eq!(canvas.height(), 4);
        assert_eq!(canvas.pixel(0, 0), [10, 0, 0]);
        assert_eq!(canvas.pixel(3, 3), [10, 0, 0]);
        assert_eq!(canvas.pixel(4, 0), [0, 20, 0]);
        assert_eq!(canvas.pixel(7, 3), [0, 20, 0]);
    }

    #[test]
    fn test_partial_bottom_row_is_clipped() {
        // 1×1 grid of an 4×4 tile: canvas is 4×2, bottom half clipped.
        let assembler = GridAssembler::new(1, 1);
        let mut image = RasterImage::filled(4, 4, [5, 5, 5]);
        image.set_pixel(0, 3, [99, 99, 99]);
        let tiles = vec![GridTile {
            coord: TileCoord::new(0, 0, 4),
            image,
        }];

        let canvas = assembler.assemble(&tiles).unwrap();
        assert_eq!(canvas.height(), 2);
        assert_eq!(canvas.pixel(0, 0), [5, 5, 5]);
        assert_eq!(canvas.pixel(0, 1), [5, 5, 5]);
    }

    #[test]
    fn test_missing_tiles_leave_black_region() {
        let assembler = GridAssembler::new(2, 2);
        let tiles = vec![tile(0, 0, 2, 2, [255, 255, 255])];

        let canvas = assembler.assemble(&tiles).unwrap();
        assert_eq!(canvas.width(), 4);
        assert_eq!(canvas.height(), 2);
        assert_eq!(canvas.pixel(0, 0), [255, 255, 255]);
        assert_eq!(canvas.pixel(3, 0), [0, 0, 0]);
    }

    #[test]
    fn test_tile_size_mismatch() {
        let assembler = GridAssembler::new(1, 2);
        let tiles = vec![tile(0, 0, 4, 4, [1, 1, 1]), tile(0, 1, 2, 4, [2, 2, 2])];

        let err = assembler.assemble(&tiles).unwrap_err();
        assert!(matches!(err, AssembleError::TileSizeMismatch { .. }));
        assert_eq!(err.to_string(), "tile (0, 1) z4 is 2×4, expected 4×4");
    }

    #[test]
    fn test_eight_by_eight_grid_yields_two_to_one_canvas() {
        // The standard street-view grid must produce a 2:1 panorama.
        let assembler = GridAssembler::new(8, 8);
        let tiles: Vec<_> = (0..8)
            .flat_map(|r| (0..8).map(move |c| tile(r, c, 8, 8, [3, 3, 3])))
            .collect();

        let canvas = assembler.assemble(&tiles).unwrap();
        assert_eq!(canvas.width(), canvas.height() * 2);
    }
}

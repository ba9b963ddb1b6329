//! Panocube - 360° panorama tiles to skybox cube maps
//!
//! This library downloads the tile grid of a street-view panorama,
//! assembles the tiles into one 2:1 equirectangular image, and
//! reprojects that image into the six faces of a skybox cube map.
//!
//! # Stages
//!
//! ```text
//! provider ──► fetch ──► assemble ──► projection ──► skybox
//! (tile URLs)  (store)   (2:1 canvas)  (6 faces)      (JPEG out)
//! ```
//!
//! The [`projection`] module is the core: the inverse spherical mapping
//! from cube-face pixels to equirectangular source pixels. It operates
//! on the [`pixel::PixelBuffer`] abstraction and knows nothing about
//! codecs or the network. [`pipeline::run`] wires all stages together.

pub mod assemble;
pub mod fetch;
pub mod pipeline;
pub mod pixel;
pub mod projection;
pub mod provider;
pub mod skybox;
pub mod tile;

//! Equirectangular-to-cubemap reprojection (the core of this crate).
//!
//! Given one 2:1 equirectangular panorama, [`project`] produces the six
//! square faces of a skybox cube map by inverse spherical projection:
//! each face pixel is mapped to a 3D direction on the cube surface
//! ([`CubeFace::direction`]), converted to spherical coordinates, and
//! filled with the nearest source pixel.
//!
//! The face edge length is derived from the source, `W / 4`, never
//! configured. Sources that are not exactly 2:1 are rejected up front
//! with [`ProjectionError::AspectRatioMismatch`]; a mis-shaped source
//! would not fail later, it would silently produce a geometrically
//! wrong but plausible-looking skybox.

mod error;
mod face;
mod projector;

pub use error::ProjectionError;
pub use face::CubeFace;
pub use projector::{derive_face_size, project, project_face, Cubemap};

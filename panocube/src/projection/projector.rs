//! The projection kernel: spherical sampling and face rendering.

use std::f64::consts::PI;

use rayon::prelude::*;
use tracing::debug;

use super::error::ProjectionError;
use super::face::CubeFace;
use crate::pixel::{PixelBuffer, RasterImage, Rgb};

/// The six rendered faces of one panorama, all sharing a face size.
#[derive(Debug, Clone)]
pub struct Cubemap {
    face_size: u32,
    faces: [RasterImage; 6],
}

impl Cubemap {
    /// Edge length of every face, in pixels.
    pub fn face_size(&self) -> u32 {
        self.face_size
    }

    /// Borrows one face image.
    pub fn face(&self, face: CubeFace) -> &RasterImage {
        let index = CubeFace::ALL.iter().position(|f| *f == face).unwrap_or(0);
        &self.faces[index]
    }

    /// Iterates faces in canonical order (front, back, left, right, top,
    /// bottom).
    pub fn iter(&self) -> impl Iterator<Item = (CubeFace, &RasterImage)> {
        CubeFace::ALL.into_iter().zip(self.faces.iter())
    }
}

/// Derives the cube face edge length from source dimensions.
///
/// Requires `height = width / 2` exactly; the face size is `width / 4`.
/// A 4096×2048 panorama yields 1024-pixel faces.
pub fn derive_face_size(width: u32, height: u32) -> Result<u32, ProjectionError> {
    if height == 0 || width != height * 2 {
        return Err(ProjectionError::AspectRatioMismatch { width, height });
    }
    let face_size = width / 4;
    if face_size == 0 {
        return Err(ProjectionError::SourceTooSmall { width });
    }
    Ok(face_size)
}

/// Projects an equirectangular source into all six cube faces.
///
/// Faces are independent and rendered in parallel over the read-only
/// source. Fails before producing any output if the source is not 2:1.
pub fn project<S>(source: &S) -> Result<Cubemap, ProjectionError>
where
    S: PixelBuffer + Sync,
{
    let face_size = derive_face_size(source.width(), source.height())?;
    debug!(face_size, "projecting cube map");

    let rendered: Vec<RasterImage> = CubeFace::ALL
        .par_iter()
        .map(|&face| {
            let mut dest = RasterImage::new(face_size, face_size);
            fill_face(source, face, face_size, &mut dest);
            dest
        })
        .collect();

    let faces: [RasterImage; 6] = rendered
        .try_into()
        .unwrap_or_else(|_| unreachable!("six faces rendered"));

    Ok(Cubemap { face_size, faces })
}

/// Projects a single face into a caller-supplied buffer.
///
/// The buffer must be square with the derived face size; every one of
/// its pixels is written exactly once.
pub fn project_face<S, D>(source: &S, face: CubeFace, dest: &mut D) -> Result<(), ProjectionError>
where
    S: PixelBuffer,
    D: PixelBuffer,
{
    let face_size = derive_face_size(source.width(), source.height())?;
    if dest.width() != face_size || dest.height() != face_size {
        return Err(ProjectionError::FaceBufferMismatch {
            expected: face_size,
            width: dest.width(),
            height: dest.height(),
        });
    }
    fill_face(source, face, face_size, dest);
    Ok(())
}

/// Renders one face. `dest` must be `face_size` × `face_size`.
fn fill_face<S, D>(source: &S, face: CubeFace, face_size: u32, dest: &mut D)
where
    S: PixelBuffer,
    D: PixelBuffer,
{
    let hsize = f64::from(face_size) / 2.0;
    for ax_a in 0..face_size {
        for ax_b in 0..face_size {
            let direction = face.direction(ax_a, ax_b, hsize);
            let sample = sample_equirect(source, direction);
            let (x, y) = face.placement(ax_a, ax_b, face_size);
            dest.set_pixel(x, y, sample);
        }
    }
}

/// Nearest-neighbor sample of the source pixel a direction points at.
///
/// The azimuth is negated to match the source's winding, then shifted by
/// π so the full (−π, π] range maps into [0, 2π) before scaling; the
/// equirectangular center column is therefore the forward (+x) heading.
/// Indices are clamped to guard float overflow at exact boundary angles.
fn sample_equirect<S: PixelBuffer>(source: &S, direction: [f64; 3]) -> Rgb {
    let [x, y, z] = direction;
    let r = (x * x + y * y + z * z).sqrt();
    let theta = (z / r).acos();
    let phi = -y.atan2(x);

    let width = source.width();
    let height = source.height();
    let ix = (f64::from(width - 1) * (phi + PI) / (2.0 * PI)).floor() as i64;
    let iy = (f64::from(height - 1) * theta / PI).floor() as i64;

    let ix = ix.clamp(0, i64::from(width) - 1) as u32;
    let iy = iy.clamp(0, i64::from(height) - 1) as u32;
    source.pixel(ix, iy)
}

//! Error types for cubemap projection.

use std::fmt;

/// Errors that can occur during cubemap projection.
///
/// All of these are raised before any face pixel is written; a failed
/// projection produces no output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectionError {
    /// Source image is not exactly 2:1 (width = 2 × height).
    AspectRatioMismatch { width: u32, height: u32 },
    /// Source is too narrow to derive a nonzero face size (width < 4).
    SourceTooSmall { width: u32 },
    /// A caller-supplied face buffer does not match the derived face size.
    FaceBufferMismatch {
        expected: u32,
        width: u32,
        height: u32,
    },
}

impl fmt::Display for ProjectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectionError::AspectRatioMismatch { width, height } => write!(
                f,
                "source is {}×{}, expected 2:1 aspect ratio (width = 2 × height)",
                width, height
            ),
            ProjectionError::SourceTooSmall { width } => {
                write!(f, "source width {} is too small to derive a face size", width)
            }
            ProjectionError::FaceBufferMismatch {
                expected,
                width,
                height,
            } => write!(
                f,
                "face buffer is {}×{}, expected {}×{}",
                width, height, expected, expected
            ),
        }
    }
}

impl std::error::Error for ProjectionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aspect_ratio_mismatch_display() {
        let err = ProjectionError::AspectRatioMismatch {
            width: 100,
            height: 51,
        };
        assert_eq!(
            err.to_string(),
            "source is 100×51, expected 2:1 aspect ratio (width = 2 × height)"
        );
    }

    #[test]
    fn test_face_buffer_mismatch_display() {
        let err = ProjectionError::FaceBufferMismatch {
            expected: 4,
            width: 4,
            height: 3,
        };
        assert_eq!(err.to_string(), "face buffer is 4×3, expected 4×4");
    }
}

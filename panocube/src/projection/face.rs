//! Cube face geometry.
//!
//! Each face carries two fixed mappings:
//!
//! - [`CubeFace::direction`]: local face coordinates `(ax_a, ax_b)` to a
//!   3D direction on the cube surface, in a right-handed frame with
//!   `x` forward, `y` leftward, `z` up. Exactly one component is pinned
//!   to `±hsize` (the face's outward normal axis); the other two sweep
//!   linearly across the face extent.
//! - [`CubeFace::placement`]: where the sample for `(ax_a, ax_b)` lands
//!   in the face image. Side faces are built transposed, the top face
//!   horizontally mirrored, the bottom face vertically mirrored; these
//!   placements make all six faces agree at their shared edges.

/// One face of a skybox cube map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CubeFace {
    Front,
    Back,
    Left,
    Right,
    Top,
    Bottom,
}

impl CubeFace {
    /// All six faces in canonical output order.
    pub const ALL: [CubeFace; 6] = [
        CubeFace::Front,
        CubeFace::Back,
        CubeFace::Left,
        CubeFace::Right,
        CubeFace::Top,
        CubeFace::Bottom,
    ];

    /// Output name of this face (`front.jpg` etc.).
    pub fn name(&self) -> &'static str {
        match self {
            CubeFace::Front => "front",
            CubeFace::Back => "back",
            CubeFace::Left => "left",
            CubeFace::Right => "right",
            CubeFace::Top => "top",
            CubeFace::Bottom => "bottom",
        }
    }

    /// Direction vector for local coordinates `(ax_a, ax_b)`, both in
    /// `[0, face_size)`, with `hsize = face_size / 2`.
    ///
    /// The vector lies on the cube surface and is not normalized; only
    /// its direction matters to the spherical mapping.
    pub fn direction(&self, ax_a: u32, ax_b: u32, hsize: f64) -> [f64; 3] {
        let a = f64::from(ax_a);
        let b = f64::from(ax_b);
        let h = hsize;
        match self {
            CubeFace::Front => [h, h - b, h - a],
            CubeFace::Back => [-h, b - h, h - a],
            CubeFace::Left => [b - h, h, h - a],
            CubeFace::Right => [h - b, -h, h - a],
            CubeFace::Top => [b - h, a - h, h],
            CubeFace::Bottom => [b - h, h - a, -h],
        }
    }

    /// Destination pixel for the sample taken at `(ax_a, ax_b)`.
    pub fn placement(&self, ax_a: u32, ax_b: u32, face_size: u32) -> (u32, u32) {
        match self {
            CubeFace::Bottom => (ax_a, face_size - 1 - ax_b),
            CubeFace::Top => (face_size - 1 - ax_a, ax_b),
            _ => (ax_b, ax_a),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_canonical_order() {
        let names: Vec<_> = CubeFace::ALL.iter().map(|f| f.name()).collect();
        assert_eq!(names, ["front", "back", "left", "right", "top", "bottom"]);
    }

    #[test]
    fn test_face_center_directions() {
        // At the face center the two varying axes vanish and only the
        // outward normal remains.
        let h = 2.0;
        assert_eq!(CubeFace::Front.direction(2, 2, h), [2.0, 0.0, 0.0]);
        assert_eq!(CubeFace::Back.direction(2, 2, h), [-2.0, 0.0, 0.0]);
        assert_eq!(CubeFace::Left.direction(2, 2, h), [0.0, 2.0, 0.0]);
        assert_eq!(CubeFace::Right.direction(2, 2, h), [0.0, -2.0, 0.0]);
        assert_eq!(CubeFace::Top.direction(2, 2, h), [0.0, 0.0, 2.0]);
        assert_eq!(CubeFace::Bottom.direction(2, 2, h), [0.0, 0.0, -2.0]);
    }

    #[test]
    fn test_placement_transposes_side_faces() {
        assert_eq!(CubeFace::Front.placement(1, 3, 4), (3, 1));
        assert_eq!(CubeFace::Back.placement(0, 0, 4), (0, 0));
        assert_eq!(CubeFace::Left.placement(2, 1, 4), (1, 2));
        assert_eq!(CubeFace::Right.placement(3, 0, 4), (0, 3));
    }

    #[test]
    fn test_placement_mirrors_top_and_bottom() {
        assert_eq!(CubeFace::Top.placement(1, 3, 4), (2, 3));
        assert_eq!(CubeFace::Bottom.placement(1, 3, 4), (1, 0));
    }

    #[test]
    fn test_placement_is_a_bijection() {
        // Every face must cover each destination pixel exactly once.
        let face_size = 6;
        for face in CubeFace::ALL {
            let mut seen = std::collections::HashSet::new();
            for ax_a in 0..face_size {
                for ax_b in 0..face_size {
                    let dest = face.placement(ax_a, ax_b, face_size);
                    assert!(dest.0 < face_size && dest.1 < face_size);
                    assert!(
                        seen.insert(dest),
                        "{} writes {:?} twice",
                        face.name(),
                        dest
                    );
                }
            }
            assert_eq!(seen.len(), (face_size * face_size) as usize);
        }
    }

    fn face_strategy() -> impl Strategy<Value = CubeFace> {
        prop::sample::select(CubeFace::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn test_normal_axis_pinned_to_half_extent(
            face in face_strategy(),
            face_size in 2u32..64,
            a_frac in 0.0..1.0f64,
            b_frac in 0.0..1.0f64,
        ) {
            let ax_a = ((f64::from(face_size) - 1.0) * a_frac) as u32;
            let ax_b = ((f64::from(face_size) - 1.0) * b_frac) as u32;
            let h = f64::from(face_size) / 2.0;
            let [x, y, z] = face.direction(ax_a, ax_b, h);

            // The outward normal component equals ±hsize exactly.
            let normal = match face {
                CubeFace::Front | CubeFace::Back => x,
                CubeFace::Left | CubeFace::Right => y,
                CubeFace::Top | CubeFace::Bottom => z,
            };
            prop_assert_eq!(normal.abs(), h);

            // The varying components never leave the face extent.
            for v in [x, y, z] {
                prop_assert!(v.abs() <= h);
            }
        }

        #[test]
        fn test_interior_points_pin_exactly_one_axis(
            face in face_strategy(),
            face_size in 4u32..64,
            a_frac in 0.0..1.0f64,
            b_frac in 0.0..1.0f64,
        ) {
            // Away from the ax == 0 edge the varying axes stay strictly
            // inside (-hsize, hsize), so exactly one component is pinned.
            let span = f64::from(face_size - 2);
            let ax_a = 1 + (span * a_frac) as u32;
            let ax_b = 1 + (span * b_frac) as u32;
            let h = f64::from(face_size) / 2.0;

            let dir = face.direction(ax_a, ax_b, h);
            let pinned = dir.iter().filter(|v| v.abs() == h).count();
            prop_assert_eq!(pinned, 1);
        }

        #[test]
        fn test_direction_never_zero(
            face in face_strategy(),
            face_size in 1u32..64,
            a_frac in 0.0..1.0f64,
            b_frac in 0.0..1.0f64,
        ) {
            let ax_a = ((f64::from(face_size) - 1.0) * a_frac) as u32;
            let ax_b = ((f64::from(face_size) - 1.0) * b_frac) as u32;
            let h = f64::from(face_size) / 2.0;
            let [x, y, z] = face.direction(ax_a, ax_b, h);
            prop_assert!(x * x + y * y + z * z > 0.0);
        }
    }
}

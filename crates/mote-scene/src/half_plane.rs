//! Static half-plane obstacle.

use mote_math::DVec2;
use mote_types::Scalar;

/// A static half-plane obstacle, stored as a boundary point and unit
/// outward normal. Particles on the negative side of the normal are inside
/// the obstacle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HalfPlane {
    /// A point on the boundary line.
    pub point: DVec2,
    /// Unit outward normal.
    pub normal: DVec2,
}

impl HalfPlane {
    /// Creates a half-plane; `normal` is normalized here and must be nonzero.
    pub fn new(point: DVec2, normal: DVec2) -> Self {
        assert!(
            normal.length_squared() > 0.0,
            "half-plane normal must be nonzero"
        );
        Self {
            point,
            normal: normal.normalize(),
        }
    }

    /// Signed distance from `p` to the boundary, positive on the outside.
    #[inline]
    pub fn signed_distance(&self, p: DVec2) -> Scalar {
        self.normal.dot(p - self.point)
    }
}

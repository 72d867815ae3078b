//! Axis-aligned bounding boxes over swept motion.

use mote_math::DVec2;
use mote_types::Scalar;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Lower-left corner.
    pub min: DVec2,
    /// Upper-right corner.
    pub max: DVec2,
}

impl Aabb {
    /// Box covering a single point.
    pub fn point(p: DVec2) -> Self {
        Self { min: p, max: p }
    }

    /// Box covering the segment from `start` to `end`, inflated by
    /// `radius` on every side.
    pub fn swept(start: DVec2, end: DVec2, radius: Scalar) -> Self {
        let pad = DVec2::splat(radius);
        Self {
            min: start.min(end) - pad,
            max: start.max(end) + pad,
        }
    }

    /// Smallest box containing both `self` and `other`.
    pub fn union(&self, other: &Aabb) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Returns a copy grown by `pad` on every side.
    pub fn inflated(&self, pad: Scalar) -> Self {
        let pad = DVec2::splat(pad);
        Self {
            min: self.min - pad,
            max: self.max + pad,
        }
    }

    /// Closed-interval overlap test; boxes sharing only a boundary still
    /// overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }
}

//! Axis-aligned bounding boxes in playfield space
//!
//! The receptor is a rotated rectangle; intersection is tested against the
//! axis-aligned box enclosing its four rotated corners.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::rotate_degrees;

/// An axis-aligned box; edges are open, so boxes that only touch do not overlap
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size / 2.0;
        Self::new(center - half, center + half)
    }

    /// Box enclosing a local rectangle rotated by `degrees` around `pivot`.
    ///
    /// `local_min`/`local_max` are relative to the pivot before rotation.
    pub fn from_rotated_rect(pivot: Vec2, local_min: Vec2, local_max: Vec2, degrees: f32) -> Self {
        let corners = [
            local_min,
            Vec2::new(local_max.x, local_min.y),
            local_max,
            Vec2::new(local_min.x, local_max.y),
        ];

        let mut min = Vec2::splat(f32::INFINITY);
        let mut max = Vec2::splat(f32::NEG_INFINITY);
        for corner in corners {
            let p = pivot + rotate_degrees(corner, degrees);
            min = min.min(p);
            max = max.max(p);
        }
        Self { min, max }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) / 2.0
    }

    /// Exact overlap test. Boxes that only share an edge do not intersect.
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        other.min.x < self.max.x
            && self.min.x < other.max.x
            && other.min.y < self.max.y
            && self.min.y < other.max.y
    }
}

//! Cursor and hit receptor
//!
//! The cursor orbits the playfield centre following the pointer. A
//! rectangular receptor sits at the top of the cursor ring and rotates
//! rigidly with it; its bounding box is the only hit-validation primitive.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use crate::consts::*;
use crate::range::{DETECTOR_RADIUS, DETECTOR_WIDTH};
use crate::{degrees_from_position, normalize_degrees, rotate_degrees};

/// Latest pointer position and the rotation derived from it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CursorState {
    /// Pointer position (playfield space), `None` until the pointer first moves
    pub position: Option<Vec2>,
    /// Cursor rotation (degrees in [0, 360), clockwise, 0 = receptor at top)
    pub rotation: f32,
}

/// Detection rectangle anchored at the top-centre of the cursor ring
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitReceptor {
    pub width: f32,
    pub height: f32,
}

impl HitReceptor {
    pub fn from_circle_size(circle_size: f32) -> Self {
        Self {
            width: DETECTOR_WIDTH.remap(circle_size as f64) as f32,
            height: RECEPTOR_HEIGHT,
        }
    }

    /// World-space box for a receptor on a ring of `ring_radius` around `anchor`
    pub fn bounds(&self, anchor: Vec2, ring_radius: f32, rotation: f32) -> Aabb {
        let half_width = self.width / 2.0;
        Aabb::from_rotated_rect(
            anchor,
            Vec2::new(-half_width, -ring_radius),
            Vec2::new(half_width, -ring_radius + self.height),
            rotation,
        )
    }
}

/// Circular progress ring drawn around the cursor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressIndicator {
    /// Filled fraction of the ring
    pub fill: f32,
    /// Ring rotation (degrees), centring the filled arc on the receptor
    pub rotation: f32,
    pub inner_radius: f32,
}

impl ProgressIndicator {
    pub fn from_circle_size(circle_size: f32) -> Self {
        let fill = DETECTOR_RADIUS.remap(circle_size as f64) as f32;
        Self {
            fill,
            rotation: -360.0 * (fill / 2.0),
            inner_radius: 0.05,
        }
    }
}

/// The player's cursor: state, receptor, and the fixed ring geometry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cursor {
    pub state: CursorState,
    pub receptor: HitReceptor,
    pub progress: ProgressIndicator,
    /// Playfield centre; all rotation happens around this point
    pub anchor: Vec2,
    /// Distance from anchor to the receptor's outer edge
    pub ring_radius: f32,
}

impl Cursor {
    /// Build a cursor for a square playfield of `playfield_size`
    pub fn new(circle_size: f32, playfield_size: f32) -> Self {
        let anchor = Vec2::splat(playfield_size / 2.0);
        Self {
            state: CursorState {
                position: None,
                rotation: 0.0,
            },
            receptor: HitReceptor::from_circle_size(circle_size),
            progress: ProgressIndicator::from_circle_size(circle_size),
            anchor,
            ring_radius: playfield_size * UNIVERSAL_SCALE / 2.0,
        }
    }

    /// Rotate the cursor (and receptor) to follow the pointer.
    ///
    /// A pointer exactly on the anchor has no direction and keeps the
    /// previous rotation.
    pub fn update_from_pointer(&mut self, pointer: Vec2) {
        self.state.position = Some(pointer);
        if pointer == self.anchor {
            return;
        }
        self.state.rotation =
            normalize_degrees(degrees_from_position(self.anchor, pointer) - CURSOR_ANGLE_OFFSET);
    }

    /// Whether any pointer movement has been observed
    #[inline]
    pub fn is_active(&self) -> bool {
        self.state.position.is_some()
    }

    /// Pointer position that turns the receptor to face `target_angle`
    pub fn pointer_for_angle(&self, target_angle: f32, distance: f32) -> Vec2 {
        let cursor_angle = target_angle + CURSOR_ANGLE_OFFSET;
        self.anchor + rotate_degrees(Vec2::new(0.0, -distance), cursor_angle)
    }

    #[inline]
    pub fn rotation(&self) -> f32 {
        self.state.rotation
    }

    /// Receptor box at the cursor's current rotation
    pub fn receptor_bounds(&self) -> Aabb {
        self.receptor
            .bounds(self.anchor, self.ring_radius, self.state.rotation)
    }

    /// Whether the receptor currently overlaps `other`.
    ///
    /// Never true before the first pointer movement.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.is_active() && self.receptor_bounds().intersects(other)
    }
}

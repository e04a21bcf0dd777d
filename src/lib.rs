//! Tau Core - judgement core for a circular rhythm-game playfield
//!
//! Core modules:
//! - `range`: Linear remapping of the circle-size difficulty scalar
//! - `sim`: Deterministic judgement (cursor, receptor, hit objects, kiai flashes)
//! - `settings`: Presentation settings supplied by the host
//! - `error`: Input validation errors raised at the session boundary

pub mod error;
pub mod range;
pub mod settings;
pub mod sim;

pub use error::InputError;
pub use range::{DETECTOR_RADIUS, DETECTOR_WIDTH, LinearRange, remap};
pub use settings::Settings;

use glam::Vec2;

/// Playfield and feedback constants
pub mod consts {
    /// Base playfield edge length (square, playfield units)
    pub const BASE_PLAYFIELD_SIZE: f32 = 768.0;
    /// Scale applied to the cursor/receptor container relative to the playfield
    pub const UNIVERSAL_SCALE: f32 = 0.6;

    /// Receptor height (fixed, playfield units)
    pub const RECEPTOR_HEIGHT: f32 = 50.0;
    /// Offset subtracted from the pointer angle before rotating the cursor
    pub const CURSOR_ANGLE_OFFSET: f32 = 25.0;

    /// Radius at which judgement feedback is placed
    pub const FEEDBACK_RADIUS: f32 = 285.0;
    /// Radius at which kiai explosions are placed
    pub const KIAI_EXPLOSION_RADIUS: f32 = 215.0;
    /// Target angle multiplier used for feedback placement
    pub const FEEDBACK_ANGLE_MULTIPLIER: f32 = 4.0;

    /// Edge length of a hit object's square bounding box
    pub const HIT_OBJECT_SIZE: f32 = 16.0;
    /// Default object travel time from centre to receptor (ms)
    pub const DEFAULT_PREEMPT: f64 = 1200.0;

    /// Beats into a kiai section before weak flashes start
    pub const KIAI_WEAK_FLASH_BEAT: u32 = 5;
    /// Intensity of the per-beat weak flash
    pub const WEAK_FLASH_INTENSITY: f32 = 0.15;
    /// Duration of the kiai-start flash in beats
    pub const STRONG_FLASH_BEATS: f64 = 4.0;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Angle (degrees) of `position` as seen from `anchor`, with 0 pointing up.
///
/// Screen space is y-down, so a point straight above the anchor yields 360
/// and a point to its right yields 90.
#[inline]
pub fn degrees_from_position(anchor: Vec2, position: Vec2) -> f32 {
    let direction = position - anchor;
    let angle = direction.y.atan2(direction.x).to_degrees();
    let angle = if angle < 0.0 { angle + 360.0 } else { angle };
    angle + 90.0
}

/// Convert polar (r, theta in radians) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Rotate a point clockwise (screen space, y-down) by `degrees` around the origin
#[inline]
pub fn rotate_degrees(point: Vec2, degrees: f32) -> Vec2 {
    Vec2::from_angle(degrees.to_radians()).rotate(point)
}

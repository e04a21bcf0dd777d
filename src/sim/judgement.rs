//! Hit object judgement
//!
//! Each hit object moves `Pending -> Validating -> Judged` exactly once.
//! While its window is open the object's current box is tested against the
//! receptor; the first overlap judges it `Hit`, and a window that closes
//! without one judges it `Miss`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::cursor::Cursor;
use crate::consts::*;
use crate::error::{InputError, ensure_finite};
use crate::{polar_to_cartesian, rotate_degrees};

fn default_true() -> bool {
    true
}

/// A hit object as delivered by the beatmap collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitObject {
    /// Angle around the playfield (degrees, 0 = top, clockwise)
    pub target_angle: f32,
    /// Time the object reaches the receptor (ms)
    pub time: f64,
    pub hit_window_start: f64,
    pub hit_window_end: f64,
    #[serde(default)]
    pub is_kiai: bool,
    /// Whether this object's judgement should be displayed
    #[serde(default = "default_true")]
    pub display_result: bool,
    /// Visual rotation of the object (degrees)
    #[serde(default)]
    pub rotation: f32,
}

impl HitObject {
    pub fn new(target_angle: f32, time: f64, half_window: f64) -> Self {
        Self {
            target_angle,
            time,
            hit_window_start: time - half_window,
            hit_window_end: time + half_window,
            is_kiai: false,
            display_result: true,
            rotation: 0.0,
        }
    }

    pub fn validate(&self) -> Result<(), InputError> {
        ensure_finite(self.target_angle as f64, "target_angle")?;
        ensure_finite(self.time, "time")?;
        ensure_finite(self.hit_window_start, "hit_window_start")?;
        ensure_finite(self.hit_window_end, "hit_window_end")?;
        ensure_finite(self.rotation as f64, "rotation")?;
        if self.hit_window_end < self.hit_window_start {
            return Err(InputError::InvalidHitWindow {
                start: self.hit_window_start,
                end: self.hit_window_end,
            });
        }
        Ok(())
    }

    #[inline]
    pub fn window_contains(&self, now: f64) -> bool {
        now >= self.hit_window_start && now <= self.hit_window_end
    }

    /// Screen box at `now`.
    ///
    /// The object leaves the centre `preempt` ms before `time` and travels
    /// outward along `target_angle`, reaching the receptor ring at `time`.
    pub fn bounds_at(&self, now: f64, preempt: f64, anchor: Vec2, ring_radius: f32) -> Aabb {
        let progress = if preempt > 0.0 {
            ((now - (self.time - preempt)) / preempt).clamp(0.0, 1.0) as f32
        } else {
            1.0
        };
        let distance = progress * (ring_radius - HIT_OBJECT_SIZE / 2.0);
        let center = anchor + rotate_degrees(Vec2::new(0.0, -distance), self.target_angle);
        Aabb::from_center_size(center, Vec2::splat(HIT_OBJECT_SIZE))
    }
}

/// Judgement outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Hit,
    Miss,
}

impl Outcome {
    pub fn is_hit(&self) -> bool {
        matches!(self, Outcome::Hit)
    }
}

/// Per-object judgement state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JudgeState {
    /// Window not yet open
    Pending,
    /// Window open, no overlap seen yet
    Validating,
    /// Terminal
    Judged(Outcome),
}

/// Position (relative to the playfield centre) and rotation of a visual effect
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub position: Vec2,
    pub rotation: f32,
}

fn placement_at(radius: f32, target_angle: f32, rotation: f32) -> Placement {
    let a = (target_angle * FEEDBACK_ANGLE_MULTIPLIER).to_radians();
    Placement {
        position: -polar_to_cartesian(radius, a),
        rotation,
    }
}

/// Where the judgement feedback for an object is shown
pub fn feedback_placement(target_angle: f32, object_rotation: f32) -> Placement {
    placement_at(FEEDBACK_RADIUS, target_angle, object_rotation + 90.0)
}

/// Where the kiai explosion for an object is shown
pub fn kiai_explosion_placement(target_angle: f32, object_rotation: f32) -> Placement {
    placement_at(KIAI_EXPLOSION_RADIUS, target_angle, object_rotation)
}

/// Emitted once per hit object when it is judged
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JudgementResult {
    /// Index of the object in the session's stream
    pub index: usize,
    pub outcome: Outcome,
    /// Time the judgement fired (ms)
    pub time: f64,
    /// Judgement feedback, absent when results are not displayed
    pub feedback: Option<Placement>,
    /// Secondary kiai effect for non-missed kiai objects
    pub kiai_explosion: Option<Placement>,
}

impl JudgementResult {
    pub fn spawns_kiai_explosion(&self) -> bool {
        self.kiai_explosion.is_some()
    }
}

/// Judges a time-ordered stream of hit objects against the cursor
#[derive(Debug, Clone)]
pub struct JudgementPipeline {
    objects: Vec<HitObject>,
    states: Vec<JudgeState>,
    /// Every object before this index is judged
    first_open: usize,
    show_judgements: bool,
    preempt: f64,
}

impl JudgementPipeline {
    /// Objects must already be validated and ordered by window start
    pub fn new(objects: Vec<HitObject>, show_judgements: bool, preempt: f64) -> Self {
        let states = vec![JudgeState::Pending; objects.len()];
        Self {
            objects,
            states,
            first_open: 0,
            show_judgements,
            preempt,
        }
    }

    pub fn objects(&self) -> &[HitObject] {
        &self.objects
    }

    pub fn state_of(&self, index: usize) -> Option<JudgeState> {
        self.states.get(index).copied()
    }

    /// Objects not yet judged
    pub fn pending_count(&self) -> usize {
        self.states
            .iter()
            .filter(|s| !matches!(s, JudgeState::Judged(_)))
            .count()
    }

    pub fn is_complete(&self) -> bool {
        self.first_open >= self.objects.len()
    }

    /// Judge every object whose window has opened by `now`.
    ///
    /// The cursor must already reflect this tick's pointer input.
    pub fn evaluate(&mut self, now: f64, cursor: &Cursor) -> Vec<JudgementResult> {
        let mut results = Vec::new();

        for index in self.first_open..self.objects.len() {
            let object = &self.objects[index];
            if object.hit_window_start > now {
                // Ordered by window start; nothing later can be open
                break;
            }
            if matches!(self.states[index], JudgeState::Judged(_)) {
                continue;
            }

            let outcome = if object.window_contains(now) {
                self.states[index] = JudgeState::Validating;
                let bounds = object.bounds_at(now, self.preempt, cursor.anchor, cursor.ring_radius);
                if cursor.intersects(&bounds) {
                    Some(Outcome::Hit)
                } else {
                    None
                }
            } else {
                Some(Outcome::Miss)
            };

            if let Some(outcome) = outcome {
                self.states[index] = JudgeState::Judged(outcome);
                let result = self.build_result(index, outcome, now);
                log::debug!(
                    "Judged object {} as {:?} at {:.1}ms",
                    index,
                    outcome,
                    now
                );
                results.push(result);
            }
        }

        while self.first_open < self.states.len()
            && matches!(self.states[self.first_open], JudgeState::Judged(_))
        {
            self.first_open += 1;
        }

        results
    }

    fn build_result(&self, index: usize, outcome: Outcome, now: f64) -> JudgementResult {
        let object = &self.objects[index];
        let displayed = object.display_result && self.show_judgements;

        let feedback = displayed.then(|| feedback_placement(object.target_angle, object.rotation));
        let kiai_explosion = (displayed && object.is_kiai && outcome != Outcome::Miss)
            .then(|| kiai_explosion_placement(object.target_angle, object.rotation));

        JudgementResult {
            index,
            outcome,
            time: now,
            feedback,
            kiai_explosion,
        }
    }

    /// Drop every unjudged object; nothing fires afterwards
    pub fn clear(&mut self) {
        self.objects.clear();
        self.states.clear();
        self.first_open = 0;
    }
}

//! Gameplay session
//!
//! Owns all per-session state. Created at session start from the difficulty
//! scalar and the hit-object stream; discarded when the session ends.

use serde::{Deserialize, Serialize};

use super::cursor::Cursor;
use super::judgement::{HitObject, JudgementPipeline};
use super::kiai::KiaiMachine;
use crate::consts::*;
use crate::error::{InputError, ensure_finite};
use crate::settings::Settings;

/// Values read once at session start
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Difficulty scalar controlling receptor size (roughly 1-10)
    pub circle_size: f32,
    /// Object travel time from centre to receptor (ms)
    pub preempt: f64,
    /// Edge length of the square playfield
    pub playfield_size: f32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            circle_size: 5.0,
            preempt: DEFAULT_PREEMPT,
            playfield_size: BASE_PLAYFIELD_SIZE,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), InputError> {
        ensure_finite(self.circle_size as f64, "circle_size")?;
        ensure_finite(self.preempt, "preempt")?;
        ensure_finite(self.playfield_size as f64, "playfield_size")?;
        if self.playfield_size <= 0.0 {
            return Err(InputError::InvalidConfig {
                field: "playfield_size",
                value: self.playfield_size as f64,
            });
        }
        if self.preempt < 0.0 {
            return Err(InputError::InvalidConfig {
                field: "preempt",
                value: self.preempt,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    Playing,
    Ended,
}

/// Complete per-session state
#[derive(Debug, Clone)]
pub struct Session {
    pub config: SessionConfig,
    pub settings: Settings,
    pub cursor: Cursor,
    pub pipeline: JudgementPipeline,
    pub kiai: KiaiMachine,
    pub(crate) phase: SessionPhase,
    /// Time of the last processed tick (ms); frames may not go back past it
    pub(crate) time: f64,
}

impl Session {
    /// Validate the hit-object stream and set up receptor geometry
    pub fn new(
        config: SessionConfig,
        settings: Settings,
        objects: Vec<HitObject>,
    ) -> Result<Self, InputError> {
        config.validate()?;

        let mut previous: Option<f64> = None;
        for object in &objects {
            object.validate()?;
            match previous {
                Some(prev) if object.hit_window_start < prev => {
                    return Err(InputError::HitObjectOutOfOrder {
                        previous: prev,
                        next: object.hit_window_start,
                    });
                }
                _ => {}
            }
            previous = Some(object.hit_window_start);
        }

        let cursor = Cursor::new(config.circle_size, config.playfield_size);
        log::info!(
            "Session started: {} objects, circle size {}, receptor width {:.1}",
            objects.len(),
            config.circle_size,
            cursor.receptor.width
        );

        let pipeline = JudgementPipeline::new(objects, settings.show_judgements, config.preempt);

        Ok(Self {
            config,
            settings,
            cursor,
            pipeline,
            kiai: KiaiMachine::new(),
            phase: SessionPhase::Playing,
            time: f64::NEG_INFINITY,
        })
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Time of the last processed tick, if any
    pub fn time(&self) -> Option<f64> {
        self.time.is_finite().then_some(self.time)
    }

    pub fn is_ended(&self) -> bool {
        self.phase == SessionPhase::Ended
    }

    /// End the session. Pending judgements are discarded.
    pub fn end(&mut self) {
        if self.is_ended() {
            return;
        }
        let discarded = self.pipeline.pending_count();
        self.pipeline.clear();
        self.kiai.reset();
        self.phase = SessionPhase::Ended;
        log::info!("Session ended, {} pending objects discarded", discarded);
    }
}

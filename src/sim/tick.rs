//! Per-frame session update
//!
//! One call applies one host frame. Within a frame the pointer is applied
//! first, so judgements always see this frame's cursor; beats follow in
//! the order delivered.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::judgement::JudgementResult;
use super::kiai::{BeatEvent, FlashEvent};
use super::session::Session;
use crate::error::{InputError, ensure_finite};

/// Everything the host observed during one frame
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TickInput {
    /// Frame time (ms)
    pub time: f64,
    /// Latest pointer position this frame, if it moved
    #[serde(default)]
    pub pointer: Option<Vec2>,
    /// Beats crossed this frame, oldest first
    #[serde(default)]
    pub beats: Vec<BeatEvent>,
}

impl TickInput {
    pub fn validate(&self) -> Result<(), InputError> {
        ensure_finite(self.time, "time")?;
        if let Some(pointer) = self.pointer {
            if !pointer.is_finite() {
                return Err(InputError::NonFiniteValue { field: "pointer" });
            }
        }
        for beat in &self.beats {
            beat.validate()?;
        }
        Ok(())
    }
}

/// Output produced for the display/scoring collaborators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Judgement(JudgementResult),
    Flash(FlashEvent),
}

/// Advance the session by one frame.
///
/// Input is validated in full before any state changes, so a rejected
/// frame leaves the session untouched.
pub fn tick(session: &mut Session, input: &TickInput) -> Result<Vec<GameEvent>, InputError> {
    if session.is_ended() {
        return Err(InputError::SessionEnded);
    }
    let checked = input.validate().and_then(|()| {
        if input.time < session.time {
            Err(InputError::TimeWentBackwards {
                previous: session.time,
                now: input.time,
            })
        } else {
            Ok(())
        }
    });
    if let Err(err) = checked {
        log::warn!("Rejected frame at {}ms: {}", input.time, err);
        return Err(err);
    }

    session.time = input.time;
    let mut events = Vec::new();

    // Cursor before judgement
    if let Some(pointer) = input.pointer {
        session.cursor.update_from_pointer(pointer);
    }

    events.extend(
        session
            .pipeline
            .evaluate(input.time, &session.cursor)
            .into_iter()
            .map(GameEvent::Judgement),
    );

    for beat in &input.beats {
        if let Some(flash) = session.kiai.on_beat(beat) {
            log::debug!(
                "Kiai flash: intensity {} for {:.0}ms",
                flash.intensity,
                flash.duration
            );
            // Hidden visualiser still counts beats
            if session.settings.show_visualizer {
                events.push(GameEvent::Flash(flash));
            }
        }
    }

    Ok(events)
}

/// Pointer position that aims the receptor at `target_angle`.
///
/// Undoes the cursor's angle offset; useful for autoplay and tests.
pub fn pointer_for_angle(session: &Session, target_angle: f32, distance: f32) -> Vec2 {
    session.cursor.pointer_for_angle(target_angle, distance)
}

//! Beat-synchronised kiai flashes
//!
//! Counts beats inside kiai sections. The first kiai beat fires a strong
//! flash; from the fifth beat on, every beat fires a weak one. Any
//! non-kiai beat resets the count.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{InputError, ensure_finite};

/// A beat from the timing collaborator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeatEvent {
    /// Current beat length (ms)
    pub beat_length: f64,
    pub is_kiai: bool,
}

impl BeatEvent {
    pub fn validate(&self) -> Result<(), InputError> {
        ensure_finite(self.beat_length, "beat_length")?;
        if self.beat_length <= 0.0 {
            return Err(InputError::InvalidBeatLength {
                beat_length: self.beat_length,
            });
        }
        Ok(())
    }
}

/// Flash easing curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Easing {
    In,
}

/// Visualiser flash request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlashEvent {
    /// Peak intensity (0.0 - 1.0)
    pub intensity: f32,
    /// Fade duration (ms)
    pub duration: f64,
    pub easing: Easing,
}

impl FlashEvent {
    pub fn is_strong(&self) -> bool {
        self.intensity >= 1.0
    }
}

/// Kiai beat bookkeeping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KiaiBeatCounter {
    pub first_kiai_beat: bool,
    pub kiai_beat_index: u32,
}

impl Default for KiaiBeatCounter {
    fn default() -> Self {
        Self {
            first_kiai_beat: true,
            kiai_beat_index: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum KiaiState {
    #[default]
    Idle,
    InKiai,
}

/// Beat-driven kiai state machine
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KiaiMachine {
    state: KiaiState,
    counter: KiaiBeatCounter,
}

impl KiaiMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> KiaiState {
        self.state
    }

    pub fn counter(&self) -> KiaiBeatCounter {
        self.counter
    }

    /// Advance by one beat. Beat must already be validated.
    pub fn on_beat(&mut self, beat: &BeatEvent) -> Option<FlashEvent> {
        if !beat.is_kiai {
            self.state = KiaiState::Idle;
            self.counter = KiaiBeatCounter::default();
            return None;
        }

        self.state = KiaiState::InKiai;
        self.counter.kiai_beat_index += 1;

        if self.counter.first_kiai_beat {
            self.counter.first_kiai_beat = false;
            return Some(FlashEvent {
                intensity: 1.0,
                duration: beat.beat_length * STRONG_FLASH_BEATS,
                easing: Easing::In,
            });
        }

        // Fires on every beat past the threshold, not every fifth beat
        (self.counter.kiai_beat_index >= KIAI_WEAK_FLASH_BEAT).then(|| FlashEvent {
            intensity: WEAK_FLASH_INTENSITY,
            duration: beat.beat_length,
            easing: Easing::In,
        })
    }

    /// Back to the initial state
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

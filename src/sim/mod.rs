//! Deterministic judgement module
//!
//! All gameplay decisions live here. This module must be pure and deterministic:
//! - Driven only by host events (pointer, frame time, beats)
//! - Cursor updated before judgement within a frame
//! - Each hit object judged at most once
//! - No rendering, audio, or platform dependencies

pub mod aabb;
pub mod cursor;
pub mod judgement;
pub mod kiai;
pub mod session;
pub mod tick;

pub use aabb::Aabb;
pub use cursor::{Cursor, CursorState, HitReceptor, ProgressIndicator};
pub use judgement::{
    HitObject, JudgeState, JudgementPipeline, JudgementResult, Outcome, Placement,
    feedback_placement, kiai_explosion_placement,
};
pub use kiai::{BeatEvent, Easing, FlashEvent, KiaiBeatCounter, KiaiMachine, KiaiState};
pub use session::{Session, SessionConfig, SessionPhase};
pub use tick::{GameEvent, TickInput, pointer_for_angle, tick};

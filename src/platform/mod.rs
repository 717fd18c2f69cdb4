//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (mouse and touch to surface coordinates)
//! - Time/frames (clamped deltas, "next frame" scheduling)

pub mod input;
pub mod time;

pub use input::{PointerPhase, apply_pointer, pick_touch, surface_point};
pub use time::{FrameCallback, FrameClock, FrameHandler, FrameScheduler, ManualScheduler, drive};

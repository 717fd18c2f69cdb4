//! Simulation module
//!
//! All gameplay logic lives here. Every operation takes the [`SimState`]
//! context explicitly; nothing here touches the DOM or the clock.

pub mod color;
pub mod input;
pub mod preview;
pub mod state;
pub mod step;

pub use color::{Hsl, Palette};
pub use input::{drag_end, drag_move, drag_start, launch_velocity};
pub use preview::{AimPreview, Segment, aim_path, arrow_head};
pub use state::{Ball, DragGesture, Rect, SimState, Walls};
pub use step::{StepOutcome, WallHit, apply_friction, step};

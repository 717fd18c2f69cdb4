//! Bounce Box - a ball in a four-walled box, launched by dragging
//!
//! Core modules:
//! - `sim`: Simulation context, drag-to-velocity mapping, physics stepper
//! - `renderer`: Scene building and Canvas 2D painting
//! - `platform`: Pointer mapping, frame clock and scheduler abstraction
//! - `game`: Ties one frame together (tick, step, draw)
//! - `settings`: Tunable physics and preview options

pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use settings::{PhysicsConfig, Settings};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Downward acceleration (pixels/s²)
    pub const GRAVITY: f32 = 980.0;
    /// Fraction of normal velocity kept after a wall bounce
    pub const RESTITUTION: f32 = 0.75;
    /// Drag distance to launch speed factor
    pub const SPEED_MULTIPLIER: f32 = 9.0;

    /// Largest frame delta fed to the stepper (~30 fps floor)
    pub const MAX_FRAME_DT: f32 = 0.033;

    /// Below this downward speed a floor contact lands instead of bouncing
    pub const SOFT_LANDING_SPEED: f32 = 30.0;
    /// Distance from the floor still counted as resting
    pub const REST_TOLERANCE: f32 = 2.5;
    /// Vertical speed under which a floor contact is resting
    pub const REST_MAX_VY: f32 = 5.0;
    /// Rolling friction deceleration (pixels/s²)
    pub const FRICTION: f32 = 150.0;
    /// Horizontal speed snapped to zero while resting
    pub const FRICTION_SNAP_SPEED: f32 = 2.0;

    /// Ball radius as a fraction of the smaller viewport side
    pub const BALL_RADIUS_FRACTION: f32 = 0.05;
    /// Wall half-span as a fraction of the smaller viewport side
    pub const WALL_DISTANCE_FRACTION: f32 = 0.25;
    /// Rendered wall thickness
    pub const WALL_THICKNESS: f32 = 20.0;

    /// Reflective segments drawn by the aim preview
    pub const PREVIEW_MAX_BOUNCES: u32 = 2;
    /// Upper bound accepted from stored settings
    pub const PREVIEW_BOUNCE_LIMIT: u32 = 8;
    /// Dash and gap length of the preview line
    pub const PREVIEW_DASH: f32 = 10.0;
    pub const PREVIEW_LINE_WIDTH: f32 = 2.0;
    pub const ARROW_LINE_WIDTH: f32 = 3.0;
    pub const ARROW_HEAD_LENGTH: f32 = 18.0;
    /// Half-angle of the arrow head (π/7)
    pub const ARROW_HEAD_SPREAD: f32 = std::f32::consts::PI / 7.0;

    /// Surface background
    pub const BACKGROUND_COLOR: &str = "#444";
}

/// Viewport size in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Shorter side, the basis for ball and wall sizing
    #[inline]
    pub fn min_side(&self) -> f32 {
        self.width.min(self.height)
    }
}

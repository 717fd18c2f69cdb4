//! Simulation context
//!
//! Everything the input mapper, stepper and scene builder touch lives in
//! [`SimState`]; there is no module-level mutable state.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::color::Palette;
use crate::Viewport;
use crate::consts::*;
use crate::settings::PhysicsConfig;

/// The ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    /// Velocity (pixels/s)
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Ball at rest in the middle of the viewport
    pub fn centered(viewport: Viewport) -> Self {
        Self {
            pos: viewport.center(),
            vel: Vec2::ZERO,
            radius: viewport.min_side() * BALL_RADIUS_FRACTION,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }
}

/// Axis-aligned rectangle in surface coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Inner surfaces of the four walls (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Walls {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
    /// Render-only thickness
    pub thickness: f32,
}

impl Walls {
    /// Square box of half-span `distance` around `center`
    pub fn around(center: Vec2, distance: f32) -> Self {
        Self {
            left: center.x - distance,
            right: center.x + distance,
            top: center.y - distance,
            bottom: center.y + distance,
            thickness: WALL_THICKNESS,
        }
    }

    /// Walls sized for a viewport, centred on its middle
    pub fn for_viewport(viewport: Viewport) -> Self {
        Self::around(viewport.center(), viewport.min_side() * WALL_DISTANCE_FRACTION)
    }

    pub fn interior_width(&self) -> f32 {
        self.right - self.left
    }

    pub fn interior_height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    /// Filled rectangles framing the interior: left, right, top, bottom.
    /// Side walls run the full height including the corners.
    pub fn rects(&self) -> [Rect; 4] {
        let t = self.thickness;
        let side_h = self.interior_height() + 2.0 * t;
        [
            Rect {
                x: self.left - t,
                y: self.top - t,
                w: t,
                h: side_h,
            },
            Rect {
                x: self.right,
                y: self.top - t,
                w: t,
                h: side_h,
            },
            Rect {
                x: self.left,
                y: self.top - t,
                w: self.interior_width(),
                h: t,
            },
            Rect {
                x: self.left,
                y: self.bottom,
                w: self.interior_width(),
                h: t,
            },
        ]
    }
}

/// An in-progress drag; `end` is the live pointer position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragGesture {
    pub end: Vec2,
}

/// Complete simulation context
#[derive(Debug, Clone)]
pub struct SimState {
    pub viewport: Viewport,
    pub ball: Ball,
    pub walls: Walls,
    /// Present between press and release
    pub drag: Option<DragGesture>,
    /// Set by the first non-degenerate drag, never cleared
    pub launched: bool,
    pub palette: Palette,
    pub config: PhysicsConfig,
    /// Colour RNG
    pub rng: Pcg32,
}

impl SimState {
    /// Fresh, unlaunched state for a viewport
    pub fn new(viewport: Viewport, seed: u64, config: PhysicsConfig) -> Self {
        Self {
            viewport,
            ball: Ball::centered(viewport),
            walls: Walls::for_viewport(viewport),
            drag: None,
            launched: false,
            palette: Palette::default(),
            config,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Re-layout for a new viewport size
    ///
    /// The ball is re-centred and resized and the walls rebuilt around it.
    /// Velocity, launch state, drag and colours carry over.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.ball.radius = viewport.min_side() * BALL_RADIUS_FRACTION;
        self.ball.pos = viewport.center();
        self.walls = Walls::around(self.ball.pos, viewport.min_side() * WALL_DISTANCE_FRACTION);
        log::info!(
            "Resized to {}x{} (radius {:.1})",
            viewport.width,
            viewport.height,
            self.ball.radius
        );
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Physics runs only after launch and while no drag is held
    #[inline]
    pub fn physics_active(&self) -> bool {
        self.launched && !self.is_dragging()
    }
}

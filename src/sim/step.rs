//! Per-frame physics step
//!
//! Integrates gravity, resolves the ball against the four walls and applies
//! rolling friction on the floor. Horizontal and vertical collisions are each
//! resolved by a single left-then-right / top-then-bottom check, so at most
//! one wall per axis responds in a frame.

use super::state::SimState;
use crate::consts::*;

/// A wall contact resolved during a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallHit {
    Left,
    Right,
    Top,
    /// Bounced off the floor
    Bottom,
    /// Slow floor contact, vertical velocity zeroed instead of reflected
    Landing,
}

/// What happened during one step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepOutcome {
    /// Physics ran (launched and not dragging)
    pub active: bool,
    pub horizontal: Option<WallHit>,
    pub vertical: Option<WallHit>,
    /// Ball ended the step resting on the floor
    pub resting: bool,
}

impl StepOutcome {
    pub fn hits(&self) -> impl Iterator<Item = WallHit> {
        self.horizontal.into_iter().chain(self.vertical)
    }
}

/// Advance the simulation by `dt` seconds (clamped to the configured max)
pub fn step(state: &mut SimState, dt: f32) -> StepOutcome {
    if !state.physics_active() {
        return StepOutcome::default();
    }

    let cfg = state.config;
    let dt = dt.min(cfg.max_frame_dt).max(0.0);
    let walls = state.walls;
    let ball = &mut state.ball;

    ball.vel.y += cfg.gravity * dt;
    ball.pos += ball.vel * dt;

    let horizontal = if ball.left() < walls.left {
        ball.pos.x = walls.left + ball.radius;
        ball.vel.x = -ball.vel.x * cfg.restitution;
        Some(WallHit::Left)
    } else if ball.right() > walls.right {
        ball.pos.x = walls.right - ball.radius;
        ball.vel.x = -ball.vel.x * cfg.restitution;
        Some(WallHit::Right)
    } else {
        None
    };

    let vertical = if ball.top() < walls.top {
        ball.pos.y = walls.top + ball.radius;
        ball.vel.y = -ball.vel.y * cfg.restitution;
        Some(WallHit::Top)
    } else if ball.bottom() > walls.bottom {
        let overshoot = ball.bottom() - walls.bottom;
        ball.pos.y = walls.bottom - ball.radius;
        if ball.vel.y > 0.0 && overshoot > 0.0 && ball.vel.y.abs() < cfg.soft_landing_speed {
            ball.vel.y = 0.0;
            Some(WallHit::Landing)
        } else {
            ball.vel.y = -ball.vel.y * cfg.restitution;
            Some(WallHit::Bottom)
        }
    } else {
        None
    };

    // Rest detection and the friction snap use fixed thresholds from `consts`;
    // only the rates come from the config.
    let resting =
        (ball.bottom() - walls.bottom).abs() < REST_TOLERANCE && ball.vel.y.abs() < REST_MAX_VY;
    if resting {
        ball.vel.x = apply_friction(ball.vel.x, cfg.friction * dt);
    }

    let outcome = StepOutcome {
        active: true,
        horizontal,
        vertical,
        resting,
    };

    for hit in outcome.hits() {
        state.palette.recolor(&mut state.rng);
        log::debug!("Wall hit {:?}, ball now {}", hit, state.palette.ball);
    }

    outcome
}

/// Slow `vx` toward zero by `decel` without crossing it
///
/// Speeds under [`FRICTION_SNAP_SPEED`] stop outright.
pub fn apply_friction(vx: f32, decel: f32) -> f32 {
    if vx.abs() < FRICTION_SNAP_SPEED {
        0.0
    } else {
        vx - decel.min(vx.abs()) * vx.signum()
    }
}

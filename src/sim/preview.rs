//! Aim preview geometry
//!
//! While a drag is held the ball shows an arrow to the pointer and a dashed
//! trajectory that reflects off the walls a bounded number of times.

use glam::Vec2;

use super::state::{SimState, Walls};
use crate::consts::*;

/// A straight line piece
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Vec2,
    pub to: Vec2,
}

/// Reflective ray from `origin` in the direction of `toward`
///
/// Each segment runs to the nearest wall ahead of the ray; the direction is
/// then mirrored on the axis of the wall that was hit (both axes in an exact
/// corner). Stops after `max_bounces` segments. A zero-length direction
/// yields no segments.
pub fn aim_path(origin: Vec2, toward: Vec2, walls: &Walls, max_bounces: u32) -> Vec<Segment> {
    let mut segments = Vec::new();
    let Some(mut dir) = (toward - origin).try_normalize() else {
        return segments;
    };
    let mut p = origin;

    while (segments.len() as u32) < max_bounces {
        let t_left = if dir.x < 0.0 { (walls.left - p.x) / dir.x } else { f32::INFINITY };
        let t_right = if dir.x > 0.0 { (walls.right - p.x) / dir.x } else { f32::INFINITY };
        let t_top = if dir.y < 0.0 { (walls.top - p.y) / dir.y } else { f32::INFINITY };
        let t_bottom = if dir.y > 0.0 { (walls.bottom - p.y) / dir.y } else { f32::INFINITY };

        let t = t_left.min(t_right).min(t_top).min(t_bottom);
        if !t.is_finite() || t <= 0.0 {
            break;
        }

        let hit = p + dir * t;
        segments.push(Segment { from: p, to: hit });

        if t == t_left || t == t_right {
            dir.x = -dir.x;
        }
        if t == t_top || t == t_bottom {
            dir.y = -dir.y;
        }
        p = hit;
    }

    segments
}

/// Filled arrow head at `to`, pointing away from `from`: [tip, barb, barb]
pub fn arrow_head(from: Vec2, to: Vec2, length: f32, spread: f32) -> [Vec2; 3] {
    let d = to - from;
    let angle = d.y.atan2(d.x);
    let barb = |a: f32| to - Vec2::new(a.cos(), a.sin()) * length;
    [to, barb(angle - spread), barb(angle + spread)]
}

/// Everything drawn for an active drag
#[derive(Debug, Clone, PartialEq)]
pub struct AimPreview {
    /// Dashed reflective trajectory
    pub path: Vec<Segment>,
    /// Solid arrow from the ball to the pointer
    pub shaft: Segment,
    pub head: [Vec2; 3],
}

impl AimPreview {
    /// Preview for the current drag, if one is held
    pub fn for_state(state: &SimState, max_bounces: u32) -> Option<Self> {
        let drag = state.drag?;
        let ball = state.ball.pos;
        Some(Self {
            path: aim_path(ball, drag.end, &state.walls, max_bounces),
            shaft: Segment {
                from: ball,
                to: drag.end,
            },
            head: arrow_head(ball, drag.end, ARROW_HEAD_LENGTH, ARROW_HEAD_SPREAD),
        })
    }
}

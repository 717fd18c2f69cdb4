//! Pointer input mapping
//!
//! Mouse and touch events both reduce to a [`PointerPhase`] plus a point in
//! surface coordinates (relative to the canvas bounding box).

use glam::Vec2;

use crate::sim::{SimState, drag_end, drag_move, drag_start};

/// Stage of a press-drag-release gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    /// mousedown / touchstart
    Start,
    /// mousemove / touchmove
    Move,
    /// mouseup / touchend
    End,
}

impl PointerPhase {
    /// Map a DOM event type name
    pub fn from_event_type(kind: &str) -> Option<Self> {
        match kind {
            "mousedown" | "touchstart" => Some(PointerPhase::Start),
            "mousemove" | "touchmove" => Some(PointerPhase::Move),
            "mouseup" | "touchend" => Some(PointerPhase::End),
            _ => None,
        }
    }
}

/// Client coordinates to surface coordinates
#[inline]
pub fn surface_point(client: Vec2, surface_origin: Vec2) -> Vec2 {
    client - surface_origin
}

/// First active touch, falling back to the first changed touch
///
/// On touchend the active list is already empty, so the changed list is the
/// only place the lifted finger still appears.
#[inline]
pub fn pick_touch<T>(active: Option<T>, changed: Option<T>) -> Option<T> {
    active.or(changed)
}

/// Feed one pointer event into the simulation
///
/// Start and Move need a point; End ignores it. Returns the launch velocity
/// when a release launched the ball.
pub fn apply_pointer(state: &mut SimState, phase: PointerPhase, point: Option<Vec2>) -> Option<Vec2> {
    match (phase, point) {
        (PointerPhase::Start, Some(p)) => {
            drag_start(state, p);
            None
        }
        (PointerPhase::Move, Some(p)) => {
            drag_move(state, p);
            None
        }
        (PointerPhase::End, _) => drag_end(state),
        (_, None) => {
            log::warn!("Pointer {:?} without a position ignored", phase);
            None
        }
    }
}

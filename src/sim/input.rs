//! Drag gesture to launch velocity
//!
//! Press records the pointer as the live drag end, moves update it, and
//! release launches the ball toward it. Holding a drag suspends physics so
//! the ball can be re-aimed mid-flight.

use glam::Vec2;

use super::state::{DragGesture, SimState};

/// Launch velocity for a drag ending at `end`
///
/// Direction is ball → `end`. The unit direction is re-scaled by the drag
/// length and then by the multiplier, so speed is `length * multiplier`.
/// Returns `None` for a zero-length drag.
pub fn launch_velocity(ball: Vec2, end: Vec2, multiplier: f32) -> Option<Vec2> {
    let delta = end - ball;
    let len = delta.length();
    if len > 0.0 {
        Some(delta / len * len * multiplier)
    } else {
        None
    }
}

/// Pointer pressed: start a drag at `point`
pub fn drag_start(state: &mut SimState, point: Vec2) {
    state.drag = Some(DragGesture { end: point });
}

/// Pointer moved: follow it while a drag is held
pub fn drag_move(state: &mut SimState, point: Vec2) {
    if let Some(drag) = state.drag.as_mut() {
        drag.end = point;
    }
}

/// Pointer released: launch if the drag had length, then clear the drag
///
/// Returns the launch velocity when one was applied.
pub fn drag_end(state: &mut SimState) -> Option<Vec2> {
    let launched = state.drag.take().and_then(|drag| {
        launch_velocity(state.ball.pos, drag.end, state.config.speed_multiplier)
    });

    if let Some(vel) = launched {
        state.ball.vel = vel;
        if !state.launched {
            log::info!("Ball launched");
        }
        state.launched = true;
        log::debug!("Launch velocity ({:.1}, {:.1})", vel.x, vel.y);
    }

    launched
}

//! Frame description
//!
//! A [`Scene`] is everything one frame paints, built from the simulation
//! context without touching any drawing API.

use glam::Vec2;

use crate::Settings;
use crate::sim::{AimPreview, Rect, SimState};

/// Filled circle
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
    pub color: String,
}

/// Drag feedback, drawn in the ball colour
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewLayer {
    pub aim: AimPreview,
    pub color: String,
}

/// One frame, in paint order: background, preview, ball, walls
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: f32,
    pub height: f32,
    pub background: String,
    pub preview: Option<PreviewLayer>,
    pub ball: Circle,
    /// Left, right, top, bottom
    pub walls: [Rect; 4],
    pub wall_color: String,
}

impl Scene {
    pub fn build(state: &SimState, settings: &Settings) -> Self {
        let ball_color = state.palette.ball.css();

        let preview = if settings.aim_preview {
            AimPreview::for_state(state, settings.preview_bounces).map(|aim| PreviewLayer {
                aim,
                color: ball_color.clone(),
            })
        } else {
            None
        };

        Self {
            width: state.viewport.width,
            height: state.viewport.height,
            background: settings.background.clone(),
            preview,
            ball: Circle {
                center: state.ball.pos,
                radius: state.ball.radius,
                color: ball_color,
            },
            walls: state.walls.rects(),
            wall_color: state.palette.wall.css(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Viewport;
    use crate::settings::PhysicsConfig;
    use crate::sim::drag_start;

    fn state() -> SimState {
        SimState::new(Viewport::new(800.0, 600.0), 9, PhysicsConfig::default())
    }

    #[test]
    fn test_idle_scene() {
        let scene = Scene::build(&state(), &Settings::default());
        assert_eq!(scene.width, 800.0);
        assert_eq!(scene.background, "#444");
        assert!(scene.preview.is_none());
        assert_eq!(scene.ball.center, Vec2::new(400.0, 300.0));
        assert_eq!(scene.ball.color, "hsl(0, 0%, 100%)");
        assert_eq!(scene.walls[3].y, 450.0);
    }

    #[test]
    fn test_preview_follows_drag_and_setting() {
        let mut s = state();
        drag_start(&mut s, Vec2::new(500.0, 300.0));

        let scene = Scene::build(&s, &Settings::default());
        let layer = scene.preview.expect("preview while dragging");
        assert_eq!(layer.color, scene.ball.color);
        assert_eq!(layer.aim.path.len(), 2);

        let quiet = Settings {
            aim_preview: false,
            ..Settings::default()
        };
        assert!(Scene::build(&s, &quiet).preview.is_none());
    }
}

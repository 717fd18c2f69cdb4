//! One game instance: simulation context, clock and output surface
//!
//! Each frame runs the stepper with the clamped delta and then paints the
//! resulting scene. Pointer and resize events are applied between frames.

use glam::Vec2;

use crate::Viewport;
use crate::platform::{FrameClock, FrameHandler, PointerPhase, apply_pointer};
use crate::renderer::{Scene, Surface};
use crate::settings::Settings;
use crate::sim::{SimState, StepOutcome, step};

pub struct Game<S: Surface> {
    pub state: SimState,
    pub settings: Settings,
    clock: FrameClock,
    surface: S,
    frames: u64,
}

impl<S: Surface> Game<S> {
    pub fn new(viewport: Viewport, seed: u64, settings: Settings, surface: S) -> Self {
        let state = SimState::new(viewport, seed, settings.physics);
        Self {
            clock: FrameClock::new(settings.physics.max_frame_dt),
            state,
            settings,
            surface,
            frames: 0,
        }
    }

    /// Update and draw one frame stamped `now_ms`
    pub fn frame(&mut self, now_ms: f64) -> StepOutcome {
        let dt = self.clock.tick(now_ms);
        let outcome = step(&mut self.state, dt);
        let scene = Scene::build(&self.state, &self.settings);
        self.surface.present(&scene);
        self.frames += 1;
        outcome
    }

    /// Apply a pointer event; returns the launch velocity on a launching release
    pub fn pointer(&mut self, phase: PointerPhase, point: Option<Vec2>) -> Option<Vec2> {
        apply_pointer(&mut self.state, phase, point)
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.state.resize(viewport);
    }

    /// Frames presented so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

impl<S: Surface> FrameHandler for Game<S> {
    fn on_frame(&mut self, now_ms: f64) {
        self.frame(now_ms);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::platform::{ManualScheduler, drive};

    #[derive(Default)]
    struct Recording {
        scenes: Vec<Scene>,
    }

    impl Surface for Recording {
        fn present(&mut self, scene: &Scene) {
            self.scenes.push(scene.clone());
        }
    }

    fn game() -> Game<Recording> {
        Game::new(
            Viewport::new(800.0, 600.0),
            77,
            Settings::default(),
            Recording::default(),
        )
    }

    #[test]
    fn test_idle_frames_only_draw() {
        let mut g = game();
        for i in 0..5 {
            let outcome = g.frame(i as f64 * 16.0);
            assert!(!outcome.active);
        }
        assert_eq!(g.frames(), 5);
        assert_eq!(g.surface().scenes.len(), 5);
        assert_eq!(g.state.ball.pos, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_scheduled_frames_after_launch() {
        let scheduler = Rc::new(ManualScheduler::new());
        let game = Rc::new(RefCell::new(game()));
        drive(Rc::clone(&scheduler), Rc::clone(&game));

        scheduler.fire(0.0);
        {
            let mut g = game.borrow_mut();
            g.pointer(PointerPhase::Start, Some(Vec2::new(400.0, 300.0)));
            g.pointer(PointerPhase::Move, Some(Vec2::new(420.0, 300.0)));
        }

        // Dragging: frame draws the preview, ball stays put
        scheduler.fire(16.0);
        {
            let g = game.borrow();
            assert!(g.surface().scenes.last().unwrap().preview.is_some());
            assert_eq!(g.state.ball.pos, Vec2::new(400.0, 300.0));
        }

        game.borrow_mut().pointer(PointerPhase::End, None);
        scheduler.fire(26.0);

        let g = game.borrow();
        assert!(g.state.launched);
        // 10ms at 180 px/s to the right
        assert!((g.state.ball.pos.x - 401.8).abs() < 1e-3);
        assert!((g.state.ball.vel.y - 9.8).abs() < 1e-3);
        assert!(g.surface().scenes.last().unwrap().preview.is_none());
        assert_eq!(g.frames(), 3);
    }

    #[test]
    fn test_long_stall_is_clamped() {
        let mut g = game();
        g.state.launched = true;
        g.frame(0.0);
        g.frame(2000.0);
        assert!((g.state.ball.vel.y - 980.0 * 0.033).abs() < 1e-3);
    }

    #[test]
    fn test_resize_mid_flight() {
        let mut g = game();
        g.pointer(PointerPhase::Start, Some(Vec2::new(400.0, 300.0)));
        g.pointer(PointerPhase::Move, Some(Vec2::new(400.0, 280.0)));
        g.pointer(PointerPhase::End, None);
        g.frame(0.0);
        g.frame(16.0);
        let vel = g.state.ball.vel;

        g.resize(Viewport::new(1024.0, 768.0));
        assert!(g.state.launched);
        assert_eq!(g.state.ball.vel, vel);
        assert_eq!(g.state.walls.center(), Vec2::new(512.0, 384.0));

        g.frame(32.0);
        let scene = g.surface().scenes.last().unwrap();
        assert_eq!(scene.width, 1024.0);
    }
}

//! Frame timing and scheduling
//!
//! The host "next frame" primitive is hidden behind [`FrameScheduler`] so the
//! frame loop can be driven by hand in tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Callback receiving the frame timestamp in milliseconds
pub type FrameCallback = Box<dyn FnOnce(f64)>;

/// Something that calls back once on the next display frame
pub trait FrameScheduler {
    fn request_frame(&self, callback: FrameCallback);
}

/// Work done once per frame
pub trait FrameHandler {
    fn on_frame(&mut self, now_ms: f64);
}

/// Run `handler` on every frame `scheduler` delivers, forever
pub fn drive<S, H>(scheduler: Rc<S>, handler: Rc<RefCell<H>>)
where
    S: FrameScheduler + 'static,
    H: FrameHandler + 'static,
{
    let next = Rc::clone(&scheduler);
    scheduler.request_frame(Box::new(move |now| {
        handler.borrow_mut().on_frame(now);
        drive(next, handler);
    }));
}

/// Turns frame timestamps into clamped deltas
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_ms: Option<f64>,
    max_dt: f32,
}

impl FrameClock {
    pub fn new(max_dt: f32) -> Self {
        Self {
            last_ms: None,
            max_dt,
        }
    }

    /// Seconds since the previous tick, within [0, max_dt]; 0 on the first
    pub fn tick(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) => ((now_ms - last) / 1000.0) as f32,
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        dt.min(self.max_dt).max(0.0)
    }
}

/// Scheduler that queues callbacks until [`ManualScheduler::fire`]
#[derive(Default)]
pub struct ManualScheduler {
    pending: RefCell<VecDeque<FrameCallback>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of callbacks waiting for a frame
    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Deliver one frame at `now_ms` to every callback queued before it
    pub fn fire(&self, now_ms: f64) -> usize {
        let due: Vec<_> = self.pending.borrow_mut().drain(..).collect();
        let count = due.len();
        for callback in due {
            callback(now_ms);
        }
        count
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&self, callback: FrameCallback) {
        self.pending.borrow_mut().push_back(callback);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::MAX_FRAME_DT;

    #[derive(Default)]
    struct Recorder {
        frames: Vec<f64>,
    }

    impl FrameHandler for Recorder {
        fn on_frame(&mut self, now_ms: f64) {
            self.frames.push(now_ms);
        }
    }

    #[test]
    fn test_clock_first_tick_is_zero() {
        let mut clock = FrameClock::new(MAX_FRAME_DT);
        assert_eq!(clock.tick(5000.0), 0.0);
        assert!((clock.tick(5016.0) - 0.016).abs() < 1e-6);
    }

    #[test]
    fn test_clock_clamps_slow_and_backward_frames() {
        let mut clock = FrameClock::new(MAX_FRAME_DT);
        clock.tick(0.0);
        assert_eq!(clock.tick(500.0), MAX_FRAME_DT);
        assert_eq!(clock.tick(400.0), 0.0);
    }

    #[test]
    fn test_clock_with_inverted_bound_never_panics() {
        let mut clock = FrameClock::new(-0.01);
        clock.tick(0.0);
        assert_eq!(clock.tick(16.0), 0.0);
    }

    #[test]
    fn test_drive_requests_one_frame_at_a_time() {
        let scheduler = Rc::new(ManualScheduler::new());
        let recorder = Rc::new(RefCell::new(Recorder::default()));

        drive(Rc::clone(&scheduler), Rc::clone(&recorder));
        assert_eq!(scheduler.pending(), 1);
        assert!(recorder.borrow().frames.is_empty());

        for t in [0.0, 16.0, 33.0] {
            assert_eq!(scheduler.fire(t), 1);
            assert_eq!(scheduler.pending(), 1);
        }
        assert_eq!(recorder.borrow().frames, vec![0.0, 16.0, 33.0]);
    }
}

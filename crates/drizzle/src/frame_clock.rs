//! # Frame Clock
//!
//! Delta time from a monotonic clock, plus a frames-per-second counter that
//! reports once per second.

use std::time::{Duration, Instant};

/// Length of one FPS reporting window.
pub const FPS_WINDOW: Duration = Duration::from_secs(1);

/// Result of one [`FrameClock::tick`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameTick {
    /// Seconds since the previous tick. Never negative.
    pub dt: f32,
    /// Frame number, starting at 1.
    pub frame: u64,
    /// Frames per second over the window that just closed, if one did.
    pub fps: Option<f32>,
}

/// Monotonic frame timer.
#[derive(Clone, Debug)]
pub struct FrameClock {
    last_tick: Instant,
    window_start: Instant,
    frames_in_window: u32,
    frame: u64,
    last_fps: Option<f32>,
}

impl FrameClock {
    /// Starts the clock now.
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Starts the clock at `start`.
    #[must_use]
    pub fn starting_at(start: Instant) -> Self {
        Self {
            last_tick: start,
            window_start: start,
            frames_in_window: 0,
            frame: 0,
            last_fps: None,
        }
    }

    /// Marks the start of a new frame.
    pub fn tick(&mut self) -> FrameTick {
        self.tick_at(Instant::now())
    }

    /// Marks the start of a new frame at `now`.
    ///
    /// An earlier `now` than the previous tick yields `dt = 0`.
    pub fn tick_at(&mut self, now: Instant) -> FrameTick {
        let dt = now.saturating_duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        self.frame += 1;
        self.frames_in_window += 1;

        let elapsed = now.saturating_duration_since(self.window_start);
        let fps = if elapsed >= FPS_WINDOW {
            let fps = self.frames_in_window as f32 / elapsed.as_secs_f32();
            tracing::info!("{:.1} fps ({:.3} ms/frame)", fps, 1000.0 / fps);
            self.window_start = now;
            self.frames_in_window = 0;
            self.last_fps = Some(fps);
            Some(fps)
        } else {
            None
        };

        FrameTick {
            dt,
            frame: self.frame,
            fps,
        }
    }

    /// Frames ticked so far.
    #[inline]
    #[must_use]
    pub const fn frame(&self) -> u64 {
        self.frame
    }

    /// Rate measured over the most recent complete window.
    #[inline]
    #[must_use]
    pub const fn last_fps(&self) -> Option<f32> {
        self.last_fps
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

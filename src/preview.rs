// Looping animation preview, driven by the app loop polling with the current time.
// While playing, a `Ticker` is held; pausing or dropping the loop drops it,
// so no schedule outlives its owner.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::config::{MAX_FPS, MIN_FPS};

/// An armed periodic deadline. Holding one means "playing".
#[derive(Debug)]
pub struct Ticker {
    next: Instant,
}

impl Ticker {
    fn arm(now: Instant, interval: Duration) -> Self {
        debug!(?interval, "preview timer armed");
        Self { next: now + interval }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        debug!("preview timer released");
    }
}

pub struct PreviewLoop {
    index: usize,
    len: usize,
    fps: u32,
    timer: Option<Ticker>,
}

pub fn frame_interval(fps: u32) -> Duration {
    Duration::from_secs_f64(1.0 / fps.max(1) as f64)
}

impl PreviewLoop {
    /// A paused loop over `len` frames starting at frame 0.
    pub fn new(len: usize, fps: u32) -> Self {
        Self {
            index: 0,
            len: len.max(1),
            fps: fps.clamp(MIN_FPS, MAX_FPS),
            timer: None,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn is_playing(&self) -> bool {
        self.timer.is_some()
    }

    pub fn play(&mut self, now: Instant) {
        if self.timer.is_none() {
            self.timer = Some(Ticker::arm(now, frame_interval(self.fps)));
            info!(fps = self.fps, "preview playing");
        }
    }

    /// Stop advancing; the index stays where it is.
    pub fn pause(&mut self) {
        if self.timer.take().is_some() {
            info!(frame = self.index, "preview paused");
        }
    }

    pub fn toggle(&mut self, now: Instant) {
        if self.is_playing() { self.pause() } else { self.play(now) }
    }

    /// Change the rate, clamped to 1..=12. The wait already in flight is kept;
    /// the new interval applies from the next scheduled tick.
    pub fn set_fps(&mut self, fps: u32) {
        let fps = fps.clamp(MIN_FPS, MAX_FPS);
        if fps != self.fps {
            self.fps = fps;
            info!(fps, "preview rate changed");
        }
    }

    /// Advance by one frame, wrapping at the end.
    pub fn tick(&mut self) {
        self.index = (self.index + 1) % self.len;
    }

    /// Fire at most one tick if the deadline has passed. Returns true when it did.
    /// A loop that fell far behind resumes from `now` instead of bursting.
    pub fn poll(&mut self, now: Instant) -> bool {
        let interval = frame_interval(self.fps);
        let Some(timer) = self.timer.as_mut() else {
            return false;
        };
        if now < timer.next {
            return false;
        }
        let mut next = timer.next + interval;
        if next <= now {
            next = now + interval;
        }
        timer.next = next;
        self.tick();
        true
    }
}

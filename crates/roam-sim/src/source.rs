//! Frame timestamps.

/// The "next frame" wait point.
///
/// Each call blocks (or yields) until the host is ready to draw again and
/// returns that moment in milliseconds, or `None` to stop the loop.  Any
/// iterator of `f64` timestamps is a frame source.
pub trait FrameSource {
    fn next_frame(&mut self) -> Option<f64>;
}

impl<I: Iterator<Item = f64>> FrameSource for I {
    #[inline]
    fn next_frame(&mut self) -> Option<f64> {
        self.next()
    }
}

/// `frames` evenly spaced timestamps, `interval_ms` apart, starting at zero.
///
/// Headless runs and tests use this in place of a display's vsync.
#[derive(Clone, Debug)]
pub struct FixedStep {
    interval_ms: f64,
    remaining: u64,
    now_ms: f64,
}

impl FixedStep {
    pub fn new(interval_ms: f64, frames: u64) -> Self {
        Self { interval_ms, remaining: frames, now_ms: 0.0 }
    }
}

impl Iterator for FixedStep {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let now = self.now_ms;
        self.now_ms += self.interval_ms;
        Some(now)
    }
}

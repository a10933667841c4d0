//! Frame time model.
//!
//! # Design
//!
//! The host calls the population once per rendered frame with a wall-clock
//! timestamp in milliseconds.  `FrameClock` turns consecutive timestamps into
//! a [`FrameDelta`]:
//!
//!   elapsed_ms = now_ms - last_ms
//!   simulate   = elapsed_ms < max_gap_ms
//!
//! A frame whose gap is too large (tab backgrounded, debugger pause) is still
//! rendered, but nobody moves.  Without the gap check a single frame could
//! carry several seconds of progress.

use std::fmt;

// ── FrameDelta ────────────────────────────────────────────────────────────────

/// Elapsed time for one frame and whether it should be simulated.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FrameDelta {
    /// Milliseconds since the previous frame.  Never negative.
    pub elapsed_ms: f32,
    /// `false` when `elapsed_ms` reached the configured gap limit.
    pub simulate: bool,
}

impl FrameDelta {
    /// A delta that moves agents by `elapsed_ms`.
    #[inline]
    pub fn simulated(elapsed_ms: f32) -> Self {
        Self { elapsed_ms: elapsed_ms.max(0.0), simulate: true }
    }

    /// A render-only delta: visual positions are refreshed, nothing advances.
    #[inline]
    pub fn skipped(elapsed_ms: f32) -> Self {
        Self { elapsed_ms: elapsed_ms.max(0.0), simulate: false }
    }

    /// Classify `elapsed_ms` against the gap limit.
    #[inline]
    pub fn classify(elapsed_ms: f32, max_gap_ms: f32) -> Self {
        if elapsed_ms < max_gap_ms {
            Self::simulated(elapsed_ms)
        } else {
            Self::skipped(elapsed_ms)
        }
    }
}

// ── FrameClock ────────────────────────────────────────────────────────────────

/// Tracks the last frame timestamp and the number of frames seen.
#[derive(Clone, Debug)]
pub struct FrameClock {
    /// Frames with a gap at or above this are not simulated.
    pub max_gap_ms: f32,
    last_ms: Option<f64>,
    frame: u64,
}

impl FrameClock {
    pub fn new(max_gap_ms: f32) -> Self {
        Self { max_gap_ms, last_ms: None, frame: 0 }
    }

    /// Record the timestamp of a new frame and return its delta.
    ///
    /// The first call has nothing to measure against and yields a zero-length
    /// simulated delta.  Timestamps that go backwards are treated as zero
    /// elapsed time.
    pub fn tick(&mut self, now_ms: f64) -> FrameDelta {
        let elapsed = match self.last_ms {
            Some(last) => (now_ms - last).max(0.0) as f32,
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        self.frame += 1;
        FrameDelta::classify(elapsed, self.max_gap_ms)
    }

    /// Number of frames ticked so far.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }
}

impl fmt::Display for FrameClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.last_ms {
            Some(ms) => write!(f, "frame {} @ {:.1} ms", self.frame, ms),
            None => write!(f, "frame {} (not started)", self.frame),
        }
    }
}

//! Per-student movement state.

/// Whether a student is walking a segment or waiting to pick a destination.
///
/// A student is `Transiting` exactly when its waypoint queue is non-empty
/// (checked after each `advance` + `reconcile_path` pair), so progress and
/// segment length only exist while there is a segment to measure them on.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MovementState {
    /// No segment in flight.  When the countdown drops below zero the student
    /// picks a new destination.
    Idle { countdown_ms: f32 },

    /// Walking from `current` toward the front waypoint.
    Transiting {
        /// Distance covered along this segment.  May exceed `segment_len`
        /// until the next reconciliation.
        progress: f32,
        /// Euclidean length of the segment.
        segment_len: f32,
        /// Idle countdown to resume with once the queue is exhausted.  Frozen
        /// while walking.
        idle_after_ms: f32,
    },
}

impl MovementState {
    #[inline]
    pub fn idle(countdown_ms: f32) -> Self {
        MovementState::Idle { countdown_ms }
    }

    #[inline]
    pub fn is_transiting(&self) -> bool {
        matches!(self, MovementState::Transiting { .. })
    }

    /// Distance covered along the current segment, if any.
    #[inline]
    pub fn progress(&self) -> Option<f32> {
        match *self {
            MovementState::Transiting { progress, .. } => Some(progress),
            MovementState::Idle { .. } => None,
        }
    }

    /// Length of the current segment, if any.
    #[inline]
    pub fn segment_len(&self) -> Option<f32> {
        match *self {
            MovementState::Transiting { segment_len, .. } => Some(segment_len),
            MovementState::Idle { .. } => None,
        }
    }

    /// `progress / segment_len` for a segment in flight.
    ///
    /// Not clamped to 1.  A zero-length segment reports 1 (already there).
    pub fn fraction(&self) -> Option<f32> {
        match *self {
            MovementState::Transiting { progress, segment_len, .. } => {
                Some(if segment_len > 0.0 { progress / segment_len } else { 1.0 })
            }
            MovementState::Idle { .. } => None,
        }
    }

    /// Idle countdown: the live value while idle, the frozen one while walking.
    #[inline]
    pub fn idle_countdown(&self) -> f32 {
        match *self {
            MovementState::Idle { countdown_ms } => countdown_ms,
            MovementState::Transiting { idle_after_ms, .. } => idle_after_ms,
        }
    }
}

impl Default for MovementState {
    fn default() -> Self {
        MovementState::idle(0.0)
    }
}

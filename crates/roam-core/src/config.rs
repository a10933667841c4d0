//! Population configuration.

use crate::{RoamError, RoamResult};

/// Tunables for a wandering population.
///
/// Typically loaded from a TOML file by the application crate (enable the
/// `serde` feature) and handed to the population builder.  Missing fields
/// fall back to [`RoamConfig::default`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RoamConfig {
    /// Master RNG seed.  The same seed and frame timings give identical runs.
    pub seed: u64,

    /// Number of students.  Fixed for the life of the population.
    pub population: usize,

    /// Slowest walking speed, in grid units per millisecond.
    pub speed_min: f32,

    /// Fastest walking speed (exclusive), in grid units per millisecond.
    pub speed_max: f32,

    /// Each waypoint coordinate is offset by a uniform value in
    /// `[-jitter_radius, +jitter_radius]` when a route is planned.
    pub jitter_radius: f32,

    /// Shortest pause between arriving and picking the next destination.
    pub idle_min_ms: f32,

    /// Longest pause (exclusive).
    pub idle_max_ms: f32,

    /// Constant added to every visual y so sprites stand on their cell
    /// rather than hang from it.
    pub visual_offset_y: f32,

    /// Frames whose elapsed time reaches this are rendered but not simulated.
    pub max_frame_gap_ms: f32,
}

impl Default for RoamConfig {
    fn default() -> Self {
        Self {
            seed:             42,
            population:       50,
            speed_min:        0.0002,
            speed_max:        0.0032,
            jitter_radius:    0.5,
            idle_min_ms:      1_000.0,
            idle_max_ms:      5_000.0,
            visual_offset_y:  -0.5,
            max_frame_gap_ms: 500.0,
        }
    }
}

impl RoamConfig {
    /// Reject configurations the movement code cannot run with.
    pub fn validate(&self) -> RoamResult<()> {
        if !(self.speed_min > 0.0 && self.speed_min < self.speed_max) {
            return Err(RoamError::Config(format!(
                "speed range must satisfy 0 < speed_min < speed_max (got {}..{})",
                self.speed_min, self.speed_max
            )));
        }
        if !(self.idle_min_ms >= 0.0 && self.idle_min_ms < self.idle_max_ms) {
            return Err(RoamError::Config(format!(
                "idle range must satisfy 0 <= idle_min_ms < idle_max_ms (got {}..{})",
                self.idle_min_ms, self.idle_max_ms
            )));
        }
        if !(self.jitter_radius >= 0.0 && self.jitter_radius.is_finite()) {
            return Err(RoamError::Config(format!(
                "jitter_radius must be a finite non-negative number (got {})",
                self.jitter_radius
            )));
        }
        if !(self.max_frame_gap_ms > 0.0) {
            return Err(RoamError::Config(format!(
                "max_frame_gap_ms must be positive (got {})",
                self.max_frame_gap_ms
            )));
        }
        if u32::try_from(self.population).is_err() {
            return Err(RoamError::Config(format!(
                "population {} does not fit an AgentId",
                self.population
            )));
        }
        Ok(())
    }
}

//! Read-only inputs shared by every student in a frame.

use roam_core::RoamConfig;
use roam_grid::{PathOracle, Region};

/// Everything a student needs from the outside world to move.
///
/// Grid shape and tunables are passed in explicitly on every call rather than
/// read from globals, so two populations on different grids can coexist.
#[derive(Copy, Clone)]
pub struct RoamContext<'a> {
    /// Where students may stand.
    pub region: &'a dyn Region,
    /// Path search between cells of `region`.
    pub oracle: &'a dyn PathOracle,
    /// Jitter radius, idle range and friends.
    pub config: &'a RoamConfig,
}

impl<'a> RoamContext<'a> {
    pub fn new(region: &'a dyn Region, oracle: &'a dyn PathOracle, config: &'a RoamConfig) -> Self {
        Self { region, oracle, config }
    }
}

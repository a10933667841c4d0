//! Uniform sampling of accessible cells by rejection.

use roam_core::{AgentRng, Cell};

use crate::{GridError, GridResult, Region};

/// Draw a uniformly random accessible cell from `region`.
///
/// Draws integer cells uniformly from the bounding rectangle and rejects
/// until one is accessible.  Expected draws = area / accessible cells.
///
/// # Precondition
///
/// `region` must contain at least one accessible cell; otherwise this never
/// returns.  Check with [`Region::has_accessible_cell`] before building
/// agents, or use [`try_sample_accessible`].
pub fn sample_accessible<R: Region + ?Sized>(region: &R, rng: &mut AgentRng) -> Cell {
    let bounds = region.bounds();
    debug_assert!(bounds.area() > 0, "sampling from an empty rectangle");
    loop {
        let cell = Cell::new(
            rng.gen_range(0..bounds.width.max(1)),
            rng.gen_range(0..bounds.height.max(1)),
        );
        if region.is_accessible(cell) {
            return cell;
        }
    }
}

/// Bounded variant of [`sample_accessible`].
///
/// Gives up after `max_attempts` rejected draws instead of looping forever.
pub fn try_sample_accessible<R: Region + ?Sized>(
    region:       &R,
    rng:          &mut AgentRng,
    max_attempts: u32,
) -> GridResult<Cell> {
    let bounds = region.bounds();
    if bounds.area() == 0 {
        return Err(GridError::EmptyRegion);
    }
    for _ in 0..max_attempts {
        let cell = Cell::new(rng.gen_range(0..bounds.width), rng.gen_range(0..bounds.height));
        if region.is_accessible(cell) {
            return Ok(cell);
        }
    }
    Err(GridError::SamplingExhausted { attempts: max_attempts })
}

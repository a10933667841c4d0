//! Fluent builder for constructing a [`Population`].

use tracing::info;

use roam_agent::{RoamContext, Student};
use roam_core::{AgentId, AgentRng, Cell, FrameClock, RoamConfig, SimRng};
use roam_grid::{PathOracle, Region};

use crate::{Population, SimError, SimResult};

/// Fluent builder for [`Population<G, O>`].
///
/// # Required inputs
///
/// - [`RoamConfig`]: seed, population size, speed and idle ranges, ...
/// - `G: Region`: the walkable area (e.g. [`roam_grid::CarvedRect::campus`])
/// - `O: PathOracle`: the path finder (e.g. [`roam_grid::BfsOracle`])
///
/// # Optional inputs (have defaults)
///
/// | Method                 | Default                                      |
/// |------------------------|----------------------------------------------|
/// | `.speeds(v)`           | Uniform in `[speed_min, speed_max)`, seeded  |
/// | `.starting_cells(v)`   | Random accessible cell per student           |
///
/// # Example
///
/// ```rust,ignore
/// let mut pop = PopulationBuilder::new(config, CarvedRect::campus(), BfsOracle)
///     .starting_cells(cells)
///     .build()?;
/// ```
pub struct PopulationBuilder<G: Region, O: PathOracle> {
    config: RoamConfig,
    region: G,
    oracle: O,
    speeds: Option<Vec<f32>>,
    cells:  Option<Vec<Cell>>,
}

impl<G: Region, O: PathOracle> PopulationBuilder<G, O> {
    pub fn new(config: RoamConfig, region: G, oracle: O) -> Self {
        Self { config, region, oracle, speeds: None, cells: None }
    }

    /// Fix each student's walking speed (must be length `population`, and
    /// every speed must be finite and positive).
    pub fn speeds(mut self, speeds: Vec<f32>) -> Self {
        self.speeds = Some(speeds);
        self
    }

    /// Fix each student's starting cell (must be length `population`, and
    /// every cell must be accessible).
    pub fn starting_cells(mut self, cells: Vec<Cell>) -> Self {
        self.cells = Some(cells);
        self
    }

    /// Validate inputs, draw speeds, place every student and return a
    /// population ready for sprite binding.
    pub fn build(self) -> SimResult<Population<G, O>> {
        self.config.validate()?;
        if !self.region.has_accessible_cell() {
            return Err(SimError::EmptyRegion);
        }
        let count = self.config.population;

        // ── Resolve optional inputs ───────────────────────────────────────
        let speeds = match self.speeds {
            Some(s) => {
                if s.len() != count {
                    return Err(SimError::AgentCountMismatch {
                        expected: count,
                        got:      s.len(),
                        what:     "speeds",
                    });
                }
                if let Some((i, &speed)) =
                    s.iter().enumerate().find(|&(_, &v)| !(v.is_finite() && v > 0.0))
                {
                    return Err(SimError::InvalidSpeed { agent: AgentId(i as u32), speed });
                }
                s
            }
            None => {
                let mut rng = SimRng::new(self.config.seed);
                (0..count)
                    .map(|_| rng.gen_range(self.config.speed_min..self.config.speed_max))
                    .collect()
            }
        };

        if let Some(cells) = &self.cells {
            if cells.len() != count {
                return Err(SimError::AgentCountMismatch {
                    expected: count,
                    got:      cells.len(),
                    what:     "starting cells",
                });
            }
            if let Some((i, &cell)) =
                cells.iter().enumerate().find(|&(_, &c)| !self.region.is_accessible(c))
            {
                return Err(SimError::InaccessibleStart { agent: AgentId(i as u32), cell });
            }
        }

        // ── Seed and place ────────────────────────────────────────────────
        let mut rngs: Vec<AgentRng> = (0..count)
            .map(|i| AgentRng::new(self.config.seed, AgentId(i as u32)))
            .collect();

        let ctx = RoamContext::new(&self.region, &self.oracle, &self.config);
        let mut students = Vec::with_capacity(count);
        for (i, (&speed, rng)) in speeds.iter().zip(rngs.iter_mut()).enumerate() {
            let mut student = Student::new(speed);
            match &self.cells {
                Some(cells) => student.place_at(cells[i]),
                None => student.place_at_random_position(&ctx, rng),
            }
            students.push(student);
        }

        info!(population = count, seed = self.config.seed, "population built");

        let mut population = Population {
            clock: FrameClock::new(self.config.max_frame_gap_ms),
            config: self.config,
            region: self.region,
            oracle: self.oracle,
            students,
            rngs,
            draw_order: Vec::with_capacity(count),
        };
        population.rebuild_draw_order();
        Ok(population)
    }
}

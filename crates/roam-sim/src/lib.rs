//! `roam-sim`: frame loop orchestrator for the students-roam workspace.
//!
//! # Per-frame update
//!
//! ```text
//! for each frame (timestamp from a FrameSource):
//!   1. Delta       FrameClock turns the timestamp into elapsed ms; a gap of
//!                  max_frame_gap_ms or more marks the frame "not simulated".
//!   2. Students    for every student, in AgentId order:
//!                    advance(elapsed) + reconcile_path()   (simulated frames)
//!                    visual_position()                     (every frame)
//!   3. Depth sort  draw list ordered by visual y, ascending.
//!   4. Render      FrameObserver::on_draw for each entry, only once every
//!                  student has a sprite.
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use roam_core::RoamConfig;
//! use roam_grid::{BfsOracle, CarvedRect};
//! use roam_sim::{FixedStep, NoopObserver, PopulationBuilder, SpriteCache};
//!
//! let mut pop = PopulationBuilder::new(RoamConfig::default(), CarvedRect::campus(), BfsOracle)
//!     .build()?;
//! let mut sprites = SpriteCache::loaded(12);
//! pop.bind_sprites(&mut sprites)?;
//! pop.run(FixedStep::new(16.0, 600), &mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod population;
pub mod source;
pub mod sprites;

#[cfg(test)]
mod tests;

pub use builder::PopulationBuilder;
pub use error::{SimError, SimResult};
pub use observer::{DrawItem, FrameObserver, NoopObserver};
pub use population::Population;
pub use source::{FixedStep, FrameSource};
pub use sprites::{SpriteCache, SpriteProvider};

//! The `Population` struct and its frame loop.

use tracing::{debug, info};

use roam_agent::{RoamContext, Student};
use roam_core::{AgentId, AgentRng, FrameClock, FrameDelta, RoamConfig, RoamError, RoamResult};
use roam_grid::{PathOracle, Region};

use crate::{DrawItem, FrameObserver, FrameSource, SimError, SimResult, SpriteProvider};

/// A fixed set of students wandering one region.
///
/// Each frame runs in three steps:
///
/// 1. **Update** (simulated frames only): `advance` then `reconcile_path` for
///    every student, ascending `AgentId`.
/// 2. **Visuals**: every student's visual position is recomputed from its
///    current state.
/// 3. **Depth sort**: the draw list is ordered by visual y, ascending, so
///    students nearer the bottom of the screen are drawn last.
///
/// Create via [`PopulationBuilder`][crate::PopulationBuilder].
pub struct Population<G: Region, O: PathOracle> {
    /// Fixed at build time; the clock's gap limit is taken from it.
    pub(crate) config: RoamConfig,

    /// Frame counter and last timestamp, used by [`run`](Self::run).
    pub(crate) clock: FrameClock,

    pub(crate) region: G,
    pub(crate) oracle: O,
    pub(crate) students: Vec<Student>,

    /// Per-student RNGs, kept apart from `students` for the split borrow in
    /// [`step`](Self::step).
    pub(crate) rngs: Vec<AgentRng>,

    pub(crate) draw_order: Vec<DrawItem>,
}

impl<G: Region, O: PathOracle> Population<G, O> {
    // ── Frame loop ────────────────────────────────────────────────────────

    /// Drive frames from `source` until it runs dry, delivering each frame's
    /// draw list to `observer`.  Returns the number of frames processed.
    ///
    /// Sprites must be bound first; see [`bind_sprites`](Self::bind_sprites).
    pub fn run<S, Obs>(&mut self, mut source: S, observer: &mut Obs) -> SimResult<u64>
    where
        S: FrameSource,
        Obs: FrameObserver,
    {
        if !self.is_ready() {
            return Err(SimError::SpritesNotReady);
        }
        let first = self.clock.frame();
        while let Some(now_ms) = source.next_frame() {
            let delta = self.clock.tick(now_ms);
            let frame = self.clock.frame();
            observer.on_frame_start(frame, delta);
            self.step(delta);
            self.render(observer);
            observer.on_frame_end(frame);
        }
        let frames = self.clock.frame() - first;
        info!(frames, "frame source exhausted");
        Ok(frames)
    }

    /// Run one frame of `elapsed_ms`, classified against `max_frame_gap_ms`.
    pub fn frame(&mut self, elapsed_ms: f32) {
        self.step(FrameDelta::classify(elapsed_ms, self.config.max_frame_gap_ms));
    }

    /// Update, recompute visuals and depth-sort.
    ///
    /// A delta with `simulate == false` leaves every student where it is;
    /// the draw list is still rebuilt.
    pub fn step(&mut self, delta: FrameDelta) {
        if delta.simulate {
            let ctx = RoamContext::new(&self.region, &self.oracle, &self.config);
            for (student, rng) in self.students.iter_mut().zip(self.rngs.iter_mut()) {
                student.advance(delta.elapsed_ms, &ctx, rng);
                student.reconcile_path();
            }
        } else {
            debug!(elapsed_ms = delta.elapsed_ms, "frame gap too large, not simulating");
        }
        self.rebuild_draw_order();
    }

    /// Deliver the current draw list to `observer`, back to front.
    ///
    /// Draws nothing and returns `false` until every student has a sprite.
    pub fn render<Obs: FrameObserver>(&self, observer: &mut Obs) -> bool {
        if !self.is_ready() {
            return false;
        }
        for item in &self.draw_order {
            observer.on_draw(item);
        }
        true
    }

    // ── Sprites ───────────────────────────────────────────────────────────

    /// Give every student a sprite handle from `provider`.
    ///
    /// Fails with [`SimError::SpritesNotReady`] while the provider is still
    /// loading; nothing is bound in that case.
    pub fn bind_sprites<P: SpriteProvider>(&mut self, provider: &mut P) -> SimResult<()> {
        if !provider.is_ready() {
            return Err(SimError::SpritesNotReady);
        }
        for (i, (student, rng)) in self.students.iter_mut().zip(self.rngs.iter_mut()).enumerate() {
            student.sprite = Some(provider.sprite_for(AgentId(i as u32), rng));
        }
        debug!(students = self.students.len(), "sprites bound");
        self.rebuild_draw_order();
        Ok(())
    }

    /// `true` once every student has a sprite.
    pub fn is_ready(&self) -> bool {
        self.students.iter().all(|s| s.sprite.is_some())
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &RoamConfig {
        &self.config
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn student(&self, agent: AgentId) -> RoamResult<&Student> {
        self.students.get(agent.index()).ok_or(RoamError::AgentNotFound(agent))
    }

    /// This frame's draw list, ascending visual y.
    pub fn draw_order(&self) -> &[DrawItem] {
        &self.draw_order
    }

    pub fn region(&self) -> &G {
        &self.region
    }

    // ── Internals ─────────────────────────────────────────────────────────

    pub(crate) fn rebuild_draw_order(&mut self) {
        let offset = self.config.visual_offset_y;
        self.draw_order.clear();
        self.draw_order.extend(self.students.iter().enumerate().map(|(i, s)| DrawItem {
            agent:  AgentId(i as u32),
            sprite: s.sprite,
            pos:    s.visual_position(offset),
        }));
        self.draw_order.sort_by(|a, b| a.pos.y.total_cmp(&b.pos.y));
    }
}

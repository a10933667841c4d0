//! Integration tests for roam-sim.

use roam_core::{AgentId, Cell, FrameDelta, Point, RoamConfig, RoamError};
use roam_grid::{BfsOracle, Bounds, CarvedRect, Region};

use crate::{
    DrawItem, FixedStep, FrameObserver, NoopObserver, Population, PopulationBuilder, SimError,
    SpriteCache,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn config(population: usize) -> RoamConfig {
    RoamConfig { population, ..RoamConfig::default() }
}

fn campus(population: usize) -> Population<CarvedRect, BfsOracle> {
    PopulationBuilder::new(config(population), CarvedRect::campus(), BfsOracle)
        .build()
        .unwrap()
}

fn ready_campus(population: usize) -> Population<CarvedRect, BfsOracle> {
    let mut pop = campus(population);
    pop.bind_sprites(&mut SpriteCache::loaded(4)).unwrap();
    pop
}

/// No cell is accessible.
struct Walled;

impl Region for Walled {
    fn bounds(&self) -> Bounds {
        Bounds { width: 3, height: 3 }
    }

    fn is_accessible(&self, _cell: Cell) -> bool {
        false
    }
}

#[derive(Default)]
struct Recorder {
    started: Vec<(u64, FrameDelta)>,
    ended: u64,
    draws: Vec<DrawItem>,
}

impl FrameObserver for Recorder {
    fn on_frame_start(&mut self, frame: u64, delta: FrameDelta) {
        self.started.push((frame, delta));
    }

    fn on_draw(&mut self, item: &DrawItem) {
        self.draws.push(*item);
    }

    fn on_frame_end(&mut self, _frame: u64) {
        self.ended += 1;
    }
}

// ── PopulationBuilder ─────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_requested_population() {
        let pop = campus(50);
        assert_eq!(pop.students().len(), 50);
        assert_eq!(pop.draw_order().len(), 50);
    }

    #[test]
    fn students_start_on_accessible_cells() {
        let pop = campus(200);
        let region = CarvedRect::campus();
        for s in pop.students() {
            assert!(region.is_accessible(s.current().floor_cell()), "{}", s.current());
            assert!(!s.is_transiting());
        }
    }

    #[test]
    fn speeds_drawn_from_configured_range() {
        let pop = campus(500);
        let cfg = RoamConfig::default();
        for s in pop.students() {
            assert!(s.speed >= cfg.speed_min && s.speed < cfg.speed_max, "{}", s.speed);
        }
    }

    #[test]
    fn explicit_speeds_and_cells_are_used() {
        let pop = PopulationBuilder::new(config(2), CarvedRect::campus(), BfsOracle)
            .speeds(vec![0.001, 0.002])
            .starting_cells(vec![Cell::new(1, 1), Cell::new(8, 4)])
            .build()
            .unwrap();
        assert_eq!(pop.students()[0].speed, 0.001);
        assert_eq!(pop.students()[1].current(), Point::from(Cell::new(8, 4)));
    }

    #[test]
    fn empty_region_is_rejected() {
        let result = PopulationBuilder::new(config(3), Walled, BfsOracle).build();
        assert!(matches!(result, Err(SimError::EmptyRegion)));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let bad = RoamConfig { speed_min: 0.01, speed_max: 0.001, ..RoamConfig::default() };
        let result = PopulationBuilder::new(bad, CarvedRect::campus(), BfsOracle).build();
        assert!(matches!(result, Err(SimError::Config(RoamError::Config(_)))));
    }

    #[test]
    fn speed_count_mismatch_errors() {
        let result = PopulationBuilder::new(config(3), CarvedRect::campus(), BfsOracle)
            .speeds(vec![0.001])
            .build();
        assert!(matches!(
            result,
            Err(SimError::AgentCountMismatch { expected: 3, got: 1, what: "speeds" })
        ));
    }

    #[test]
    fn non_positive_or_nan_speed_is_rejected() {
        for (bad, at) in [(0.0, 1), (-0.001, 0), (f32::NAN, 2), (f32::INFINITY, 1)] {
            let mut speeds = vec![0.001; 3];
            speeds[at] = bad;
            let result = PopulationBuilder::new(config(3), CarvedRect::campus(), BfsOracle)
                .speeds(speeds)
                .build();
            match result {
                Err(SimError::InvalidSpeed { agent, speed }) => {
                    assert_eq!(agent, AgentId(at as u32));
                    if bad.is_nan() {
                        assert!(speed.is_nan());
                    } else {
                        assert_eq!(speed, bad);
                    }
                }
                other => panic!("expected InvalidSpeed for {bad}, got {:?}", other.err()),
            }
        }
    }

    #[test]
    fn carved_starting_cell_is_rejected() {
        let result = PopulationBuilder::new(config(2), CarvedRect::campus(), BfsOracle)
            .starting_cells(vec![Cell::new(0, 0), Cell::new(7, 0)])
            .build();
        match result {
            Err(SimError::InaccessibleStart { agent, cell }) => {
                assert_eq!(agent, AgentId(1));
                assert_eq!(cell, Cell::new(7, 0));
            }
            other => panic!("expected InaccessibleStart, got {:?}", other.err()),
        }
    }

    #[test]
    fn same_seed_same_population() {
        let a = campus(20);
        let b = campus(20);
        for (x, y) in a.students().iter().zip(b.students()) {
            assert_eq!(x.speed, y.speed);
            assert_eq!(x.current(), y.current());
        }
    }
}

// ── Frame update and depth sort ───────────────────────────────────────────────

#[cfg(test)]
mod frame_tests {
    use super::*;

    #[test]
    fn lower_visual_y_is_drawn_first() {
        let cfg = RoamConfig { population: 2, visual_offset_y: 0.0, ..RoamConfig::default() };
        let mut pop = PopulationBuilder::new(cfg, CarvedRect::campus(), BfsOracle)
            .starting_cells(vec![Cell::new(0, 2), Cell::new(0, 1)])
            .build()
            .unwrap();
        pop.frame(0.0);
        let order: Vec<AgentId> = pop.draw_order().iter().map(|d| d.agent).collect();
        assert_eq!(order, vec![AgentId(1), AgentId(0)]);
        assert_eq!(pop.draw_order()[0].pos.y, 1.0);
        assert_eq!(pop.draw_order()[1].pos.y, 2.0);
    }

    #[test]
    fn visual_offset_is_applied_to_draw_list() {
        let cfg = RoamConfig { population: 1, visual_offset_y: -0.5, ..RoamConfig::default() };
        let pop = PopulationBuilder::new(cfg, CarvedRect::campus(), BfsOracle)
            .starting_cells(vec![Cell::new(3, 4)])
            .build()
            .unwrap();
        assert_eq!(pop.draw_order()[0].pos.x, 3.0);
        assert_eq!(pop.draw_order()[0].pos.y, 3.5);
    }

    #[test]
    fn draw_list_is_sorted_and_fresh_every_frame() {
        let mut pop = campus(50);
        let offset = pop.config().visual_offset_y;
        for _ in 0..500 {
            pop.frame(16.0);
            let order = pop.draw_order();
            assert!(order.windows(2).all(|w| w[0].pos.y <= w[1].pos.y));
            for item in order {
                let s = pop.student(item.agent).unwrap();
                assert_eq!(item.pos, s.visual_position(offset));
            }
        }
    }

    #[test]
    fn students_eventually_walk() {
        let mut pop = campus(50);
        let start: Vec<_> = pop.students().iter().map(|s| s.current()).collect();
        for _ in 0..1_000 {
            pop.frame(16.0);
        }
        let moved = pop
            .students()
            .iter()
            .zip(&start)
            .filter(|(s, p)| s.current() != **p || s.is_transiting())
            .count();
        assert!(moved > 0);
    }

    #[test]
    fn no_student_gets_stranded_over_a_long_run() {
        let mut pop = campus(50);
        // 320 s of 60 Hz frames: plenty of settling on jittered edge waypoints.
        for _ in 0..20_000 {
            pop.frame(16.0);
        }
        // Idle never lasts 5 s, so everyone walks again within the next minute.
        let mut walked = vec![false; 50];
        for _ in 0..4_000 {
            pop.frame(16.0);
            for (flag, s) in walked.iter_mut().zip(pop.students()) {
                *flag |= s.is_transiting();
            }
        }
        let stuck: Vec<_> = pop
            .students()
            .iter()
            .zip(&walked)
            .filter(|(_, w)| !**w)
            .map(|(s, _)| s.current())
            .collect();
        assert!(stuck.is_empty(), "idle for 64 s at {stuck:?}");
    }

    #[test]
    fn large_gap_freezes_students() {
        let mut pop = campus(30);
        for _ in 0..400 {
            pop.frame(16.0);
        }
        let offset = pop.config().visual_offset_y;
        let before: Vec<_> = pop
            .students()
            .iter()
            .map(|s| (s.state(), s.visual_position(offset), s.waypoints().len()))
            .collect();

        pop.frame(500.0);
        pop.frame(10_000.0);

        let after: Vec<_> = pop
            .students()
            .iter()
            .map(|s| (s.state(), s.visual_position(offset), s.waypoints().len()))
            .collect();
        assert_eq!(before, after);
    }

    #[test]
    fn step_with_skipped_delta_still_rebuilds_draw_list() {
        let mut pop = campus(5);
        pop.step(FrameDelta::skipped(1_000.0));
        assert_eq!(pop.draw_order().len(), 5);
    }

    #[test]
    fn unknown_student_errors() {
        let pop = campus(3);
        assert!(pop.student(AgentId(2)).is_ok());
        assert!(matches!(
            pop.student(AgentId(3)),
            Err(RoamError::AgentNotFound(AgentId(3)))
        ));
    }
}

// ── Sprites and readiness ─────────────────────────────────────────────────────

#[cfg(test)]
mod sprite_tests {
    use super::*;

    #[test]
    fn nothing_rendered_before_sprites_bound() {
        let pop = campus(10);
        let mut rec = Recorder::default();
        assert!(!pop.is_ready());
        assert!(!pop.render(&mut rec));
        assert!(rec.draws.is_empty());
    }

    #[test]
    fn loading_provider_is_refused() {
        let mut pop = campus(10);
        let mut cache = SpriteCache::new(4);
        assert!(matches!(pop.bind_sprites(&mut cache), Err(SimError::SpritesNotReady)));
        assert!(!pop.is_ready());
        assert!(cache.is_empty());

        cache.mark_loaded();
        pop.bind_sprites(&mut cache).unwrap();
        assert!(pop.is_ready());
        assert_eq!(cache.len(), 10);
    }

    #[test]
    fn every_student_gets_a_cached_sprite() {
        let mut pop = campus(25);
        let mut cache = SpriteCache::loaded(3);
        pop.bind_sprites(&mut cache).unwrap();
        for s in pop.students() {
            let sprite = s.sprite.unwrap();
            assert!(cache.variant(sprite).unwrap() < 3);
        }
        assert!(pop.draw_order().iter().all(|d| d.sprite.is_some()));
    }

    #[test]
    fn render_delivers_back_to_front() {
        let pop = ready_campus(40);
        let mut rec = Recorder::default();
        assert!(pop.render(&mut rec));
        assert_eq!(rec.draws.len(), 40);
        assert!(rec.draws.windows(2).all(|w| w[0].pos.y <= w[1].pos.y));
    }
}

// ── run() ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    #[test]
    fn run_requires_sprites() {
        let mut pop = campus(5);
        let result = pop.run(FixedStep::new(16.0, 10), &mut NoopObserver);
        assert!(matches!(result, Err(SimError::SpritesNotReady)));
        assert_eq!(pop.clock().frame(), 0);
    }

    #[test]
    fn run_drives_every_frame() {
        let mut pop = ready_campus(8);
        let mut rec = Recorder::default();
        let frames = pop.run(FixedStep::new(16.0, 120), &mut rec).unwrap();
        assert_eq!(frames, 120);
        assert_eq!(rec.started.len(), 120);
        assert_eq!(rec.ended, 120);
        assert_eq!(rec.draws.len(), 120 * 8);
        assert_eq!(rec.started[0].0, 1);
        assert_eq!(rec.started[119].0, 120);
    }

    #[test]
    fn gap_in_timestamps_is_not_simulated() {
        let mut pop = ready_campus(4);
        let mut rec = Recorder::default();
        let stamps = vec![0.0, 16.0, 1_016.0, 1_032.0];
        pop.run(stamps.into_iter(), &mut rec).unwrap();
        let flags: Vec<bool> = rec.started.iter().map(|(_, d)| d.simulate).collect();
        assert_eq!(flags, vec![true, true, false, true]);
        assert_eq!(rec.started[2].1.elapsed_ms, 1_000.0);
    }

    #[test]
    fn run_uses_configured_frame_gap() {
        let cfg = RoamConfig { population: 3, max_frame_gap_ms: 100.0, ..RoamConfig::default() };
        let mut pop = PopulationBuilder::new(cfg, CarvedRect::campus(), BfsOracle).build().unwrap();
        pop.bind_sprites(&mut SpriteCache::loaded(2)).unwrap();
        assert_eq!(pop.clock().max_gap_ms, pop.config().max_frame_gap_ms);

        let mut rec = Recorder::default();
        pop.run(vec![0.0, 50.0, 150.0, 250.0].into_iter(), &mut rec).unwrap();
        let flags: Vec<bool> = rec.started.iter().map(|(_, d)| d.simulate).collect();
        assert_eq!(flags, vec![true, true, false, false]);
    }

    #[test]
    fn identical_runs_are_deterministic() {
        let mut a = ready_campus(20);
        let mut b = ready_campus(20);
        a.run(FixedStep::new(16.0, 600), &mut NoopObserver).unwrap();
        b.run(FixedStep::new(16.0, 600), &mut NoopObserver).unwrap();
        assert_eq!(a.draw_order(), b.draw_order());
    }
}

//! The `Student`: one wandering agent.

use std::collections::VecDeque;

use tracing::{debug, trace};

use roam_core::{AgentRng, Cell, Point, RoamConfig, SpriteId};
use roam_grid::sample_accessible;

use crate::{MovementState, RoamContext};

/// Result of [`Student::plan_route_to`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlanOutcome {
    /// The waypoint queue was replaced with a route of this many waypoints.
    Planned { waypoints: usize },
    /// The oracle found no path; the student's route and state are unchanged.
    Unreachable,
}

impl PlanOutcome {
    #[inline]
    pub fn is_planned(self) -> bool {
        matches!(self, PlanOutcome::Planned { .. })
    }
}

/// Position, route and timing for one student.
///
/// `current` is the last settled waypoint (or the starting cell).  While
/// transiting, the student is visually somewhere on the segment from
/// `current` to the front of `waypoints`.
#[derive(Clone, Debug)]
pub struct Student {
    /// Walking speed in grid units per millisecond.
    pub speed: f32,

    /// Sprite handle, bound once assets are loaded.
    pub sprite: Option<SpriteId>,

    current: Point,
    waypoints: VecDeque<Point>,
    state: MovementState,
}

impl Student {
    /// A student standing at the origin, idle, with a zero countdown (it will
    /// pick a destination on its first advance).
    pub fn new(speed: f32) -> Self {
        Self {
            speed,
            sprite: None,
            current: Point::default(),
            waypoints: VecDeque::new(),
            state: MovementState::default(),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn current(&self) -> Point {
        self.current
    }

    /// Remaining waypoints; front = next target, back = destination.
    #[inline]
    pub fn waypoints(&self) -> &VecDeque<Point> {
        &self.waypoints
    }

    #[inline]
    pub fn state(&self) -> MovementState {
        self.state
    }

    #[inline]
    pub fn is_transiting(&self) -> bool {
        self.state.is_transiting()
    }

    // ── Placement & planning ──────────────────────────────────────────────

    /// Teleport to a random accessible cell and drop any route in progress.
    ///
    /// The idle countdown is kept.
    pub fn place_at_random_position(&mut self, ctx: &RoamContext<'_>, rng: &mut AgentRng) {
        self.place_at(sample_accessible(ctx.region, rng));
    }

    /// Teleport to `cell` and drop any route in progress.
    pub fn place_at(&mut self, cell: Cell) {
        self.current = Point::from(cell);
        self.waypoints.clear();
        self.state = MovementState::idle(self.state.idle_countdown());
    }

    /// Ask the oracle for a route from the student's cell to `destination`.
    ///
    /// On success the waypoint queue is replaced with the route's nodes,
    /// origin excluded, each jittered independently by up to
    /// `config.jitter_radius` per axis.  A student caught mid-segment first
    /// settles where it visually stands, so the new route starts there.
    ///
    /// On failure nothing changes.
    pub fn plan_route_to(
        &mut self,
        destination: Cell,
        ctx:         &RoamContext<'_>,
        rng:         &mut AgentRng,
    ) -> PlanOutcome {
        let origin = self.interpolated();
        let start = origin.floor_cell();

        let goal = match ctx.oracle.find_path(start, destination, ctx.region) {
            Ok(goal) => goal,
            Err(err) => {
                debug!(%start, %destination, %err, "destination unreachable, keeping route");
                return PlanOutcome::Unreachable;
            }
        };

        // The origin is where the student already stands.
        let radius = ctx.config.jitter_radius;
        let route: VecDeque<Point> = goal
            .into_travel_order()
            .into_iter()
            .skip(1)
            .map(|cell| {
                let p = Point::from(cell);
                Point::new(p.x + rng.jitter(radius), p.y + rng.jitter(radius))
            })
            .collect();

        if self.state.is_transiting() {
            self.current = origin;
            self.state = MovementState::idle(self.state.idle_countdown());
        }
        self.waypoints = route;

        PlanOutcome::Planned { waypoints: self.waypoints.len() }
    }

    // ── Per-frame update ──────────────────────────────────────────────────

    /// Advance the student by `elapsed_ms`.
    ///
    /// - Idle: count down.  Once the countdown drops below zero, plan a route
    ///   to a random accessible cell and restart the countdown with a random
    ///   duration from the configured idle range.
    /// - Transiting: add `elapsed_ms × speed` to the segment progress.
    pub fn advance(&mut self, elapsed_ms: f32, ctx: &RoamContext<'_>, rng: &mut AgentRng) {
        match self.state {
            MovementState::Idle { countdown_ms } => {
                let remaining = countdown_ms - elapsed_ms;
                self.state = MovementState::idle(remaining);
                if remaining < 0.0 {
                    let destination = sample_accessible(ctx.region, rng);
                    self.plan_route_to(destination, ctx, rng);
                    self.state = MovementState::idle(idle_duration(ctx.config, rng));
                }
            }
            MovementState::Transiting { progress, segment_len, idle_after_ms } => {
                self.state = MovementState::Transiting {
                    progress: progress + elapsed_ms * self.speed,
                    segment_len,
                    idle_after_ms,
                };
            }
        }
    }

    /// Settle a finished segment and start the next one.
    ///
    /// A segment is finished once `progress >= segment_len`; the front
    /// waypoint becomes `current` and the overshoot carries into the next
    /// segment of the same route.  At most one waypoint is consumed per call,
    /// so a very long `advance` lands on the next waypoint rather than
    /// skipping several.  When the queue runs out the overshoot is dropped
    /// and the frozen idle countdown resumes.
    ///
    /// Returns the waypoint arrived at, if any.
    pub fn reconcile_path(&mut self) -> Option<Point> {
        let mut carry = None;
        let mut arrived = None;

        if let MovementState::Transiting { progress, segment_len, idle_after_ms } = self.state {
            if progress >= segment_len {
                if let Some(next) = self.waypoints.pop_front() {
                    self.current = next;
                    arrived = Some(next);
                    trace!(at = %next, remaining = self.waypoints.len(), "reached waypoint");
                }
                carry = Some(progress - segment_len);
                self.state = MovementState::idle(idle_after_ms);
            }
        }

        if let MovementState::Idle { countdown_ms } = self.state {
            if let Some(&front) = self.waypoints.front() {
                self.state = MovementState::Transiting {
                    progress:      carry.unwrap_or(0.0),
                    segment_len:   self.current.distance(front),
                    idle_after_ms: countdown_ms,
                };
            }
        }

        arrived
    }

    // ── Presentation ──────────────────────────────────────────────────────

    /// Where to draw the student, shifted down by `offset_y`.
    ///
    /// Pure: calling it twice without an intervening update gives the same
    /// answer.  Mid-segment the interpolation fraction can briefly exceed 1,
    /// between an overshooting `advance` and the next `reconcile_path`.
    pub fn visual_position(&self, offset_y: f32) -> Point {
        self.interpolated().offset_y(offset_y)
    }

    fn interpolated(&self) -> Point {
        match (self.state.fraction(), self.waypoints.front()) {
            (Some(t), Some(&next)) => self.current.lerp(next, t),
            _ => self.current,
        }
    }
}

/// Random idle duration from the configured range.  A degenerate range
/// yields its lower bound.
fn idle_duration(config: &RoamConfig, rng: &mut AgentRng) -> f32 {
    if config.idle_max_ms > config.idle_min_ms {
        rng.gen_range(config.idle_min_ms..config.idle_max_ms)
    } else {
        config.idle_min_ms
    }
}

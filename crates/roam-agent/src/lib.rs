//! `roam-agent`: the per-student movement state machine.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                       |
//! |-------------|----------------------------------------------------------------|
//! | [`state`]   | `MovementState`: `Idle` vs. `Transiting`                       |
//! | [`context`] | `RoamContext<'a>`: region, oracle and config for one call      |
//! | [`student`] | `Student`, `PlanOutcome`                                       |
//!
//! # Movement model
//!
//! A student stands at `current` and holds a queue of jittered waypoints.
//! Each frame the host calls, in order:
//!
//! 1. [`Student::advance`]: idle students count down and eventually plan a
//!    route to a random accessible cell; transiting students accumulate
//!    `elapsed × speed` of progress along the current segment.
//! 2. [`Student::reconcile_path`]: a finished segment settles the student on
//!    its waypoint; a waiting waypoint starts the next segment.
//! 3. [`Student::visual_position`]: linear interpolation along the current
//!    segment, for drawing.
//!
//! Nothing here returns an error.  An unreachable destination leaves the
//! student where it was; it tries again after its next idle countdown.

pub mod context;
pub mod state;
pub mod student;


pub use context::RoamContext;
pub use state::MovementState;
pub use student::{PlanOutcome, Student};

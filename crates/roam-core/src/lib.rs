//! `roam-core`: foundational types for the `students-roam` workspace.
//!
//! This crate is a dependency of every other `roam-*` crate.  It has no
//! `roam-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `SpriteId`                                 |
//! | [`geo`]         | `Cell` (discrete grid cell), `Point` (continuous)     |
//! | [`time`]        | `FrameClock`, `FrameDelta`                            |
//! | [`rng`]         | `AgentRng` (per-agent), `SimRng` (global)             |
//! | [`config`]      | `RoamConfig`                                          |
//! | [`error`]       | `RoamError`, `RoamResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to ids, `Cell`, `Point`, `RoamConfig`. |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::RoamConfig;
pub use error::{RoamError, RoamResult};
pub use geo::{Cell, Point};
pub use ids::{AgentId, SpriteId};
pub use rng::{AgentRng, SimRng};
pub use time::{FrameClock, FrameDelta};

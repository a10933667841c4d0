//! `roam-grid`: where students may stand and how they get there.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                       |
//! |-------------|----------------------------------------------------------------|
//! | [`region`]  | `Region` trait, `Bounds`, `CarvedRect`, `accessibility_mask`   |
//! | [`sampler`] | `sample_accessible`, `try_sample_accessible`                   |
//! | [`oracle`]  | `PathOracle` trait, `PathNode` chain, `BfsOracle`              |
//! | [`error`]   | `GridError`, `GridResult<T>`                                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `CarvedRect` and `Carve`. |

pub mod error;
pub mod oracle;
pub mod region;
pub mod sampler;


pub use error::{GridError, GridResult};
pub use oracle::{BfsOracle, PathNode, PathOracle};
pub use region::{accessibility_mask, Bounds, Carve, CarvedRect, Region};
pub use sampler::{sample_accessible, try_sample_accessible};

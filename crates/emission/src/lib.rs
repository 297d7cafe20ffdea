//! Lumen Emission — Sigmoid Supply Schedule
//!
//! Derives the per-era block-reward table embedded in the Lumen runtime:
//! a closed-form sigmoid cumulative-supply curve, discretized into
//! fixed-length eras carrying one constant integer reward each. The whole
//! derivation is a pure function of [`ScheduleParams`], so every node that
//! regenerates the table obtains bit-identical output.
//!
//! Monetary unit: planck. 1 LUM = 10^18 planck.

pub mod constants;
pub mod curve;
pub mod errors;
pub mod params;
pub mod schedule;
pub mod table;
pub mod types;

pub use constants::*;
pub use curve::*;
pub use errors::*;
pub use params::*;
pub use schedule::*;
pub use table::*;
pub use types::*;

//! Shared value types for the deterministic data pipeline.
//!
//! Nothing in this crate performs arithmetic or hashing; it only defines the
//! records and sticky fault bitset that the other core crates
//! (`detcore-dvm`, `detcore-hash`, `detcore-permute`, `detcore-pipeline`)
//! thread through their operations.

mod batch;
mod config;
mod fault;
mod fixed;
mod hash;
mod permute_params;
mod provenance;
mod sample;

pub use batch::Batch;
pub use config::{
    AugmentConfig, AugmentFlags, Capacities, NormalizeConfig, PipelineConfig, DEFAULT_CAPACITIES,
};
pub use fault::FaultFlags;
pub use fixed::{Fixed, FIXED_FRAC_BITS, FIXED_HALF, FIXED_MAX, FIXED_MIN, FIXED_ONE, FIXED_ZERO};
pub use hash::Hash;
pub use permute_params::PermuteParams;
pub use provenance::Provenance;
pub use sample::{Dataset, SampleHeader, SampleMut, SampleRef, MAX_DIMS};

//! Normalization, augmentation, batch assembly and epoch/provenance
//! orchestration built on top of `detcore-dvm`, `detcore-hash` and
//! `detcore-permute`.
//!
//! Ordering guarantees: batches fill samples in ascending
//! index; augmentation stages run in the fixed order `random_crop ->
//! horizontal_flip -> vertical_flip -> brightness -> additive_noise`
//! regardless of which stages are enabled; element-wise operations visit
//! elements in ascending index. Nothing here spawns a thread or awaits -
//! callers may run this from multiple threads as long as they keep
//! per-thread buffers disjoint.

pub mod augment;
pub mod batch;
pub mod epoch;
pub mod normalize;
pub mod testutil;

pub use augment::augment_sample;
pub use batch::batch_fill;
pub use epoch::{commit_epoch, epoch_hash};
pub use normalize::normalize;

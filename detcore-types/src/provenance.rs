use crate::hash::Hash;

/// Rolling commitment binding (dataset, config, seed, completed epochs) into
/// a single append-only chain. The hashing logic that initializes and
/// advances this struct lives in `detcore-hash` (it needs the SHA-256
/// primitive); this type only carries the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Provenance {
    pub dataset_hash: Hash,
    pub config_hash: Hash,
    pub seed: u64,
    pub current_epoch: u32,
    pub total_epochs: u32,
    pub prev_hash: Hash,
    pub current_hash: Hash,
}

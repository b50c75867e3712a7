use crate::hash::Hash;
use crate::sample::SampleRef;

/// A constructed, never-mutated-after-the-fact training batch.
///
/// All backing storage (`refs`, `samples`, `sample_hashes`) is caller-owned
/// with capacity `>= batch_size` (bounded by the compile-time
/// `CT_MAX_BATCH_SIZE`); the core fills the first `batch_size` slots in
/// ascending order and leaves the remainder untouched.
pub struct Batch<'a> {
    pub epoch: u32,
    pub batch_index: u32,
    pub batch_size: u32,
    /// `(original_index, shuffled_index)` for the i-th sample in the batch.
    pub refs: &'a mut [(u32, u32)],
    pub samples: &'a mut [SampleRef<'a>],
    pub sample_hashes: &'a mut [Hash],
    pub merkle_root: Hash,
    pub batch_hash: Hash,
}

impl<'a> Batch<'a> {
    /// `true` once this batch has a populated hash; a batch with any fault
    /// set during its construction must not be treated as committed even if
    /// `batch_hash` happens to be non-zero - callers check the `FaultFlags`
    /// they threaded through construction, not this helper, for that.
    pub fn is_empty_batch(&self) -> bool {
        self.batch_size == 0
    }
}

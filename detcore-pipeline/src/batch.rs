use detcore_hash::{hash_sample, merkle_root};
use detcore_permute::permute;
use detcore_types::{Batch, Dataset, FaultFlags, Hash, SampleRef};

/// Fills one batch from `dataset` by shuffling global sample indices through
/// `permute` and hashing each selected sample.
///
/// `start = batch_index * batch.batch_size`; `effective = min(batch.batch_size,
/// N - start)` (zero once `start >= N`). The first `effective` slots are
/// filled in ascending `i`; remaining slots (padding, when the dataset runs
/// out before the batch is full) are zeroed and excluded from the Merkle
/// root by construction - only `sample_hashes[0..effective]` is passed to
/// `merkle_root`. `scratch` must be at least `effective` entries long.
pub fn batch_fill<'a>(
    batch: &mut Batch<'a>,
    dataset: &Dataset<'a>,
    batch_index: u32,
    epoch: u32,
    seed: u64,
    scratch: &mut [Hash],
    faults: &mut FaultFlags,
) {
    batch.batch_index = batch_index;
    batch.epoch = epoch;
    let n = dataset.num_samples;
    let start = batch_index.saturating_mul(batch.batch_size);
    let effective = if start >= n {
        0
    } else {
        batch.batch_size.min(n - start)
    };

    for i in 0..effective {
        let global = start + i;
        let shuffled = permute(global, n, seed, epoch, faults);
        let sample = dataset.sample(shuffled).unwrap_or_default();
        batch.refs[i as usize] = (global, shuffled);
        batch.samples[i as usize] = sample;
        batch.sample_hashes[i as usize] = hash_sample(&sample);
    }

    for i in effective..batch.batch_size {
        batch.refs[i as usize] = (0, 0);
        batch.samples[i as usize] = SampleRef::default();
        batch.sample_hashes[i as usize] = Hash::ZERO;
    }

    let root = merkle_root(&batch.sample_hashes[..effective as usize], scratch, faults);
    batch.merkle_root = root;
    batch.batch_hash = root;
}

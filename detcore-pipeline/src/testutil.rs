//! Synthetic in-memory fixtures. There is no bundled fixture corpus for this
//! pipeline (unlike a loader that reads `.tens`/`.csv` files from disk), so
//! tests and the CLI demo both build small datasets here instead.

use detcore_types::{Hash, SampleHeader, FIXED_ONE};

/// A owned dataset buffer plus the `SampleHeader` describing every sample in
/// it - convenient for tests that need storage to outlive a borrowed
/// `Dataset` view.
pub struct SyntheticDataset {
    pub shape: SampleHeader,
    pub data: Vec<i32>,
    pub num_samples: u32,
}

/// Builds `num_samples` samples of a `height x width` grid, each filled with
/// a distinct constant value (`sample_index` in Q16.16) so that two samples
/// are never accidentally identical.
pub fn synthetic_grid_dataset(num_samples: u32, height: u32, width: u32) -> SyntheticDataset {
    let total = (height * width) as usize;
    let mut data = Vec::with_capacity(total * num_samples as usize);
    for s in 0..num_samples {
        let value = (s as i32).saturating_mul(FIXED_ONE);
        data.extend(std::iter::repeat(value).take(total));
    }
    SyntheticDataset {
        shape: SampleHeader {
            version: 1,
            dtype: 0,
            ndims: 2,
            dims: [height, width, 0, 0],
            total_elements: (height * width),
        },
        data,
        num_samples,
    }
}

/// A placeholder dataset-level commitment for fixtures that don't go through
/// a real loader (which would compute this from the on-disk bytes).
pub fn placeholder_dataset_hash() -> Hash {
    Hash::ZERO
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synthetic_dataset_has_distinct_sample_values() {
        let ds = synthetic_grid_dataset(3, 2, 2);
        assert_eq!(ds.data.len(), 12);
        assert_eq!(&ds.data[0..4], &[0, 0, 0, 0]);
        assert_eq!(&ds.data[4..8], &[FIXED_ONE; 4]);
        assert_eq!(&ds.data[8..12], &[FIXED_ONE * 2; 4]);
    }
}

use crate::fixed::Fixed;

/// Which augmentation stages are enabled. Disabled stages still consume
/// their PRF draws - this struct only controls whether
/// the draw changes the data, never how many draws happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AugmentFlags {
    pub h_flip: bool,
    pub v_flip: bool,
    pub random_crop: bool,
    pub additive_noise: bool,
    pub brightness: bool,
}

/// Deterministic augmentation configuration. `crop_height`/`crop_width` are
/// only consulted when samples are at least 2-D; `noise_std`/`brightness_delta`
/// are Q16.16 values already in fixed-point form (no floating point anywhere
/// in the data path).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AugmentConfig {
    pub flags: AugmentFlags,
    pub crop_height: u32,
    pub crop_width: u32,
    pub noise_std: Fixed,
    pub brightness_delta: Fixed,
}

/// Per-feature affine normalization parameters, precomputed offline.
/// `mean` and `inv_std` must have equal length (`num_features`); runtime
/// statistics estimation is explicitly out of scope.
#[derive(Debug, Clone, Copy)]
pub struct NormalizeConfig<'a> {
    pub mean: &'a [Fixed],
    pub inv_std: &'a [Fixed],
}

impl<'a> NormalizeConfig<'a> {
    pub fn num_features(&self) -> usize {
        debug_assert_eq!(self.mean.len(), self.inv_std.len());
        self.mean.len()
    }
}

/// Compile-time capacity parameters bounding every loop in the core so that
/// worst-case execution time is a function of declared sizes only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capacities {
    pub max_dims: usize,
    pub ct_max_batch_size: u32,
    pub ct_max_leaves: u32,
}

pub const DEFAULT_CAPACITIES: Capacities = Capacities {
    max_dims: crate::sample::MAX_DIMS,
    ct_max_batch_size: 4096,
    ct_max_leaves: 4096,
};

/// Aggregates everything needed to run the pipeline for one epoch: the
/// master seed, declared batch size, and the augment/normalize parameters.
#[derive(Debug, Clone, Copy)]
pub struct PipelineConfig<'a> {
    pub seed: u64,
    pub batch_size: u32,
    pub augment: AugmentConfig,
    pub normalize: NormalizeConfig<'a>,
    pub capacities: Capacities,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_config_num_features_matches_slice_len() {
        let mean = [0i32, 0, 0];
        let inv_std = [65536i32, 65536, 65536];
        let cfg = NormalizeConfig {
            mean: &mean,
            inv_std: &inv_std,
        };
        assert_eq!(cfg.num_features(), 3);
    }
}

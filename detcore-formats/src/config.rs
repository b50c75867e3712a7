use detcore_types::{AugmentConfig, AugmentFlags, Capacities, Fixed, DEFAULT_CAPACITIES};
use eyre::{Context, Result};
use serde_derive::Deserialize;

/// On-disk, owned mirror of [`AugmentFlags`]. A plain JSON object so a run
/// can be reproduced from a config file instead of wired up in code.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct AugmentFlagsFile {
    pub h_flip: bool,
    pub v_flip: bool,
    pub random_crop: bool,
    pub additive_noise: bool,
    pub brightness: bool,
}

/// On-disk, owned mirror of [`AugmentConfig`]. `noise_std`/`brightness_delta`
/// are given as plain integers in the JSON document and interpreted directly
/// as Q16.16 fixed-point values (not as floating point) - a config file that
/// wants "0.5" writes `32768`, matching the in-core representation exactly
/// and avoiding a float-to-fixed conversion step outside the core.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct AugmentConfigFile {
    pub flags: AugmentFlagsFile,
    pub crop_height: u32,
    pub crop_width: u32,
    pub noise_std: Fixed,
    pub brightness_delta: Fixed,
}

impl AugmentConfigFile {
    pub fn into_config(self) -> AugmentConfig {
        AugmentConfig {
            flags: AugmentFlags {
                h_flip: self.flags.h_flip,
                v_flip: self.flags.v_flip,
                random_crop: self.flags.random_crop,
                additive_noise: self.flags.additive_noise,
                brightness: self.flags.brightness,
            },
            crop_height: self.crop_height,
            crop_width: self.crop_width,
            noise_std: self.noise_std,
            brightness_delta: self.brightness_delta,
        }
    }
}

/// On-disk, owned mirror of the non-borrowing fields of `PipelineConfig`.
/// Per-feature `mean`/`inv_std` statistics are loaded separately via the
/// statistics file format (see [`crate::stats`]) and paired with this at the
/// call site, since `NormalizeConfig` borrows rather than owns its slices.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PipelineConfigFile {
    pub seed: u64,
    pub batch_size: u32,
    pub augment: AugmentConfigFile,
}

impl PipelineConfigFile {
    pub fn capacities(&self) -> Capacities {
        DEFAULT_CAPACITIES
    }
}

/// Parses a pipeline configuration document. Any malformed JSON is an
/// operational error outside the reproducibility contract, not a
/// `FaultFlags` condition - the pipeline never even starts without one.
pub fn load_pipeline_config_json(json: &str) -> Result<PipelineConfigFile> {
    serde_json::from_str(json).wrap_err("failed to parse pipeline config JSON")
}

//! On-disk codecs for the loader/collaborator layer: the binary tensor and
//! statistics file formats, and the integer-exact CSV decimal parser.
//!
//! Unlike `detcore-dvm`/`detcore-hash`/`detcore-permute`/`detcore-pipeline`,
//! this crate is allowed to allocate (`Vec<u8>`, `String`) and to return
//! `eyre::Result` for operational failures - it sits outside the core data
//! path. Format faults are still folded into the shared `FaultFlags` so a
//! caller accumulating faults across a whole load doesn't need two error
//! models.

pub mod config;
pub mod csv;
pub mod stats;
pub mod tensor;

pub use config::{load_pipeline_config_json, AugmentConfigFile, PipelineConfigFile};
pub use csv::{parse_csv_row, parse_decimal_field};
pub use stats::{read_stats, write_stats};
pub use tensor::{read_tensor, write_tensor};

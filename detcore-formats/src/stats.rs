use detcore_types::{FaultFlags, Fixed};
use eyre::{bail, Result};

const MAGIC: &[u8; 4] = b"STAT";
const VERSION: u8 = 1;
const HEADER_BYTES: usize = 4 + 1 + 1 + 2;

/// Serializes per-channel `(mean, inv_std)` pairs into the on-disk
/// statistics format: magic `"STAT"` || version(1) || num_channels(1) ||
/// pad(2) || for each channel: mean LE i32 || inv_std LE i32.
pub fn write_stats(mean: &[Fixed], inv_std: &[Fixed]) -> Vec<u8> {
    debug_assert_eq!(mean.len(), inv_std.len());
    let num_channels = mean.len();
    let mut out = Vec::with_capacity(HEADER_BYTES + num_channels * 8);
    out.extend_from_slice(MAGIC);
    out.push(VERSION);
    out.push(num_channels as u8);
    out.extend_from_slice(&[0u8, 0u8]); // pad
    for (m, s) in mean.iter().zip(inv_std.iter()) {
        out.extend_from_slice(&m.to_le_bytes());
        out.extend_from_slice(&s.to_le_bytes());
    }
    out
}

/// Parses a statistics file produced by [`write_stats`], returning
/// `(mean, inv_std)` as equal-length vectors.
pub fn read_stats(bytes: &[u8], faults: &mut FaultFlags) -> Result<(Vec<Fixed>, Vec<Fixed>)> {
    if bytes.len() < HEADER_BYTES {
        faults.format_error = true;
        bail!("statistics file shorter than the fixed header ({HEADER_BYTES} bytes)");
    }
    if &bytes[0..4] != MAGIC {
        faults.format_error = true;
        bail!("statistics file magic mismatch");
    }
    let version = bytes[4];
    if version != VERSION {
        faults.format_error = true;
        bail!("statistics file version mismatch: expected {VERSION}, got {version}");
    }
    let num_channels = bytes[5] as usize;

    let body = &bytes[HEADER_BYTES..];
    if body.len() != num_channels * 8 {
        faults.format_error = true;
        bail!(
            "statistics file body length {} does not match num_channels {num_channels}",
            body.len()
        );
    }

    let mut mean = Vec::with_capacity(num_channels);
    let mut inv_std = Vec::with_capacity(num_channels);
    for chunk in body.chunks(8) {
        mean.push(i32::from_le_bytes(chunk[0..4].try_into().unwrap()));
        inv_std.push(i32::from_le_bytes(chunk[4..8].try_into().unwrap()));
    }
    Ok((mean, inv_std))
}

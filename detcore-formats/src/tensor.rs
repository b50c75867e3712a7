use detcore_types::{FaultFlags, SampleHeader, MAX_DIMS};
use eyre::{bail, Result};

const MAGIC: &[u8; 4] = b"TENS";
const VERSION: u8 = 1;
const DTYPE_Q16_16: u8 = 0;
const HEADER_BYTES: usize = 4 + 1 + 1 + 1 + 1 + MAX_DIMS * 4;

/// Serializes `header`/`data` into the on-disk tensor format: magic `"TENS"`
/// || version(1) || dtype(1) || ndims(1) || pad(1) || dims\[0..4\] LE u32 ||
/// data as `total_elements` LE i32.
pub fn write_tensor(header: &SampleHeader, data: &[i32]) -> Vec<u8> {
    let mut out = Vec::with_capacity(HEADER_BYTES + data.len() * 4);
    out.extend_from_slice(MAGIC);
    out.push(VERSION);
    out.push(DTYPE_Q16_16);
    out.push(header.ndims as u8);
    out.push(0); // pad
    for d in header.dims.iter() {
        out.extend_from_slice(&d.to_le_bytes());
    }
    for v in data.iter() {
        out.extend_from_slice(&v.to_le_bytes());
    }
    out
}

/// Parses a tensor file produced by [`write_tensor`]. Any mismatch against
/// the declared header (magic, version, dtype, ndims, or a `bytes` length
/// inconsistent with `total_elements`) sets `format_error` and returns an
/// error - this is a loader concern, not something the core
/// arithmetic primitives ever see.
pub fn read_tensor(bytes: &[u8], faults: &mut FaultFlags) -> Result<(SampleHeader, Vec<i32>)> {
    if bytes.len() < HEADER_BYTES {
        faults.format_error = true;
        bail!("tensor file shorter than the fixed header ({HEADER_BYTES} bytes)");
    }
    if &bytes[0..4] != MAGIC {
        faults.format_error = true;
        bail!("tensor file magic mismatch");
    }
    let version = bytes[4];
    let dtype = bytes[5];
    let ndims = bytes[6] as u32;
    if version != VERSION {
        faults.format_error = true;
        bail!("tensor file version mismatch: expected {VERSION}, got {version}");
    }
    if dtype != DTYPE_Q16_16 {
        faults.format_error = true;
        bail!("tensor file dtype mismatch: expected {DTYPE_Q16_16}, got {dtype}");
    }
    if ndims as usize > MAX_DIMS {
        faults.format_error = true;
        bail!("tensor file ndims {ndims} exceeds MAX_DIMS ({MAX_DIMS})");
    }

    let mut dims = [0u32; MAX_DIMS];
    for (i, chunk) in bytes[8..8 + MAX_DIMS * 4].chunks(4).enumerate() {
        dims[i] = u32::from_le_bytes(chunk.try_into().unwrap());
    }
    let total_elements: u32 = dims[..ndims as usize].iter().product();

    let data_bytes = &bytes[HEADER_BYTES..];
    if data_bytes.len() != total_elements as usize * 4 {
        faults.format_error = true;
        bail!(
            "tensor file data length {} does not match total_elements {total_elements}",
            data_bytes.len()
        );
    }

    let mut data = Vec::with_capacity(total_elements as usize);
    for chunk in data_bytes.chunks(4) {
        data.push(i32::from_le_bytes(chunk.try_into().unwrap()));
    }

    let header = SampleHeader {
        version: version as u32,
        dtype: dtype as u32,
        ndims,
        dims,
        total_elements,
    };
    Ok((header, data))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_2x2() -> SampleHeader {
        SampleHeader {
            version: 1,
            dtype: 0,
            ndims: 2,
            dims: [2, 2, 0, 0],
            total_elements: 4,
        }
    }

    #[test]
    fn round_trips_a_small_tensor() {
        let header = header_2x2();
        let data = [1, 2, 3, 4];
        let bytes = write_tensor(&header, &data);

        let mut faults = FaultFlags::new();
        let (decoded_header, decoded_data) = read_tensor(&bytes, &mut faults).unwrap();
        assert_eq!(decoded_header.total_elements, 4);
        assert_eq!(decoded_header.dims, [2, 2, 0, 0]);
        assert_eq!(decoded_data, vec![1, 2, 3, 4]);
        assert!(!faults.any_fault());
    }

    #[test]
    fn rejects_bad_magic() {
        let mut bytes = write_tensor(&header_2x2(), &[1, 2, 3, 4]);
        bytes[0] = b'X';
        let mut faults = FaultFlags::new();
        assert!(read_tensor(&bytes, &mut faults).is_err());
        assert!(faults.format_error);
    }

    #[test]
    fn rejects_truncated_data() {
        let mut bytes = write_tensor(&header_2x2(), &[1, 2, 3, 4]);
        bytes.truncate(bytes.len() - 2);
        let mut faults = FaultFlags::new();
        assert!(read_tensor(&bytes, &mut faults).is_err());
        assert!(faults.format_error);
    }
}

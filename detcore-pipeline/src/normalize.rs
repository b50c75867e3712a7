use detcore_dvm::{mul_q16, sub32};
use detcore_types::{FaultFlags, NormalizeConfig, SampleHeader, SampleRef};

/// Per-feature affine normalization: `out[i] = (in[i] - mean[i]) * inv_std[i]`
/// in Q16.16, for `i` in `[0, min(total_elements, num_features))`. Elements
/// beyond `num_features` are copied through unchanged. Metadata is copied
/// verbatim; `out` may alias `in` (in-place is permitted).
///
/// Overflow/underflow in either the subtraction or the multiplication sets
/// the corresponding sticky fault and processing continues over the
/// remaining elements - no early exit.
pub fn normalize(
    input: SampleRef<'_>,
    out_header: &mut SampleHeader,
    out_data: &mut [i32],
    cfg: &NormalizeConfig<'_>,
    faults: &mut FaultFlags,
) {
    *out_header = input.header;
    let num_features = cfg.num_features();
    let n = input.data.len().min(out_data.len());
    let normalized = n.min(num_features);

    for i in 0..normalized {
        let centered = sub32(input.data[i], cfg.mean[i], faults);
        out_data[i] = mul_q16(centered, cfg.inv_std[i], faults);
    }
    for i in normalized..n {
        out_data[i] = input.data[i];
    }
}

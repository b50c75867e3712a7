use detcore_dvm::{add32, mul64, prf, prf_uniform, round_shift_rne};
use detcore_types::{AugmentConfig, FaultFlags, SampleHeader};

const AUG_HFLIP: u32 = 0x01;
const AUG_VFLIP: u32 = 0x02;
const AUG_CROP_Y: u32 = 0x03;
const AUG_CROP_X: u32 = 0x04;
const AUG_BRIGHTNESS: u32 = 0x05;
const AUG_NOISE: u32 = 0x06;

/// Packs `(augment_id, sample_idx, element_index_low_byte)` into the op_id
/// passed to `prf`/`prf_uniform`, leaving `epoch` as `prf`'s separate
/// argument. `sample_idx` is truncated to its low 16 bits and
/// `element_index` to its low byte; this is a fixed, documented packing, not
/// a cryptographic commitment; it only needs to be bijective *for a fixed
/// augment_id* and stable across releases.
fn op_id(augment_id: u32, sample_idx: u32, element_index: u32) -> u32 {
    (augment_id << 24) | ((sample_idx & 0xFFFF) << 8) | (element_index & 0xFF)
}

/// State machine: `Start -> CropApplied -> HFlipApplied -> VFlipApplied ->
/// BrightnessApplied -> NoiseApplied -> End`. No backtracking; a disabled
/// stage still advances the state and still consumes its PRF draw(s), it
/// just applies the identity transform instead of the real one.
///
/// `input` is treated as a row-major 2-D grid: `dims[0]` is height,
/// `dims[1]` is width (samples with `ndims < 2` are only eligible for
/// brightness/noise, since crop/flip are undefined without both axes).
/// `work_a`/`work_b` are two scratch buffers at least as large as
/// `input.data`; the final result lands in whichever one the return value's
/// `SampleHeader` was paired with (the function returns which of the two
/// holds the result by writing into `out`).
#[allow(clippy::too_many_arguments)]
pub fn augment_sample(
    input_header: SampleHeader,
    input_data: &[i32],
    work_a: &mut [i32],
    work_b: &mut [i32],
    cfg: &AugmentConfig,
    seed: u64,
    epoch: u32,
    sample_idx: u32,
    faults: &mut FaultFlags,
) -> (SampleHeader, bool) {
    // returns (new header, true if result is in work_a else work_b)

    let (header, in_a) = crop_stage(
        input_header,
        input_data,
        &mut *work_a,
        &mut *work_b,
        cfg,
        seed,
        epoch,
        sample_idx,
        faults,
    );

    let (src, dst) = if in_a { (&*work_a, &mut *work_b) } else { (&*work_b, &mut *work_a) };
    let (header, in_a) = hflip_stage(header, src, dst, cfg, seed, epoch, sample_idx, faults, !in_a);

    let (src, dst) = if in_a { (&*work_a, &mut *work_b) } else { (&*work_b, &mut *work_a) };
    let (header, in_a) = vflip_stage(header, src, dst, cfg, seed, epoch, sample_idx, faults, !in_a);

    let (src, dst) = if in_a { (&*work_a, &mut *work_b) } else { (&*work_b, &mut *work_a) };
    let (header, in_a) = brightness_stage(header, src, dst, cfg, seed, epoch, sample_idx, faults, !in_a);

    let (src, dst) = if in_a { (&*work_a, &mut *work_b) } else { (&*work_b, &mut *work_a) };
    noise_stage(header, src, dst, cfg, seed, epoch, sample_idx, faults, !in_a)
}

#[allow(clippy::too_many_arguments)]
fn crop_stage(
    header: SampleHeader,
    src: &[i32],
    work_a: &mut [i32],
    _work_b: &mut [i32],
    cfg: &AugmentConfig,
    seed: u64,
    epoch: u32,
    sample_idx: u32,
    faults: &mut FaultFlags,
) -> (SampleHeader, bool) {
    if header.ndims < 2 || cfg.crop_height == 0 || cfg.crop_width == 0 {
        work_a[..src.len()].copy_from_slice(src);
        return (header, true);
    }

    let h = header.dims[0];
    let w = header.dims[1];
    let crop_h = cfg.crop_height.min(h);
    let crop_w = cfg.crop_width.min(w);
    let max_y = h - crop_h;
    let max_x = w - crop_w;

    let offset_y = prf_uniform(seed, epoch, op_id(AUG_CROP_Y, sample_idx, 0), max_y + 1, faults);
    let offset_x = prf_uniform(seed, epoch, op_id(AUG_CROP_X, sample_idx, 0), max_x + 1, faults);

    let (off_y, off_x) = if cfg.flags.random_crop {
        (offset_y, offset_x)
    } else {
        (max_y / 2, max_x / 2)
    };

    for row in 0..crop_h {
        let src_start = ((off_y + row) * w + off_x) as usize;
        let dst_start = (row * crop_w) as usize;
        work_a[dst_start..dst_start + crop_w as usize]
            .copy_from_slice(&src[src_start..src_start + crop_w as usize]);
    }

    let mut out_header = header;
    out_header.dims[0] = crop_h;
    out_header.dims[1] = crop_w;
    out_header.total_elements = crop_h * crop_w;
    (out_header, true)
}

#[allow(clippy::too_many_arguments)]
fn hflip_stage(
    header: SampleHeader,
    src: &[i32],
    dst: &mut [i32],
    cfg: &AugmentConfig,
    seed: u64,
    epoch: u32,
    sample_idx: u32,
    _faults: &mut FaultFlags,
    dst_is_a: bool,
) -> (SampleHeader, bool) {
    let r = prf(seed, epoch, op_id(AUG_HFLIP, sample_idx, 0));
    let decision = (r & 1) == 1;
    let n = header.total_elements as usize;

    if header.ndims >= 2 && cfg.flags.h_flip && decision {
        let w = header.dims[1] as usize;
        for row in 0..header.dims[0] as usize {
            for col in 0..w {
                dst[row * w + col] = src[row * w + (w - 1 - col)];
            }
        }
    } else {
        dst[..n].copy_from_slice(&src[..n]);
    }
    (header, dst_is_a)
}

#[allow(clippy::too_many_arguments)]
fn vflip_stage(
    header: SampleHeader,
    src: &[i32],
    dst: &mut [i32],
    cfg: &AugmentConfig,
    seed: u64,
    epoch: u32,
    sample_idx: u32,
    _faults: &mut FaultFlags,
    dst_is_a: bool,
) -> (SampleHeader, bool) {
    let r = prf(seed, epoch, op_id(AUG_VFLIP, sample_idx, 0));
    let decision = (r & 1) == 1;
    let n = header.total_elements as usize;

    if header.ndims >= 2 && cfg.flags.v_flip && decision {
        let w = header.dims[1] as usize;
        let h = header.dims[0] as usize;
        for row in 0..h {
            let src_row = h - 1 - row;
            dst[row * w..row * w + w].copy_from_slice(&src[src_row * w..src_row * w + w]);
        }
    } else {
        dst[..n].copy_from_slice(&src[..n]);
    }
    (header, dst_is_a)
}

#[allow(clippy::too_many_arguments)]
fn brightness_stage(
    header: SampleHeader,
    src: &[i32],
    dst: &mut [i32],
    cfg: &AugmentConfig,
    seed: u64,
    epoch: u32,
    sample_idx: u32,
    faults: &mut FaultFlags,
    dst_is_a: bool,
) -> (SampleHeader, bool) {
    let n = header.total_elements as usize;
    let r = prf(seed, epoch, op_id(AUG_BRIGHTNESS, sample_idx, 0));

    if cfg.flags.brightness {
        let r_signed = (r as i64 & 0xFFFF) - 32768;
        let offset = round_shift_rne(mul64(r_signed as i32, cfg.brightness_delta), 15, faults);
        let factor = add32(detcore_types::FIXED_ONE, offset, faults);
        for i in 0..n {
            dst[i] = round_shift_rne(mul64(src[i], factor), 16, faults);
        }
    } else {
        dst[..n].copy_from_slice(&src[..n]);
    }
    (header, dst_is_a)
}

#[allow(clippy::too_many_arguments)]
fn noise_stage(
    header: SampleHeader,
    src: &[i32],
    dst: &mut [i32],
    cfg: &AugmentConfig,
    seed: u64,
    epoch: u32,
    sample_idx: u32,
    faults: &mut FaultFlags,
    dst_is_a: bool,
) -> (SampleHeader, bool) {
    let n = header.total_elements as usize;
    for i in 0..n {
        let r = prf(seed, epoch, op_id(AUG_NOISE, sample_idx, i as u32));
        if cfg.flags.additive_noise {
            let r_signed = (r as i64 & 0xFFFF) - 32768;
            let noise = round_shift_rne(mul64(r_signed as i32, cfg.noise_std), 15, faults);
            dst[i] = add32(src[i], noise, faults);
        } else {
            dst[i] = src[i];
        }
    }
    (header, dst_is_a)
}

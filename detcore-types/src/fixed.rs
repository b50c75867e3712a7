/// Signed Q16.16 fixed-point value: real value = `v as f64 / 65536.0`.
///
/// Stored as a plain `i32` so that the DVM arithmetic layer can widen it to
/// `i64` before every combination, per the widen-before-combine rule that
/// replaces implementation-defined overflow with a single clamp.
pub type Fixed = i32;

pub const FIXED_ONE: Fixed = 65536;
pub const FIXED_HALF: Fixed = 32768;
pub const FIXED_ZERO: Fixed = 0;
pub const FIXED_MAX: Fixed = i32::MAX;
pub const FIXED_MIN: Fixed = i32::MIN;

/// Number of fractional bits in [`Fixed`].
pub const FIXED_FRAC_BITS: u32 = 16;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_is_two_to_the_sixteen() {
        assert_eq!(FIXED_ONE, 1i32 << 16);
    }

    #[test]
    fn half_is_half_of_one() {
        assert_eq!(FIXED_HALF * 2, FIXED_ONE);
    }
}

use detcore_types::{FaultFlags, Fixed};

/// Clamps a widened intermediate value back into `i32` range, setting the
/// appropriate sticky flag when it doesn't fit.
///
/// This is the only place a 64-bit intermediate result is ever narrowed;
/// every DVM operation widens its operands before combining them so that
/// narrowing happens exactly once, through this function.
pub fn clamp32(x: i64, faults: &mut FaultFlags) -> i32 {
    if x > i32::MAX as i64 {
        faults.overflow = true;
        i32::MAX
    } else if x < i32::MIN as i64 {
        faults.underflow = true;
        i32::MIN
    } else {
        x as i32
    }
}

/// Saturating 32-bit add. Widens both operands to `i64` before adding so the
/// addition itself can never overflow; only the final `clamp32` can.
pub fn add32(a: i32, b: i32, faults: &mut FaultFlags) -> i32 {
    clamp32(a as i64 + b as i64, faults)
}

/// Saturating 32-bit subtract, widened the same way as [`add32`].
pub fn sub32(a: i32, b: i32, faults: &mut FaultFlags) -> i32 {
    clamp32(a as i64 - b as i64, faults)
}

/// Widening signed multiply. Always exact: the product of two `i32`s always
/// fits in `i64`, so this never touches `faults`.
pub fn mul64(a: i32, b: i32) -> i64 {
    (a as i64) * (b as i64)
}

/// Right-shifts `x` by `shift` bits with round-to-nearest-even, then clamps
/// to `i32`. This is the single rounding rule used everywhere in the
/// pipeline, chosen so that the result does not depend on the platform's
/// native shift/round behavior.
///
/// `shift > 62` is out of the domain this function is specified for (it
/// would make `1 << shift` overflow `i64`) and sets `domain`, returning 0.
pub fn round_shift_rne(x: i64, shift: u32, faults: &mut FaultFlags) -> i32 {
    if shift > 62 {
        faults.domain = true;
        return 0;
    }
    if shift == 0 {
        return clamp32(x, faults);
    }

    let half = 1i64 << (shift - 1);
    let mask = (1i64 << shift) - 1;
    let frac = x & mask;
    let quot = x >> shift;

    let result = match frac.cmp(&half) {
        std::cmp::Ordering::Less => quot,
        std::cmp::Ordering::Greater => quot + 1,
        std::cmp::Ordering::Equal => quot + (quot & 1),
    };

    clamp32(result, faults)
}

/// Q16.16 multiply: widen, multiply, then round-shift by 16 fractional bits.
pub fn mul_q16(a: Fixed, b: Fixed, faults: &mut FaultFlags) -> Fixed {
    round_shift_rne(mul64(a, b), 16, faults)
}

/// Q16.16 divide. `denom == 0` sets `div_zero` and returns 0 without
/// touching the numerator's sign or magnitude.
pub fn div_q16(num: Fixed, denom: Fixed, faults: &mut FaultFlags) -> Fixed {
    if denom == 0 {
        faults.div_zero = true;
        return 0;
    }
    let scaled = (num as i64) << 16;
    let quot = scaled / denom as i64;
    clamp32(quot, faults)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags() -> FaultFlags {
        FaultFlags::new()
    }

    #[test]
    fn add32_saturates_on_overflow() {
        let mut f = flags();
        let result = add32(i32::MAX, 1, &mut f);
        assert_eq!(result, i32::MAX);
        assert!(f.overflow);
        assert!(!f.underflow);
    }

    #[test]
    fn add32_saturates_on_underflow() {
        let mut f = flags();
        let result = add32(i32::MIN, -1, &mut f);
        assert_eq!(result, i32::MIN);
        assert!(f.underflow);
    }

    #[test]
    fn add32_in_range_sets_no_fault() {
        let mut f = flags();
        assert_eq!(add32(2, 3, &mut f), 5);
        assert!(!f.any_fault());
    }

    #[test]
    fn round_shift_rne_half_cases_round_to_even() {
        let mut f = flags();
        assert_eq!(round_shift_rne(0x0001_8000, 16, &mut f), 2); // 1.5 -> 2
        assert_eq!(round_shift_rne(0x0002_8000, 16, &mut f), 2); // 2.5 -> 2
        assert_eq!(round_shift_rne(0x0003_8000, 16, &mut f), 4); // 3.5 -> 4
        assert_eq!(round_shift_rne(-0x0001_8000i64, 16, &mut f), -2); // -1.5 -> -2
        assert!(!f.any_fault());
    }

    #[test]
    fn round_shift_rne_rounds_down_and_up_for_non_half_fractions() {
        let mut f = flags();
        assert_eq!(round_shift_rne(0x0001_7FFF, 16, &mut f), 1); // just under 1.5
        assert_eq!(round_shift_rne(0x0001_8001, 16, &mut f), 2); // just over 1.5
    }

    #[test]
    fn round_shift_rne_domain_fault_above_62() {
        let mut f = flags();
        assert_eq!(round_shift_rne(1, 63, &mut f), 0);
        assert!(f.domain);
    }

    #[test]
    fn mul_q16_quarter() {
        let mut f = flags();
        let half = detcore_types::FIXED_HALF;
        assert_eq!(mul_q16(half, half, &mut f), 16384);
        assert!(!f.any_fault());
    }

    #[test]
    fn div_q16_by_zero_sets_div_zero() {
        let mut f = flags();
        assert_eq!(div_q16(65536, 0, &mut f), 0);
        assert!(f.div_zero);
    }

    #[test]
    fn div_q16_round_trips_with_mul_for_integral_ratios() {
        let mut f = flags();
        // 10 / 2 == 5 in Q16.16
        let ten = 10 * detcore_types::FIXED_ONE;
        let two = 2 * detcore_types::FIXED_ONE;
        let five = 5 * detcore_types::FIXED_ONE;
        assert_eq!(div_q16(ten, two, &mut f), five);
        assert!(!f.any_fault());
    }
}

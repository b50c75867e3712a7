use detcore_types::{FaultFlags, Fixed, FIXED_MAX, FIXED_MIN, FIXED_ONE};
use eyre::{bail, Result};

const MAX_FRAC_DIGITS: usize = 16;

/// Parses one ASCII decimal field into Q16.16: optional
/// leading `-`, optional single `.`, digit runs using only `[0-9]` (no
/// scientific notation, no locale digits, no currency symbols). The value is
/// formed as the exact rational `(int * 10^k + frac) / 10^k`, multiplied by
/// 65536 and integer-divided by `10^k` with round-to-nearest-even at the
/// tie, before sign and clamp. Fractional digits beyond the 16th are
/// truncated, not rounded in.
///
/// An empty field, a malformed character, or more than one `.` is a
/// format fault and returns an error (there is no sensible numeric fallback
/// for unparsable text); out-of-range magnitude is not an error; it clamps
/// and sets overflow/underflow.
pub fn parse_decimal_field(field: &str, faults: &mut FaultFlags) -> Result<Fixed> {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        faults.format_error = true;
        bail!("empty decimal field");
    }

    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(r) => (true, r),
        None => (false, trimmed),
    };
    if rest.is_empty() {
        faults.format_error = true;
        bail!("decimal field has a sign but no digits");
    }

    let mut dot_seen = false;
    let mut int_part: i128 = 0;
    let mut frac_part: i128 = 0;
    let mut frac_digits = 0usize;

    for c in rest.chars() {
        if c == '.' {
            if dot_seen {
                faults.format_error = true;
                bail!("decimal field has more than one '.'");
            }
            dot_seen = true;
            continue;
        }
        if !c.is_ascii_digit() {
            faults.format_error = true;
            bail!("decimal field contains a non-digit character: {c:?}");
        }
        let digit = (c as u8 - b'0') as i128;
        if !dot_seen {
            int_part = int_part.saturating_mul(10).saturating_add(digit);
        } else if frac_digits < MAX_FRAC_DIGITS {
            frac_part = frac_part.saturating_mul(10).saturating_add(digit);
            frac_digits += 1;
        }
        // digits beyond the 16th fractional place are silently truncated.
    }

    let pow10_k = 10i128.pow(frac_digits as u32);
    let numerator = int_part
        .saturating_mul(pow10_k)
        .saturating_add(frac_part)
        .saturating_mul(FIXED_ONE as i128);

    let magnitude = if frac_digits == 0 {
        numerator
    } else {
        divide_rne(numerator, pow10_k)
    };

    let signed = if negative { -magnitude } else { magnitude };
    Ok(clamp_to_fixed(signed, faults))
}

/// Splits one CSV row into trimmed fields, erroring (format_error) on an
/// empty field between commas, and parses each into Q16.16.
pub fn parse_csv_row(line: &str, faults: &mut FaultFlags) -> Result<Vec<Fixed>> {
    let mut values = Vec::new();
    for field in line.split(',') {
        if field.trim().is_empty() {
            faults.format_error = true;
            bail!("empty CSV field");
        }
        values.push(parse_decimal_field(field, faults)?);
    }
    Ok(values)
}

/// Integer division with round-to-nearest-even at the tie, for non-negative
/// `numerator` and positive `denom`.
fn divide_rne(numerator: i128, denom: i128) -> i128 {
    let q = numerator / denom;
    let r = numerator % denom;
    let twice_r = r * 2;
    match twice_r.cmp(&denom) {
        std::cmp::Ordering::Less => q,
        std::cmp::Ordering::Greater => q + 1,
        std::cmp::Ordering::Equal => {
            if q % 2 == 0 {
                q
            } else {
                q + 1
            }
        }
    }
}

fn clamp_to_fixed(x: i128, faults: &mut FaultFlags) -> Fixed {
    if x > FIXED_MAX as i128 {
        faults.overflow = true;
        FIXED_MAX
    } else if x < FIXED_MIN as i128 {
        faults.underflow = true;
        FIXED_MIN
    } else {
        x as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_integer() {
        let mut faults = FaultFlags::new();
        assert_eq!(parse_decimal_field("2", &mut faults).unwrap(), 2 * FIXED_ONE);
        assert!(!faults.any_fault());
    }

    #[test]
    fn parses_negative_fraction() {
        let mut faults = FaultFlags::new();
        // -0.5 -> -32768 in Q16.16
        assert_eq!(parse_decimal_field("-0.5", &mut faults).unwrap(), -32768);
        assert!(!faults.any_fault());
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let mut faults = FaultFlags::new();
        assert_eq!(
            parse_decimal_field("  1.25 ", &mut faults).unwrap(),
            FIXED_ONE + FIXED_ONE / 4
        );
    }

    #[test]
    fn empty_field_is_a_format_fault() {
        let mut faults = FaultFlags::new();
        assert!(parse_decimal_field("", &mut faults).is_err());
        assert!(faults.format_error);
    }

    #[test]
    fn multiple_dots_is_a_format_fault() {
        let mut faults = FaultFlags::new();
        assert!(parse_decimal_field("1.2.3", &mut faults).is_err());
        assert!(faults.format_error);
    }

    #[test]
    fn non_digit_character_is_a_format_fault() {
        let mut faults = FaultFlags::new();
        assert!(parse_decimal_field("1e5", &mut faults).is_err());
        assert!(faults.format_error);
    }

    #[test]
    fn huge_magnitude_clamps_with_overflow() {
        let mut faults = FaultFlags::new();
        let v = parse_decimal_field("999999999999", &mut faults).unwrap();
        assert_eq!(v, FIXED_MAX);
        assert!(faults.overflow);
    }

    #[test]
    fn row_splits_and_rejects_empty_fields() {
        let mut faults = FaultFlags::new();
        let values = parse_csv_row("1, 2.5,-3", &mut faults).unwrap();
        assert_eq!(values, vec![FIXED_ONE, FIXED_ONE * 2 + FIXED_ONE / 2, -3 * FIXED_ONE]);

        let mut faults2 = FaultFlags::new();
        assert!(parse_csv_row("1,,3", &mut faults2).is_err());
        assert!(faults2.format_error);
    }
}

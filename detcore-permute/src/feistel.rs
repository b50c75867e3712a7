use detcore_hash::sha256;

/// `feistel_round(R, seed, epoch, round) -> u32`.
///
/// Builds the byte-exact string `seed_LE(8) || epoch_LE(4) || R_LE(4) ||
/// round(1)`, hashes it with SHA-256, and reads the first 4 bytes of the
/// digest as a little-endian `u32`. This is the only binding between key
/// material and the permutation; any change to the byte layout breaks
/// cross-implementation compatibility.
pub fn feistel_round(r: u32, seed: u64, epoch: u32, round: u8) -> u32 {
    let mut buf = [0u8; 8 + 4 + 4 + 1];
    buf[0..8].copy_from_slice(&seed.to_le_bytes());
    buf[8..12].copy_from_slice(&epoch.to_le_bytes());
    buf[12..16].copy_from_slice(&r.to_le_bytes());
    buf[16] = round;

    let digest = sha256(&buf);
    u32::from_le_bytes([digest[0], digest[1], digest[2], digest[3]])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_pure_and_deterministic() {
        let a = feistel_round(7, 0x123456789ABCDEF0, 0, 2);
        let b = feistel_round(7, 0x123456789ABCDEF0, 0, 2);
        assert_eq!(a, b);
    }

    #[test]
    fn differs_across_every_input_component() {
        let base = feistel_round(7, 0x123456789ABCDEF0, 0, 2);
        assert_ne!(base, feistel_round(8, 0x123456789ABCDEF0, 0, 2));
        assert_ne!(base, feistel_round(7, 0x123456789ABCDEF1, 0, 2));
        assert_ne!(base, feistel_round(7, 0x123456789ABCDEF0, 1, 2));
        assert_ne!(base, feistel_round(7, 0x123456789ABCDEF0, 0, 3));
    }
}

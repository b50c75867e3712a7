use fixed_hash::construct_fixed_hash;

construct_fixed_hash! {
    /// A 32-byte digest produced by the in-core SHA-256 implementation.
    ///
    /// Used for sample leaves, Merkle interior nodes, batch/epoch commitments
    /// and the provenance chain. Equality and `Display`/`LowerHex` are
    /// byte-exact; no implicit truncation or endianness conversion happens
    /// when constructing one.
    pub struct Hash(32);
}

impl Hash {
    pub const ZERO: Hash = Hash([0u8; 32]);

    /// Builds a `Hash` from a 32-byte array without any copying ambiguity.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Hash(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_all_zero_bytes() {
        assert_eq!(Hash::ZERO.as_bytes(), &[0u8; 32]);
    }

    #[test]
    fn from_bytes_round_trips() {
        let mut bytes = [0u8; 32];
        bytes[0] = 0xAB;
        bytes[31] = 0xCD;
        let h = Hash::from_bytes(bytes);
        assert_eq!(h.as_bytes(), &bytes);
    }
}

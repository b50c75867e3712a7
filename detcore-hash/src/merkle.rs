use crate::consts::{INTERNAL, LEAF};
use crate::sha256::Sha256;
use detcore_types::{FaultFlags, Hash, SampleRef};

/// `H_sample(s) = SHA256(LEAF || serialize_sample(s))`.
///
/// The canonical serialization is `version_LE(4) || dtype_LE(4) ||
/// ndims_LE(4) || dims[0..MAX_DIMS]_LE` (always all four dim slots, unused
/// ones zero) `|| data[i]_LE(4)` for every element, in order. Built with
/// incremental `Sha256::update` calls so no scratch buffer is needed even
/// for large samples.
pub fn hash_sample(sample: &SampleRef<'_>) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update(&[LEAF]);
    hasher.update(&sample.header.version.to_le_bytes());
    hasher.update(&sample.header.dtype.to_le_bytes());
    hasher.update(&sample.header.ndims.to_le_bytes());
    for d in sample.header.dims.iter() {
        hasher.update(&d.to_le_bytes());
    }
    for v in sample.data.iter() {
        hasher.update(&v.to_le_bytes());
    }
    Hash::from_bytes(hasher.finish())
}

/// `H_node(L, R) = SHA256(INTERNAL || L || R)`.
pub fn hash_internal(left: &Hash, right: &Hash) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update(&[INTERNAL]);
    hasher.update(left.as_bytes());
    hasher.update(right.as_bytes());
    Hash::from_bytes(hasher.finish())
}

/// Merkle root over `leaves`, using `scratch` as the only working storage
/// (sized to the compile-time maximum leaf count; exceeding it is a domain
/// fault, never a silent truncation).
///
/// Odd-numbered levels **promote** their last node unchanged into the next
/// level instead of duplicating and re-hashing it - this is the
/// implementation's committed choice and changes every
/// interior digest relative to the "duplicate last leaf" convention used by
/// some other Merkle tree designs. `n = 0` returns the all-zero digest;
/// `n = 1` returns the leaf itself.
pub fn merkle_root(leaves: &[Hash], scratch: &mut [Hash], faults: &mut FaultFlags) -> Hash {
    let n = leaves.len();
    if n == 0 {
        return Hash::ZERO;
    }
    if n == 1 {
        return leaves[0];
    }
    if n > scratch.len() {
        faults.domain = true;
        return Hash::ZERO;
    }

    scratch[..n].copy_from_slice(leaves);
    let mut level_len = n;

    while level_len > 1 {
        let mut write = 0;
        let mut read = 0;
        while read < level_len {
            if read + 1 < level_len {
                let node = hash_internal(&scratch[read], &scratch[read + 1]);
                scratch[write] = node;
                read += 2;
            } else {
                // Odd leaf: promote unchanged, don't duplicate-and-hash.
                scratch[write] = scratch[read];
                read += 1;
            }
            write += 1;
        }
        level_len = write;
    }

    scratch[0]
}

/// Recomputes the Merkle root of `sample_hashes` and compares it to
/// `claimed` byte-for-byte. Because `faults` is the same sticky set threaded
/// through the batch's construction, any fault recorded earlier (during
/// sample hashing, normalization, augmentation, ...) already makes
/// `any_fault()` true, so `verify` reports failure even when the hashes
/// happen to match - any fault at any point during construction invalidates
/// the commitment.
pub fn verify_batch(
    sample_hashes: &[Hash],
    scratch: &mut [Hash],
    claimed: Hash,
    faults: &mut FaultFlags,
) -> bool {
    let recomputed = merkle_root(sample_hashes, scratch, faults);
    if recomputed != claimed {
        faults.hash_mismatch = true;
    }
    !faults.any_fault()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(byte: u8) -> Hash {
        Hash::from_bytes([byte; 32])
    }

    #[test]
    fn empty_leaves_give_zero_root() {
        let mut faults = FaultFlags::new();
        let mut scratch = [Hash::ZERO; 8];
        assert_eq!(merkle_root(&[], &mut scratch, &mut faults), Hash::ZERO);
        assert!(!faults.any_fault());
    }

    #[test]
    fn single_leaf_is_its_own_root() {
        let mut faults = FaultFlags::new();
        let mut scratch = [Hash::ZERO; 8];
        let a = leaf(0xAA);
        assert_eq!(merkle_root(&[a], &mut scratch, &mut faults), a);
    }

    #[test]
    fn odd_leaf_count_promotes_not_duplicates() {
        let mut faults = FaultFlags::new();
        let mut scratch = [Hash::ZERO; 8];
        let a = leaf(1);
        let b = leaf(2);
        let c = leaf(3);
        let root = merkle_root(&[a, b, c], &mut scratch, &mut faults);
        let expected = hash_internal(&hash_internal(&a, &b), &c);
        assert_eq!(root, expected);
        assert!(!faults.any_fault());
    }

    #[test]
    fn exceeding_scratch_capacity_sets_domain_and_refuses() {
        let mut faults = FaultFlags::new();
        let mut scratch = [Hash::ZERO; 2];
        let leaves = [leaf(1), leaf(2), leaf(3)];
        let root = merkle_root(&leaves, &mut scratch, &mut faults);
        assert_eq!(root, Hash::ZERO);
        assert!(faults.domain);
    }

    #[test]
    fn verify_detects_tampering_and_sets_hash_mismatch() {
        let mut faults = FaultFlags::new();
        let mut scratch = [Hash::ZERO; 8];
        let hashes = [leaf(1), leaf(2)];
        let good_root = merkle_root(&hashes, &mut scratch, &mut FaultFlags::new());

        assert!(verify_batch(&hashes, &mut scratch, good_root, &mut faults));
        assert!(!faults.any_fault());

        let mut tampered_root_bytes = *good_root.as_fixed_bytes();
        tampered_root_bytes[0] ^= 0x01;
        let tampered_root = Hash::from_bytes(tampered_root_bytes);

        let mut faults2 = FaultFlags::new();
        assert!(!verify_batch(
            &hashes,
            &mut scratch,
            tampered_root,
            &mut faults2
        ));
        assert!(faults2.hash_mismatch);
    }

    #[test]
    fn verify_fails_if_an_earlier_fault_was_already_set() {
        let mut faults = FaultFlags::new();
        faults.overflow = true; // simulates a fault from earlier in the pipeline
        let mut scratch = [Hash::ZERO; 8];
        let hashes = [leaf(1), leaf(2)];
        let root = merkle_root(&hashes, &mut scratch, &mut FaultFlags::new());
        assert!(!verify_batch(&hashes, &mut scratch, root, &mut faults));
    }
}

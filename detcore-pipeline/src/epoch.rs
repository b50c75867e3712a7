use detcore_hash::merkle_root;
use detcore_types::{FaultFlags, Hash, Provenance};

/// `H_epoch = merkle_root(batch_hashes_of_epoch)`, using the same odd-leaf
/// promotion as any other Merkle root in this crate.
pub fn epoch_hash(batch_hashes: &[Hash], scratch: &mut [Hash], faults: &mut FaultFlags) -> Hash {
    merkle_root(batch_hashes, scratch, faults)
}

/// Attempts to bind `epoch_hash` into the provenance chain.
///
/// Any fault recorded anywhere during the epoch's construction must prevent
/// the chain from advancing: the caller passes
/// the same sticky `FaultFlags` used throughout the epoch, and this function
/// refuses (returning `false`, leaving `prov` untouched) if any bit is set.
/// On success it advances `prov` in place and returns `true`.
pub fn commit_epoch(prov: &mut Provenance, computed_epoch_hash: Hash, faults: &FaultFlags) -> bool {
    if faults.any_fault() {
        return false;
    }
    detcore_hash::provenance_advance(prov, computed_epoch_hash);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use detcore_hash::provenance_init;

    #[test]
    fn commit_advances_on_clean_epoch() {
        let mut prov = provenance_init(Hash::ZERO, Hash::ZERO, 7);
        let faults = FaultFlags::new();
        let epoch_h = Hash::from_bytes([9u8; 32]);
        let advanced = commit_epoch(&mut prov, epoch_h, &faults);
        assert!(advanced);
        assert_eq!(prov.current_epoch, 1);
    }

    #[test]
    fn commit_refuses_when_any_fault_is_set() {
        let mut prov = provenance_init(Hash::ZERO, Hash::ZERO, 7);
        let before = prov;
        let mut faults = FaultFlags::new();
        faults.precision = true;
        let epoch_h = Hash::from_bytes([9u8; 32]);
        let advanced = commit_epoch(&mut prov, epoch_h, &faults);
        assert!(!advanced);
        assert_eq!(prov, before);
    }

    #[test]
    fn epoch_hash_is_merkle_root_of_batch_hashes() {
        let mut faults = FaultFlags::new();
        let mut scratch = [Hash::ZERO; 4];
        let a = Hash::from_bytes([1u8; 32]);
        let b = Hash::from_bytes([2u8; 32]);
        let root = epoch_hash(&[a, b], &mut scratch, &mut faults);
        assert_ne!(root, Hash::ZERO);
        assert!(!faults.any_fault());
    }
}

use crate::consts::{EPOCH_CHAIN, PROVENANCE_INIT};
use crate::sha256::Sha256;
use detcore_types::{Hash, Provenance};

/// `h0 = SHA256(PROVENANCE_INIT || dataset_hash || config_hash || seed_LE(8))`;
/// both `prev_hash` and `current_hash` start out equal to `h0`, and
/// `current_epoch = total_epochs = 0`.
pub fn provenance_init(dataset_hash: Hash, config_hash: Hash, seed: u64) -> Provenance {
    let mut hasher = Sha256::new();
    hasher.update(&[PROVENANCE_INIT]);
    hasher.update(dataset_hash.as_bytes());
    hasher.update(config_hash.as_bytes());
    hasher.update(&seed.to_le_bytes());
    let h0 = Hash::from_bytes(hasher.finish());

    Provenance {
        dataset_hash,
        config_hash,
        seed,
        current_epoch: 0,
        total_epochs: 0,
        prev_hash: h0,
        current_hash: h0,
    }
}

/// Advances the chain by one completed epoch: `prev_hash <- current_hash`,
/// then `current_hash <- SHA256(EPOCH_CHAIN || prev_hash || epoch_hash ||
/// current_epoch_LE(4))`, where `current_epoch` is the number of the epoch
/// that just completed (captured before the counter is incremented) - the
/// hash input always refers to the epoch whose work produced `epoch_hash`,
/// never to the epoch about to start.
pub fn provenance_advance(prov: &mut Provenance, epoch_hash: Hash) {
    let completed_epoch = prov.current_epoch;
    let old_current = prov.current_hash;

    let mut hasher = Sha256::new();
    hasher.update(&[EPOCH_CHAIN]);
    hasher.update(old_current.as_bytes());
    hasher.update(epoch_hash.as_bytes());
    hasher.update(&completed_epoch.to_le_bytes());
    let new_current = Hash::from_bytes(hasher.finish());

    prov.prev_hash = old_current;
    prov.current_hash = new_current;
    prov.current_epoch = completed_epoch + 1;
    prov.total_epochs = prov.current_epoch;
}

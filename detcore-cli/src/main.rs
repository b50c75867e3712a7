use std::time::Instant;

use detcore_hash::{provenance_init, verify_batch};
use detcore_pipeline::{batch_fill, commit_epoch, epoch_hash};
use detcore_pipeline::testutil::{placeholder_dataset_hash, synthetic_grid_dataset, SyntheticDataset};
use detcore_types::{Batch, Dataset, FaultFlags, Hash, SampleRef};
use eyre::Result;
use lazy_static::lazy_static;
use paris::Logger;

lazy_static! {
    static ref FIXTURE: SyntheticDataset = synthetic_grid_dataset(5, 2, 2);
}

/// Runs `func`, times it, and logs pass/fail - same shape as the upstream
/// sequential test harness this binary is descended from: these checks are
/// highly deterministic and cheap, so running them one after another in a
/// single process is simpler than wiring up `#[test]`.
fn run_test(func: fn() -> bool, test_name: &str, logger: &mut Logger) {
    logger.loading(format!("{test_name}..."));
    let start = Instant::now();
    let is_passed = func();
    let duration = start.elapsed();
    if is_passed {
        logger.success(format!("{test_name} - {duration:?}"));
    } else {
        logger.error(format!("{test_name} - {duration:?}"));
    };
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let mut logger = Logger::new();
    logger.info("Running deterministic pipeline demo");

    run_test(test_permute_reference_vectors, "test_permute_reference_vectors", &mut logger);
    run_test(test_sha256_vectors, "test_sha256_vectors", &mut logger);
    run_test(test_batch_fill_and_verify, "test_batch_fill_and_verify", &mut logger);
    run_test(
        test_epoch_and_provenance_advance,
        "test_epoch_and_provenance_advance",
        &mut logger,
    );

    Ok(())
}

fn test_permute_reference_vectors() -> bool {
    let mut faults = FaultFlags::new();
    let checks = [
        (0u32, 100u32, 0x123456789ABCDEF0u64, 0u32, 26u32),
        (99, 100, 0x123456789ABCDEF0, 0, 41),
        (0, 100, 0x123456789ABCDEF0, 1, 66),
        (0, 60000, 0xFEDCBA9876543210, 0, 26382),
        (59999, 60000, 0xFEDCBA9876543210, 0, 20774),
    ];
    checks.iter().all(|&(index, n, seed, epoch, expected)| {
        detcore_permute::permute(index, n, seed, epoch, &mut faults) == expected
    }) && !faults.any_fault()
}

fn test_sha256_vectors() -> bool {
    let empty = detcore_hash::sha256(b"");
    let abc = detcore_hash::sha256(b"abc");
    hex(&empty) == "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        && hex(&abc) == "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

fn test_batch_fill_and_verify() -> bool {
    let dataset = Dataset::new(
        FIXTURE.num_samples,
        FIXTURE.shape,
        &FIXTURE.data,
        placeholder_dataset_hash(),
    );

    let batch_size = 3;
    let mut refs = vec![(0u32, 0u32); batch_size];
    let mut samples = vec![SampleRef::default(); batch_size];
    let mut hashes = vec![Hash::ZERO; batch_size];
    let mut batch = Batch {
        epoch: 0,
        batch_index: 0,
        batch_size: batch_size as u32,
        refs: &mut refs,
        samples: &mut samples,
        sample_hashes: &mut hashes,
        merkle_root: Hash::ZERO,
        batch_hash: Hash::ZERO,
    };

    let mut scratch = vec![Hash::ZERO; batch_size];
    let mut faults = FaultFlags::new();
    batch_fill(&mut batch, &dataset, 0, 0, 0x123456789ABCDEF0, &mut scratch, &mut faults);

    let claimed = batch.batch_hash;
    let mut verify_scratch = vec![Hash::ZERO; batch_size];
    let mut verify_faults = FaultFlags::new();
    verify_batch(batch.sample_hashes, &mut verify_scratch, claimed, &mut verify_faults)
}

fn test_epoch_and_provenance_advance() -> bool {
    let dataset = Dataset::new(
        FIXTURE.num_samples,
        FIXTURE.shape,
        &FIXTURE.data,
        placeholder_dataset_hash(),
    );

    let mut prov = provenance_init(dataset.dataset_hash, Hash::ZERO, 0x123456789ABCDEF0);
    let mut batch_hashes = Vec::new();

    for epoch in 0..2u32 {
        let batch_size = 3usize;
        let mut refs = vec![(0u32, 0u32); batch_size];
        let mut samples = vec![SampleRef::default(); batch_size];
        let mut hashes = vec![Hash::ZERO; batch_size];
        let mut batch = Batch {
            epoch,
            batch_index: 0,
            batch_size: batch_size as u32,
            refs: &mut refs,
            samples: &mut samples,
            sample_hashes: &mut hashes,
            merkle_root: Hash::ZERO,
            batch_hash: Hash::ZERO,
        };
        let mut scratch = vec![Hash::ZERO; batch_size];
        let mut faults = FaultFlags::new();
        batch_fill(
            &mut batch,
            &dataset,
            0,
            epoch,
            0x123456789ABCDEF0,
            &mut scratch,
            &mut faults,
        );
        batch_hashes.push(batch.batch_hash);

        let mut epoch_scratch = vec![Hash::ZERO; 1];
        let computed_epoch_hash = epoch_hash(&[batch.batch_hash], &mut epoch_scratch, &mut faults);
        if !commit_epoch(&mut prov, computed_epoch_hash, &faults) {
            return false;
        }
    }

    batch_hashes[0] != batch_hashes[1] && prov.current_epoch == 2
}

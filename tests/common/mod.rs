//! Shared test fixtures for integration tests.

#![allow(dead_code)]

use enerwise::metrics::SectorRecord;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Seeds exercised by property-style tests.
pub const SEEDS: [u64; 8] = [0, 1, 7, 42, 99, 1234, 65_535, u64::MAX];

/// Deterministic RNG for a seed.
pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Four sectors of 250 kWh each: totals of 1000 kWh, R$ 500, 200 kg CO2.
pub fn round_sectors() -> Vec<SectorRecord> {
    ["Docas", "Refrigeração", "Automação", "Iluminação"]
        .iter()
        .map(|name| SectorRecord::new(*name, 250, 80, 22.0))
        .collect()
}

/// Creates an empty scratch directory under the target temp dir.
pub fn scratch_dir(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("enerwise-{name}-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

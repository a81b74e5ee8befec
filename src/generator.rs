//! Seeded synthetic reading generator for demo data.

use chrono::{DateTime, Duration, Utc};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::domain::Reading;

/// Spacing between consecutive synthetic samples.
const SAMPLE_SPACING_SECONDS: i64 = 10;

/// Generates `count` synthetic readings ending at `now`.
///
/// Values are uniform in `[0, 1)`. Timestamps step ten seconds into the
/// past, so the sequence comes out *reverse* chronological — deliberately
/// unsorted input, matching what real ingestion may deliver and what the
/// costing engine must tolerate.
pub fn generate(count: usize, now: DateTime<Utc>, rng: &mut StdRng) -> Vec<Reading> {
    (0..count)
        .map(|i| {
            Reading::new(
                now - Duration::seconds(i as i64 * SAMPLE_SPACING_SECONDS),
                rng.random::<f64>(),
            )
        })
        .collect()
}

/// Convenience: a fresh seeded generator per meter, offset so meters do not
/// share a noise stream.
pub fn generate_for_meter(count: usize, now: DateTime<Utc>, seed: u64, meter_index: u64) -> Vec<Reading> {
    let mut rng = StdRng::seed_from_u64(seed.wrapping_add(meter_index));
    generate(count, now, &mut rng)
}

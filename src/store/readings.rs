//! In-memory meter reading store with copy-on-read snapshots.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::Reading;

/// Process-wide store of readings per smart meter.
///
/// Concurrency contract: appends take the write lock, reads clone the
/// current sequence under the read lock. Callers therefore receive a
/// snapshot that is safe to iterate without further synchronization, and
/// concurrent ingestion never invalidates a snapshot already handed out.
#[derive(Debug, Default)]
pub struct MeterReadingStore {
    readings: RwLock<HashMap<String, Vec<Reading>>>,
}

impl MeterReadingStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends readings to the sequence for `meter_id`, creating it on
    /// first use. Insertion order is preserved; no time-sorting happens.
    pub fn store(&self, meter_id: &str, readings: Vec<Reading>) {
        let mut map = self.readings.write().expect("reading store lock poisoned");
        map.entry(meter_id.to_string()).or_default().extend(readings);
    }

    /// Returns a snapshot of the sequence stored for `meter_id`.
    ///
    /// An unknown meter id yields an empty vec — not an error; the caller
    /// decides what "no data" means.
    pub fn snapshot(&self, meter_id: &str) -> Vec<Reading> {
        let map = self.readings.read().expect("reading store lock poisoned");
        map.get(meter_id).cloned().unwrap_or_default()
    }
}

//! Shared fixtures for integration tests.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use tariff_compare::config::AppConfig;
use tariff_compare::domain::Reading;
use tariff_compare::engine::cost::CostEngine;
use tariff_compare::store::readings::MeterReadingStore;

/// Fixed reference instant used across tests.
pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 4, 12, 0, 0).unwrap()
}

/// Engine over the demo catalog with the given readings stored for
/// `smart-meter-0`.
pub fn demo_engine(readings: Vec<Reading>) -> (Arc<MeterReadingStore>, CostEngine) {
    let config = AppConfig::demo();
    let store = Arc::new(MeterReadingStore::new());
    store.store("smart-meter-0", readings);
    let engine = CostEngine::new(Arc::clone(&store), Arc::new(config.build_catalog()));
    (store, engine)
}

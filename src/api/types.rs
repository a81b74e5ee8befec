//! API request and response types.
//!
//! Field names use camelCase on the wire, matching the ingestion format the
//! original meters already send.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{Reading, Supplier};

/// `POST /readings/store` request body.
///
/// ```json
/// {
///   "smartMeterId": "smart-meter-0",
///   "electricityReadings": [
///     { "time": "2024-06-04T19:45:59Z", "reading": 0.88 }
///   ]
/// }
/// ```
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreReadingsRequest {
    /// Target meter id; must be non-empty.
    pub smart_meter_id: String,
    /// Readings to append; must be non-empty.
    pub electricity_readings: Vec<Reading>,
}

impl StoreReadingsRequest {
    /// A request is storable only when it names a meter and carries data.
    pub fn is_valid(&self) -> bool {
        !self.smart_meter_id.is_empty() && !self.electricity_readings.is_empty()
    }
}

/// `GET /price-plans/compare-all/{id}` response body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareAllResponse {
    /// The meter's own supplier, when mapped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_plan_id: Option<Supplier>,
    /// Supplier name → projected cost, for every cataloged plan.
    pub price_plan_comparisons: BTreeMap<String, f64>,
}

/// Optional query parameters for the recommendation endpoint.
///
/// `limit` is a `usize`: a negative value fails query deserialization and
/// surfaces as 400 before any costing runs.
#[derive(Debug, Deserialize)]
pub struct RecommendQuery {
    /// Maximum number of plans to return.
    pub limit: Option<usize>,
}

/// `GET /cost/{id}` response body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyCostResponse {
    /// Meter the bill was computed for.
    pub smart_meter_id: String,
    /// The meter's contracted supplier.
    pub supplier: Supplier,
    /// Total cost of the trailing week's consumption.
    pub cost: f64,
}

/// Error response body for 4xx results.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

//! The cost engine: both costing operations over stored readings.
//!
//! Two deliberately distinct policies (see the lineage notes in DESIGN.md):
//!
//! - **Average-rate costing** ([`CostEngine::per_plan_cost`]) normalizes the
//!   whole reading history to a consumption rate and prices it under every
//!   cataloged plan — a comparison that is independent of how much history
//!   the meter has.
//! - **Total-consumption costing** ([`CostEngine::weekly_supplier_cost`])
//!   sums the trailing week's readings and prices them under one supplier's
//!   plan — an absolute bill figure, forgiving of sparse data.
//!
//! The two are not interchangeable and are never merged.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::{PlanCost, PricePlan, Reading, Supplier};
use crate::engine::error::CostError;
use crate::engine::interval::ReadingInterval;
use crate::engine::rank;
use crate::store::catalog::PricePlanCatalog;
use crate::store::readings::MeterReadingStore;

/// Computes per-plan costs and recommendations from reading snapshots.
///
/// All methods are synchronous pure functions of the snapshot they take;
/// the engine holds no mutable state and needs no locks of its own.
#[derive(Debug, Clone)]
pub struct CostEngine {
    store: Arc<MeterReadingStore>,
    catalog: Arc<PricePlanCatalog>,
}

impl CostEngine {
    /// Creates an engine over the given store and catalog.
    pub fn new(store: Arc<MeterReadingStore>, catalog: Arc<PricePlanCatalog>) -> Self {
        Self { store, catalog }
    }

    /// Resolves the cataloged plan for `supplier`.
    ///
    /// # Errors
    ///
    /// Returns [`CostError::MissingPlan`] when the supplier has no catalog
    /// entry. Average-rate costing never defaults a missing plan to zero;
    /// that tolerance belongs to [`Self::weekly_supplier_cost`] alone.
    pub fn plan_for(&self, supplier: Supplier) -> Result<&PricePlan, CostError> {
        self.catalog
            .find(supplier)
            .ok_or(CostError::MissingPlan { supplier })
    }

    /// Average-rate cost of the meter's full history under every cataloged
    /// plan, in catalog order.
    ///
    /// Per plan: `(mean(values) / elapsed_hours) * unit_rate`, with
    /// `elapsed_hours` spanning the earliest to the latest timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`CostError::DegenerateInterval`] when the history spans zero
    /// elapsed time — a single reading, or every reading sharing one
    /// timestamp — since the average rate is undefined there. An *empty*
    /// history is not an error: it yields an empty vec, meaning "no data",
    /// which callers must keep distinct from a zero-cost plan.
    pub fn per_plan_cost(&self, meter_id: &str) -> Result<Vec<PlanCost>, CostError> {
        let readings = self.store.snapshot(meter_id);
        if readings.is_empty() {
            return Ok(Vec::new());
        }

        let elapsed = elapsed_hours(&readings);
        if elapsed <= 0.0 {
            return Err(CostError::DegenerateInterval {
                meter_id: meter_id.to_string(),
            });
        }

        let rate = average_reading(&readings) / elapsed;
        Ok(self
            .catalog
            .all()
            .iter()
            .map(|plan| PlanCost {
                supplier: plan.supplier,
                cost: rate * plan.unit_rate,
            })
            .collect())
    }

    /// Total-consumption cost of the trailing week `[now − 7d, now]` under
    /// `supplier`'s plan: sum of in-window values times the unit rate.
    ///
    /// Tolerant by design: no matching plan, or no readings in the window,
    /// costs exactly `0.0`. That zero-default is scoped to this operation
    /// only — average-rate costing treats a missing plan as an error.
    pub fn weekly_supplier_cost(
        &self,
        meter_id: &str,
        supplier: Supplier,
        now: DateTime<Utc>,
    ) -> f64 {
        let Some(plan) = self.catalog.find(supplier) else {
            return 0.0;
        };

        let readings = self.store.snapshot(meter_id);
        let in_window = ReadingInterval::previous_week(now).filter(&readings);
        total_reading(&in_window) * plan.unit_rate
    }

    /// Cheapest-first recommendation list for the meter, optionally
    /// truncated to `limit` entries.
    ///
    /// An empty result means "no data for this meter"; the boundary layer
    /// maps it to not-found.
    ///
    /// # Errors
    ///
    /// Propagates [`CostError::DegenerateInterval`] from average-rate
    /// costing.
    pub fn recommend(
        &self,
        meter_id: &str,
        limit: Option<usize>,
    ) -> Result<Vec<PlanCost>, CostError> {
        let costs = self.per_plan_cost(meter_id)?;
        Ok(rank::rank(costs, limit))
    }
}

/// Arithmetic mean of the reading values.
///
/// Callers guarantee a non-empty slice.
fn average_reading(readings: &[Reading]) -> f64 {
    let sum: f64 = readings.iter().map(|r| r.reading).sum();
    sum / readings.len() as f64
}

/// Sum of the reading values; zero for an empty slice.
fn total_reading(readings: &[Reading]) -> f64 {
    readings.iter().map(|r| r.reading).sum()
}

/// Hours between the earliest and latest timestamp, regardless of input
/// order. Zero when the slice has fewer than two distinct timestamps.
fn elapsed_hours(readings: &[Reading]) -> f64 {
    let Some(first) = readings.iter().map(|r| r.time).min() else {
        return 0.0;
    };
    let Some(last) = readings.iter().map(|r| r.time).max() else {
        return 0.0;
    };
    (last - first).num_milliseconds() as f64 / 3_600_000.0
}

//! Core domain types: readings, suppliers, price plans, and cost results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One instantaneous consumption sample from a smart meter.
///
/// Immutable once stored. A reading sequence is kept in insertion order and
/// is *not* guaranteed to be time-sorted — the costing engine must tolerate
/// unordered input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Sample timestamp.
    pub time: DateTime<Utc>,
    /// Consumption value in `[0, 1]`.
    pub reading: f64,
}

impl Reading {
    /// Creates a new reading.
    pub fn new(time: DateTime<Utc>, reading: f64) -> Self {
        Self { time, reading }
    }
}

/// Closed set of known energy suppliers.
///
/// There is deliberately no "no supplier" variant: an unmapped meter is
/// represented as `Option<Supplier>::None` at the account-directory boundary,
/// so the compiler forces callers to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Supplier {
    DrEvilsDarkEnergy,
    TheGreenEco,
    PowerForEveryone,
}

impl Supplier {
    /// Stable display name, matching the serialized form.
    pub fn name(self) -> &'static str {
        match self {
            Self::DrEvilsDarkEnergy => "DrEvilsDarkEnergy",
            Self::TheGreenEco => "TheGreenEco",
            Self::PowerForEveryone => "PowerForEveryone",
        }
    }
}

impl std::fmt::Display for Supplier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A time-of-day rate multiplier slot.
///
/// The catalog model reserves this for future peak pricing; no computation
/// path reads it today and every configured plan carries an empty list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeakTimeMultiplier {
    /// Day of week the multiplier applies to (0 = Monday).
    pub day_of_week: u8,
    /// Rate multiplier, > 0.
    pub multiplier: f64,
}

/// A supplier's tariff: the unit rate used to convert consumption into cost.
///
/// Built once at startup from configuration; never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePlan {
    /// Supplier offering this plan.
    pub supplier: Supplier,
    /// Price per unit of consumption, strictly positive.
    pub unit_rate: f64,
    /// Reserved peak-time multipliers (always empty today).
    #[serde(default)]
    pub peak_time_multipliers: Vec<PeakTimeMultiplier>,
}

impl PricePlan {
    /// Creates a plan with no peak-time multipliers.
    pub fn new(supplier: Supplier, unit_rate: f64) -> Self {
        Self {
            supplier,
            unit_rate,
            peak_time_multipliers: Vec::new(),
        }
    }
}

/// Projected cost of one meter's consumption under one plan.
///
/// Engine output only — never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanCost {
    /// Supplier whose plan was costed.
    pub supplier: Supplier,
    /// Projected cost under that plan.
    pub cost: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supplier_display_matches_serialized_name() {
        let json = serde_json::to_string(&Supplier::TheGreenEco).unwrap();
        assert_eq!(json, format!("\"{}\"", Supplier::TheGreenEco));
    }

    #[test]
    fn price_plan_new_has_no_multipliers() {
        let plan = PricePlan::new(Supplier::PowerForEveryone, 1.0);
        assert!(plan.peak_time_multipliers.is_empty());
    }
}

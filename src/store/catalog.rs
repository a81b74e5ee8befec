//! Ordered, immutable price-plan catalog.

use crate::domain::{PricePlan, Supplier};

/// The full set of cataloged price plans, fixed at startup.
///
/// Catalog order is load-bearing: it is the tie-break order used by the
/// recommendation ranking, so results are deterministic across runs.
#[derive(Debug, Clone, Default)]
pub struct PricePlanCatalog {
    plans: Vec<PricePlan>,
}

impl PricePlanCatalog {
    /// Builds a catalog preserving the given plan order.
    pub fn new(plans: Vec<PricePlan>) -> Self {
        Self { plans }
    }

    /// All plans in catalog order.
    pub fn all(&self) -> &[PricePlan] {
        &self.plans
    }

    /// Looks up the plan offered by `supplier`.
    pub fn find(&self, supplier: Supplier) -> Option<&PricePlan> {
        self.plans.iter().find(|plan| plan.supplier == supplier)
    }
}

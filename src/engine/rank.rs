//! Cheapest-first recommendation ranking.

use crate::domain::PlanCost;

/// Sorts plan costs ascending and optionally truncates to `limit` entries.
///
/// The sort is stable, so entries that tie on cost keep their input order —
/// callers pass costs in catalog order, making results deterministic across
/// runs with identical input.
///
/// Limit semantics: `None` or `limit >= len` returns everything;
/// `limit == 0` is defined as an empty result. Negative limits are
/// unrepresentable here — the API boundary rejects them as malformed input
/// before this function runs.
pub fn rank(mut costs: Vec<PlanCost>, limit: Option<usize>) -> Vec<PlanCost> {
    costs.sort_by(|a, b| a.cost.total_cmp(&b.cost));
    if let Some(limit) = limit {
        costs.truncate(limit);
    }
    costs
}

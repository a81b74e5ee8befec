//! Costing error taxonomy.

use std::fmt;

use crate::domain::Supplier;

/// A costing failure the boundary layer can translate into a user-facing
/// status.
///
/// "No readings" and "unknown meter" are deliberately *not* variants: they
/// surface as empty results so the caller decides between not-found and an
/// empty payload. All variants are deterministic given their inputs — none
/// should be retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CostError {
    /// The meter's reading history spans zero elapsed time (a single
    /// reading, or all readings sharing one timestamp), so average-rate
    /// costing would divide by zero.
    DegenerateInterval { meter_id: String },
    /// The meter has no supplier mapping, so there is no plan to cost
    /// against.
    UnsuppliedMeter { meter_id: String },
    /// A plan was required for this supplier but the catalog has none.
    MissingPlan { supplier: Supplier },
}

impl fmt::Display for CostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateInterval { meter_id } => write!(
                f,
                "readings for smart meter {meter_id} span zero elapsed time; cannot compute an average rate"
            ),
            Self::UnsuppliedMeter { meter_id } => {
                write!(f, "smart meter {meter_id} has no supplier mapping")
            }
            Self::MissingPlan { supplier } => {
                write!(f, "no cataloged price plan for supplier {supplier}")
            }
        }
    }
}

impl std::error::Error for CostError {}

//! Static meter-id to supplier directory.

use std::collections::HashMap;

use crate::domain::Supplier;

/// Immutable mapping from smart meter id to its contracted supplier.
///
/// Built once at startup. A meter id resolves to at most one supplier;
/// an unmapped meter resolves to `None` — there is no sentinel supplier.
#[derive(Debug, Clone, Default)]
pub struct AccountDirectory {
    accounts: HashMap<String, Supplier>,
}

impl AccountDirectory {
    /// Builds the directory from `(meter id, supplier)` pairs.
    pub fn new(accounts: impl IntoIterator<Item = (String, Supplier)>) -> Self {
        Self {
            accounts: accounts.into_iter().collect(),
        }
    }

    /// Returns the supplier contracted for `meter_id`, if any.
    pub fn supplier_for(&self, meter_id: &str) -> Option<Supplier> {
        self.accounts.get(meter_id).copied()
    }
}

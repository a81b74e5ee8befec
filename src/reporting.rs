//! Stdout report of per-meter plan recommendations.

use crate::domain::{PlanCost, Supplier};

/// Prints the ranked plan costs for one meter, cheapest first, along with
/// its contracted supplier when mapped.
pub fn print_recommendations(meter_id: &str, supplier: Option<Supplier>, ranked: &[PlanCost]) {
    match supplier {
        Some(supplier) => println!("\n--- {meter_id} (current: {supplier}) ---"),
        None => println!("\n--- {meter_id} (no supplier mapped) ---"),
    }
    if ranked.is_empty() {
        println!("no readings on record");
        return;
    }
    for entry in ranked {
        println!("{:<20} {:.4}", entry.supplier, entry.cost);
    }
}

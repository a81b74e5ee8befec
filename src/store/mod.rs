/// Meter-id to supplier account directory.
pub mod accounts;
/// Immutable price-plan catalog.
pub mod catalog;
pub mod readings;

/// Cost computation: the two costing operations.
pub mod cost;
pub mod error;
/// Closed time-interval filtering for reading sequences.
pub mod interval;
pub mod rank;

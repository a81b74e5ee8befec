//! Smart-meter electricity cost comparison and price-plan recommendation.
//!
//! The engine turns timestamped meter readings plus a price-plan catalog
//! into per-plan costs and a cheapest-first recommendation list. Everything
//! around it — the in-memory stores, the demo-data generator, the optional
//! REST API — is assembly.

#[cfg(feature = "api")]
pub mod api;
pub mod config;
pub mod domain;
/// Cost computation, interval filtering, and ranking.
pub mod engine;
pub mod generator;
pub mod reporting;
/// Reading store, account directory, and plan catalog.
pub mod store;

//! TOML-based service configuration and the built-in demo defaults.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::domain::{PricePlan, Supplier};
use crate::store::accounts::AccountDirectory;
use crate::store::catalog::PricePlanCatalog;

/// Top-level service configuration parsed from TOML.
///
/// All fields default to the demo wiring (three plans, five meters). Load
/// from TOML with [`AppConfig::from_toml_file`] or use [`AppConfig::demo`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Synthetic demo-reading generator parameters.
    pub generator: GeneratorConfig,
    /// Price-plan catalog contents, in catalog order.
    pub catalog: CatalogConfig,
    /// Meter-id to supplier account table.
    pub accounts: AccountsConfig,
}

/// Synthetic demo-reading generator parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Demo readings seeded per configured meter at startup.
    pub readings_per_meter: usize,
    /// Master random seed.
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            readings_per_meter: 20,
            seed: 42,
        }
    }
}

/// Price-plan catalog contents.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// Plans in catalog order; order is the ranking tie-break order.
    pub plans: Vec<PlanConfig>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            plans: vec![
                PlanConfig {
                    supplier: Supplier::DrEvilsDarkEnergy,
                    unit_rate: 10.0,
                },
                PlanConfig {
                    supplier: Supplier::TheGreenEco,
                    unit_rate: 2.0,
                },
                PlanConfig {
                    supplier: Supplier::PowerForEveryone,
                    unit_rate: 1.0,
                },
            ],
        }
    }
}

/// One cataloged plan.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlanConfig {
    /// Supplier offering the plan.
    pub supplier: Supplier,
    /// Unit rate, must be strictly positive.
    pub unit_rate: f64,
}

/// Meter-id to supplier account table.
///
/// A `BTreeMap` keeps iteration order (seeding, reporting) deterministic.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AccountsConfig {
    /// Meter id → supplier.
    pub meters: BTreeMap<String, Supplier>,
}

impl Default for AccountsConfig {
    fn default() -> Self {
        let meters = [
            ("smart-meter-0", Supplier::DrEvilsDarkEnergy),
            ("smart-meter-1", Supplier::TheGreenEco),
            ("smart-meter-2", Supplier::DrEvilsDarkEnergy),
            ("smart-meter-3", Supplier::PowerForEveryone),
            ("smart-meter-4", Supplier::TheGreenEco),
        ]
        .into_iter()
        .map(|(id, supplier)| (id.to_string(), supplier))
        .collect();
        Self { meters }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"catalog.plans[1].unit_rate"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {} — {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

impl AppConfig {
    /// Returns the demo configuration (same plans and accounts the service
    /// originally hardcoded).
    pub fn demo() -> Self {
        Self::default()
    }

    /// Loads and validates configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read, the TOML is
    /// invalid, or a constraint is violated.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: path.display().to_string(),
            message: format!("cannot read file: {e}"),
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| ConfigError {
            field: path.display().to_string(),
            message: format!("invalid TOML: {e}"),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the catalog and account invariants.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` naming the offending field when the catalog
    /// is empty, a unit rate is not strictly positive, a supplier appears in
    /// the catalog twice, or an account references an uncataloged supplier.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.catalog.plans.is_empty() {
            return Err(ConfigError {
                field: "catalog.plans".to_string(),
                message: "at least one price plan is required".to_string(),
            });
        }

        for (i, plan) in self.catalog.plans.iter().enumerate() {
            if plan.unit_rate <= 0.0 {
                return Err(ConfigError {
                    field: format!("catalog.plans[{i}].unit_rate"),
                    message: format!("must be > 0, got {}", plan.unit_rate),
                });
            }
            let duplicated = self.catalog.plans[..i]
                .iter()
                .any(|earlier| earlier.supplier == plan.supplier);
            if duplicated {
                return Err(ConfigError {
                    field: format!("catalog.plans[{i}].supplier"),
                    message: format!("supplier {} is cataloged twice", plan.supplier),
                });
            }
        }

        for (meter_id, supplier) in &self.accounts.meters {
            let cataloged = self
                .catalog
                .plans
                .iter()
                .any(|plan| plan.supplier == *supplier);
            if !cataloged {
                return Err(ConfigError {
                    field: format!("accounts.meters.{meter_id}"),
                    message: format!("supplier {supplier} has no cataloged plan"),
                });
            }
        }

        Ok(())
    }

    /// Builds the immutable plan catalog in configured order.
    pub fn build_catalog(&self) -> PricePlanCatalog {
        PricePlanCatalog::new(
            self.catalog
                .plans
                .iter()
                .map(|plan| PricePlan::new(plan.supplier, plan.unit_rate))
                .collect(),
        )
    }

    /// Builds the immutable account directory.
    pub fn build_accounts(&self) -> AccountDirectory {
        AccountDirectory::new(
            self.accounts
                .meters
                .iter()
                .map(|(id, supplier)| (id.clone(), *supplier)),
        )
    }
}

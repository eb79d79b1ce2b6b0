use std::env;

use crate::services::distance_service::{RateTable, VehicleClass};

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;
const DB_NAME: &str = "trip_aggregator";
/// Responses never carry more combinations than this.
pub const MAX_RESULTS_CEILING: usize = 5;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub mongodb_uri: String,
    pub db_name: String,
}

impl AppConfig {
    /// Read the service settings. `MONGODB_URI` has no default.
    pub fn from_env() -> Result<Self, env::VarError> {
        let mongodb_uri = env::var("MONGODB_URI")?;

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| HOST.to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(PORT),
            mongodb_uri,
            db_name: env::var("DB_NAME").unwrap_or_else(|_| DB_NAME.to_string()),
        })
    }
}

/// Tunables for the budget combination search.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetSearchConfig {
    /// How many ranked combinations a response carries
    pub max_results: usize,
    /// Assumed inter-city distance when either package has no coordinates
    pub fallback_distance_km: f64,
    /// Vehicle class used to price the hop between two destinations
    pub transport_vehicle: VehicleClass,
    pub rates: RateTable,
}

impl Default for BudgetSearchConfig {
    fn default() -> Self {
        Self {
            max_results: MAX_RESULTS_CEILING,
            fallback_distance_km: 200.0,
            transport_vehicle: VehicleClass::Taxi,
            rates: RateTable::default(),
        }
    }
}

impl BudgetSearchConfig {
    /// Create the search config from environment variables or use defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            max_results: env_or("BUDGET_MAX_RESULTS", defaults.max_results)
                .min(MAX_RESULTS_CEILING),
            fallback_distance_km: env_or(
                "BUDGET_FALLBACK_DISTANCE_KM",
                defaults.fallback_distance_km,
            ),
            transport_vehicle: env::var("BUDGET_TRANSPORT_VEHICLE")
                .map(|s| VehicleClass::from_tag(&s))
                .unwrap_or(defaults.transport_vehicle),
            rates: RateTable {
                taxi_per_km: env_or("BUDGET_RATE_TAXI", defaults.rates.taxi_per_km),
                bus_per_km: env_or("BUDGET_RATE_BUS", defaults.rates.bus_per_km),
                other_per_km: env_or("BUDGET_RATE_OTHER", defaults.rates.other_per_km),
            },
        }
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

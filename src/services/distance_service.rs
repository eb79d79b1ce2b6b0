//! Distance and transport cost estimation
//!
//! Prices the hop between two package destinations. Distances are great-circle
//! (haversine) distances, not road distances, and when either end has no
//! coordinates a fixed assumed distance is used instead. Both are
//! approximations meant for budget planning, not routing.
//!
//! ## Rates
//! Cost is `distance_km * rate`, where the rate depends on the vehicle class:
//! - taxi: 15 per km
//! - bus: 5 per km
//! - anything else: 10 per km

use serde::{Deserialize, Serialize};

const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleClass {
    Taxi,
    Bus,
    Other,
}

impl VehicleClass {
    pub fn as_str(&self) -> &str {
        match self {
            VehicleClass::Taxi => "taxi",
            VehicleClass::Bus => "bus",
            VehicleClass::Other => "other",
        }
    }

    /// Unknown tags price at the fallback rate.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "taxi" | "cab" => VehicleClass::Taxi,
            "bus" | "coach" => VehicleClass::Bus,
            _ => VehicleClass::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateTable {
    pub taxi_per_km: f64,
    pub bus_per_km: f64,
    pub other_per_km: f64,
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            taxi_per_km: 15.0,
            bus_per_km: 5.0,
            other_per_km: 10.0,
        }
    }
}

impl RateTable {
    pub fn rate_for(&self, vehicle: VehicleClass) -> f64 {
        match vehicle {
            VehicleClass::Taxi => self.taxi_per_km,
            VehicleClass::Bus => self.bus_per_km,
            VehicleClass::Other => self.other_per_km,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransportEstimate {
    pub distance_km: f64,
    pub cost: f64,
    pub vehicle: VehicleClass,
}

pub struct DistanceService {
    rates: RateTable,
    fallback_distance_km: f64,
}

impl DistanceService {
    pub fn new(rates: RateTable, fallback_distance_km: f64) -> Self {
        Self {
            rates,
            fallback_distance_km,
        }
    }

    /// Great-circle distance in kilometres between two `(lat, lng)` points
    pub fn haversine_km(from: (f64, f64), to: (f64, f64)) -> f64 {
        if from == to {
            return 0.0;
        }

        let lat1_rad = from.0.to_radians();
        let lat2_rad = to.0.to_radians();
        let delta_lat = (to.0 - from.0).to_radians();
        let delta_lon = (to.1 - from.1).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }

    pub fn cost_for_distance(&self, distance_km: f64, vehicle: VehicleClass) -> f64 {
        distance_km * self.rates.rate_for(vehicle)
    }

    /// Estimate the hop between two optional coordinates.
    ///
    /// Missing coordinates on either side fall back to the configured
    /// assumed distance rather than failing.
    pub fn estimate(
        &self,
        from: Option<(f64, f64)>,
        to: Option<(f64, f64)>,
        vehicle: VehicleClass,
    ) -> TransportEstimate {
        let distance_km = match (from, to) {
            (Some(from), Some(to)) => Self::haversine_km(from, to),
            _ => self.fallback_distance_km,
        };

        TransportEstimate {
            distance_km,
            cost: self.cost_for_distance(distance_km, vehicle),
            vehicle,
        }
    }
}

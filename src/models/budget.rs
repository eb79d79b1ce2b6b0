use serde::{Deserialize, Serialize};

use crate::models::package::Package;
use crate::services::distance_service::VehicleClass;

/// A package as seen by the budget search. Snapshotted per request and never
/// mutated while a search runs.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageCandidate {
    pub id: String,
    pub agent_id: String,
    pub title: String,
    pub destination: String,
    /// Per person
    pub price: f64,
    pub duration: String,
    pub duration_days: u32,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub is_active: bool,
}

impl PackageCandidate {
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Some((lat, lng)),
            _ => None,
        }
    }

    pub fn party_cost(&self, num_persons: u32) -> f64 {
        self.price * num_persons as f64
    }
}

impl From<&Package> for PackageCandidate {
    fn from(package: &Package) -> Self {
        Self {
            id: package.id.clone(),
            agent_id: package.agent_id.clone(),
            title: package.title.clone(),
            destination: package.destination.clone(),
            price: package.price,
            duration: package.duration.clone(),
            duration_days: package.resolved_duration_days(),
            latitude: package.latitude,
            longitude: package.longitude,
            is_active: package.is_active,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BudgetSearchRequest {
    pub budget: f64,
    pub num_persons: u32,
    pub num_days: u32,
    #[serde(default)]
    pub place: Option<String>,
}

impl BudgetSearchRequest {
    /// Blank places mean no filter.
    pub fn place_filter(&self) -> Option<&str> {
        self.place
            .as_deref()
            .map(str::trim)
            .filter(|place| !place.is_empty())
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.budget.is_finite() || self.budget <= 0.0 {
            return Err("budget must be a positive amount");
        }
        if self.num_persons == 0 {
            return Err("num_persons must be at least 1");
        }
        if self.num_days == 0 {
            return Err("num_days must be at least 1");
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PackageSummary {
    pub id: String,
    pub title: String,
    pub destination: String,
    pub duration_days: u32,
    /// For the whole party
    pub cost: f64,
    pub agent_id: String,
}

impl PackageSummary {
    pub fn new(candidate: &PackageCandidate, cost: f64) -> Self {
        Self {
            id: candidate.id.clone(),
            title: candidate.title.clone(),
            destination: candidate.destination.clone(),
            duration_days: candidate.duration_days,
            cost,
            agent_id: candidate.agent_id.clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TransportSegment {
    pub from: String,
    pub to: String,
    /// For the whole party
    pub cost: f64,
    pub distance_km: f64,
    pub vehicle: VehicleClass,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Combination {
    pub packages: Vec<PackageSummary>,
    pub transport_segments: Vec<TransportSegment>,
    pub total_cost: f64,
    pub total_days: u32,
    pub savings: f64,
    pub itinerary_summary: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BudgetSearchResponse {
    pub request: BudgetSearchRequest,
    pub combinations: Vec<Combination>,
    pub total_combinations_found: usize,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BudgetPreview {
    pub available_destinations: Vec<String>,
    pub price_range: PriceRange,
    pub popular_durations: Vec<u32>,
    pub total_packages: usize,
    pub suggestion: String,
}

//! Combination enumeration for budget travel
//!
//! Builds candidate itineraries of one or two packages that fit a party's
//! budget and day limit. A hop between two different destinations is priced
//! through the [`DistanceService`] and counted against the budget.
//!
//! ## Limits
//! - Itineraries stop at two packages. Longer trips would need a bounded
//!   search (branch-and-bound with budget/day pruning) instead of pairwise
//!   enumeration.
//! - Pair enumeration is O(n²) in the filtered pool. Pools of a few hundred
//!   packages are fine; much larger catalogs should be pre-indexed by
//!   destination and price band before they reach this point.

use log::debug;

use crate::config::BudgetSearchConfig;
use crate::models::budget::{Combination, PackageCandidate, PackageSummary, TransportSegment};
use crate::services::distance_service::{DistanceService, VehicleClass};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConstraints {
    pub budget: f64,
    pub num_persons: u32,
    pub num_days: u32,
}

/// A candidate that already passed the per-party pre-filter.
struct Priced<'a> {
    candidate: &'a PackageCandidate,
    cost: f64,
}

pub struct CombinationService {
    distance_service: DistanceService,
    vehicle: VehicleClass,
}

impl CombinationService {
    pub fn new(config: &BudgetSearchConfig) -> Self {
        Self {
            distance_service: DistanceService::new(config.rates, config.fallback_distance_km),
            vehicle: config.transport_vehicle,
        }
    }

    /// Enumerate every single-package and two-package itinerary within the
    /// constraints. Singles come first, then pairs in pool order.
    pub fn enumerate(
        &self,
        candidates: &[PackageCandidate],
        constraints: &SearchConstraints,
    ) -> Vec<Combination> {
        let priced = Self::prefilter(candidates, constraints);
        let mut combinations = Vec::new();

        for item in &priced {
            if item.candidate.duration_days == constraints.num_days {
                combinations.push(self.single(item, constraints.budget));
            }
        }

        for (i, first) in priced.iter().enumerate() {
            for second in &priced[i + 1..] {
                if let Some(combination) = self.pair(first, second, constraints) {
                    combinations.push(combination);
                }
            }
        }

        combinations
    }

    fn prefilter<'a>(
        candidates: &'a [PackageCandidate],
        constraints: &SearchConstraints,
    ) -> Vec<Priced<'a>> {
        candidates
            .iter()
            .map(|candidate| Priced {
                candidate,
                cost: candidate.party_cost(constraints.num_persons),
            })
            .filter(|item| {
                item.cost <= constraints.budget
                    && item.candidate.duration_days <= constraints.num_days
            })
            .collect()
    }

    fn single(&self, item: &Priced, budget: f64) -> Combination {
        let summary = PackageSummary::new(item.candidate, item.cost);
        let itinerary_summary = describe(&[&summary], &[]);

        Combination {
            packages: vec![summary],
            transport_segments: Vec::new(),
            total_cost: item.cost,
            total_days: item.candidate.duration_days,
            savings: budget - item.cost,
            itinerary_summary,
        }
    }

    fn pair(
        &self,
        first: &Priced,
        second: &Priced,
        constraints: &SearchConstraints,
    ) -> Option<Combination> {
        if first.candidate.id == second.candidate.id {
            return None;
        }

        let remaining_budget = constraints.budget - first.cost;
        let remaining_days = constraints.num_days as i64 - first.candidate.duration_days as i64;
        if remaining_days <= 0 || remaining_budget <= 0.0 {
            return None;
        }
        if second.cost > remaining_budget || second.candidate.duration_days as i64 > remaining_days
        {
            return None;
        }

        let segment = if same_destination(first.candidate, second.candidate) {
            None
        } else {
            let estimate = self.distance_service.estimate(
                first.candidate.coordinates(),
                second.candidate.coordinates(),
                self.vehicle,
            );
            Some(TransportSegment {
                from: first.candidate.destination.clone(),
                to: second.candidate.destination.clone(),
                cost: estimate.cost,
                distance_km: estimate.distance_km,
                vehicle: estimate.vehicle,
            })
        };

        let transport_cost = segment.as_ref().map_or(0.0, |s| s.cost);
        if transport_cost > remaining_budget - second.cost {
            debug!(
                "Skipping {} + {}: transport {:.0} exceeds what is left of the budget",
                first.candidate.id, second.candidate.id, transport_cost
            );
            return None;
        }

        let total_cost = first.cost + second.cost + transport_cost;
        let total_days = first.candidate.duration_days + second.candidate.duration_days;
        if total_cost > constraints.budget || total_days > constraints.num_days {
            return None;
        }

        let packages = vec![
            PackageSummary::new(first.candidate, first.cost),
            PackageSummary::new(second.candidate, second.cost),
        ];
        let transport_segments: Vec<TransportSegment> = segment.into_iter().collect();
        let itinerary_summary = describe(
            &packages.iter().collect::<Vec<_>>(),
            &transport_segments,
        );

        Some(Combination {
            packages,
            transport_segments,
            total_cost,
            total_days,
            savings: constraints.budget - total_cost,
            itinerary_summary,
        })
    }
}

fn same_destination(a: &PackageCandidate, b: &PackageCandidate) -> bool {
    a.destination.trim().to_lowercase() == b.destination.trim().to_lowercase()
}

/// "Day 1-3: Goa Beach Adventure (Goa) -> taxi Goa to Jaipur, ~1450 km -> Day 4-5: ..."
fn describe(packages: &[&PackageSummary], segments: &[TransportSegment]) -> String {
    let mut parts = Vec::with_capacity(packages.len() + segments.len());
    let mut day = 1;

    for (index, package) in packages.iter().enumerate() {
        if index > 0 {
            if let Some(segment) = segments.get(index - 1) {
                parts.push(format!(
                    "{} {} to {}, ~{:.0} km",
                    segment.vehicle.as_str(),
                    segment.from,
                    segment.to,
                    segment.distance_km
                ));
            }
        }

        let last_day = day + package.duration_days.max(1) - 1;
        let span = if last_day == day {
            format!("Day {}", day)
        } else {
            format!("Day {}-{}", day, last_day)
        };
        parts.push(format!("{}: {} ({})", span, package.title, package.destination));
        day = last_day + 1;
    }

    parts.join(" -> ")
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn candidate(
        id: &str,
        destination: &str,
        price: f64,
        days: u32,
        coordinates: Option<(f64, f64)>,
    ) -> PackageCandidate {
        PackageCandidate {
            id: id.to_string(),
            agent_id: format!("agent-{}", id),
            title: format!("{} package {}", destination, id),
            destination: destination.to_string(),
            price,
            duration: format!("{} days", days),
            duration_days: days,
            latitude: coordinates.map(|c| c.0),
            longitude: coordinates.map(|c| c.1),
            is_active: true,
        }
    }

    fn constraints(budget: f64, num_persons: u32, num_days: u32) -> SearchConstraints {
        SearchConstraints {
            budget,
            num_persons,
            num_days,
        }
    }

    fn service() -> CombinationService {
        CombinationService::new(&BudgetSearchConfig::default())
    }

    #[test]
    fn test_empty_pool() {
        assert!(service().enumerate(&[], &constraints(50000.0, 2, 6)).is_empty());
    }

    #[test]
    fn test_same_destination_pair_has_no_transport() {
        let pool = vec![
            candidate("beach", "Goa", 10000.0, 3, None),
            candidate("heritage", "goa", 8000.0, 2, None),
        ];
        let found = service().enumerate(&pool, &constraints(50000.0, 2, 6));

        assert_eq!(found.len(), 1);
        let pair = &found[0];
        assert_eq!(pair.packages.len(), 2);
        assert!(pair.transport_segments.is_empty());
        assert_eq!(pair.total_cost, 36000.0);
        assert_eq!(pair.total_days, 5);
        assert_eq!(pair.savings, 14000.0);
        assert_eq!(
            pair.itinerary_summary,
            "Day 1-3: Goa package beach (Goa) -> Day 4-5: goa package heritage (goa)"
        );
    }

    #[test]
    fn test_single_needs_exact_day_match() {
        let pool = vec![
            candidate("exact", "Jaipur", 5000.0, 4, None),
            candidate("short", "Udaipur", 5000.0, 3, None),
        ];
        let found = service().enumerate(&pool, &constraints(12000.0, 2, 4));

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].packages[0].id, "exact");
        assert_eq!(found[0].savings, 2000.0);
        assert_eq!(found[0].itinerary_summary, "Day 1-4: Jaipur package exact (Jaipur)");
    }

    #[test]
    fn test_different_destinations_pay_for_transport() {
        let pool = vec![
            candidate("a", "Shimla", 1000.0, 2, None),
            candidate("b", "Manali", 1000.0, 2, None),
        ];
        // 200 km fallback by taxi is 3000 for the party
        let found = service().enumerate(&pool, &constraints(10000.0, 2, 4));

        assert_eq!(found.len(), 1);
        let segment = &found[0].transport_segments[0];
        assert_eq!(segment.from, "Shimla");
        assert_eq!(segment.to, "Manali");
        assert_eq!(segment.distance_km, 200.0);
        assert_eq!(segment.cost, 3000.0);
        assert_eq!(segment.vehicle, VehicleClass::Taxi);
        assert_eq!(found[0].total_cost, 7000.0);
        assert!(found[0].itinerary_summary.contains("taxi Shimla to Manali, ~200 km"));
    }

    #[test]
    fn test_pair_skipped_when_transport_does_not_fit() {
        let pool = vec![
            candidate("a", "Shimla", 1000.0, 2, None),
            candidate("b", "Manali", 1000.0, 2, None),
        ];
        // 2000 left after both packages, the taxi hop needs 3000
        let found = service().enumerate(&pool, &constraints(6000.0, 2, 4));
        assert!(found.is_empty());
    }

    #[test]
    fn test_everything_over_budget() {
        let pool = vec![
            candidate("beach", "Goa", 10000.0, 3, None),
            candidate("heritage", "Goa", 8000.0, 2, None),
        ];
        assert!(service().enumerate(&pool, &constraints(1000.0, 2, 5)).is_empty());
    }

    #[test]
    fn test_no_room_left_after_first_package() {
        let pool = vec![
            candidate("long", "Goa", 1000.0, 5, None),
            candidate("short", "Goa", 1000.0, 1, None),
        ];
        let found = service().enumerate(&pool, &constraints(10000.0, 1, 5));

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].packages.len(), 1);
        assert_eq!(found[0].packages[0].id, "long");
    }

    #[test]
    fn test_duplicate_ids_never_pair() {
        let pool = vec![
            candidate("same", "Goa", 1000.0, 2, None),
            candidate("same", "Goa", 1000.0, 2, None),
        ];
        assert!(service().enumerate(&pool, &constraints(10000.0, 1, 4)).is_empty());
    }

    #[test]
    fn test_pairs_follow_pool_order() {
        let pool = vec![
            candidate("second", "Goa", 1000.0, 1, None),
            candidate("first", "Goa", 1000.0, 1, None),
        ];
        let found = service().enumerate(&pool, &constraints(10000.0, 1, 3));

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].packages[0].id, "second");
        assert_eq!(found[0].packages[1].id, "first");
    }
}

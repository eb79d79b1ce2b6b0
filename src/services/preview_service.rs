use std::collections::HashMap;

use crate::models::budget::{BudgetPreview, PackageCandidate, PriceRange};

const MAX_POPULAR_DURATIONS: usize = 5;

/// Summarise a package pool so a client can suggest sensible budget inputs.
pub fn build_preview(pool: &[PackageCandidate]) -> BudgetPreview {
    let mut available_destinations: Vec<String> = Vec::new();
    for package in pool {
        if !available_destinations.contains(&package.destination) {
            available_destinations.push(package.destination.clone());
        }
    }

    let price_range = pool
        .iter()
        .map(|package| package.price)
        .fold(None, |range: Option<PriceRange>, price| {
            Some(match range {
                Some(range) => PriceRange {
                    min: range.min.min(price),
                    max: range.max.max(price),
                },
                None => PriceRange { min: price, max: price },
            })
        })
        .unwrap_or(PriceRange { min: 0.0, max: 0.0 });

    let mut frequency: HashMap<u32, usize> = HashMap::new();
    for package in pool {
        *frequency.entry(package.duration_days).or_insert(0) += 1;
    }
    let mut durations: Vec<(u32, usize)> = frequency.into_iter().collect();
    durations.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    let popular_durations = durations
        .into_iter()
        .take(MAX_POPULAR_DURATIONS)
        .map(|(days, _)| days)
        .collect();

    let suggestion = if pool.is_empty() {
        "No packages are available yet, so there is nothing to plan a budget around.".to_string()
    } else {
        format!(
            "Packages start at ₹{:.0} per person; \
             a budget of ₹{:.0} covers the cheapest trip for two.",
            price_range.min,
            price_range.min * 2.0
        )
    };

    BudgetPreview {
        available_destinations,
        price_range,
        popular_durations,
        total_packages: pool.len(),
        suggestion,
    }
}

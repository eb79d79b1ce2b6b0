use crate::models::budget::Combination;

/// Order combinations best-first and keep the top `max_results`.
///
/// Highest savings first, ties broken by lowest total cost. The sort is
/// stable, so exact ties keep enumeration order.
pub fn rank_combinations(
    mut combinations: Vec<Combination>,
    max_results: usize,
) -> Vec<Combination> {
    combinations.sort_by(|a, b| {
        b.savings
            .total_cmp(&a.savings)
            .then_with(|| a.total_cost.total_cmp(&b.total_cost))
    });
    combinations.truncate(max_results);
    combinations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn combination(label: &str, savings: f64, total_cost: f64) -> Combination {
        Combination {
            packages: vec![],
            transport_segments: vec![],
            total_cost,
            total_days: 1,
            savings,
            itinerary_summary: label.to_string(),
        }
    }

    fn labels(ranked: &[Combination]) -> Vec<&str> {
        ranked.iter().map(|c| c.itinerary_summary.as_str()).collect()
    }

    #[test]
    fn test_highest_savings_first() {
        let ranked = rank_combinations(
            vec![
                combination("small", 1000.0, 49000.0),
                combination("big", 30000.0, 20000.0),
                combination("mid", 14000.0, 36000.0),
            ],
            5,
        );
        assert_eq!(labels(&ranked), vec!["big", "mid", "small"]);
    }

    #[test]
    fn test_ties_prefer_cheaper_then_insertion_order() {
        let ranked = rank_combinations(
            vec![
                combination("pricier", 500.0, 900.0),
                combination("first", 500.0, 800.0),
                combination("second", 500.0, 800.0),
            ],
            5,
        );
        assert_eq!(labels(&ranked), vec!["first", "second", "pricier"]);
    }

    #[test]
    fn test_truncates_to_max_results() {
        let combinations = (0..8)
            .map(|i| combination(&i.to_string(), i as f64, 100.0))
            .collect();
        let ranked = rank_combinations(combinations, 5);
        assert_eq!(labels(&ranked), vec!["7", "6", "5", "4", "3"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(rank_combinations(vec![], 5).is_empty());
    }
}

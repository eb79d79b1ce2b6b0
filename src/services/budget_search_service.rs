//! Budget travel search
//!
//! Takes one snapshot of the catalog per request, then runs enumeration and
//! ranking as pure computation over it. Concurrent searches share nothing
//! but the read-only catalog handle.

use log::{error, info};
use std::collections::HashSet;
use std::sync::Arc;

use crate::config::BudgetSearchConfig;
use crate::models::budget::{
    BudgetPreview, BudgetSearchRequest, BudgetSearchResponse, PackageCandidate,
};
use crate::services::combination_service::{CombinationService, SearchConstraints};
use crate::services::package_catalog::{CatalogError, PackageCatalog};
use crate::services::preview_service::build_preview;
use crate::services::ranking_service::rank_combinations;

#[derive(Debug, thiserror::Error)]
pub enum BudgetSearchError {
    #[error("failed to load packages: {0}")]
    Catalog(#[from] CatalogError),
}

pub struct BudgetSearchService {
    catalog: Arc<dyn PackageCatalog>,
    config: BudgetSearchConfig,
    combinations: CombinationService,
}

impl BudgetSearchService {
    pub fn new(catalog: Arc<dyn PackageCatalog>, config: BudgetSearchConfig) -> Self {
        let combinations = CombinationService::new(&config);
        Self {
            catalog,
            config,
            combinations,
        }
    }

    pub async fn search_budget_combinations(
        &self,
        budget: f64,
        num_persons: u32,
        num_days: u32,
        place: Option<&str>,
    ) -> Result<BudgetSearchResponse, BudgetSearchError> {
        let request = BudgetSearchRequest {
            budget,
            num_persons,
            num_days,
            place: place.map(str::to_string),
        };
        self.search(request).await
    }

    pub async fn search(
        &self,
        request: BudgetSearchRequest,
    ) -> Result<BudgetSearchResponse, BudgetSearchError> {
        let pool = self.load_pool(request.place_filter()).await?;
        let response = self.search_snapshot(request, &pool);

        info!(
            "Budget search: budget={} persons={} days={} place={:?} pool={} found={}",
            response.request.budget,
            response.request.num_persons,
            response.request.num_days,
            response.request.place,
            pool.len(),
            response.total_combinations_found
        );

        Ok(response)
    }

    pub async fn preview_budget_options(&self) -> Result<BudgetPreview, BudgetSearchError> {
        let pool = self.load_pool(None).await?;
        Ok(build_preview(&pool))
    }

    /// Active destination packages, without those owned by transport
    /// providers.
    pub async fn load_pool(
        &self,
        place: Option<&str>,
    ) -> Result<Vec<PackageCandidate>, BudgetSearchError> {
        let (packages, transport_ids) = futures::try_join!(
            self.catalog.list_active_packages(place),
            self.catalog.list_transport_provider_ids()
        )
        .map_err(|e| {
            error!("Failed to load budget search catalog: {}", e);
            e
        })?;

        let transport_ids: HashSet<String> = transport_ids.into_iter().collect();

        Ok(packages
            .into_iter()
            .filter(|package| package.is_active && !transport_ids.contains(&package.agent_id))
            .collect())
    }

    /// Pure search over an already loaded pool.
    pub fn search_snapshot(
        &self,
        request: BudgetSearchRequest,
        pool: &[PackageCandidate],
    ) -> BudgetSearchResponse {
        let constraints = SearchConstraints {
            budget: request.budget,
            num_persons: request.num_persons,
            num_days: request.num_days,
        };

        let found = self.combinations.enumerate(pool, &constraints);
        let combinations = rank_combinations(found, self.config.max_results);
        let message = result_message(&request, pool.is_empty(), combinations.len());

        BudgetSearchResponse {
            total_combinations_found: combinations.len(),
            request,
            combinations,
            message,
        }
    }
}

fn result_message(request: &BudgetSearchRequest, pool_empty: bool, found: usize) -> String {
    if pool_empty {
        return match request.place_filter() {
            Some(place) => format!(
                "No packages available for '{}'. Try a different destination.",
                place
            ),
            None => "No packages available right now.".to_string(),
        };
    }

    if found == 0 {
        return format!(
            "No combinations fit a budget of ₹{:.0} for {} person(s) within {} day(s). \
             Try a higher budget or a longer trip.",
            request.budget, request.num_persons, request.num_days
        );
    }

    format!(
        "Found {} travel combination(s) within your budget of ₹{:.0}",
        found, request.budget
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::services::package_catalog::SnapshotCatalog;

    struct FailingCatalog;

    #[async_trait]
    impl PackageCatalog for FailingCatalog {
        async fn list_active_packages(
            &self,
            _destination: Option<&str>,
        ) -> Result<Vec<PackageCandidate>, CatalogError> {
            Err(CatalogError::Unavailable("connection refused".into()))
        }

        async fn list_transport_provider_ids(&self) -> Result<Vec<String>, CatalogError> {
            Ok(vec![])
        }
    }

    fn candidate(
        id: &str,
        agent_id: &str,
        destination: &str,
        price: f64,
        days: u32,
    ) -> PackageCandidate {
        PackageCandidate {
            id: id.to_string(),
            agent_id: agent_id.to_string(),
            title: id.to_string(),
            destination: destination.to_string(),
            price,
            duration: format!("{} days", days),
            duration_days: days,
            latitude: None,
            longitude: None,
            is_active: true,
        }
    }

    fn goa_service() -> BudgetSearchService {
        let catalog = SnapshotCatalog::new(
            vec![
                candidate("Goa Beach Adventure", "travel-1", "Goa", 10000.0, 3),
                candidate("Goa Heritage Tour", "travel-1", "Goa", 8000.0, 2),
                candidate("Airport Transfer Service", "transport-1", "Goa", 500.0, 1),
                candidate("Jaipur Royal Heritage", "travel-2", "Jaipur", 15000.0, 4),
            ],
            vec!["transport-1".to_string()],
        );
        BudgetSearchService::new(Arc::new(catalog), BudgetSearchConfig::default())
    }

    #[actix_rt::test]
    async fn test_goa_pair_is_found() {
        let response = goa_service()
            .search_budget_combinations(50000.0, 2, 6, Some("goa"))
            .await
            .unwrap();

        let pair = response
            .combinations
            .iter()
            .find(|c| c.packages.len() == 2)
            .expect("pair combination");
        assert_eq!(pair.total_cost, 36000.0);
        assert_eq!(pair.total_days, 5);
        assert_eq!(pair.savings, 14000.0);
        assert!(pair.transport_segments.is_empty());

        assert!(response
            .combinations
            .iter()
            .flat_map(|c| &c.packages)
            .all(|p| p.agent_id != "transport-1"));
        assert_eq!(response.total_combinations_found, response.combinations.len());
        assert!(response.message.starts_with("Found 1"));
    }

    #[actix_rt::test]
    async fn test_low_budget_returns_empty_result() {
        let response = goa_service()
            .search_budget_combinations(1000.0, 2, 5, Some("goa"))
            .await
            .unwrap();

        assert!(response.combinations.is_empty());
        assert_eq!(response.total_combinations_found, 0);
        assert!(response.message.contains("No combinations"));
    }

    #[actix_rt::test]
    async fn test_unknown_place_explains_empty_pool() {
        let response = goa_service()
            .search_budget_combinations(50000.0, 2, 6, Some("atlantis"))
            .await
            .unwrap();

        assert!(response.combinations.is_empty());
        assert!(response.message.contains("atlantis"));
    }

    #[actix_rt::test]
    async fn test_search_is_idempotent() {
        let service = goa_service();
        let first = service.search_budget_combinations(60000.0, 2, 9, None).await.unwrap();
        let second = service.search_budget_combinations(60000.0, 2, 9, None).await.unwrap();

        assert!(!first.combinations.is_empty());
        assert_eq!(first, second);
    }

    #[actix_rt::test]
    async fn test_catalog_failure_is_an_error() {
        let service =
            BudgetSearchService::new(Arc::new(FailingCatalog), BudgetSearchConfig::default());
        let result = service.search_budget_combinations(50000.0, 2, 6, None).await;

        assert!(matches!(result, Err(BudgetSearchError::Catalog(_))));
    }

    #[actix_rt::test]
    async fn test_preview_skips_transport_packages() {
        let preview = goa_service().preview_budget_options().await.unwrap();

        assert_eq!(preview.total_packages, 3);
        assert_eq!(preview.available_destinations, vec!["Goa", "Jaipur"]);
        assert_eq!(preview.price_range.min, 8000.0);
        assert_eq!(preview.price_range.max, 15000.0);
    }
}

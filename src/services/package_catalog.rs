//! Read access to the package and agent collections for the budget search.
//!
//! The search only needs two reads: active packages (optionally narrowed to
//! a destination) and the ids of transport-provider agents. Both are behind
//! [`PackageCatalog`] so the search can run against MongoDB in production and
//! against a fixed snapshot in tests.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    Client, Collection,
};
use std::sync::Arc;

use crate::models::{
    agent::{Agent, AgentType},
    budget::PackageCandidate,
    package::Package,
};

pub const AGENTS_COLLECTION: &str = "agents";
pub const BOOKINGS_COLLECTION: &str = "bookings";
pub const PACKAGES_COLLECTION: &str = "packages";
pub const RIBBONS_COLLECTION: &str = "ribbons";

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait PackageCatalog: Send + Sync {
    /// Active packages whose destination contains `destination`
    /// (case-insensitive), or all active packages when it is `None`.
    async fn list_active_packages(
        &self,
        destination: Option<&str>,
    ) -> Result<Vec<PackageCandidate>, CatalogError>;

    async fn list_transport_provider_ids(&self) -> Result<Vec<String>, CatalogError>;
}

/// Case-insensitive substring match used for the place filter.
pub fn destination_matches(destination: &str, filter: &str) -> bool {
    destination
        .to_lowercase()
        .contains(&filter.trim().to_lowercase())
}

pub struct MongoPackageCatalog {
    client: Arc<Client>,
    db_name: String,
}

impl MongoPackageCatalog {
    pub fn new(client: Arc<Client>, db_name: impl Into<String>) -> Self {
        Self {
            client,
            db_name: db_name.into(),
        }
    }
}

#[async_trait]
impl PackageCatalog for MongoPackageCatalog {
    async fn list_active_packages(
        &self,
        destination: Option<&str>,
    ) -> Result<Vec<PackageCandidate>, CatalogError> {
        let collection: Collection<Package> = self
            .client
            .database(&self.db_name)
            .collection(PACKAGES_COLLECTION);

        let mut filter = doc! { "is_active": true };
        if let Some(destination) = destination {
            filter.insert(
                "destination",
                doc! {
                    "$regex": regex::escape(destination.trim()),
                    "$options": "i"
                },
            );
        }

        let packages: Vec<Package> = collection.find(filter).await?.try_collect().await?;

        Ok(packages.iter().map(PackageCandidate::from).collect())
    }

    async fn list_transport_provider_ids(&self) -> Result<Vec<String>, CatalogError> {
        let collection: Collection<Document> = self
            .client
            .database(&self.db_name)
            .collection(AGENTS_COLLECTION);

        let agents: Vec<Document> = collection
            .find(doc! { "type": AgentType::Transport.as_str() })
            .projection(doc! { "id": 1 })
            .await?
            .try_collect()
            .await?;

        Ok(agents
            .iter()
            .filter_map(|agent| agent.get_str("id").ok().map(str::to_string))
            .collect())
    }
}

/// A fixed, in-memory view of the catalog.
#[derive(Debug, Clone, Default)]
pub struct SnapshotCatalog {
    packages: Vec<PackageCandidate>,
    transport_provider_ids: Vec<String>,
}

impl SnapshotCatalog {
    pub fn new(packages: Vec<PackageCandidate>, transport_provider_ids: Vec<String>) -> Self {
        Self {
            packages,
            transport_provider_ids,
        }
    }

    pub fn from_records(agents: &[Agent], packages: &[Package]) -> Self {
        Self {
            packages: packages.iter().map(PackageCandidate::from).collect(),
            transport_provider_ids: agents
                .iter()
                .filter(|agent| agent.agent_type == AgentType::Transport)
                .map(|agent| agent.id.clone())
                .collect(),
        }
    }
}

#[async_trait]
impl PackageCatalog for SnapshotCatalog {
    async fn list_active_packages(
        &self,
        destination: Option<&str>,
    ) -> Result<Vec<PackageCandidate>, CatalogError> {
        Ok(self
            .packages
            .iter()
            .filter(|package| package.is_active)
            .filter(|package| {
                destination.map_or(true, |filter| {
                    destination_matches(&package.destination, filter)
                })
            })
            .cloned()
            .collect())
    }

    async fn list_transport_provider_ids(&self) -> Result<Vec<String>, CatalogError> {
        Ok(self.transport_provider_ids.clone())
    }
}

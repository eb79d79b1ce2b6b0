use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

use trip_aggregator_api::{
    config::BudgetSearchConfig,
    models::{
        agent::{Agent, AgentType},
        budget::PackageCandidate,
        package::Package,
    },
    routes,
    services::{
        budget_search_service::BudgetSearchService,
        package_catalog::{CatalogError, PackageCatalog, SnapshotCatalog},
        sample_data_service::generate_sample_data,
    },
};

pub struct FailingCatalog;

#[async_trait]
impl PackageCatalog for FailingCatalog {
    async fn list_active_packages(
        &self,
        _destination: Option<&str>,
    ) -> Result<Vec<PackageCandidate>, CatalogError> {
        Err(CatalogError::Unavailable("connection refused".to_string()))
    }

    async fn list_transport_provider_ids(&self) -> Result<Vec<String>, CatalogError> {
        Err(CatalogError::Unavailable("connection refused".to_string()))
    }
}

pub struct TestApp {
    pub catalog: Arc<dyn PackageCatalog>,
}

impl TestApp {
    pub fn with_catalog(catalog: Arc<dyn PackageCatalog>) -> Self {
        Self { catalog }
    }

    /// Two Goa stays and one Goa airport transfer from a transport provider.
    pub fn goa() -> Self {
        let travel = agent("travel-1", AgentType::Travel);
        let transport = agent("transport-1", AgentType::Transport);
        let packages = vec![
            package("goa-beach", &travel, "Goa Beach Adventure", 10000.0, "3 days 2 nights"),
            package("goa-heritage", &travel, "Goa Heritage Tour", 8000.0, "2 days 1 night"),
            package("goa-transfer", &transport, "Airport Transfer Service", 400.0, "1 way trip"),
        ];
        Self::with_catalog(Arc::new(SnapshotCatalog::from_records(
            &[travel, transport],
            &packages,
        )))
    }

    pub fn sample() -> Self {
        let data = generate_sample_data(7);
        Self::with_catalog(Arc::new(SnapshotCatalog::from_records(
            &data.agents,
            &data.packages,
        )))
    }

    pub fn failing() -> Self {
        Self::with_catalog(Arc::new(FailingCatalog))
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let service = BudgetSearchService::new(self.catalog.clone(), BudgetSearchConfig::default());

        App::new()
            .app_data(web::Data::new(service))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .route("/health", web::get().to(|| async { "OK" }))
            .service(
                web::scope("/api")
                    .route("/budget-travel", web::post().to(routes::budget_travel::search))
                    .route(
                        "/budget-travel/preview",
                        web::get().to(routes::budget_travel::preview),
                    ),
            )
    }
}

pub fn agent(id: &str, agent_type: AgentType) -> Agent {
    Agent {
        id: id.to_string(),
        name: id.to_string(),
        agent_type,
        description: String::new(),
        rating: 4.5,
        total_bookings: 10,
        location: "Goa".to_string(),
        contact_phone: "+91-9000000000".to_string(),
        contact_email: format!("{}@example.com", id),
        image_base64: String::new(),
        services_offered: vec![],
        is_subscribed: false,
        is_active: true,
        created_at: Utc::now(),
    }
}

pub fn package(id: &str, owner: &Agent, title: &str, price: f64, duration: &str) -> Package {
    Package {
        id: id.to_string(),
        agent_id: owner.id.clone(),
        title: title.to_string(),
        description: String::new(),
        price,
        duration: duration.to_string(),
        destination: "Goa".to_string(),
        image_base64: String::new(),
        features: vec![],
        duration_days: None,
        latitude: None,
        longitude: None,
        is_sponsored: false,
        original_price: None,
        sponsored_price: None,
        discount_percentage: None,
        is_active: true,
        created_at: Utc::now(),
    }
}

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;
use log::info;

use trip_aggregator_api::{
    config::{AppConfig, BudgetSearchConfig},
    db, routes,
    services::{
        budget_search_service::BudgetSearchService,
        package_catalog::{MongoPackageCatalog, PackageCatalog},
    },
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = AppConfig::from_env().expect("MONGODB_URI must be set");
    let search_config = BudgetSearchConfig::from_env();
    info!("Budget search settings: {:?}", search_config);

    let client = db::mongo::create_mongo_client(&config.mongodb_uri, &config.db_name)
        .await
        .map_err(std::io::Error::other)?;

    let catalog: Arc<dyn PackageCatalog> =
        Arc::new(MongoPackageCatalog::new(client.clone(), config.db_name.clone()));
    let search_service = web::Data::new(BudgetSearchService::new(catalog, search_config));
    let client = web::Data::new(client);
    let app_config = web::Data::new(config.clone());

    info!("Starting HTTP server on {}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .app_data(client.clone())
            .app_data(app_config.clone())
            .app_data(search_service.clone())
            .route("/health", web::get().to(|| async { "OK" }))
            .service(
                web::scope("/api")
                    .route("/health", web::get().to(routes::health::health_check))
                    .route("/agents", web::get().to(routes::agent::get_agents))
                    .route("/agents/{id}", web::get().to(routes::agent::get_agent))
                    .route("/packages", web::get().to(routes::package::get_packages))
                    .route("/packages/{id}", web::get().to(routes::package::get_package))
                    .route("/ribbons", web::get().to(routes::ribbon::get_ribbons))
                    .route("/bookings", web::post().to(routes::booking::create_booking))
                    .route("/bookings", web::get().to(routes::booking::get_bookings))
                    .route("/budget-travel", web::post().to(routes::budget_travel::search))
                    .route(
                        "/budget-travel/preview",
                        web::get().to(routes::budget_travel::preview),
                    )
                    .route("/init-data", web::post().to(routes::sample_data::init_data)),
            )
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

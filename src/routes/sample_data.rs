use actix_web::{web, HttpResponse, Responder};
use bson::doc;
use log::{error, info};
use mongodb::{Client, Collection, Database};
use serde::Serialize;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::models::{agent::Agent, package::Package, ribbon::RibbonContent};
use crate::services::package_catalog::{
    AGENTS_COLLECTION, PACKAGES_COLLECTION, RIBBONS_COLLECTION,
};
use crate::services::sample_data_service::{generate_sample_data, SampleData};

#[derive(serde::Deserialize)]
pub struct InitQuery {
    seed: Option<u64>,
}

#[derive(Serialize)]
struct InitSummary {
    message: String,
    seed: u64,
    agents: usize,
    packages: usize,
    ribbons: usize,
}

/*
    POST /api/init-data?seed=
*/
pub async fn init_data(
    data: web::Data<Arc<Client>>,
    config: web::Data<AppConfig>,
    params: web::Query<InitQuery>,
) -> impl Responder {
    let seed = params.seed.unwrap_or_else(rand::random);
    let sample = generate_sample_data(seed);
    let db = data.database(&config.db_name);

    match replace_all(&db, &sample).await {
        Ok(()) => {
            info!(
                "Sample data initialized (seed {}): {} agents, {} packages, {} ribbons",
                seed,
                sample.agents.len(),
                sample.packages.len(),
                sample.ribbons.len()
            );
            HttpResponse::Ok().json(InitSummary {
                message: "Sample data initialized successfully".to_string(),
                seed,
                agents: sample.agents.len(),
                packages: sample.packages.len(),
                ribbons: sample.ribbons.len(),
            })
        }
        Err(err) => {
            error!("Failed to initialize sample data: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to initialize sample data.")
        }
    }
}

async fn replace_all(db: &Database, sample: &SampleData) -> mongodb::error::Result<()> {
    let agents: Collection<Agent> = db.collection(AGENTS_COLLECTION);
    let packages: Collection<Package> = db.collection(PACKAGES_COLLECTION);
    let ribbons: Collection<RibbonContent> = db.collection(RIBBONS_COLLECTION);

    agents.delete_many(doc! {}).await?;
    packages.delete_many(doc! {}).await?;
    ribbons.delete_many(doc! {}).await?;

    agents.insert_many(&sample.agents).await?;
    packages.insert_many(&sample.packages).await?;
    ribbons.insert_many(&sample.ribbons).await?;

    Ok(())
}

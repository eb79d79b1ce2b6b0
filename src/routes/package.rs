use actix_web::{web, HttpResponse, Responder};
use bson::doc;
use futures::TryStreamExt;
use log::error;
use mongodb::{options::FindOptions, Client, Collection};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::models::package::Package;
use crate::routes::LIST_LIMIT;
use crate::services::package_catalog::PACKAGES_COLLECTION;

#[derive(serde::Deserialize)]
pub struct PackageQuery {
    agent_id: Option<String>,
}

/*
    /api/packages?agent_id=
*/
pub async fn get_packages(
    data: web::Data<Arc<Client>>,
    config: web::Data<AppConfig>,
    params: web::Query<PackageQuery>,
) -> impl Responder {
    let collection: Collection<Package> =
        data.database(&config.db_name).collection(PACKAGES_COLLECTION);

    let mut filter = doc! { "is_active": true };
    if let Some(agent_id) = params.agent_id.as_deref().filter(|id| !id.is_empty()) {
        filter.insert("agent_id", agent_id);
    }

    let options = FindOptions::builder().limit(LIST_LIMIT).build();
    match collection.find(filter).with_options(options).await {
        Ok(cursor) => match cursor.try_collect::<Vec<Package>>().await {
            Ok(packages) => HttpResponse::Ok().json(packages),
            Err(err) => {
                error!("Failed to collect packages: {:?}", err);
                HttpResponse::InternalServerError().body("Failed to collect packages.")
            }
        },
        Err(err) => {
            error!("Failed to find packages: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to find packages.")
        }
    }
}

/*
    /api/packages/{id}
*/
pub async fn get_package(
    data: web::Data<Arc<Client>>,
    config: web::Data<AppConfig>,
    path: web::Path<String>,
) -> impl Responder {
    let collection: Collection<Package> =
        data.database(&config.db_name).collection(PACKAGES_COLLECTION);
    let id = path.into_inner();

    match collection.find_one(doc! { "id": &id }).await {
        Ok(Some(package)) => HttpResponse::Ok().json(package),
        Ok(None) => HttpResponse::NotFound().body("Package not found"),
        Err(err) => {
            error!("Failed to fetch package {}: {:?}", id, err);
            HttpResponse::InternalServerError().body("Failed to fetch package.")
        }
    }
}

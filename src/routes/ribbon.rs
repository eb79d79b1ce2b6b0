use actix_web::{web, HttpResponse, Responder};
use bson::doc;
use futures::TryStreamExt;
use log::error;
use mongodb::{options::FindOptions, Client, Collection};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::models::ribbon::RibbonContent;
use crate::routes::LIST_LIMIT;
use crate::services::package_catalog::RIBBONS_COLLECTION;

/*
    /api/ribbons
*/
pub async fn get_ribbons(
    data: web::Data<Arc<Client>>,
    config: web::Data<AppConfig>,
) -> impl Responder {
    let collection: Collection<RibbonContent> =
        data.database(&config.db_name).collection(RIBBONS_COLLECTION);

    let options = FindOptions::builder()
        .sort(doc! { "order": 1 })
        .limit(LIST_LIMIT)
        .build();

    match collection.find(doc! { "is_active": true }).with_options(options).await {
        Ok(cursor) => match cursor.try_collect::<Vec<RibbonContent>>().await {
            Ok(ribbons) => HttpResponse::Ok().json(ribbons),
            Err(err) => {
                error!("Failed to collect ribbons: {:?}", err);
                HttpResponse::InternalServerError().body("Failed to collect ribbons.")
            }
        },
        Err(err) => {
            error!("Failed to find ribbons: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to find ribbons.")
        }
    }
}

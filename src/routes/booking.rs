use actix_web::{web, HttpResponse, Responder};
use bson::doc;
use chrono::Utc;
use futures::TryStreamExt;
use log::{error, info, warn};
use mongodb::{options::FindOptions, Client, Collection};
use serde::Serialize;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::models::booking::{Booking, BookingRequest};
use crate::models::package::Package;
use crate::routes::LIST_LIMIT;
use crate::services::package_catalog::{BOOKINGS_COLLECTION, PACKAGES_COLLECTION};

#[derive(serde::Deserialize)]
pub struct BookingQuery {
    user_id: Option<String>,
}

#[derive(Serialize)]
struct BookingCreated {
    message: String,
    booking_id: String,
}

/*
    POST /api/bookings
*/
pub async fn create_booking(
    data: web::Data<Arc<Client>>,
    config: web::Data<AppConfig>,
    input: web::Json<BookingRequest>,
) -> impl Responder {
    let request = input.into_inner();
    if let Err(reason) = request.validate() {
        warn!("Rejected booking {:?}: {}", request, reason);
        return HttpResponse::BadRequest().body(reason);
    }

    let db = data.database(&config.db_name);
    let packages: Collection<Package> = db.collection(PACKAGES_COLLECTION);
    let bookings: Collection<Booking> = db.collection(BOOKINGS_COLLECTION);

    let package = match packages.find_one(doc! { "id": request.package_id.trim() }).await {
        Ok(Some(package)) => package,
        Ok(None) => return HttpResponse::NotFound().body("Package not found"),
        Err(err) => {
            error!("Failed to fetch package {}: {:?}", request.package_id, err);
            return HttpResponse::InternalServerError().body("Failed to create booking.");
        }
    };

    let booking = Booking::pending(&request, &package, Utc::now());
    match bookings.insert_one(&booking).await {
        Ok(_) => {
            info!(
                "Booking {} created for user {} on package {}",
                booking.id, booking.user_id, booking.package_id
            );
            HttpResponse::Ok().json(BookingCreated {
                message: "Booking created successfully".to_string(),
                booking_id: booking.id,
            })
        }
        Err(err) => {
            error!("Failed to insert booking: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to create booking.")
        }
    }
}

/*
    GET /api/bookings?user_id=
*/
pub async fn get_bookings(
    data: web::Data<Arc<Client>>,
    config: web::Data<AppConfig>,
    params: web::Query<BookingQuery>,
) -> impl Responder {
    let user_id = match params.user_id.as_deref().map(str::trim) {
        Some(user_id) if !user_id.is_empty() => user_id,
        _ => return HttpResponse::BadRequest().body("user_id is required"),
    };

    let collection: Collection<Booking> =
        data.database(&config.db_name).collection(BOOKINGS_COLLECTION);
    let options = FindOptions::builder().limit(LIST_LIMIT).build();

    match collection
        .find(doc! { "user_id": user_id })
        .with_options(options)
        .await
    {
        Ok(cursor) => match cursor.try_collect::<Vec<Booking>>().await {
            Ok(bookings) => HttpResponse::Ok().json(bookings),
            Err(err) => {
                error!("Failed to collect bookings: {:?}", err);
                HttpResponse::InternalServerError().body("Failed to collect bookings.")
            }
        },
        Err(err) => {
            error!("Failed to find bookings: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to find bookings.")
        }
    }
}

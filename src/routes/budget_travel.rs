use actix_web::{web, HttpResponse, Responder};
use log::{error, warn};

use crate::models::budget::BudgetSearchRequest;
use crate::services::budget_search_service::BudgetSearchService;

pub const SERVICE_UNAVAILABLE: &str = "Budget search service unavailable";

/*
    POST /api/budget-travel
*/
pub async fn search(
    service: web::Data<BudgetSearchService>,
    input: web::Json<BudgetSearchRequest>,
) -> impl Responder {
    let request = input.into_inner();
    if let Err(reason) = request.validate() {
        warn!("Rejected budget search {:?}: {}", request, reason);
        return HttpResponse::BadRequest().body(reason);
    }

    match service.search(request).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) => {
            error!("Budget search failed: {}", err);
            HttpResponse::InternalServerError().body(SERVICE_UNAVAILABLE)
        }
    }
}

/*
    GET /api/budget-travel/preview
*/
pub async fn preview(service: web::Data<BudgetSearchService>) -> impl Responder {
    match service.preview_budget_options().await {
        Ok(preview) => HttpResponse::Ok().json(preview),
        Err(err) => {
            error!("Budget preview failed: {}", err);
            HttpResponse::InternalServerError().body(SERVICE_UNAVAILABLE)
        }
    }
}

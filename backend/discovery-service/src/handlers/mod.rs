//! HTTP handlers for Discovery Service
//!
//! - `GET /discovery` discovery sections for a user location
//! - `GET /health` liveness probe
//!
//! Unknown paths answer 404 and non-GET requests to `/discovery` answer 405.

pub mod discovery;

use actix_web::{web, HttpResponse};

pub use discovery::{accepts_json, get_discovery, DiscoveryQuery};

use crate::error::AppError;
use crate::services::DiscoveryService;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .service(
            web::resource("/discovery")
                .route(web::get().to(get_discovery))
                .default_service(web::to(method_not_allowed)),
        )
        .default_service(web::to(not_found));
}

pub async fn health_check(service: web::Data<DiscoveryService>) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "discovery-service",
        "restaurants": service.catalog().len()
    }))
}

async fn method_not_allowed() -> Result<HttpResponse, AppError> {
    Err(AppError::MethodNotAllowed)
}

async fn not_found() -> Result<HttpResponse, AppError> {
    Err(AppError::NotFound)
}

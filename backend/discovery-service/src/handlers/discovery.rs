use actix_web::{http::header, web, HttpRequest, HttpResponse};
use serde::Deserialize;
use tracing::debug;

use crate::error::{AppError, Result};
use crate::models::Coordinate;
use crate::services::DiscoveryService;

/// Raw `lon`/`lat` query values, validated by hand so that a bad value maps
/// to the same 400 as a missing one.
#[derive(Debug, Deserialize)]
pub struct DiscoveryQuery {
    pub lon: Option<String>,
    pub lat: Option<String>,
}

impl DiscoveryQuery {
    pub fn coordinate(&self) -> Option<Coordinate> {
        let lon = parse_degrees(self.lon.as_deref()?)?;
        let lat = parse_degrees(self.lat.as_deref()?)?;
        Some(Coordinate::new(lon, lat))
    }
}

fn parse_degrees(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Client accepts JSON when `Accept` names `application/json` or `*/*`.
pub fn accepts_json(req: &HttpRequest) -> bool {
    req.headers()
        .get_all(header::ACCEPT)
        .filter_map(|value| value.to_str().ok())
        .any(|value| value.contains("application/json") || value.contains("*/*"))
}

/// GET /discovery?lon=..&lat=..
pub async fn get_discovery(
    req: HttpRequest,
    service: web::Data<DiscoveryService>,
) -> Result<HttpResponse> {
    if !accepts_json(&req) {
        return Err(AppError::NotAcceptable);
    }

    let coordinate = web::Query::<DiscoveryQuery>::from_query(req.query_string())
        .ok()
        .and_then(|query| query.coordinate())
        .ok_or_else(|| AppError::BadRequest("Bad query params".to_string()))?;

    let discovery = service.discover(coordinate);
    debug!(
        lon = coordinate.lon,
        lat = coordinate.lat,
        sections = discovery.sections.len(),
        "Discovery served"
    );

    Ok(HttpResponse::Ok().json(discovery))
}

// src/controllers/health_controller.rs

use actix_web::{get, web, Error, HttpResponse};
use mongodb::bson::doc;
use serde::Serialize;

use crate::state::AppState;

/// Response structure for the health endpoint.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// GET /health
/// Pings the database through the shared handle. Driver errors propagate to
/// the fault boundary, so an unreachable database reports as a plain 500.
#[get("/health")]
pub async fn health(data: web::Data<AppState>) -> Result<HttpResponse, Error> {
    data.db
        .run_command(doc! { "ping": 1 }, None)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok".into(),
    }))
}

// src/routes/health_routes.rs

use actix_web::web;

use crate::controllers::health_controller::health;

/// Initializes the health routes.
pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(health);
}

use actix_web::web;

mod health_routes; // Module for health endpoints

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api").configure(health_routes::init), // Register health routes
    );
}

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use env_logger;

mod config;
mod controllers;
mod db;
mod middleware;
mod routes;
mod state;

use middleware::FaultBoundary;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env file (if exists)
    dotenv().ok();
    env_logger::init();

    // Read configuration; a missing MONGO_URL must abort before anything
    // else starts, with the offending variable named for the operator.
    let config = config::Config::from_env().unwrap_or_else(|e| {
        log::error!("invalid configuration: {}", e);
        std::process::exit(1);
    });

    // Initialize the MongoDB client (lazy, pooled)
    let db_client = db::init_db(&config.mongo_url)
        .await
        .expect("Failed to initialize MongoDB client");

    // Get a handle to the desired database
    let db = db_client.database(&config.db_name);

    // Create the shared application state.
    let app_state = state::AppState { db };

    log::info!(
        "starting server on {}:{} (database: {})",
        config.server_host,
        config.server_port,
        config.db_name
    );

    // Build and run the HTTP server.
    HttpServer::new(move || {
        App::new()
            .wrap(FaultBoundary) // Outermost: catches anything below it
            .wrap(Logger::default()) // Logging middleware
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            ) // CORS setup
            .app_data(web::Data::new(app_state.clone()))
            .configure(routes::init) // Registers your routes from routes/mod.rs
    })
    .bind((config.server_host, config.server_port))?
    .run()
    .await?;

    // Release pooled connections before the process exits.
    db_client.shutdown().await;
    Ok(())
}

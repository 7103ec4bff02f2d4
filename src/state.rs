use mongodb::Database;

/// Shared application state, cloned into each worker. The database handle is
/// pooled internally by the driver and safe for concurrent use.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
}

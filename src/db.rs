use std::time::Duration;

use mongodb::error::Error;
use mongodb::{options::ClientOptions, Client};

// Timeouts and pool sizing applied to every client this process builds.
// The driver retries transient read/write failures on its own; nothing at
// this layer retries or translates driver errors.
const SERVER_SELECTION_TIMEOUT: Duration = Duration::from_millis(30_000);
const CONNECT_TIMEOUT: Duration = Duration::from_millis(30_000);
const MAX_POOL_SIZE: u32 = 50;
const MIN_POOL_SIZE: u32 = 5;
const MAX_IDLE_TIME: Duration = Duration::from_millis(45_000);

/// Builds the pooled MongoDB client. Parsing the connection string does not
/// open any sockets; the driver connects lazily on first use.
pub async fn init_db(uri: &str) -> Result<Client, Error> {
    let client_options = client_options(uri).await?;
    Client::with_options(client_options)
}

pub(crate) async fn client_options(uri: &str) -> Result<ClientOptions, Error> {
    let mut client_options = ClientOptions::parse(uri).await?;
    client_options.app_name = Some("clinic_api".to_string());
    client_options.server_selection_timeout = Some(SERVER_SELECTION_TIMEOUT);
    client_options.connect_timeout = Some(CONNECT_TIMEOUT);
    client_options.max_pool_size = Some(MAX_POOL_SIZE);
    client_options.min_pool_size = Some(MIN_POOL_SIZE);
    client_options.max_idle_time = Some(MAX_IDLE_TIME);
    client_options.retry_writes = Some(true);
    client_options.retry_reads = Some(true);
    Ok(client_options)
}

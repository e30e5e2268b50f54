//! MongoDB connection bootstrap.

use std::time::Duration;

use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};

/// Database used when the connection string does not name one.
pub const FALLBACK_DATABASE: &str = "test";

/// Connects to MongoDB and verifies the server answers a `ping`.
///
/// The driver connects lazily, so the ping is what makes an unreachable server
/// fail at startup instead of on the first request.
///
/// # Errors
///
/// Returns an error if the URI cannot be parsed or the server is unreachable
/// within `timeout`.
pub async fn connect(uri: &str, timeout: Duration) -> Result<Database, mongodb::error::Error> {
    let mut options = ClientOptions::parse(uri).await?;
    options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
    options.connect_timeout = Some(timeout);
    options.server_selection_timeout = Some(timeout);

    let client = Client::with_options(options)?;
    let database = client
        .default_database()
        .unwrap_or_else(|| client.database(FALLBACK_DATABASE));

    database.run_command(doc! { "ping": 1 }).await?;

    Ok(database)
}

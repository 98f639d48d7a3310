//! Core ConnectionManager struct and connection methods.

use mongodb::Client;
use mongodb::bson::doc;
use tokio::runtime::Runtime;

use crate::error::Result;

/// Owns the Tokio runtime the async MongoDB driver needs and exposes
/// blocking facades over it, so callers stay synchronous end to end.
pub struct ConnectionManager {
    /// Tokio runtime for MongoDB async operations
    pub(crate) runtime: Runtime,
}

impl ConnectionManager {
    /// Create a new connection manager
    pub fn new() -> Self {
        let runtime = Runtime::new().expect("Failed to create Tokio runtime");
        Self { runtime }
    }

    /// Connect to MongoDB at `uri` (runs in Tokio runtime)
    pub fn connect(&self, uri: &str) -> Result<Client> {
        let uri = uri.to_string();
        self.runtime.block_on(async {
            let client = Client::with_uri_str(&uri).await?;

            // Ping to verify connection
            client.database("admin").run_command(doc! { "ping": 1 }).await?;

            log::debug!("Connection verified via admin ping");
            Ok(client)
        })
    }

    /// List all collection names in a database (runs in Tokio runtime).
    ///
    /// Names stay in server enumeration order; the listing report depends
    /// on that, so no sorting happens here.
    pub fn list_collection_names(&self, client: &Client, database: &str) -> Result<Vec<String>> {
        let client = client.clone();
        let database = database.to_string();

        self.runtime.block_on(async {
            let db = client.database(&database);
            let names = db.list_collection_names().await?;
            Ok(names)
        })
    }
}

impl Default for ConnectionManager {
    fn default() -> Self {
        Self::new()
    }
}

//! Read-only document operations for MongoDB collections.

use mongodb::Client;
use mongodb::bson::{Document, doc};

use crate::connection::ConnectionManager;
use crate::error::Result;

impl ConnectionManager {
    /// Stream every document of a collection in cursor order (runs in Tokio runtime).
    ///
    /// Issues a single match-all query, optionally capped server-side by
    /// `limit`, and invokes `on_document` for each result until the cursor is
    /// exhausted. Returns the number of documents seen. An error from the
    /// callback aborts the stream and propagates.
    pub fn for_each_document<F>(
        &self,
        client: &Client,
        database: &str,
        collection: &str,
        limit: Option<i64>,
        mut on_document: F,
    ) -> Result<u64>
    where
        F: FnMut(Document) -> Result<()>,
    {
        use futures::TryStreamExt;

        let client = client.clone();
        let database = database.to_string();
        let collection = collection.to_string();

        self.runtime.block_on(async {
            let coll = client.database(&database).collection::<Document>(&collection);

            let mut options = mongodb::options::FindOptions::default();
            options.limit = limit;

            let mut cursor = coll.find(doc! {}).with_options(options).await?;
            let mut count = 0u64;
            while let Some(doc) = cursor.try_next().await? {
                on_document(doc)?;
                count += 1;
            }

            Ok(count)
        })
    }
}

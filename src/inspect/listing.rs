//! The collection listing: every collection name, enumeration order.

use std::io::Write;

use mongodb::Client;

use crate::connection::ConnectionManager;
use crate::error::Result;

/// Header line preceding the collection names.
pub const LISTING_HEADER: &str = "Collections:";

/// Write the collection listing for `database` to `out`.
///
/// One name per line after the header, in the order the server enumerates
/// them, with no filtering or sorting applied. Returns the names written.
pub fn write_collection_listing<W: Write>(
    manager: &ConnectionManager,
    client: &Client,
    database: &str,
    out: &mut W,
) -> Result<Vec<String>> {
    let names = manager.list_collection_names(client, database)?;

    writeln!(out, "{LISTING_HEADER}")?;
    for name in &names {
        writeln!(out, "{name}")?;
    }

    log::debug!("Listed {} collections in {database}", names.len());
    Ok(names)
}

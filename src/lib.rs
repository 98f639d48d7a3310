//! mongopeek: read-only MongoDB inspection.
//!
//! Two reports over a live deployment: a listing of every collection name,
//! and a full dump of the five game collections (TEAM, PLAYER, LOBBY, GAME,
//! USER). Both stream to an `io::Write` sink in one synchronous pass;
//! nothing in this crate ever writes to the database.

pub mod cli;
pub mod connection;
pub mod error;
pub mod inspect;
pub mod render;

pub use connection::ConnectionManager;
pub use error::{Error, Result};

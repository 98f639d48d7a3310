//! The two inspection reports: collection listing and collection dump.
//!
//! Both write their human-readable output to a caller-supplied sink and
//! leave the database untouched; the report text is the whole product.

pub mod dump;
pub mod listing;

pub use dump::{
    DUMP_SECTIONS, DumpOptions, DumpSection, DumpSummary, SEPARATOR, SectionSummary,
    write_database_dump,
};
pub use listing::{LISTING_HEADER, write_collection_listing};

/// Database the inspection commands target unless `--db` overrides it.
pub const DEFAULT_DATABASE: &str = "SoPraFS25";

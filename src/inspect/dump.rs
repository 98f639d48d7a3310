//! The collection dump: five fixed sections streamed to the sink.

use std::io::Write;

use mongodb::Client;

use crate::connection::ConnectionManager;
use crate::error::Result;
use crate::render::{self, RenderOptions};

/// One collection's slot in the dump: the collection name plus the label
/// line printed above its documents.
#[derive(Clone, Copy, Debug)]
pub struct DumpSection {
    pub collection: &'static str,
    pub label: &'static str,
}

/// The five sections, in the fixed order the report runs through them.
/// LOBBY and GAME have no trailing colon in their labels; existing consumers
/// of the dump expect that quirk verbatim.
pub const DUMP_SECTIONS: [DumpSection; 5] = [
    DumpSection { collection: "TEAM", label: "Teams:" },
    DumpSection { collection: "PLAYER", label: "Players:" },
    DumpSection { collection: "LOBBY", label: "Lobbies" },
    DumpSection { collection: "GAME", label: "Games" },
    DumpSection { collection: "USER", label: "Users:" },
];

/// Separator line printed after every section.
pub const SEPARATOR: &str = "----------------------";

/// Options for a dump run.
#[derive(Clone, Copy, Debug, Default)]
pub struct DumpOptions {
    /// Per-collection cap on returned documents; `None` exhausts each cursor.
    pub limit: Option<i64>,
    pub render: RenderOptions,
}

/// Per-section result of a dump run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionSummary {
    pub collection: &'static str,
    pub documents: u64,
}

/// What a dump run produced, section by section in run order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DumpSummary {
    pub sections: Vec<SectionSummary>,
}

impl DumpSummary {
    /// Total documents written across all sections.
    pub fn total_documents(&self) -> u64 {
        self.sections.iter().map(|section| section.documents).sum()
    }
}

/// Write the full collection dump for `database` to `out`.
///
/// Sections run strictly in `DUMP_SECTIONS` order: label line, one rendered
/// document per cursor result, separator line. A missing or empty collection
/// contributes only its label and the separator.
pub fn write_database_dump<W: Write>(
    manager: &ConnectionManager,
    client: &Client,
    database: &str,
    options: DumpOptions,
    out: &mut W,
) -> Result<DumpSummary> {
    let mut summary = DumpSummary::default();

    for section in DUMP_SECTIONS {
        writeln!(out, "{}", section.label)?;

        let documents =
            manager.for_each_document(client, database, section.collection, options.limit, |doc| {
                let line = render::document_text(doc, options.render)?;
                writeln!(out, "{line}")?;
                Ok(())
            })?;

        writeln!(out, "{SEPARATOR}")?;

        log::debug!("Dumped {documents} documents from {database}.{}", section.collection);
        summary.sections.push(SectionSummary { collection: section.collection, documents });
    }

    Ok(summary)
}

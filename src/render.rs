//! Document rendering for the report sink.

use clap::ValueEnum;
use mongodb::bson::{Bson, Document};

use crate::error::Result;

/// Extended JSON output mode
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ExtendedJsonMode {
    #[default]
    Relaxed,
    Canonical,
}

/// How documents turn into report lines.
#[derive(Clone, Copy, Debug, Default)]
pub struct RenderOptions {
    pub mode: ExtendedJsonMode,
    pub pretty: bool,
}

/// Render a document as Extended JSON text.
///
/// Compact output is one line per document; `pretty` switches to the
/// multi-line form.
pub fn document_text(doc: Document, options: RenderOptions) -> Result<String> {
    let value = match options.mode {
        ExtendedJsonMode::Relaxed => Bson::Document(doc).into_relaxed_extjson(),
        ExtendedJsonMode::Canonical => Bson::Document(doc).into_canonical_extjson(),
    };

    let text = if options.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    Ok(text)
}

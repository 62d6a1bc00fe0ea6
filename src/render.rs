//! Page rendering
//!
//! Turns a [`PageState`] into terminal text. The page shows a title and then
//! exactly one presentation: a progress indicator, an error banner, a
//! "no collections" banner, or one section per collection.

use serde::Serialize;
use serde_json::Value;
use tabled::Tabled;

use crate::config::OutputFormat;
use crate::model::{canonical_json, Collection, Record};
use crate::output;
use crate::view::PageState;

pub const PAGE_TITLE: &str = "View Index Data: Collections";
pub const NO_COLLECTIONS: &str = "No collections found.";
pub const NO_RECORDS: &str = "No records in this collection.";
pub const NO_METADATA: &str = "No metadata";
pub const LOADING: &str = "Loading collections...";
pub const COPY_MARKER: &str = "⧉";

/// Number of embedding components shown in the preview column
const EMBEDDING_PREVIEW_LEN: usize = 3;

/// What the content area shows, in priority order
#[derive(Debug, PartialEq)]
pub enum Presentation<'a> {
    Loading,
    Error(&'a str),
    NoCollections,
    Sections(&'a [Collection]),
}

impl<'a> Presentation<'a> {
    pub fn of(state: &'a PageState) -> Self {
        if state.loading {
            Self::Loading
        } else if !state.error.is_empty() {
            Self::Error(&state.error)
        } else if state.collections.is_empty() {
            Self::NoCollections
        } else {
            Self::Sections(&state.collections)
        }
    }
}

/// Which sections are expanded; all are collapsed by default
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Expansion {
    #[default]
    Collapsed,
    All,
    Named(Vec<String>),
}

impl Expansion {
    pub fn from_flags(names: Vec<String>, all: bool) -> Self {
        if all {
            Self::All
        } else if names.is_empty() {
            Self::Collapsed
        } else {
            Self::Named(names)
        }
    }

    pub fn is_expanded(&self, name: &str) -> bool {
        match self {
            Self::Collapsed => false,
            Self::All => true,
            Self::Named(names) => names.iter().any(|n| n == name),
        }
    }
}

/// Rendering knobs for one page
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub format: OutputFormat,
    pub expansion: Expansion,
    pub show_embeddings: bool,
    pub width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            expansion: Expansion::Collapsed,
            show_embeddings: false,
            width: output::DEFAULT_TERMINAL_WIDTH,
        }
    }
}

#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Document")]
    document: String,
    #[tabled(rename = "Metadata")]
    metadata: String,
}

#[derive(Tabled)]
struct RecordRowWithEmbedding {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Document")]
    document: String,
    #[tabled(rename = "Metadata")]
    metadata: String,
    #[tabled(rename = "Embedding")]
    embedding: String,
}

/// `"<name> (<n> records)"`
pub fn section_header(collection: &Collection) -> String {
    format!("{} ({} records)", collection.name, collection.record_count())
}

/// Text form of one metadata value: strings as-is, other scalars via their
/// default text, structured values (and null) as compact JSON
pub fn metadata_value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(_) | Value::Null | Value::Array(_) | Value::Object(_) => {
            canonical_json(value).to_string()
        }
    }
}

/// One `"<key>: <value>"` tag per metadata key, or a single "No metadata" tag
pub fn metadata_tags(record: &Record) -> Vec<String> {
    match &record.metadata {
        Some(metadata) => metadata
            .iter()
            .map(|(key, value)| format!("{}: {}", key, metadata_value_text(value)))
            .collect(),
        None => vec![NO_METADATA.to_string()],
    }
}

/// First components of the embedding followed by an ellipsis, or `N/A`
pub fn embedding_preview(record: &Record) -> String {
    match &record.embedding {
        Some(embedding) => {
            let head: Vec<String> = embedding
                .iter()
                .take(EMBEDDING_PREVIEW_LEN)
                .map(|c| c.to_string())
                .collect();
            format!("[{}...]", head.join(", "))
        }
        None => "N/A".to_string(),
    }
}

/// Identifier followed by its copy action
fn id_cell(record: &Record) -> String {
    if record.id.is_empty() {
        return String::new();
    }
    format!("{}\n{} ixb copy {}", record.id, COPY_MARKER, record.id)
}

fn tag_cell(record: &Record) -> String {
    metadata_tags(record)
        .into_iter()
        .map(|tag| format!("[{}]", tag))
        .collect::<Vec<_>>()
        .join("\n")
}

fn records_table(collection: &Collection, options: &RenderOptions) -> String {
    if options.show_embeddings {
        let rows: Vec<_> = collection
            .records
            .iter()
            .map(|record| RecordRowWithEmbedding {
                id: id_cell(record),
                document: record.document.clone(),
                metadata: tag_cell(record),
                embedding: embedding_preview(record),
            })
            .collect();
        output::table(&rows, options.format, options.width)
    } else {
        let rows: Vec<_> = collection
            .records
            .iter()
            .map(|record| RecordRow {
                id: id_cell(record),
                document: record.document.clone(),
                metadata: tag_cell(record),
            })
            .collect();
        output::table(&rows, options.format, options.width)
    }
}

/// Render one collection section
pub fn render_section(collection: &Collection, options: &RenderOptions) -> String {
    let expanded = options.expansion.is_expanded(&collection.name);
    let marker = if expanded { "▾" } else { "▸" };
    let mut lines = vec![format!(
        "{} {}",
        marker,
        output::section_line(section_header(collection))
    )];

    if expanded {
        if collection.records.is_empty() {
            lines.push(output::info_line(NO_RECORDS));
        } else {
            lines.push(records_table(collection, options));
        }
    }

    lines.join("\n")
}

/// Render the whole page as text
pub fn render_page(state: &PageState, options: &RenderOptions) -> String {
    let mut blocks = vec![output::section_line(PAGE_TITLE)];

    match Presentation::of(state) {
        Presentation::Loading => blocks.push(output::progress_line(LOADING)),
        Presentation::Error(message) => blocks.push(output::error_line(message)),
        Presentation::NoCollections => blocks.push(output::info_line(NO_COLLECTIONS)),
        Presentation::Sections(collections) => {
            for collection in collections {
                blocks.push(render_section(collection, options));
            }
            blocks.push(output::separator_line());
            blocks.push(output::info_line(format!(
                "Total: {} collections. Copy an identifier with: ixb copy <ID>",
                collections.len()
            )));
        }
    }

    blocks.join("\n\n")
}

#[derive(Serialize)]
#[serde(untagged)]
enum JsonPage<'a> {
    Loading { loading: bool },
    Error { error: &'a str },
    Collections { collections: Vec<Collection> },
}

/// Render the page as JSON: the normalized collections, or the error
pub fn render_json(state: &PageState, options: &RenderOptions) -> serde_json::Result<String> {
    let page = match Presentation::of(state) {
        Presentation::Loading => JsonPage::Loading { loading: true },
        Presentation::Error(message) => JsonPage::Error { error: message },
        Presentation::NoCollections => JsonPage::Collections {
            collections: Vec::new(),
        },
        Presentation::Sections(collections) => {
            let mut collections = collections.to_vec();
            if !options.show_embeddings {
                for record in collections.iter_mut().flat_map(|c| c.records.iter_mut()) {
                    record.embedding = None;
                }
            }
            JsonPage::Collections { collections }
        }
    };
    serde_json::to_string_pretty(&page)
}

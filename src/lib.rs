//! Index Browser
//!
//! Read-only browser for the collections held by a vector index backend.
//! One `GET` fetches every collection with its records; the response is
//! normalized into [`model::Collection`]s and rendered as collapsible
//! sections with one table row per record.
//!
//! - [`source`]: the fetch seam and its HTTP implementation
//! - [`model`]: collection/record types and response normalization
//! - [`view`]: page state and the cancellable fetch lifecycle
//! - [`render`]: terminal and JSON rendering of the page
//! - [`clipboard`]: copy action for record identifiers

pub mod clipboard;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod output;
pub mod render;
pub mod source;
pub mod view;

pub use config::{Config, OutputFormat};
pub use error::{BrowserError, BrowserResult};
pub use model::{Collection, Record};
pub use view::{CollectionBrowser, PageState};

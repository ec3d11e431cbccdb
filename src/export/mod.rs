//! Token aggregation and JSON export.

mod document;

pub use document::{
    format_timestamp, write_document, DesignSystem, Metadata, DOCUMENT_DESCRIPTION, DOCUMENT_NAME,
    EXPORT_FILENAME, FORMAT_VERSION,
};

//! The exported design system document.
//!
//! Field order in the structs is the key order of the JSON output.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TokenError};
use crate::scale::{Typography, Variables};
use crate::types::Palette;

/// Document name written to every export.
pub const DOCUMENT_NAME: &str = "Design System";

/// Document description written to every export.
pub const DOCUMENT_DESCRIPTION: &str = "Generated design system for Figma";

/// Version of the export format.
pub const FORMAT_VERSION: &str = "1.0.0";

/// File name used when writing an export to disk.
pub const EXPORT_FILENAME: &str = "figma-design-system.json";

/// A complete set of design tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignSystem {
    pub name: String,
    pub description: String,
    pub colors: Palette,
    pub typography: Typography,
    pub variables: Variables,
    pub metadata: Metadata,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// ISO-8601 UTC timestamp with millisecond precision.
    pub generated_at: String,
    pub version: String,
}

impl DesignSystem {
    /// Assemble a document stamped with `generated_at`.
    pub fn build(
        colors: Palette,
        typography: Typography,
        variables: Variables,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            name: DOCUMENT_NAME.to_string(),
            description: DOCUMENT_DESCRIPTION.to_string(),
            colors,
            typography,
            variables,
            metadata: Metadata {
                generated_at: format_timestamp(generated_at),
                version: FORMAT_VERSION.to_string(),
            },
        }
    }

    /// Assemble a document stamped with the current time.
    pub fn build_now(colors: Palette, typography: Typography, variables: Variables) -> Self {
        Self::build(colors, typography, variables, Utc::now())
    }

    /// Pretty-printed JSON with two-space indentation.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| TokenError::Export {
            message: format!("Failed to serialize design system: {}", e),
            help: None,
        })
    }

    /// Parse a previously exported document.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| TokenError::Parse {
            message: format!("Invalid design system JSON: {}", e),
            help: Some(format!("Expected a {} export", EXPORT_FILENAME)),
        })
    }
}

/// Format a timestamp the way browsers print `Date.toISOString()`.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Write `doc` as `figma-design-system.json` inside `dir`.
///
/// Returns the path written.
pub fn write_document(doc: &DesignSystem, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(EXPORT_FILENAME);
    let json = doc.to_json()?;
    fs::write(&path, json).map_err(|e| TokenError::Io {
        path: path.clone(),
        message: format!("Failed to write design system: {}", e),
    })?;
    Ok(path)
}

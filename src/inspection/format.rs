//! File format detection from extension or an explicit override.

use std::{fmt, path::Path};

/// Supported tabular formats. Unknown override tokens are carried as
/// [`Format::Unsupported`] and rejected only when a reader or writer is
/// actually needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Format {
    Csv,
    Ndjson,
    Parquet,
    Unsupported(String),
}

impl Format {
    /// Parse a format token (`csv`, `tsv`, `ndjson`, `jsonl`, `parquet`, `pq`),
    /// ignoring case.
    pub fn from_token(token: &str) -> Self {
        let token = token.to_lowercase();
        match token.as_str() {
            "csv" | "tsv" => Format::Csv,
            "ndjson" | "jsonl" => Format::Ndjson,
            "parquet" | "pq" => Format::Parquet,
            _ => Format::Unsupported(token),
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Format::Unsupported(_))
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Csv => write!(f, "csv"),
            Format::Ndjson => write!(f, "ndjson"),
            Format::Parquet => write!(f, "parquet"),
            Format::Unsupported(token) => write!(f, "{token}"),
        }
    }
}

/// Lowercased extension of `path`, without the dot.
pub fn extension_token(path: &Path) -> String {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

/// Resolve the format of a source file.
///
/// A non-empty override always wins. Otherwise the extension decides, and
/// anything unrecognized falls back to CSV.
pub fn detect_format(path: &Path, explicit: Option<&str>) -> Format {
    if let Some(token) = explicit.filter(|t| !t.is_empty()) {
        return Format::from_token(token);
    }

    match Format::from_token(&extension_token(path)) {
        Format::Unsupported(_) => Format::Csv,
        format => format,
    }
}

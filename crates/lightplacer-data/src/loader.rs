//! Record loader: reads config files and builds validated entries.
//!
//! Provides path checks, format detection (JSON/RON/TOML), deserialization,
//! and construction of typed entries with file and index context on errors.

use lightplacer_core::entry::Entry;
use lightplacer_core::error::ModelError;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

use crate::resolve::resolve_entry;
use crate::schema::{EntryRecord, TomlEntries};

// ===========================================================================
// Errors
// ===========================================================================

/// Errors that can occur while loading config files.
#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    /// An input path does not exist.
    #[error("path does not exist: {path}")]
    MissingPath { path: PathBuf },

    /// The file has an extension we don't support.
    #[error("unsupported format for file: {file}")]
    UnsupportedFormat { file: PathBuf },

    /// A deserialization error occurred.
    #[error("parse error in {file}: {detail}")]
    Parse { file: PathBuf, detail: String },

    /// A record parsed but violates a model rule.
    #[error("invalid entry {index} in {file}: {source}")]
    InvalidEntry {
        file: PathBuf,
        index: usize,
        source: ModelError,
    },

    /// An I/O error occurred.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// ===========================================================================
// Format detection
// ===========================================================================

/// Supported config file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Ron,
    Toml,
}

/// Detect the format of a file based on its extension.
pub fn detect_format(path: &Path) -> Result<Format, DataLoadError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("ron") => Ok(Format::Ron),
        Some("toml") => Ok(Format::Toml),
        _ => Err(DataLoadError::UnsupportedFormat {
            file: path.to_path_buf(),
        }),
    }
}

// ===========================================================================
// Path checks
// ===========================================================================

/// Fail on the first path that does not exist.
///
/// Run this over every input before reading any of them.
pub fn check_paths<P: AsRef<Path>>(paths: &[P]) -> Result<(), DataLoadError> {
    for path in paths {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DataLoadError::MissingPath {
                path: path.to_path_buf(),
            });
        }
    }
    Ok(())
}

// ===========================================================================
// Deserialization
// ===========================================================================

fn parse_error(path: &Path, e: impl ToString) -> DataLoadError {
    DataLoadError::Parse {
        file: path.to_path_buf(),
        detail: e.to_string(),
    }
}

fn from_content<T: DeserializeOwned>(
    path: &Path,
    format: Format,
    content: &str,
) -> Result<T, DataLoadError> {
    match format {
        Format::Json => serde_json::from_str(content).map_err(|e| parse_error(path, e)),
        Format::Ron => ron::from_str(content).map_err(|e| parse_error(path, e)),
        Format::Toml => toml::from_str(content).map_err(|e| parse_error(path, e)),
    }
}

/// Read the raw entry records of one file.
///
/// JSON and RON files hold a top-level array; TOML files hold the array under
/// an `entries` key.
pub fn read_records(path: &Path) -> Result<Vec<EntryRecord>, DataLoadError> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;

    match format {
        Format::Toml => {
            let wrapper: TomlEntries = from_content(path, format, &content)?;
            Ok(wrapper.entries)
        }
        _ => from_content(path, format, &content),
    }
}

// ===========================================================================
// Loading
// ===========================================================================

/// Build validated entries from one file's records, in file order.
pub fn entries_from_records(
    path: &Path,
    records: Vec<EntryRecord>,
) -> Result<Vec<Entry>, DataLoadError> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            resolve_entry(record).map_err(|source| DataLoadError::InvalidEntry {
                file: path.to_path_buf(),
                index,
                source,
            })
        })
        .collect()
}

/// Load every entry of one file.
pub fn load_file(path: &Path) -> Result<Vec<Entry>, DataLoadError> {
    let records = read_records(path)?;
    let entries = entries_from_records(path, records)?;
    tracing::info!(file = %path.display(), entries = entries.len(), "loaded light placer file");
    Ok(entries)
}

/// Load all files in priority order (earlier files win conflicts).
///
/// Every path is checked for existence before any file is read.
pub fn load_all<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<Entry>, DataLoadError> {
    check_paths(paths)?;

    let mut entries = Vec::new();
    for path in paths {
        entries.extend(load_file(path.as_ref())?);
    }
    Ok(entries)
}

// ===========================================================================
// Tests
// ===========================================================================

//! Catalog table I/O and schema normalization
//!
//! The catalog is a CSV with a fixed 13-column schema. Input files may
//! carry extra columns (dropped at read time) or miss some of the fixed
//! ones (filled with empty strings); output always has exactly the fixed
//! columns, in declaration order.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// One row of the mods catalog. Field order here is the output column
/// order. `compatibility_flag` stays an `Option` so "absent" survives the
/// round trip as an empty cell and is distinguishable from any set value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ModRecord {
    #[serde(rename = "mod name", default)]
    pub mod_name: String,
    #[serde(default)]
    pub mc_version: String,
    #[serde(default)]
    pub latest_version_available: String,
    #[serde(default)]
    pub compatibility_flag: Option<String>,
    #[serde(rename = "mod version number", default)]
    pub mod_version_number: String,
    #[serde(default)]
    pub author: String,
    #[serde(rename = "project id", default)]
    pub project_id: String,
    #[serde(rename = "file id", default)]
    pub file_id: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub loader: String,
    #[serde(default)]
    pub dependencies: String,
    #[serde(default)]
    pub required: String,
}

/// Treat blank cells and pandas-style placeholders ("nan", "none") as
/// absent values.
pub fn normalized(field: &str) -> Option<&str> {
    let trimmed = field.trim();
    if trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("nan")
        || trimmed.eq_ignore_ascii_case("none")
    {
        None
    } else {
        Some(trimmed)
    }
}

/// Reads the input catalog. Unreadable or malformed input is fatal to
/// the run.
pub fn read_catalog(path: &Path) -> anyhow::Result<Vec<ModRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("failed to open input catalog {}", path.display()))?;

    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: ModRecord =
            row.with_context(|| format!("malformed row in {}", path.display()))?;
        records.push(record);
    }
    Ok(records)
}

/// Writes the full catalog once, in the fixed column order.
pub fn write_catalog(path: &Path, records: &[ModRecord]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create output catalog {}", path.display()))?;

    for record in records {
        writer
            .serialize(record)
            .with_context(|| format!("failed to write row to {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("failed to flush {}", path.display()))?;
    Ok(())
}

use std::collections::BTreeMap;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

use super::guidelines::{GuidelineTable, GuidelineTables, TABULATED_SIZES};
use super::region::Region;

/// Failure to build guideline tables from their tabular source.
#[derive(Debug, thiserror::Error)]
pub enum GuidelineLoadError {
    #[error("failed to read guideline table {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid guideline CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("guideline amount '{value}' is not a whole dollar figure")]
    InvalidAmount { value: String },
    #[error("guideline table has no entry for a household of {size}")]
    MissingSize { size: usize },
    #[error("guideline table lists a household of {size} more than once")]
    DuplicateSize { size: usize },
    #[error("guideline table lists an unsupported household size {size}")]
    UnexpectedSize { size: usize },
    #[error("guideline amount for a household of {size} is zero")]
    ZeroAmount { size: usize },
}

#[derive(Debug, Deserialize)]
struct GuidelineRow {
    #[serde(rename = "PERSONS IN FAMILY/HOUSEHOLD")]
    persons: String,
    #[serde(rename = "POVERT GUIDLINES($)")]
    amount: String,
}

/// Parse one region's table in the layout produced by the guideline scraper.
///
/// Rows whose size column is not a household size in `1..=8` (headings, footnotes) are skipped.
pub fn load_region_csv<R: Read>(
    reader: R,
    increment: u64,
) -> Result<GuidelineTable, GuidelineLoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut amounts = BTreeMap::new();

    for row in csv_reader.deserialize::<GuidelineRow>() {
        let row = row?;
        let size = match row.persons.parse::<usize>() {
            Ok(size) if (1..=TABULATED_SIZES).contains(&size) => size,
            _ => {
                debug!(persons = %row.persons, "skipping non-tabulated guideline row");
                continue;
            }
        };

        let amount = parse_amount(&row.amount)?;
        if amounts.insert(size, amount).is_some() {
            return Err(GuidelineLoadError::DuplicateSize { size });
        }
    }

    GuidelineTable::new(amounts, increment)
}

fn parse_amount(raw: &str) -> Result<u64, GuidelineLoadError> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, '$' | ',') && !c.is_whitespace())
        .collect();
    cleaned
        .parse::<u64>()
        .map_err(|_| GuidelineLoadError::InvalidAmount {
            value: raw.to_string(),
        })
}

impl GuidelineTables {
    /// Load `Others.csv`, `Alaska.csv`, and `Hawaii.csv` from `dir`.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self, GuidelineLoadError> {
        let dir = dir.as_ref();
        let load = |region: Region| -> Result<GuidelineTable, GuidelineLoadError> {
            let path = dir.join(region.table_file_name());
            let file = std::fs::File::open(&path).map_err(|source| GuidelineLoadError::Io {
                path: path.clone(),
                source,
            })?;
            load_region_csv(file, region.additional_person_increment())
        };

        let tables = Self::new(
            load(Region::Standard)?,
            load(Region::Alaska)?,
            load(Region::Hawaii)?,
        );
        info!(dir = %dir.display(), "loaded poverty guideline tables");
        Ok(tables)
    }
}

//! JSON persistence for datasets and classification schemes.
//!
//! The engine itself never touches the filesystem; this crate is the
//! dataset-provider and scheme-provider edge. Writes land on a `.tmp`
//! sibling first and are renamed into place, so readers never observe a
//! half-written file.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use fisc_agg::{AggError, Result};
use fisc_domain::{ClassificationScheme, Dataset, LedgerRow};
use serde::{Deserialize, Serialize};

const TMP_SUFFIX: &str = "tmp";

/// On-disk form of a dataset: the fiscal year plus its rows, no identity.
///
/// Identity and load timestamp are minted at load, so every load yields a
/// distinct dataset as far as the aggregation cache is concerned.
#[derive(Debug, Serialize, Deserialize)]
struct DatasetFile {
    exercice: u16,
    rows: Vec<LedgerRow>,
}

/// Loads the rows for one fiscal year, minting a fresh dataset identity.
pub fn load_dataset_from_path(path: &Path) -> Result<Dataset> {
    let data = fs::read_to_string(path)?;
    let file: DatasetFile =
        serde_json::from_str(&data).map_err(|err| AggError::Serde(err.to_string()))?;
    Ok(Dataset::new(file.exercice, file.rows))
}

/// Saves a dataset's year and rows; identity is never persisted.
pub fn save_dataset_to_path(dataset: &Dataset, path: &Path) -> Result<()> {
    let file = DatasetFile {
        exercice: dataset.exercice,
        rows: dataset.rows.clone(),
    };
    let data =
        serde_json::to_string_pretty(&file).map_err(|err| AggError::Serde(err.to_string()))?;
    write_then_rename(path, &data)
}

/// Loads a declarative classification scheme.
pub fn load_scheme_from_path(path: &Path) -> Result<ClassificationScheme> {
    let data = fs::read_to_string(path)?;
    serde_json::from_str(&data).map_err(|err| AggError::Serde(err.to_string()))
}

/// Saves a classification scheme.
pub fn save_scheme_to_path(scheme: &ClassificationScheme, path: &Path) -> Result<()> {
    let data =
        serde_json::to_string_pretty(scheme).map_err(|err| AggError::Serde(err.to_string()))?;
    write_then_rename(path, &data)
}

fn write_then_rename(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp = tmp_path(path);
    let mut file = File::create(&tmp)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    fs::rename(&tmp, path)?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

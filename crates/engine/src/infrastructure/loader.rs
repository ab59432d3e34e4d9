//! Trait data loader.
//!
//! Reads trait/ability records from JSON files. A file holds either a single
//! record or an array of records:
//!
//! ```json
//! [{ "name": "Guardian", "desc": "...", "effects": [ ... ] }]
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;

use traitscribe_domain::TraitDescription;

/// Errors that can occur while loading trait data.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Data file not found: {0}")]
    DataFileNotFound(PathBuf),
    #[error("No trait records in {0}")]
    Empty(PathBuf),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TraitFile {
    Many(Vec<TraitDescription>),
    One(TraitDescription),
}

impl From<TraitFile> for Vec<TraitDescription> {
    fn from(file: TraitFile) -> Self {
        match file {
            TraitFile::Many(records) => records,
            TraitFile::One(record) => vec![record],
        }
    }
}

/// Loader for trait data files.
pub struct TraitLoader;

impl TraitLoader {
    /// Load every trait record in the JSON file at `path`.
    pub async fn load(path: impl AsRef<Path>) -> Result<Vec<TraitDescription>, LoadError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(LoadError::DataFileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path).await?;
        let records = Self::parse(&content)?;
        if records.is_empty() {
            return Err(LoadError::Empty(path.to_path_buf()));
        }

        tracing::debug!(path = %path.display(), count = records.len(), "Loaded trait records");
        Ok(records)
    }

    /// Parse trait records from JSON text.
    pub fn parse(json: &str) -> Result<Vec<TraitDescription>, LoadError> {
        let file: TraitFile = serde_json::from_str(json)?;
        Ok(file.into())
    }
}

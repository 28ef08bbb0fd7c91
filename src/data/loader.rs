use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use super::Catalog;

/// Failure to obtain a usable content catalog.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid catalog: {0}")]
    Invalid(String),
}

/// Read, parse and validate a catalog file.
pub fn load_catalog_from_json<P: AsRef<Path>>(path: P) -> Result<Catalog, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let catalog = parse_catalog(&json_content, &path.display().to_string())?;
    info!(
        path = %path.display(),
        subjects = catalog.subjects().len(),
        topics = catalog.topics().len(),
        questions = catalog.questions().len(),
        "loaded catalog"
    );
    Ok(catalog)
}

pub(super) fn parse_catalog(json: &str, origin: &str) -> Result<Catalog, LoadError> {
    let catalog: Catalog = serde_json::from_str(json).map_err(|source| LoadError::Parse {
        origin: origin.to_string(),
        source,
    })?;
    catalog.validate()?;
    Ok(catalog)
}

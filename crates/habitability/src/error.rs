use std::path::PathBuf;

use thiserror::Error;
use units::QuantityError;

use crate::catalog::CatalogError;

#[derive(Debug, Error)]
pub enum HabitabilityError {
    #[error(transparent)]
    InvalidInput(#[from] QuantityError),

    #[error("catalog query failed: {0}")]
    Catalog(#[from] CatalogError),

    #[error("unknown {kind} preset `{name}`")]
    UnknownPreset { kind: &'static str, name: String },

    #[error("could not read config {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("physical constants were already initialized")]
    ConstantsAlreadySet,
}

pub type Result<T> = std::result::Result<T, HabitabilityError>;

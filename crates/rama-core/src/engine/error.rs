use thiserror::Error;

use super::config::ConfigError;
use crate::core::models::chain::ChainError;
use crate::core::utils::geometry::GeometryError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Malformed backbone input: {0}")]
    MalformedInput(#[from] ChainError),

    #[error("Chain has {residues} residue(s); at least 3 are required to define an interior residue")]
    InsufficientResidues { residues: usize },

    #[error("Geometry failure at residue {index} ({residue_name}): {source}")]
    Geometry {
        index: usize,
        residue_name: String,
        #[source]
        source: GeometryError,
    },

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Chain '{label}' failed: {source}")]
    Chain {
        label: String,
        #[source]
        source: Box<EngineError>,
    },
}

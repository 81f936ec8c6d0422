use ramapp::core::io::fasta::SelectionError;
use ramapp::core::io::pdb::PdbError;
use ramapp::core::io::table::TableError;
use ramapp::engine::error::EngineError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    RamaCore(#[from] EngineError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Cache error: {0}")]
    Cache(String),

    #[error("Failed to parse file '{path}': {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("Chain selection failed: {0}")]
    Selection(#[from] SelectionError),

    #[error("PDB parsing failed: {0}")]
    Pdb(#[from] PdbError),

    #[error("Table error: {0}")]
    Table(#[from] TableError),

    #[error("Failed to render plot '{path}': {source}", path = path.display())]
    Plot {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

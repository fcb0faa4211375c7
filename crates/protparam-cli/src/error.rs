use crate::rcsb::FetchError;
use crate::utils::fasta::FastaError;
use protparam::engine::error::AnalysisError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse file '{path}': {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("Sequence is too short: {length} residue(s), at least {min_length} required")]
    SequenceTooShort { length: usize, min_length: usize },

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Fasta(#[from] FastaError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

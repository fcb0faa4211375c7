use thiserror::Error;

use super::config::ConfigError;
use crate::core::pka::PkaScaleError;
use crate::core::sequence::SequenceError;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Empty sequence: no standard amino-acid residues remain after cleaning the input")]
    EmptySequence,

    #[error("Invalid input format: {0}")]
    InvalidInputFormat(String),

    #[error("Invalid analysis configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to load pKa scale: {source}")]
    PkaScale {
        #[from]
        source: PkaScaleError,
    },
}

impl From<SequenceError> for AnalysisError {
    fn from(e: SequenceError) -> Self {
        match e {
            SequenceError::Empty => AnalysisError::EmptySequence,
        }
    }
}

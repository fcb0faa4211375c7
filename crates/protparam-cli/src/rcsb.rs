use crate::error::Result;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

const RCSB_FASTA_URL: &str = "https://www.rcsb.org/fasta/entry";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("Invalid PDB ID '{0}': expected exactly 4 letters or digits (e.g., 1CRN)")]
    InvalidId(String),
    #[error("No sequence found in the FASTA returned for {0}")]
    NoSequence(String),
}

/// Validates a PDB identifier and returns it upper-cased.
pub fn validate_pdb_id(id: &str) -> std::result::Result<String, FetchError> {
    let id = id.trim();
    if id.len() == 4 && id.chars().all(|c| c.is_ascii_alphanumeric()) {
        Ok(id.to_ascii_uppercase())
    } else {
        Err(FetchError::InvalidId(id.to_string()))
    }
}

pub fn fasta_url(pdb_id: &str) -> String {
    format!("{}/{}/download", RCSB_FASTA_URL, pdb_id)
}

/// Concatenates the chain sequences of an RCSB FASTA download.
///
/// The first line and every line containing `|` are headers. RCSB headers
/// always contain `|`, so all chains of the entry end up in one sequence.
pub fn extract_sequence(fasta_text: &str) -> String {
    fasta_text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .skip(1)
        .filter(|line| !line.contains('|'))
        .collect()
}

/// Downloads the FASTA for `pdb_id` and returns the residue text.
pub async fn fetch_sequence(pdb_id: &str, timeout: Duration) -> Result<String> {
    let pdb_id = validate_pdb_id(pdb_id)?;
    let url = fasta_url(&pdb_id);

    info!("Sending request to {}", url);
    let client = reqwest::Client::builder().timeout(timeout).build()?;
    let body = client
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    debug!("Received {} bytes for {}", body.len(), pdb_id);

    let sequence = extract_sequence(&body);
    if sequence.is_empty() {
        return Err(FetchError::NoSequence(pdb_id).into());
    }
    Ok(sequence)
}

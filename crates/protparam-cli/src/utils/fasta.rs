use protparam::workflows::batch::SequenceRecord;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FastaError {
    #[error("No FASTA records found in input")]
    NoRecords,
    #[error("Line {line}: sequence data found before the first '>' header")]
    DataBeforeHeader { line: usize },
}

/// Splits multi-record FASTA text into records.
///
/// The record id is the first word of the header. Lines starting with `;`
/// are comments. A record with no sequence lines is kept; analyzing it
/// reports an empty sequence for that record alone.
pub fn parse_records(text: &str) -> Result<Vec<SequenceRecord>, FastaError> {
    let mut records = Vec::new();
    let mut current: Option<SequenceRecord> = None;

    for (idx, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with(';') {
            continue;
        }

        if let Some(header) = line.strip_prefix('>') {
            if let Some(done) = current.take() {
                records.push(done);
            }
            let id = header
                .split_whitespace()
                .next()
                .map(str::to_string)
                .unwrap_or_else(|| format!("record_{}", records.len() + 1));
            current = Some(SequenceRecord::new(id, String::new()));
        } else {
            match current.as_mut() {
                Some(record) => record.text.push_str(line),
                None => return Err(FastaError::DataBeforeHeader { line: idx + 1 }),
            }
        }
    }

    if let Some(done) = current {
        records.push(done);
    }
    if records.is_empty() {
        return Err(FastaError::NoRecords);
    }
    Ok(records)
}

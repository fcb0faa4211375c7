use super::amino_acid::AminoAcid;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use thiserror::Error;
use tracing::trace;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SequenceError {
    #[error("No standard amino-acid residues remain after cleaning the input")]
    Empty,
}

/// How the first line of the input text is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderHandling {
    /// A leading line starting with `>` is a FASTA header and is discarded.
    #[default]
    DetectFasta,
    /// The text is residue content only; no line is treated as a header.
    None,
}

/// A validated, non-empty chain of standard amino acids.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sequence {
    residues: Vec<AminoAcid>,
}

impl Sequence {
    pub fn residues(&self) -> &[AminoAcid] {
        &self.residues
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    /// Always `false`; a `Sequence` cannot be constructed empty.
    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    pub fn first(&self) -> AminoAcid {
        self.residues[0]
    }

    pub fn last(&self) -> AminoAcid {
        self.residues[self.residues.len() - 1]
    }

    pub fn iter(&self) -> impl Iterator<Item = AminoAcid> + '_ {
        self.residues.iter().copied()
    }
}

impl TryFrom<Vec<AminoAcid>> for Sequence {
    type Error = SequenceError;

    fn try_from(residues: Vec<AminoAcid>) -> Result<Self, Self::Error> {
        if residues.is_empty() {
            return Err(SequenceError::Empty);
        }
        Ok(Self { residues })
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for aa in &self.residues {
            write!(f, "{}", aa.code())?;
        }
        Ok(())
    }
}

/// Letters removed during normalization because they are not one of the 20
/// standard amino acids (e.g. `X`, `B`, `U`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DroppedCharacterReport {
    /// Number of letter occurrences removed.
    pub count: usize,
    /// Distinct removed letters, upper-cased and sorted.
    pub characters: BTreeSet<char>,
}

impl DroppedCharacterReport {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    fn record(&mut self, c: char) {
        self.count += 1;
        self.characters.insert(c);
    }
}

impl fmt::Display for DroppedCharacterReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let chars: Vec<String> = self.characters.iter().map(|c| c.to_string()).collect();
        write!(
            f,
            "removed {} non-standard amino-acid character(s): {}",
            self.count,
            chars.join(", ")
        )
    }
}

/// Strips a leading FASTA header line, if present, and joins the remaining
/// lines.
fn residue_text(raw: &str, headers: HeaderHandling) -> String {
    let trimmed = raw.trim();
    match headers {
        HeaderHandling::DetectFasta if trimmed.starts_with('>') => {
            trimmed.lines().skip(1).collect()
        }
        _ => trimmed.to_string(),
    }
}

/// Turns arbitrary text into a [`Sequence`].
///
/// Non-alphabetic characters (digits, whitespace, punctuation, gap and stop
/// symbols) are discarded silently. Letters are upper-cased; those outside the
/// standard alphabet are dropped and listed in the returned
/// [`DroppedCharacterReport`]. This function never panics, whatever the input.
///
/// # Errors
///
/// Returns [`SequenceError::Empty`] when no residue survives cleaning.
pub fn normalize(
    raw: &str,
    headers: HeaderHandling,
) -> Result<(Sequence, DroppedCharacterReport), SequenceError> {
    let text = residue_text(raw, headers);
    let mut residues = Vec::with_capacity(text.len());
    let mut dropped = DroppedCharacterReport::default();

    for c in text.chars().filter(|c| c.is_alphabetic()) {
        for upper in c.to_uppercase() {
            match AminoAcid::from_code(upper) {
                Some(aa) => residues.push(aa),
                None => dropped.record(upper),
            }
        }
    }

    trace!(
        residues = residues.len(),
        dropped = dropped.count,
        "Normalized input sequence."
    );

    let sequence = Sequence::try_from(residues)?;
    Ok((sequence, dropped))
}

use phf::{Map, phf_map};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the 20 standard proteinogenic amino acids.
///
/// Variants are declared in alphabetical order of their one-letter code, so the
/// discriminant doubles as an index into the dense per-residue tables in
/// [`crate::core::tables`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(into = "char", try_from = "char")]
pub enum AminoAcid {
    Alanine,       // A (ALA)
    Cysteine,      // C (CYS)
    AsparticAcid,  // D (ASP)
    GlutamicAcid,  // E (GLU)
    Phenylalanine, // F (PHE)
    Glycine,       // G (GLY)
    Histidine,     // H (HIS)
    Isoleucine,    // I (ILE)
    Lysine,        // K (LYS)
    Leucine,       // L (LEU)
    Methionine,    // M (MET)
    Asparagine,    // N (ASN)
    Proline,       // P (PRO)
    Glutamine,     // Q (GLN)
    Arginine,      // R (ARG)
    Serine,        // S (SER)
    Threonine,     // T (THR)
    Valine,        // V (VAL)
    Tryptophan,    // W (TRP)
    Tyrosine,      // Y (TYR)
}

/// Sign of the charge an ionizable side chain carries when protonation favours it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChargeSign {
    /// Basic group, `+1` when protonated.
    Positive,
    /// Acidic group, `-1` when deprotonated.
    Negative,
}

static ONE_LETTER_CODES: Map<char, AminoAcid> = phf_map! {
    'A' => AminoAcid::Alanine,
    'C' => AminoAcid::Cysteine,
    'D' => AminoAcid::AsparticAcid,
    'E' => AminoAcid::GlutamicAcid,
    'F' => AminoAcid::Phenylalanine,
    'G' => AminoAcid::Glycine,
    'H' => AminoAcid::Histidine,
    'I' => AminoAcid::Isoleucine,
    'K' => AminoAcid::Lysine,
    'L' => AminoAcid::Leucine,
    'M' => AminoAcid::Methionine,
    'N' => AminoAcid::Asparagine,
    'P' => AminoAcid::Proline,
    'Q' => AminoAcid::Glutamine,
    'R' => AminoAcid::Arginine,
    'S' => AminoAcid::Serine,
    'T' => AminoAcid::Threonine,
    'V' => AminoAcid::Valine,
    'W' => AminoAcid::Tryptophan,
    'Y' => AminoAcid::Tyrosine,
};

static THREE_LETTER_CODES: Map<&'static str, AminoAcid> = phf_map! {
    "ALA" => AminoAcid::Alanine,
    "CYS" => AminoAcid::Cysteine,
    "ASP" => AminoAcid::AsparticAcid,
    "GLU" => AminoAcid::GlutamicAcid,
    "PHE" => AminoAcid::Phenylalanine,
    "GLY" => AminoAcid::Glycine,
    "HIS" => AminoAcid::Histidine,
    "ILE" => AminoAcid::Isoleucine,
    "LYS" => AminoAcid::Lysine,
    "LEU" => AminoAcid::Leucine,
    "MET" => AminoAcid::Methionine,
    "ASN" => AminoAcid::Asparagine,
    "PRO" => AminoAcid::Proline,
    "GLN" => AminoAcid::Glutamine,
    "ARG" => AminoAcid::Arginine,
    "SER" => AminoAcid::Serine,
    "THR" => AminoAcid::Threonine,
    "VAL" => AminoAcid::Valine,
    "TRP" => AminoAcid::Tryptophan,
    "TYR" => AminoAcid::Tyrosine,
};

impl AminoAcid {
    /// Number of standard amino acids.
    pub const COUNT: usize = 20;

    /// All standard amino acids, in one-letter-code order.
    pub const ALL: [AminoAcid; Self::COUNT] = [
        AminoAcid::Alanine,
        AminoAcid::Cysteine,
        AminoAcid::AsparticAcid,
        AminoAcid::GlutamicAcid,
        AminoAcid::Phenylalanine,
        AminoAcid::Glycine,
        AminoAcid::Histidine,
        AminoAcid::Isoleucine,
        AminoAcid::Lysine,
        AminoAcid::Leucine,
        AminoAcid::Methionine,
        AminoAcid::Asparagine,
        AminoAcid::Proline,
        AminoAcid::Glutamine,
        AminoAcid::Arginine,
        AminoAcid::Serine,
        AminoAcid::Threonine,
        AminoAcid::Valine,
        AminoAcid::Tryptophan,
        AminoAcid::Tyrosine,
    ];

    /// Looks up an amino acid by its upper-case one-letter code.
    ///
    /// Lower-case letters are not accepted here; callers normalize first.
    pub fn from_code(code: char) -> Option<Self> {
        ONE_LETTER_CODES.get(&code).copied()
    }

    /// Position of this residue in [`AminoAcid::ALL`] and the dense tables.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn code(self) -> char {
        match self {
            AminoAcid::Alanine => 'A',
            AminoAcid::Cysteine => 'C',
            AminoAcid::AsparticAcid => 'D',
            AminoAcid::GlutamicAcid => 'E',
            AminoAcid::Phenylalanine => 'F',
            AminoAcid::Glycine => 'G',
            AminoAcid::Histidine => 'H',
            AminoAcid::Isoleucine => 'I',
            AminoAcid::Lysine => 'K',
            AminoAcid::Leucine => 'L',
            AminoAcid::Methionine => 'M',
            AminoAcid::Asparagine => 'N',
            AminoAcid::Proline => 'P',
            AminoAcid::Glutamine => 'Q',
            AminoAcid::Arginine => 'R',
            AminoAcid::Serine => 'S',
            AminoAcid::Threonine => 'T',
            AminoAcid::Valine => 'V',
            AminoAcid::Tryptophan => 'W',
            AminoAcid::Tyrosine => 'Y',
        }
    }

    pub fn three_letter_code(self) -> &'static str {
        match self {
            AminoAcid::Alanine => "ALA",
            AminoAcid::Cysteine => "CYS",
            AminoAcid::AsparticAcid => "ASP",
            AminoAcid::GlutamicAcid => "GLU",
            AminoAcid::Phenylalanine => "PHE",
            AminoAcid::Glycine => "GLY",
            AminoAcid::Histidine => "HIS",
            AminoAcid::Isoleucine => "ILE",
            AminoAcid::Lysine => "LYS",
            AminoAcid::Leucine => "LEU",
            AminoAcid::Methionine => "MET",
            AminoAcid::Asparagine => "ASN",
            AminoAcid::Proline => "PRO",
            AminoAcid::Glutamine => "GLN",
            AminoAcid::Arginine => "ARG",
            AminoAcid::Serine => "SER",
            AminoAcid::Threonine => "THR",
            AminoAcid::Valine => "VAL",
            AminoAcid::Tryptophan => "TRP",
            AminoAcid::Tyrosine => "TYR",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AminoAcid::Alanine => "Alanine",
            AminoAcid::Cysteine => "Cysteine",
            AminoAcid::AsparticAcid => "Aspartic acid",
            AminoAcid::GlutamicAcid => "Glutamic acid",
            AminoAcid::Phenylalanine => "Phenylalanine",
            AminoAcid::Glycine => "Glycine",
            AminoAcid::Histidine => "Histidine",
            AminoAcid::Isoleucine => "Isoleucine",
            AminoAcid::Lysine => "Lysine",
            AminoAcid::Leucine => "Leucine",
            AminoAcid::Methionine => "Methionine",
            AminoAcid::Asparagine => "Asparagine",
            AminoAcid::Proline => "Proline",
            AminoAcid::Glutamine => "Glutamine",
            AminoAcid::Arginine => "Arginine",
            AminoAcid::Serine => "Serine",
            AminoAcid::Threonine => "Threonine",
            AminoAcid::Valine => "Valine",
            AminoAcid::Tryptophan => "Tryptophan",
            AminoAcid::Tyrosine => "Tyrosine",
        }
    }

    /// Charge class of the side chain, or `None` when it does not titrate in
    /// the pH range used for isoelectric point estimation.
    pub fn side_chain_charge(self) -> Option<ChargeSign> {
        match self {
            AminoAcid::Lysine | AminoAcid::Arginine | AminoAcid::Histidine => {
                Some(ChargeSign::Positive)
            }
            AminoAcid::AsparticAcid
            | AminoAcid::GlutamicAcid
            | AminoAcid::Cysteine
            | AminoAcid::Tyrosine => Some(ChargeSign::Negative),
            _ => None,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown amino acid code '{0}'")]
pub struct ParseAminoAcidError(pub String);

impl FromStr for AminoAcid {
    type Err = ParseAminoAcidError;

    /// Accepts a one-letter or three-letter code, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        let mut chars = upper.chars();
        let found = match (chars.next(), chars.next()) {
            (Some(c), None) => AminoAcid::from_code(c),
            _ => THREE_LETTER_CODES.get(upper.as_str()).copied(),
        };
        found.ok_or_else(|| ParseAminoAcidError(s.to_string()))
    }
}

impl TryFrom<char> for AminoAcid {
    type Error = ParseAminoAcidError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        AminoAcid::from_code(c.to_ascii_uppercase())
            .ok_or_else(|| ParseAminoAcidError(c.to_string()))
    }
}

impl From<AminoAcid> for char {
    fn from(aa: AminoAcid) -> Self {
        aa.code()
    }
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_ordered_by_one_letter_code_and_matches_index() {
        let codes: String = AminoAcid::ALL.iter().map(|aa| aa.code()).collect();
        assert_eq!(codes, "ACDEFGHIKLMNPQRSTVWY");
        for (i, aa) in AminoAcid::ALL.iter().enumerate() {
            assert_eq!(aa.index(), i);
        }
    }

    #[test]
    fn from_code_round_trips_every_residue() {
        for aa in AminoAcid::ALL {
            assert_eq!(AminoAcid::from_code(aa.code()), Some(aa));
        }
    }

    #[test]
    fn from_code_rejects_non_standard_and_lowercase_letters() {
        assert_eq!(AminoAcid::from_code('X'), None);
        assert_eq!(AminoAcid::from_code('B'), None);
        assert_eq!(AminoAcid::from_code('U'), None);
        assert_eq!(AminoAcid::from_code('a'), None);
    }

    #[test]
    fn from_str_accepts_one_and_three_letter_codes_case_insensitively() {
        assert_eq!("w".parse::<AminoAcid>(), Ok(AminoAcid::Tryptophan));
        assert_eq!("Trp".parse::<AminoAcid>(), Ok(AminoAcid::Tryptophan));
        assert_eq!(" GLY ".parse::<AminoAcid>(), Ok(AminoAcid::Glycine));
    }

    #[test]
    fn from_str_rejects_unknown_codes() {
        assert!("XAA".parse::<AminoAcid>().is_err());
        assert!("".parse::<AminoAcid>().is_err());
        assert!("Z".parse::<AminoAcid>().is_err());
    }

    #[test]
    fn side_chain_charge_classifies_ionizable_residues() {
        assert_eq!(
            AminoAcid::Lysine.side_chain_charge(),
            Some(ChargeSign::Positive)
        );
        assert_eq!(
            AminoAcid::Tyrosine.side_chain_charge(),
            Some(ChargeSign::Negative)
        );
        assert_eq!(AminoAcid::Glycine.side_chain_charge(), None);
        let ionizable = AminoAcid::ALL
            .iter()
            .filter(|aa| aa.side_chain_charge().is_some())
            .count();
        assert_eq!(ionizable, 7);
    }

    #[test]
    fn display_prints_one_letter_code() {
        assert_eq!(AminoAcid::Methionine.to_string(), "M");
        assert_eq!(AminoAcid::Methionine.three_letter_code(), "MET");
    }
}

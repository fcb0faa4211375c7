use super::amino_acid::AminoAcid;
use phf::{Map, phf_map};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

// Bjellqvist et al. (1993), as used by ExPASy ProtParam.
const BJELLQVIST_N_TERMINUS: f64 = 7.5;
const BJELLQVIST_C_TERMINUS: f64 = 3.55;

static BJELLQVIST_SIDE_CHAINS: Map<char, f64> = phf_map! {
    'K' => 10.0,
    'R' => 12.0,
    'H' => 5.98,
    'D' => 4.05,
    'E' => 4.45,
    'C' => 9.0,
    'Y' => 10.0,
};

static BJELLQVIST_N_TERMINAL_RESIDUES: Map<char, f64> = phf_map! {
    'A' => 7.59,
    'M' => 7.0,
    'S' => 6.93,
    'P' => 8.36,
    'T' => 6.82,
    'V' => 7.44,
    'E' => 7.7,
};

static BJELLQVIST_C_TERMINAL_RESIDUES: Map<char, f64> = phf_map! {
    'D' => 4.55,
    'E' => 4.75,
};

// EMBOSS `iep`/`pepstats` values.
const EMBOSS_N_TERMINUS: f64 = 8.6;
const EMBOSS_C_TERMINUS: f64 = 3.6;

static EMBOSS_SIDE_CHAINS: Map<char, f64> = phf_map! {
    'K' => 10.8,
    'R' => 12.5,
    'H' => 6.5,
    'D' => 3.9,
    'E' => 4.1,
    'C' => 8.5,
    'Y' => 10.1,
};

#[derive(Debug, Error)]
pub enum PkaScaleError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Unknown residue '{0}' in pKa scale")]
    UnknownResidue(String),
    #[error("Residue {0} has no ionizable side chain")]
    NotIonizable(AminoAcid),
    #[error("pKa for {group} must be a finite number, got {value}")]
    InvalidValue { group: String, value: f64 },
}

/// A set of pKa values for every ionizable group in a peptide.
///
/// The terminal amine and carboxyl groups may have residue-specific values
/// that override the generic terminus pKa.
#[derive(Debug, Clone, PartialEq)]
pub struct PkaScale {
    name: String,
    n_terminus: f64,
    c_terminus: f64,
    side_chains: [Option<f64>; AminoAcid::COUNT],
    n_terminal_residues: [Option<f64>; AminoAcid::COUNT],
    c_terminal_residues: [Option<f64>; AminoAcid::COUNT],
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PkaScaleFile {
    name: Option<String>,
    n_terminus: f64,
    c_terminus: f64,
    side_chains: BTreeMap<String, f64>,
    #[serde(default)]
    n_terminal_residues: BTreeMap<String, f64>,
    #[serde(default)]
    c_terminal_residues: BTreeMap<String, f64>,
}

fn dense_from_static(map: &Map<char, f64>) -> [Option<f64>; AminoAcid::COUNT] {
    let mut dense = [None; AminoAcid::COUNT];
    for (code, pka) in map.entries() {
        if let Some(aa) = AminoAcid::from_code(*code) {
            dense[aa.index()] = Some(*pka);
        }
    }
    dense
}

fn check_finite(group: &str, value: f64) -> Result<f64, PkaScaleError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PkaScaleError::InvalidValue {
            group: group.to_string(),
            value,
        })
    }
}

fn dense_from_file(
    entries: BTreeMap<String, f64>,
    require_ionizable: bool,
) -> Result<[Option<f64>; AminoAcid::COUNT], PkaScaleError> {
    let mut dense = [None; AminoAcid::COUNT];
    for (key, pka) in entries {
        let aa: AminoAcid = key
            .parse()
            .map_err(|_| PkaScaleError::UnknownResidue(key.clone()))?;
        if require_ionizable && aa.side_chain_charge().is_none() {
            return Err(PkaScaleError::NotIonizable(aa));
        }
        dense[aa.index()] = Some(check_finite(aa.three_letter_code(), pka)?);
    }
    Ok(dense)
}

impl PkaScale {
    /// Bjellqvist scale with terminal-residue corrections. This is the scale
    /// ExPASy ProtParam and Biopython use, and the default for analyses.
    pub fn bjellqvist() -> Self {
        Self {
            name: "bjellqvist".to_string(),
            n_terminus: BJELLQVIST_N_TERMINUS,
            c_terminus: BJELLQVIST_C_TERMINUS,
            side_chains: dense_from_static(&BJELLQVIST_SIDE_CHAINS),
            n_terminal_residues: dense_from_static(&BJELLQVIST_N_TERMINAL_RESIDUES),
            c_terminal_residues: dense_from_static(&BJELLQVIST_C_TERMINAL_RESIDUES),
        }
    }

    pub fn emboss() -> Self {
        Self {
            name: "emboss".to_string(),
            n_terminus: EMBOSS_N_TERMINUS,
            c_terminus: EMBOSS_C_TERMINUS,
            side_chains: dense_from_static(&EMBOSS_SIDE_CHAINS),
            n_terminal_residues: [None; AminoAcid::COUNT],
            c_terminal_residues: [None; AminoAcid::COUNT],
        }
    }

    /// Returns a built-in scale by its case-insensitive name.
    pub fn builtin(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "bjellqvist" | "expasy" => Some(Self::bjellqvist()),
            "emboss" => Some(Self::emboss()),
            _ => None,
        }
    }

    /// Parses a scale from TOML text.
    ///
    /// ```toml
    /// name = "my-scale"
    /// n-terminus = 7.7
    /// c-terminus = 3.3
    ///
    /// [side-chains]
    /// K = 10.5
    /// D = 3.9
    ///
    /// [n-terminal-residues]   # optional
    /// P = 8.4
    /// ```
    ///
    /// Side-chain entries may only name residues whose side chain titrates
    /// (K, R, H, D, E, C, Y); ionizable residues that are left out do not
    /// contribute charge.
    pub fn from_toml_str(content: &str, origin: &str) -> Result<Self, PkaScaleError> {
        let file: PkaScaleFile = toml::from_str(content).map_err(|e| PkaScaleError::Toml {
            path: origin.to_string(),
            source: e,
        })?;
        Ok(Self {
            name: file.name.unwrap_or_else(|| origin.to_string()),
            n_terminus: check_finite("N-terminus", file.n_terminus)?,
            c_terminus: check_finite("C-terminus", file.c_terminus)?,
            side_chains: dense_from_file(file.side_chains, true)?,
            n_terminal_residues: dense_from_file(file.n_terminal_residues, false)?,
            c_terminal_residues: dense_from_file(file.c_terminal_residues, false)?,
        })
    }

    pub fn load(path: &Path) -> Result<Self, PkaScaleError> {
        let origin = path.to_string_lossy().to_string();
        let content = std::fs::read_to_string(path).map_err(|e| PkaScaleError::Io {
            path: origin.clone(),
            source: e,
        })?;
        Self::from_toml_str(&content, &origin)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn side_chain(&self, aa: AminoAcid) -> Option<f64> {
        self.side_chains[aa.index()]
    }

    /// pKa of the free amine when `first` is the N-terminal residue.
    pub fn n_terminus(&self, first: Option<AminoAcid>) -> f64 {
        first
            .and_then(|aa| self.n_terminal_residues[aa.index()])
            .unwrap_or(self.n_terminus)
    }

    /// pKa of the free carboxyl when `last` is the C-terminal residue.
    pub fn c_terminus(&self, last: Option<AminoAcid>) -> f64 {
        last.and_then(|aa| self.c_terminal_residues[aa.index()])
            .unwrap_or(self.c_terminus)
    }
}

impl Default for PkaScale {
    fn default() -> Self {
        Self::bjellqvist()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn bjellqvist_applies_terminal_residue_corrections() {
        let scale = PkaScale::bjellqvist();
        assert_eq!(scale.n_terminus(Some(AminoAcid::Proline)), 8.36);
        assert_eq!(scale.n_terminus(Some(AminoAcid::Glycine)), 7.5);
        assert_eq!(scale.n_terminus(None), 7.5);
        assert_eq!(scale.c_terminus(Some(AminoAcid::AsparticAcid)), 4.55);
        assert_eq!(scale.c_terminus(Some(AminoAcid::Lysine)), 3.55);
    }

    #[test]
    fn bjellqvist_side_chains_cover_exactly_the_ionizable_residues() {
        let scale = PkaScale::bjellqvist();
        for aa in AminoAcid::ALL {
            assert_eq!(
                scale.side_chain(aa).is_some(),
                aa.side_chain_charge().is_some(),
                "{aa}"
            );
        }
        assert_eq!(scale.side_chain(AminoAcid::Histidine), Some(5.98));
    }

    #[test]
    fn emboss_has_no_terminal_residue_corrections() {
        let scale = PkaScale::emboss();
        assert_eq!(scale.n_terminus(Some(AminoAcid::Proline)), 8.6);
        assert_eq!(scale.c_terminus(Some(AminoAcid::GlutamicAcid)), 3.6);
        assert_eq!(scale.side_chain(AminoAcid::Arginine), Some(12.5));
    }

    #[test]
    fn builtin_lookup_is_case_insensitive() {
        assert_eq!(PkaScale::builtin("EMBOSS"), Some(PkaScale::emboss()));
        assert_eq!(PkaScale::builtin("Bjellqvist"), Some(PkaScale::bjellqvist()));
        assert_eq!(PkaScale::builtin("lehninger"), None);
    }

    #[test]
    fn from_toml_str_parses_a_custom_scale() {
        let toml = r#"
            name = "custom"
            n-terminus = 8.0
            c-terminus = 3.1
            [side-chains]
            K = 10.4
            Asp = 3.7
            [c-terminal-residues]
            E = 4.9
        "#;
        let scale = PkaScale::from_toml_str(toml, "inline").unwrap();
        assert_eq!(scale.name(), "custom");
        assert_eq!(scale.side_chain(AminoAcid::Lysine), Some(10.4));
        assert_eq!(scale.side_chain(AminoAcid::AsparticAcid), Some(3.7));
        assert_eq!(scale.side_chain(AminoAcid::Arginine), None);
        assert_eq!(scale.c_terminus(Some(AminoAcid::GlutamicAcid)), 4.9);
        assert_eq!(scale.n_terminus(Some(AminoAcid::Alanine)), 8.0);
    }

    #[test]
    fn from_toml_str_rejects_non_ionizable_side_chains() {
        let toml = r#"
            n-terminus = 8.0
            c-terminus = 3.1
            [side-chains]
            G = 5.0
        "#;
        let result = PkaScale::from_toml_str(toml, "inline");
        assert!(matches!(
            result,
            Err(PkaScaleError::NotIonizable(AminoAcid::Glycine))
        ));
    }

    #[test]
    fn from_toml_str_rejects_unknown_residues_and_fields() {
        let unknown_residue = r#"
            n-terminus = 8.0
            c-terminus = 3.1
            [side-chains]
            X = 5.0
        "#;
        assert!(matches!(
            PkaScale::from_toml_str(unknown_residue, "inline"),
            Err(PkaScaleError::UnknownResidue(_))
        ));

        let unknown_field = r#"
            n-terminus = 8.0
            c-terminus = 3.1
            temperature = 25.0
            [side-chains]
        "#;
        assert!(matches!(
            PkaScale::from_toml_str(unknown_field, "inline"),
            Err(PkaScaleError::Toml { .. })
        ));
    }

    #[test]
    fn from_toml_str_rejects_non_finite_values() {
        let toml = r#"
            n-terminus = nan
            c-terminus = 3.1
            [side-chains]
        "#;
        assert!(matches!(
            PkaScale::from_toml_str(toml, "inline"),
            Err(PkaScaleError::InvalidValue { .. })
        ));
    }

    #[test]
    fn load_reads_scale_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scale.toml");
        let mut file = File::create(&path).unwrap();
        writeln!(
            file,
            "n-terminus = 9.0\nc-terminus = 2.0\n[side-chains]\nR = 12.1"
        )
        .unwrap();

        let scale = PkaScale::load(&path).unwrap();
        assert_eq!(scale.side_chain(AminoAcid::Arginine), Some(12.1));
        assert!(scale.name().ends_with("scale.toml"));
    }

    #[test]
    fn load_reports_missing_file_as_io_error() {
        let dir = tempdir().unwrap();
        let result = PkaScale::load(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(PkaScaleError::Io { .. })));
    }
}

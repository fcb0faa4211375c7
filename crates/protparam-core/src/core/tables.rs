//! Static physicochemical constants for the 20 standard amino acids.
//!
//! Dense tables are indexed by [`AminoAcid::index`]; they are `const` data and
//! never change after the program starts.

use super::amino_acid::AminoAcid;

/// Average mass of water, in daltons.
pub const WATER_AVERAGE_MASS: f64 = 18.01528;

/// Monoisotopic mass of water, in daltons.
pub const WATER_MONOISOTOPIC_MASS: f64 = 18.010565;

/// Average masses of the free (unbonded) amino acids, in daltons.
const FREE_AVERAGE_MASSES: [f64; AminoAcid::COUNT] = [
    89.0932,  // A
    121.1582, // C
    133.1027, // D
    147.1293, // E
    165.1891, // F
    75.0666,  // G
    155.1546, // H
    131.1729, // I
    146.1876, // K
    131.1729, // L
    149.2113, // M
    132.1179, // N
    115.1305, // P
    146.1445, // Q
    174.201,  // R
    105.0926, // S
    119.1192, // T
    117.1463, // V
    204.2252, // W
    181.1885, // Y
];

/// Monoisotopic masses of the free amino acids, in daltons.
const FREE_MONOISOTOPIC_MASSES: [f64; AminoAcid::COUNT] = [
    89.047678,  // A
    121.019749, // C
    133.037508, // D
    147.053158, // E
    165.078979, // F
    75.032028,  // G
    155.069477, // H
    131.094629, // I
    146.105528, // K
    131.094629, // L
    149.051049, // M
    132.053492, // N
    115.063329, // P
    146.069142, // Q
    174.111676, // R
    105.042593, // S
    119.058243, // T
    117.078979, // V
    204.089878, // W
    181.073893, // Y
];

/// Kyte-Doolittle (1982) hydropathy index.
const KYTE_DOOLITTLE: [f64; AminoAcid::COUNT] = [
    1.8,  // A
    2.5,  // C
    -3.5, // D
    -3.5, // E
    2.8,  // F
    -0.4, // G
    -3.2, // H
    4.5,  // I
    -3.9, // K
    3.8,  // L
    1.9,  // M
    -3.5, // N
    -1.6, // P
    -3.5, // Q
    -4.5, // R
    -0.8, // S
    -0.7, // T
    4.2,  // V
    -0.9, // W
    -1.3, // Y
];

/// Molar absorptivity of tryptophan at 280 nm (Pace et al., 1995), M⁻¹·cm⁻¹.
pub const EXTINCTION_TRP: f64 = 5500.0;
/// Molar absorptivity of tyrosine at 280 nm, M⁻¹·cm⁻¹.
pub const EXTINCTION_TYR: f64 = 1490.0;
/// Molar absorptivity of one cystine (disulfide-bonded cysteine pair), M⁻¹·cm⁻¹.
pub const EXTINCTION_CYSTINE: f64 = 125.0;

/// Mass of the free amino acid, in daltons.
pub fn free_mass(aa: AminoAcid, monoisotopic: bool) -> f64 {
    if monoisotopic {
        FREE_MONOISOTOPIC_MASSES[aa.index()]
    } else {
        FREE_AVERAGE_MASSES[aa.index()]
    }
}

/// Mass of the residue as it sits inside a chain: the free amino acid minus
/// the water lost when its peptide bond formed.
pub fn residue_mass(aa: AminoAcid, monoisotopic: bool) -> f64 {
    free_mass(aa, monoisotopic) - water_mass(monoisotopic)
}

pub fn water_mass(monoisotopic: bool) -> f64 {
    if monoisotopic {
        WATER_MONOISOTOPIC_MASS
    } else {
        WATER_AVERAGE_MASS
    }
}

pub fn kyte_doolittle(aa: AminoAcid) -> f64 {
    KYTE_DOOLITTLE[aa.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cysteine_average_mass_matches_reference() {
        assert!((free_mass(AminoAcid::Cysteine, false) - 121.1582).abs() < 1e-9);
        assert!(
            (residue_mass(AminoAcid::Cysteine, false) + WATER_AVERAGE_MASS - 121.1582).abs()
                < 1e-9
        );
    }

    #[test]
    fn glycine_residue_mass_is_about_57_daltons() {
        assert!((residue_mass(AminoAcid::Glycine, false) - 57.05).abs() < 0.01);
        assert!((residue_mass(AminoAcid::Glycine, true) - 57.0215).abs() < 0.001);
    }

    #[test]
    fn monoisotopic_masses_are_lighter_than_average_masses() {
        for aa in AminoAcid::ALL {
            assert!(free_mass(aa, true) < free_mass(aa, false), "{aa}");
        }
    }

    #[test]
    fn hydropathy_extremes_are_isoleucine_and_arginine() {
        let max = AminoAcid::ALL
            .into_iter()
            .max_by(|a, b| kyte_doolittle(*a).total_cmp(&kyte_doolittle(*b)));
        let min = AminoAcid::ALL
            .into_iter()
            .min_by(|a, b| kyte_doolittle(*a).total_cmp(&kyte_doolittle(*b)));
        assert_eq!(max, Some(AminoAcid::Isoleucine));
        assert_eq!(min, Some(AminoAcid::Arginine));
    }
}

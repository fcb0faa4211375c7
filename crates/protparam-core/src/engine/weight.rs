use super::config::MassType;
use crate::core::composition::Composition;
use crate::core::tables;
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Molecular weight of a polypeptide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MolecularWeight {
    pub daltons: f64,
    pub mass_type: MassType,
}

impl MolecularWeight {
    pub fn kilodaltons(&self) -> f64 {
        self.daltons / 1000.0
    }
}

impl Serialize for MolecularWeight {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("MolecularWeight", 3)?;
        state.serialize_field("daltons", &self.daltons)?;
        state.serialize_field("kilodaltons", &self.kilodaltons())?;
        state.serialize_field("mass_type", &self.mass_type)?;
        state.end()
    }
}

/// Sums the residue masses of the chain and adds one water for the free
/// N- and C-termini.
///
/// This equals the sum of free amino-acid masses minus one water per peptide
/// bond (`n - 1` of them).
pub fn molecular_weight(composition: &Composition, mass_type: MassType) -> MolecularWeight {
    let monoisotopic = mass_type == MassType::Monoisotopic;
    let residues: f64 = composition
        .iter()
        .map(|(aa, count)| tables::residue_mass(aa, monoisotopic) * count as f64)
        .sum();
    MolecularWeight {
        daltons: residues + tables::water_mass(monoisotopic),
        mass_type,
    }
}

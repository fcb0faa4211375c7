use crate::core::amino_acid::AminoAcid;
use crate::core::composition::Composition;
use crate::core::sequence::{DroppedCharacterReport, Sequence};
use crate::engine::extinction::ExtinctionCoefficients;
use crate::engine::isoelectric::IsoelectricPoint;
use crate::engine::weight::MolecularWeight;
use serde::{Serialize, Serializer};

fn sequence_as_string<S: Serializer>(sequence: &Sequence, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(sequence)
}

/// Every property computed for one sequence.
///
/// Built once per analysis and never modified afterwards; all fields are
/// exposed through accessors only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyReport {
    #[serde(serialize_with = "sequence_as_string")]
    sequence: Sequence,
    length: usize,
    molecular_weight: MolecularWeight,
    isoelectric_point: IsoelectricPoint,
    extinction_coefficients: ExtinctionCoefficients,
    gravy: f64,
    composition: Composition,
    dropped_characters: DroppedCharacterReport,
}

impl PropertyReport {
    pub(crate) fn new(
        sequence: Sequence,
        composition: Composition,
        molecular_weight: MolecularWeight,
        isoelectric_point: IsoelectricPoint,
        extinction_coefficients: ExtinctionCoefficients,
        gravy: f64,
        dropped_characters: DroppedCharacterReport,
    ) -> Self {
        Self {
            length: sequence.len(),
            sequence,
            molecular_weight,
            isoelectric_point,
            extinction_coefficients,
            gravy,
            composition,
            dropped_characters,
        }
    }

    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn molecular_weight(&self) -> &MolecularWeight {
        &self.molecular_weight
    }

    pub fn molecular_weight_da(&self) -> f64 {
        self.molecular_weight.daltons
    }

    pub fn molecular_weight_kda(&self) -> f64 {
        self.molecular_weight.kilodaltons()
    }

    /// Unrounded isoelectric point in pH units.
    pub fn isoelectric_point(&self) -> f64 {
        self.isoelectric_point.ph
    }

    pub fn isoelectric_solution(&self) -> &IsoelectricPoint {
        &self.isoelectric_point
    }

    /// See [`ExtinctionCoefficients`] for the disulfide assumption behind
    /// the `cystines` value.
    pub fn extinction_coefficients(&self) -> &ExtinctionCoefficients {
        &self.extinction_coefficients
    }

    pub fn gravy(&self) -> f64 {
        self.gravy
    }

    pub fn composition(&self) -> &Composition {
        &self.composition
    }

    /// Composition as percentages, in one-letter-code order.
    pub fn composition_percent(&self) -> Vec<(AminoAcid, f64)> {
        self.composition.percentages().collect()
    }

    /// Non-standard letters removed from the input. Informational only.
    pub fn dropped_characters(&self) -> &DroppedCharacterReport {
        &self.dropped_characters
    }
}

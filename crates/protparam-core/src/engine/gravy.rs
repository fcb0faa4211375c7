use crate::core::amino_acid::AminoAcid;
use crate::core::composition::Composition;
use crate::core::tables;

/// Grand average of hydropathy on the Kyte-Doolittle scale. Positive values
/// indicate a hydrophobic protein.
pub fn gravy(composition: &Composition) -> f64 {
    gravy_with_scale(composition, tables::kyte_doolittle)
}

/// Mean of `scale` over every residue of the composition.
pub fn gravy_with_scale<F>(composition: &Composition, scale: F) -> f64
where
    F: Fn(AminoAcid) -> f64,
{
    if composition.is_empty() {
        return 0.0;
    }
    let total: f64 = composition
        .iter()
        .filter(|&(_, count)| count > 0)
        .map(|(aa, count)| scale(aa) * count as f64)
        .sum();
    total / composition.len() as f64
}

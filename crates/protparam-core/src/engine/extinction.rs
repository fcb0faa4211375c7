use super::config::CystineModel;
use crate::core::amino_acid::AminoAcid;
use crate::core::composition::Composition;
use crate::core::tables::{EXTINCTION_CYSTINE, EXTINCTION_TRP, EXTINCTION_TYR};
use serde::Serialize;

/// Molar extinction coefficients at 280 nm in water, in M⁻¹·cm⁻¹.
///
/// `cystines` assumes every cysteine is disulfide-bonded. That is an
/// approximation: only a structure or a measurement tells which cysteines are
/// actually paired, so the true value lies between `reduced` and `cystines`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExtinctionCoefficients {
    /// All cysteines reduced (no disulfide bonds).
    pub reduced: f64,
    /// All cysteines assumed to form cystines.
    pub cystines: f64,
}

pub fn extinction_coefficients(
    composition: &Composition,
    model: CystineModel,
) -> ExtinctionCoefficients {
    let trp = composition.count(AminoAcid::Tryptophan) as f64;
    let tyr = composition.count(AminoAcid::Tyrosine) as f64;
    let cys = composition.count(AminoAcid::Cysteine);

    let reduced = trp * EXTINCTION_TRP + tyr * EXTINCTION_TYR;
    let cystine_contribution = match model {
        CystineModel::PerCysteine => cys as f64 * EXTINCTION_CYSTINE / 2.0,
        CystineModel::PairedOnly => (cys / 2) as f64 * EXTINCTION_CYSTINE,
    };

    ExtinctionCoefficients {
        reduced,
        cystines: reduced + cystine_contribution,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sequence::{HeaderHandling, normalize};

    fn composition_of(text: &str) -> Composition {
        let (seq, _) = normalize(text, HeaderHandling::DetectFasta).unwrap();
        Composition::from_sequence(&seq)
    }

    #[test]
    fn single_cysteine_contributes_only_with_cystines() {
        let ext = extinction_coefficients(&composition_of("C"), CystineModel::PerCysteine);
        assert_eq!(ext.reduced, 0.0);
        assert_eq!(ext.cystines, 62.5);
    }

    #[test]
    fn tryptophan_and_tyrosine_sum_independently() {
        let ext = extinction_coefficients(&composition_of("WWYAG"), CystineModel::PerCysteine);
        assert_eq!(ext.reduced, 2.0 * 5500.0 + 1490.0);
        assert_eq!(ext.cystines, ext.reduced);
    }

    #[test]
    fn paired_model_ignores_unpaired_cysteine() {
        let comp = composition_of("WCCC");
        let paired = extinction_coefficients(&comp, CystineModel::PairedOnly);
        let per_cys = extinction_coefficients(&comp, CystineModel::PerCysteine);
        assert_eq!(paired.cystines, 5500.0 + 125.0);
        assert_eq!(per_cys.cystines, 5500.0 + 187.5);
    }

    #[test]
    fn both_models_agree_for_even_cysteine_counts() {
        let comp = composition_of("YCCCCW");
        assert_eq!(
            extinction_coefficients(&comp, CystineModel::PairedOnly),
            extinction_coefficients(&comp, CystineModel::PerCysteine)
        );
    }

    #[test]
    fn cystine_coefficient_is_never_below_reduced() {
        for text in ["A", "C", "CW", "YYYCC", "MKWVTFISLLLLFSSAYSRGVFRRDTHKSEIAHRFKDLGE"] {
            let comp = composition_of(text);
            for model in [CystineModel::PerCysteine, CystineModel::PairedOnly] {
                let ext = extinction_coefficients(&comp, model);
                assert!(ext.cystines >= ext.reduced, "{text}");
            }
        }
    }
}

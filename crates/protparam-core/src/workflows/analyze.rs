use super::report::PropertyReport;
use crate::core::composition::Composition;
use crate::core::sequence::{DroppedCharacterReport, HeaderHandling, Sequence, normalize};
use crate::engine::config::AnalysisConfig;
use crate::engine::error::AnalysisError;
use crate::engine::extinction::extinction_coefficients;
use crate::engine::gravy::gravy;
use crate::engine::isoelectric::ChargeModel;
use crate::engine::weight::molecular_weight;
use tracing::{debug, instrument};

/// Analyzes raw text with the default configuration.
///
/// `already_fasta` tells whether the caller has already extracted the residue
/// text from a FASTA record. When `false`, a leading `>` line is treated as a
/// header and discarded.
pub fn analyze(raw_text: &str, already_fasta: bool) -> Result<PropertyReport, AnalysisError> {
    analyze_with(raw_text, already_fasta, &AnalysisConfig::default())
}

#[instrument(skip_all, name = "analyze", fields(input_bytes = raw_text.len()))]
pub fn analyze_with(
    raw_text: &str,
    already_fasta: bool,
    config: &AnalysisConfig,
) -> Result<PropertyReport, AnalysisError> {
    let headers = if already_fasta {
        HeaderHandling::None
    } else {
        HeaderHandling::DetectFasta
    };
    let (sequence, dropped) = normalize(raw_text, headers)?;
    if !dropped.is_empty() {
        debug!(count = dropped.count, "Dropped non-standard characters.");
    }
    Ok(analyze_sequence(sequence, dropped, config))
}

/// Computes every property of an already validated sequence.
pub fn analyze_sequence(
    sequence: Sequence,
    dropped: DroppedCharacterReport,
    config: &AnalysisConfig,
) -> PropertyReport {
    let composition = Composition::from_sequence(&sequence);
    let weight = molecular_weight(&composition, config.mass_type);
    let extinction = extinction_coefficients(&composition, config.cystine_model);
    let hydropathy = gravy(&composition);
    let pi = ChargeModel::from_sequence(&sequence, &config.pka_scale).solve(&config.bisection);

    debug!(
        length = sequence.len(),
        daltons = weight.daltons,
        pi = pi.ph,
        gravy = hydropathy,
        "Analysis complete."
    );

    PropertyReport::new(
        sequence,
        composition,
        weight,
        pi,
        extinction,
        hydropathy,
        dropped,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::amino_acid::AminoAcid;
    use crate::engine::config::{AnalysisConfigBuilder, CystineModel, MassType};

    #[test]
    fn single_cysteine_end_to_end() {
        let report = analyze("C", false).unwrap();
        assert_eq!(report.length(), 1);
        assert!((report.molecular_weight_da() - 121.16).abs() < 0.01);
        assert_eq!(report.gravy(), 2.5);
        assert_eq!(report.extinction_coefficients().reduced, 0.0);
        assert_eq!(report.extinction_coefficients().cystines, 62.5);
        let pi = report.isoelectric_point();
        assert!(pi > 0.0 && pi < 14.0);
        assert!(report.isoelectric_solution().residual_charge.abs() < 1e-3);
    }

    #[test]
    fn fasta_header_is_discarded_end_to_end() {
        let report = analyze(">header\nACDEFGHIKLMNPQRSTVWY", false).unwrap();
        assert_eq!(report.sequence().to_string(), "ACDEFGHIKLMNPQRSTVWY");
        assert!(report.dropped_characters().is_empty());
        for (aa, count) in report.composition().iter() {
            assert_eq!(count, 1, "{aa}");
            assert!((report.composition().fraction(aa) - 0.05).abs() < 1e-12);
        }
    }

    #[test]
    fn digits_and_punctuation_yield_empty_sequence_error() {
        let result = analyze("0123456789 !@#$%^&*()_+-=[]{};':\",./<>?", false);
        assert!(matches!(result, Err(AnalysisError::EmptySequence)));
    }

    #[test]
    fn already_fasta_input_skips_header_detection() {
        let report = analyze(">MK\nWV", true).unwrap();
        assert_eq!(report.sequence().to_string(), "MKWV");
        let report = analyze(">MK\nWV", false).unwrap();
        assert_eq!(report.sequence().to_string(), "WV");
    }

    #[test]
    fn dropped_characters_travel_with_the_report() {
        let report = analyze("MKXXTAYB", false).unwrap();
        assert_eq!(report.sequence().to_string(), "MKTAY");
        assert_eq!(report.dropped_characters().count, 3);
        assert_eq!(report.length(), 5);
    }

    #[test]
    fn composition_percent_view_is_fraction_times_hundred() {
        let report = analyze("AAAC", false).unwrap();
        let view = report.composition_percent();
        assert_eq!(view.len(), AminoAcid::COUNT);
        assert_eq!(view[0], (AminoAcid::Alanine, 75.0));
        assert_eq!(view[1], (AminoAcid::Cysteine, 25.0));
        let total: f64 = view.iter().map(|(_, p)| p).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn configuration_changes_mass_and_cystine_model() {
        let config = AnalysisConfigBuilder::new()
            .mass_type(MassType::Monoisotopic)
            .cystine_model(CystineModel::PairedOnly)
            .build()
            .unwrap();
        let default = analyze("WCCCY", false).unwrap();
        let custom = analyze_with("WCCCY", false, &config).unwrap();
        assert!(custom.molecular_weight_da() < default.molecular_weight_da());
        assert_eq!(custom.extinction_coefficients().cystines, 5500.0 + 1490.0 + 125.0);
        assert_eq!(default.extinction_coefficients().cystines, 5500.0 + 1490.0 + 187.5);
    }

    #[test]
    fn kilodaltons_match_daltons() {
        let report = analyze("MVLSPADKTNVKAAWGKVGAHAGEYGAEALERMFLSFPTTKTYFPHF", false).unwrap();
        assert_eq!(report.molecular_weight_kda(), report.molecular_weight_da() / 1000.0);
    }
}

use super::config::BisectionParams;
use crate::core::amino_acid::{AminoAcid, ChargeSign};
use crate::core::composition::Composition;
use crate::core::pka::PkaScale;
use crate::core::sequence::Sequence;
use serde::Serialize;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq)]
struct IonizableGroup {
    pka: f64,
    count: usize,
    sign: ChargeSign,
}

impl IonizableGroup {
    /// Henderson-Hasselbalch partial charge of `count` identical groups.
    #[inline]
    fn charge(&self, ph: f64) -> f64 {
        let n = self.count as f64;
        match self.sign {
            ChargeSign::Positive => n / (1.0 + 10f64.powf(ph - self.pka)),
            ChargeSign::Negative => -n / (1.0 + 10f64.powf(self.pka - ph)),
        }
    }
}

/// Net charge of a peptide as a function of pH.
///
/// Group counts are unsigned, so every term is non-increasing in pH and the
/// two always-present termini make the sum strictly decreasing. This is what
/// lets [`ChargeModel::solve`] bisect.
#[derive(Debug, Clone, PartialEq)]
pub struct ChargeModel {
    groups: Vec<IonizableGroup>,
}

/// Result of the isoelectric point search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IsoelectricPoint {
    /// pH at which the net charge vanishes. Not rounded.
    pub ph: f64,
    pub iterations: usize,
    /// Net charge evaluated at `ph`.
    pub residual_charge: f64,
}

impl ChargeModel {
    /// Builds the model from residue counts.
    ///
    /// When the terminal residues are known, residue-specific terminal pKa
    /// values from `scale` are used; otherwise the generic terminus values
    /// apply.
    pub fn new(
        composition: &Composition,
        n_terminal: Option<AminoAcid>,
        c_terminal: Option<AminoAcid>,
        scale: &PkaScale,
    ) -> Self {
        let mut groups = vec![
            IonizableGroup {
                pka: scale.n_terminus(n_terminal),
                count: 1,
                sign: ChargeSign::Positive,
            },
            IonizableGroup {
                pka: scale.c_terminus(c_terminal),
                count: 1,
                sign: ChargeSign::Negative,
            },
        ];

        for (aa, count) in composition.iter() {
            if count == 0 {
                continue;
            }
            if let (Some(sign), Some(pka)) = (aa.side_chain_charge(), scale.side_chain(aa)) {
                groups.push(IonizableGroup { pka, count, sign });
            }
        }

        Self { groups }
    }

    pub fn from_sequence(sequence: &Sequence, scale: &PkaScale) -> Self {
        Self::new(
            &Composition::from_sequence(sequence),
            Some(sequence.first()),
            Some(sequence.last()),
            scale,
        )
    }

    pub fn charge_at_ph(&self, ph: f64) -> f64 {
        self.groups.iter().map(|g| g.charge(ph)).sum()
    }

    /// Finds the isoelectric point by bisection over `params`' pH bracket.
    ///
    /// Each step halves the bracket, moving its lower edge up while the net
    /// charge at the midpoint is still positive. The loop ends when the
    /// bracket is narrower than `params.tolerance` or after
    /// `params.max_iterations` steps, whichever comes first.
    pub fn solve(&self, params: &BisectionParams) -> IsoelectricPoint {
        let mut low = params.lower_ph;
        let mut high = params.upper_ph;

        if self.charge_at_ph(low) <= 0.0 || self.charge_at_ph(high) >= 0.0 {
            debug!(
                low,
                high, "Net charge does not change sign over the pH bracket; pI will sit at an edge."
            );
        }

        let mut iterations = 0;
        while iterations < params.max_iterations && high - low >= params.tolerance {
            let mid = (low + high) / 2.0;
            let charge = self.charge_at_ph(mid);
            trace!(iteration = iterations, mid, charge, "Bisection step.");
            if charge > 0.0 {
                low = mid;
            } else {
                high = mid;
            }
            iterations += 1;
        }

        let ph = (low + high) / 2.0;
        let residual_charge = self.charge_at_ph(ph);
        debug!(ph, iterations, residual_charge, "Isoelectric point converged.");

        IsoelectricPoint {
            ph,
            iterations,
            residual_charge,
        }
    }
}

/// Isoelectric point from residue counts alone, using the generic terminus
/// pKa values of `scale`.
pub fn isoelectric_point(
    composition: &Composition,
    scale: &PkaScale,
    params: &BisectionParams,
) -> IsoelectricPoint {
    ChargeModel::new(composition, None, None, scale).solve(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sequence::{HeaderHandling, normalize};

    fn sequence_of(text: &str) -> Sequence {
        normalize(text, HeaderHandling::DetectFasta).unwrap().0
    }

    fn pi_of(text: &str, scale: &PkaScale) -> IsoelectricPoint {
        ChargeModel::from_sequence(&sequence_of(text), scale).solve(&BisectionParams::default())
    }

    const SAMPLES: [&str; 8] = [
        "C",
        "G",
        "ACDEFGHIKLMNPQRSTVWY",
        "DDDDDDDDDD",
        "KKKKKKKKKK",
        "MKWVTFISLLLLFSSAYSRGVFRRDTHKSEIAHRFKDLGE",
        "MQIFVKTLTGKTITLEVEPSDTIENVKAKIQDKEGIPPDQQRLIFAGKQLEDGRTLSDYNIQKESTLHLVLRLRGG",
        "AAAAAAAAAAAAAAAAAAAA",
    ];

    #[test]
    fn pi_lies_strictly_inside_the_bracket_with_near_zero_charge() {
        for scale in [PkaScale::bjellqvist(), PkaScale::emboss()] {
            for text in SAMPLES {
                let model = ChargeModel::from_sequence(&sequence_of(text), &scale);
                let pi = model.solve(&BisectionParams::default());
                assert!(pi.ph > 0.0 && pi.ph < 14.0, "{text}: {}", pi.ph);
                assert!(
                    model.charge_at_ph(pi.ph).abs() < 1e-3,
                    "{text}: residual {}",
                    pi.residual_charge
                );
            }
        }
    }

    #[test]
    fn net_charge_strictly_decreases_with_ph() {
        let model = ChargeModel::from_sequence(&sequence_of(SAMPLES[5]), &PkaScale::bjellqvist());
        let mut previous = f64::INFINITY;
        for step in 0..=28 {
            let charge = model.charge_at_ph(step as f64 * 0.5);
            assert!(charge < previous);
            previous = charge;
        }
    }

    #[test]
    fn single_cysteine_uses_termini_and_side_chain_only() {
        let scale = PkaScale::bjellqvist();
        let pi = pi_of("C", &scale);
        assert!(pi.ph > 5.0 && pi.ph < 6.0, "{}", pi.ph);

        let expected_charge = |ph: f64| {
            1.0 / (1.0 + 10f64.powf(ph - 7.5))
                - 1.0 / (1.0 + 10f64.powf(3.55 - ph))
                - 1.0 / (1.0 + 10f64.powf(9.0 - ph))
        };
        let model = ChargeModel::from_sequence(&sequence_of("C"), &scale);
        for ph in [2.0, 5.5, 7.0, 11.0] {
            assert!((model.charge_at_ph(ph) - expected_charge(ph)).abs() < 1e-12);
        }
    }

    #[test]
    fn acidic_and_basic_peptides_fall_on_opposite_sides_of_neutral() {
        let scale = PkaScale::bjellqvist();
        assert!(pi_of("DDDDDDDDDD", &scale).ph < 4.5);
        assert!(pi_of("KKKKKKKKKK", &scale).ph > 9.5);
        assert!(pi_of("EEEEKKKK", &scale).ph > pi_of("EEEEEEKK", &scale).ph);
    }

    #[test]
    fn residue_without_ionizable_side_chain_still_converges() {
        let pi = pi_of("G", &PkaScale::bjellqvist());
        // Midway between the terminal pKa values.
        assert!((pi.ph - (7.5 + 3.55) / 2.0).abs() < 1e-6);
    }

    #[test]
    fn terminal_residue_specific_pka_shifts_the_result() {
        let scale = PkaScale::bjellqvist();
        let with_pro = pi_of("PGGG", &scale);
        let with_gly = pi_of("GGGG", &scale);
        assert!(with_pro.ph > with_gly.ph);

        let comp = Composition::from_sequence(&sequence_of("PGGG"));
        let generic = isoelectric_point(&comp, &scale, &BisectionParams::default());
        assert!((generic.ph - with_gly.ph).abs() < 1e-9);
    }

    #[test]
    fn iteration_cap_is_respected() {
        let model = ChargeModel::from_sequence(&sequence_of("KKKK"), &PkaScale::bjellqvist());
        let params = BisectionParams {
            max_iterations: 1,
            ..BisectionParams::default()
        };
        let pi = model.solve(&params);
        assert_eq!(pi.iterations, 1);
        assert_eq!(pi.ph, 10.5);
    }

    #[test]
    fn tolerance_bounds_the_iteration_count() {
        let model = ChargeModel::from_sequence(&sequence_of(SAMPLES[2]), &PkaScale::bjellqvist());
        let params = BisectionParams {
            tolerance: 1e-4,
            ..BisectionParams::default()
        };
        let pi = model.solve(&params);
        // 14 / 2^n < 1e-4  =>  n = 18
        assert_eq!(pi.iterations, 18);
    }

    #[test]
    fn scales_disagree_on_the_same_sequence() {
        let a = pi_of(SAMPLES[6], &PkaScale::bjellqvist());
        let b = pi_of(SAMPLES[6], &PkaScale::emboss());
        assert!((a.ph - b.ph).abs() > 1e-3);
    }
}

use crate::core::pka::PkaScale;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Invalid value for '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

/// Which isotope masses are summed for the molecular weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MassType {
    #[default]
    Average,
    Monoisotopic,
}

/// How cysteines contribute to the "with cystines" extinction coefficient.
///
/// Both models assume that every cysteine takes part in a disulfide bond,
/// which is an approximation rather than a measured property of the protein.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CystineModel {
    /// Each cysteine contributes half a cystine (62.5 M⁻¹·cm⁻¹).
    #[default]
    PerCysteine,
    /// Only complete pairs count: `floor(C / 2)` cystines of 125 M⁻¹·cm⁻¹.
    PairedOnly,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BisectionParams {
    pub lower_ph: f64,
    pub upper_ph: f64,
    /// Stop once the bracket is narrower than this many pH units.
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl Default for BisectionParams {
    fn default() -> Self {
        Self {
            lower_ph: 0.0,
            upper_ph: 14.0,
            tolerance: 1e-9,
            max_iterations: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    pub mass_type: MassType,
    pub cystine_model: CystineModel,
    pub pka_scale: PkaScale,
    pub bisection: BisectionParams,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            mass_type: MassType::default(),
            cystine_model: CystineModel::default(),
            pka_scale: PkaScale::default(),
            bisection: BisectionParams::default(),
        }
    }
}

#[derive(Default)]
pub struct AnalysisConfigBuilder {
    mass_type: Option<MassType>,
    cystine_model: Option<CystineModel>,
    pka_scale: Option<PkaScale>,
    lower_ph: Option<f64>,
    upper_ph: Option<f64>,
    tolerance: Option<f64>,
    max_iterations: Option<usize>,
}

impl AnalysisConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mass_type(mut self, mass_type: MassType) -> Self {
        self.mass_type = Some(mass_type);
        self
    }
    pub fn cystine_model(mut self, model: CystineModel) -> Self {
        self.cystine_model = Some(model);
        self
    }
    pub fn pka_scale(mut self, scale: PkaScale) -> Self {
        self.pka_scale = Some(scale);
        self
    }
    pub fn ph_range(mut self, lower: f64, upper: f64) -> Self {
        self.lower_ph = Some(lower);
        self.upper_ph = Some(upper);
        self
    }
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = Some(tolerance);
        self
    }
    pub fn max_iterations(mut self, iterations: usize) -> Self {
        self.max_iterations = Some(iterations);
        self
    }

    pub fn build(self) -> Result<AnalysisConfig, ConfigError> {
        let defaults = BisectionParams::default();
        let bisection = BisectionParams {
            lower_ph: self.lower_ph.unwrap_or(defaults.lower_ph),
            upper_ph: self.upper_ph.unwrap_or(defaults.upper_ph),
            tolerance: self.tolerance.unwrap_or(defaults.tolerance),
            max_iterations: self.max_iterations.unwrap_or(defaults.max_iterations),
        };

        if !bisection.lower_ph.is_finite()
            || !bisection.upper_ph.is_finite()
            || bisection.lower_ph >= bisection.upper_ph
        {
            return Err(ConfigError::InvalidParameter {
                name: "ph_range",
                reason: format!(
                    "expected finite bounds with lower < upper, got [{}, {}]",
                    bisection.lower_ph, bisection.upper_ph
                ),
            });
        }
        if !(bisection.tolerance.is_finite() && bisection.tolerance > 0.0) {
            return Err(ConfigError::InvalidParameter {
                name: "tolerance",
                reason: format!("must be a positive number, got {}", bisection.tolerance),
            });
        }
        if bisection.max_iterations == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "max_iterations",
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(AnalysisConfig {
            mass_type: self.mass_type.unwrap_or_default(),
            cystine_model: self.cystine_model.unwrap_or_default(),
            pka_scale: self.pka_scale.unwrap_or_default(),
            bisection,
        })
    }
}

use protparam::engine::config::{CystineModel, MassType};

pub struct DefaultsConfig {
    pub min_length: usize,
    pub mass_type: MassType,
    pub cystine_model: CystineModel,
    pub pka_scale: String,
    pub max_iterations: usize,
    pub tolerance: f64,
    pub fetch_timeout_seconds: u64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            min_length: 10,
            mass_type: MassType::Average,
            cystine_model: CystineModel::PerCysteine,
            pka_scale: "bjellqvist".to_string(),
            max_iterations: 100,
            tolerance: 1e-9,
            fetch_timeout_seconds: 10,
        }
    }
}

use crate::error::{CliError, Result};
use protparam::engine::config::{CystineModel, MassType};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileMassConfig {
    #[serde(rename = "type")]
    pub mass_type: Option<MassType>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileExtinctionConfig {
    pub cystine_model: Option<CystineModel>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileIsoelectricConfig {
    pub pka_scale: Option<String>,
    pub max_iterations: Option<usize>,
    pub tolerance: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileFetchConfig {
    pub timeout_seconds: Option<u64>,
}

/// Contents of a `-c` configuration file. Every key is optional.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileConfig {
    pub min_length: Option<usize>,
    pub mass: Option<FileMassConfig>,
    pub extinction: Option<FileExtinctionConfig>,
    pub isoelectric: Option<FileIsoelectricConfig>,
    pub fetch: Option<FileFetchConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }
}

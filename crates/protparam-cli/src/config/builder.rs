use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::AnalysisOverrides;
use crate::error::{CliError, Result};
use protparam::core::pka::PkaScale;
use protparam::engine::config as core_config;
use serde::Deserialize;
use serde::de::IntoDeserializer;
use serde::de::value::StrDeserializer;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// Resolves the final configuration with precedence
/// CLI flag > `--set` value > config file > built-in default.
pub fn build_config(
    config_path: Option<&Path>,
    set_values: &[String],
    overrides: &AnalysisOverrides,
) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(path) = config_path {
        FileConfig::from_file(path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, set_values)?;

    let mass_file = file_config.mass.take().unwrap_or_default();
    let mass_type = overrides
        .mass_type
        .map(Into::into)
        .or(mass_file.mass_type)
        .unwrap_or(defaults.mass_type);

    let extinction_file = file_config.extinction.take().unwrap_or_default();
    let cystine_model = overrides
        .cystine_model
        .map(Into::into)
        .or(extinction_file.cystine_model)
        .unwrap_or(defaults.cystine_model);

    let iso_file = file_config.isoelectric.take().unwrap_or_default();
    let pka_scale = resolve_pka_scale(
        overrides.pka_scale.as_deref(),
        iso_file.pka_scale.as_deref(),
        &defaults.pka_scale,
    )?;
    let max_iterations = iso_file.max_iterations.unwrap_or(defaults.max_iterations);
    let tolerance = iso_file.tolerance.unwrap_or(defaults.tolerance);

    let min_length = overrides
        .min_length
        .or(file_config.min_length)
        .unwrap_or(defaults.min_length);

    let fetch_file = file_config.fetch.take().unwrap_or_default();
    let fetch_timeout = Duration::from_secs(
        fetch_file
            .timeout_seconds
            .unwrap_or(defaults.fetch_timeout_seconds),
    );

    let analysis = core_config::AnalysisConfigBuilder::new()
        .mass_type(mass_type)
        .cystine_model(cystine_model)
        .pka_scale(pka_scale)
        .max_iterations(max_iterations)
        .tolerance(tolerance)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    debug!(
        ?mass_type,
        ?cystine_model,
        pka_scale = analysis.pka_scale.name(),
        min_length,
        "Configuration resolved."
    );

    Ok(AppConfig {
        analysis,
        min_length,
        fetch_timeout,
    })
}

fn resolve_pka_scale(
    cli_arg: Option<&str>,
    file_arg: Option<&str>,
    default_arg: &str,
) -> Result<PkaScale> {
    let name_or_path = cli_arg.or(file_arg).unwrap_or(default_arg);

    if let Some(scale) = PkaScale::builtin(name_or_path) {
        return Ok(scale);
    }

    let path = Path::new(name_or_path);
    if path.is_absolute() || name_or_path.contains(['/', '\\']) || name_or_path.ends_with(".toml")
    {
        info!("Loading custom pKa scale from {:?}", path);
        return PkaScale::load(path).map_err(|e| CliError::Analysis(e.into()));
    }

    Err(CliError::Config(format!(
        "Unknown pKa scale '{}'. Expected 'bjellqvist', 'emboss', or a path to a TOML file.",
        name_or_path
    )))
}

fn parse_value<T>(key: &str, value_str: &str) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    let deserializer: StrDeserializer<'_, serde::de::value::Error> = value_str.into_deserializer();
    T::deserialize(deserializer)
        .map_err(|e| CliError::Config(format!("Invalid value for {}: {} ({})", key, value_str, e)))
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    if set_values.is_empty() {
        return Ok(config);
    }
    for kv_pair in set_values {
        let parts: Vec<_> = kv_pair.splitn(2, '=').collect();
        if parts.len() != 2 {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        }
        let key = parts[0];
        let value_str = parts[1];

        match key {
            "min-length" => {
                config.min_length = Some(value_str.parse().map_err(|_| {
                    CliError::Config(format!("Invalid integer value for {}: {}", key, value_str))
                })?);
            }
            "mass.type" => {
                config.mass.get_or_insert_with(Default::default).mass_type =
                    Some(parse_value(key, value_str)?);
            }
            "extinction.cystine-model" => {
                config
                    .extinction
                    .get_or_insert_with(Default::default)
                    .cystine_model = Some(parse_value(key, value_str)?);
            }
            "isoelectric.pka-scale" => {
                config
                    .isoelectric
                    .get_or_insert_with(Default::default)
                    .pka_scale = Some(value_str.to_string());
            }
            "isoelectric.max-iterations" => {
                config
                    .isoelectric
                    .get_or_insert_with(Default::default)
                    .max_iterations = Some(value_str.parse().map_err(|_| {
                    CliError::Config(format!("Invalid integer value for {}: {}", key, value_str))
                })?);
            }
            "isoelectric.tolerance" => {
                config
                    .isoelectric
                    .get_or_insert_with(Default::default)
                    .tolerance = Some(value_str.parse().map_err(|_| {
                    CliError::Config(format!("Invalid float value for {}: {}", key, value_str))
                })?);
            }
            "fetch.timeout-seconds" => {
                config
                    .fetch
                    .get_or_insert_with(Default::default)
                    .timeout_seconds = Some(value_str.parse().map_err(|_| {
                    CliError::Config(format!("Invalid integer value for {}: {}", key, value_str))
                })?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
